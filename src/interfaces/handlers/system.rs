use actix_web::{web, get, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: String,
    summarizer_configured: bool,
    version: String,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let start_at = *START_TIME;
    let now_utc = chrono::Utc::now();
    let uptime_secs = now_utc.signed_duration_since(start_at).num_seconds().max(0) as u64;

    let database = match state.skill_handler.skill_repo.check_connection().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            "Unavailable"
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: start_at.to_rfc3339(),
        database: database.to_string(),
        summarizer_configured: state.summary_handler.summarizer.is_configured(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
