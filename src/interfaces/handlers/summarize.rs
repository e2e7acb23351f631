use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::summary::SummarizeNotesRequest, errors::AppError, AppState};

#[instrument(skip(state, data))]
pub async fn summarize_notes(
    state: web::Data<AppState>,
    data: web::Json<SummarizeNotesRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.summary_handler
        .summarize_notes(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
