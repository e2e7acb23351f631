use actix_web::{
    web,
    http::StatusCode,
    ResponseError,
    HttpResponse,
    error::JsonPayloadError,
};
use serde_json::json;

use crate::constants::MAX_JSON_BODY_BYTES;

/// Turns body extraction failures (bad JSON, missing required keys, unknown
/// update keys, wrong content type) into `400 {"error": ...}`.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_JSON_BODY_BYTES)
            .error_handler(|err, req| {
                tracing::warn!("Rejected JSON body for {} {}: {}", req.method(), req.path(), err);
                JsonError::from(err).into()
            }),
    );
}

#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(json!({ "error": self.message }))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        let message = match &err {
            JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
            JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
            _ => format!("JSON payload error: {}", err),
        };

        JsonError {
            message,
            status: StatusCode::BAD_REQUEST,
        }
    }
}
