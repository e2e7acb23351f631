use actix_web::web;

use crate::handlers::summarize;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/summarize-notes")
            .route(web::post().to(summarize::summarize_notes))
    );
}
