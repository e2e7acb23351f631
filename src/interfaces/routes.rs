use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod json_error;
mod skills;
mod summarize;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(skills::config_routes);
    cfg.configure(summarize::config_routes);

    cfg.configure(json_error::config_routes);
}
