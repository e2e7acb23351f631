use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("")
                    .route(web::get().to(skills::get_all_skills))
                    .route(web::post().to(skills::create_skill))
            )
            .service(
                // Non-numeric ids fall through to the default 404
                web::resource(r"/{skill_id:\d+}")
                    .route(web::put().to(skills::update_skill))
                    .route(web::delete().to(skills::delete_skill))
            )
    );
}
