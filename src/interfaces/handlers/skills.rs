use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::skill::{NewSkillRequest, UpdateSkillRequest}, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_all_skills(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.list_skills().await?;

    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state, data))]
pub async fn create_skill(
    state: web::Data<AppState>,
    data: web::Json<NewSkillRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler
        .create_skill(data.into_inner())
        .await?;

    tracing::info!(skill_id = skill.id, "Skill created");

    Ok(HttpResponse::Created().json(skill))
}

#[instrument(skip(state, data))]
pub async fn update_skill(
    skill_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateSkillRequest>,
) -> Result<impl Responder, AppError> {
    let updated = state.skill_handler
        .update_skill(skill_id.into_inner(), data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    skill_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(skill_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
