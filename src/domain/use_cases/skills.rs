use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::SKILL_NOT_FOUND_MESSAGE,
    entities::skill::{NewSkillRequest, Skill, UpdateSkillRequest},
    errors::AppError,
    repositories::skill::SkillRepository,
};

pub struct SkillHandler {
    pub skill_repo: Arc<dyn SkillRepository>,
}

impl SkillHandler {
    pub fn new(skill_repo: Arc<dyn SkillRepository>) -> Self {
        SkillHandler { skill_repo }
    }

    /// Makes sure the backing table exists; a no-op once it does
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        self.skill_repo.ensure_schema().await
    }

    /// Creates a new skill, leaving progress, hours and difficulty to the store defaults
    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<Skill, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert();

        self.skill_repo.create_skill(&insert).await
    }

    /// Retrieves all skills
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    /// Applies a partial update to an existing skill
    pub async fn update_skill(
        &self,
        id: i64,
        request: UpdateSkillRequest,
    ) -> Result<Skill, AppError> {
        request.validate()?;

        if let Some(body_id) = request.id {
            if body_id != id {
                return Err(AppError::BadRequest("Skill id cannot be changed".to_string()));
            }
        }

        self.skill_repo.update_skill(id, &request).await
            .map_err(skill_not_found)
    }

    /// Deletes a skill by its ID
    pub async fn delete_skill(&self, id: i64) -> Result<(), AppError> {
        self.skill_repo.delete_skill(id).await
            .map_err(skill_not_found)
    }
}

fn skill_not_found(e: AppError) -> AppError {
    match e {
        AppError::NotFound(_) => AppError::NotFound(SKILL_NOT_FOUND_MESSAGE.to_string()),
        _ => e,
    }
}
