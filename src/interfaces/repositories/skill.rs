use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    entities::skill::{Skill, SkillInsert, UpdateSkillRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

const CREATE_SKILL_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS skill (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        skill_name VARCHAR(100) NOT NULL,
        resource_type VARCHAR(50),
        platform VARCHAR(50),
        progress VARCHAR(20) NOT NULL DEFAULT 'started',
        hours_spent FLOAT NOT NULL DEFAULT 0.0,
        difficulty INTEGER NOT NULL DEFAULT 1,
        notes TEXT
    )
"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Creates the skill table if it does not exist yet
    async fn ensure_schema(&self) -> Result<(), AppError>;

    async fn check_connection(&self) -> Result<(), AppError>;

    /// Inserts a skill, letting the store assign the id and defaults
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;

    /// Lists every skill in insertion order
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    async fn get_skill_by_id(&self, id: i64) -> Result<Skill, AppError>;

    /// Overwrites only the columns present in `changes`
    async fn update_skill(&self, id: i64, changes: &UpdateSkillRequest) -> Result<Skill, AppError>;

    async fn delete_skill(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_SKILL_TABLE)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skill (skill_name, resource_type, platform, notes)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#
        )
        .bind(&skill.skill_name)
        .bind(&skill.resource_type)
        .bind(&skill.platform)
        .bind(&skill.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>("SELECT * FROM skill ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    async fn get_skill_by_id(&self, id: i64) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skill WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill record".into()))
    }

    async fn update_skill(&self, id: i64, changes: &UpdateSkillRequest) -> Result<Skill, AppError> {
        if !changes.has_changes() {
            return self.get_skill_by_id(id).await;
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE skill SET ");
        {
            let mut assignments = builder.separated(", ");

            // Some(None) binds NULL, None leaves the column alone
            if let Some(value) = changes.skill_name.as_ref_option() {
                assignments.push("skill_name = ").push_bind_unseparated(value.cloned());
            }
            if let Some(value) = changes.resource_type.as_ref_option() {
                assignments.push("resource_type = ").push_bind_unseparated(value.cloned());
            }
            if let Some(value) = changes.platform.as_ref_option() {
                assignments.push("platform = ").push_bind_unseparated(value.cloned());
            }
            if let Some(value) = changes.progress.as_ref_option() {
                assignments.push("progress = ").push_bind_unseparated(value.cloned());
            }
            if let Some(value) = changes.hours_spent.as_ref_option() {
                assignments.push("hours_spent = ").push_bind_unseparated(value.copied());
            }
            if let Some(value) = changes.difficulty.as_ref_option() {
                assignments.push("difficulty = ").push_bind_unseparated(value.copied());
            }
            if let Some(value) = changes.notes.as_ref_option() {
                assignments.push("notes = ").push_bind_unseparated(value.cloned());
            }
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<Skill>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill record".into()))
    }

    async fn delete_skill(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skill WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill record".into()));
        }

        Ok(())
    }
}
