use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: SqlitePool,
}
