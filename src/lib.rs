use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{ai, db, web};

use ai::gemini::GeminiSummarizer;
use errors::ProviderError;
use repositories::{skill::SkillRepository, sqlx_repo::SqlxSkillRepo, summarizer::Summarizer};
use use_cases::{skills::SkillHandler, summary::SummaryHandler};

pub struct AppState {
    pub skill_handler: SkillHandler,
    pub summary_handler: SummaryHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::SqlitePool) -> Result<Self, ProviderError> {
        let skill_repo = SqlxSkillRepo::new(pool);
        let summarizer = GeminiSummarizer::new(config)?;

        if !summarizer.is_configured() {
            tracing::warn!("GOOGLE_API_KEY is not set; note summaries will fail until it is configured");
        }

        Ok(Self::with_components(Arc::new(skill_repo), Arc::new(summarizer)))
    }

    /// Builds the state from already constructed collaborators.
    pub fn with_components(
        skill_repo: Arc<dyn SkillRepository>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        AppState {
            skill_handler: SkillHandler::new(skill_repo),
            summary_handler: SummaryHandler::new(summarizer),
        }
    }
}
