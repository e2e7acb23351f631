use std::sync::Arc;

use crate::{
    constants::NO_NOTES_SUMMARY,
    entities::summary::{build_summary_prompt, SummarizeNotesRequest, SummaryResponse},
    errors::AppError,
    repositories::summarizer::Summarizer,
};

pub struct SummaryHandler {
    pub summarizer: Arc<dyn Summarizer>,
}

impl SummaryHandler {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        SummaryHandler { summarizer }
    }

    /// Summarizes learning notes in one sentence.
    ///
    /// Blank notes are answered locally without contacting the provider. Any
    /// provider failure is logged here and surfaced as [`AppError::SummaryFailed`].
    pub async fn summarize_notes(
        &self,
        request: SummarizeNotesRequest,
    ) -> Result<SummaryResponse, AppError> {
        let notes = request.notes.unwrap_or_default();

        if notes.trim().is_empty() {
            return Ok(SummaryResponse {
                summary: NO_NOTES_SUMMARY.to_string(),
            });
        }

        let prompt = build_summary_prompt(&notes);

        match self.summarizer.summarize(&prompt).await {
            Ok(summary) => Ok(SummaryResponse { summary }),
            Err(e) => {
                tracing::error!("Summarization provider error: {}", e);
                Err(AppError::SummaryFailed)
            }
        }
    }
}
