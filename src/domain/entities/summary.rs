use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SummarizeNotesRequest {
    /// Missing and `null` are both treated as empty notes.
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Wraps learning notes in the one-sentence summarization prompt.
pub fn build_summary_prompt(notes: &str) -> String {
    format!("Summarize the following learning notes in one concise sentence: '{notes}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_quotes_notes_verbatim() {
        assert_eq!(
            build_summary_prompt("traits and lifetimes"),
            "Summarize the following learning notes in one concise sentence: 'traits and lifetimes'"
        );
    }

    #[test]
    fn notes_default_to_none() {
        let request: SummarizeNotesRequest = serde_json::from_str("{}").unwrap();
        assert!(request.notes.is_none());

        let request: SummarizeNotesRequest = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        assert!(request.notes.is_none());
    }
}
