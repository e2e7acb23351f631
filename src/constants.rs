use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const SKILL_NOT_FOUND_MESSAGE: &str = "Skill not found";
pub const NO_NOTES_SUMMARY: &str = "No notes to summarize.";
pub const SUMMARY_FAILED_MESSAGE: &str = "Failed to generate summary from AI.";

/// Upper bound for JSON request bodies; long `notes` must fit well inside it.
pub const MAX_JSON_BODY_BYTES: usize = 64 * 1024 * 1024;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
