use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::option_fields::{OptionField, PatchString};

// ───── Column bounds ────────────────────────────────────────────────
pub const MAX_SKILL_NAME_LENGTH: u64 = 100;
pub const MAX_RESOURCE_TYPE_LENGTH: u64 = 50;
pub const MAX_PLATFORM_LENGTH: u64 = 50;
pub const MAX_PROGRESS_LENGTH: u64 = 20;

// ───── Database Models ──────────────────────────────────────────────

/// A tracked learning item, serialized with the full column set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i64,
    pub skill_name: String,
    pub resource_type: Option<String>,
    pub platform: Option<String>,
    pub progress: String,
    pub hours_spent: f64,
    pub difficulty: i64,
    pub notes: Option<String>,
}

/// Columns written on creation; everything else takes the table default.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillInsert {
    pub skill_name: String,
    pub resource_type: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
}

// ───── Requests ─────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewSkillRequest {
    #[validate(length(max = MAX_SKILL_NAME_LENGTH, message = "skill_name must be at most 100 characters"))]
    pub skill_name: String,

    #[validate(length(max = MAX_RESOURCE_TYPE_LENGTH, message = "resource_type must be at most 50 characters"))]
    pub resource_type: String,

    #[validate(length(max = MAX_PLATFORM_LENGTH, message = "platform must be at most 50 characters"))]
    pub platform: String,

    #[serde(default)]
    pub notes: Option<String>,
}

impl NewSkillRequest {
    pub fn prepare_for_insert(self) -> SkillInsert {
        SkillInsert {
            skill_name: self.skill_name,
            resource_type: Some(self.resource_type),
            platform: Some(self.platform),
            notes: self.notes,
        }
    }
}

/// Partial update body. Keys outside the column set are rejected, and `id`
/// is only tolerated so clients may echo back a full record.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateSkillRequest {
    pub id: Option<i64>,

    #[validate(
        length(max = MAX_SKILL_NAME_LENGTH, message = "skill_name must be at most 100 characters"),
        custom(function = "reject_null")
    )]
    pub skill_name: PatchString,

    #[validate(length(max = MAX_RESOURCE_TYPE_LENGTH, message = "resource_type must be at most 50 characters"))]
    pub resource_type: PatchString,

    #[validate(length(max = MAX_PLATFORM_LENGTH, message = "platform must be at most 50 characters"))]
    pub platform: PatchString,

    #[validate(
        length(max = MAX_PROGRESS_LENGTH, message = "progress must be at most 20 characters"),
        custom(function = "reject_null")
    )]
    pub progress: PatchString,

    #[validate(custom(function = "reject_null"))]
    pub hours_spent: OptionField<f64>,

    #[validate(custom(function = "reject_null"))]
    pub difficulty: OptionField<i64>,

    pub notes: PatchString,
}

impl UpdateSkillRequest {
    /// True when at least one column would be written.
    pub fn has_changes(&self) -> bool {
        !(self.skill_name.is_unchanged()
            && self.resource_type.is_unchanged()
            && self.platform.is_unchanged()
            && self.progress.is_unchanged()
            && self.hours_spent.is_unchanged()
            && self.difficulty.is_unchanged()
            && self.notes.is_unchanged())
    }
}

// ───── Validation Helpers ───────────────────────────────────────────
fn reject_null<T>(value: &OptionField<T>) -> Result<(), ValidationError> {
    if value.is_set_to_null() {
        let mut err = ValidationError::new("null_not_allowed");
        err.message = Some(Cow::Borrowed("Field cannot be null"));
        return Err(err);
    }
    Ok(())
}
