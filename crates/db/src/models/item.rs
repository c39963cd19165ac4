//! Item entity model and DTOs.

use catalog_core::error::CoreError;
use catalog_core::patch::Patch;
use catalog_core::types::DbId;
use catalog_core::validation::{validate_patch_text, validate_required_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// A row from the `items` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Item {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
}

/// DTO for creating a new item.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
pub struct CreateItem {
    #[validate(custom(function = "validate_required_text"))]
    pub title: String,
    pub description: Option<String>,
}

/// DTO for partially updating an item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateItem {
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub description: Patch<Option<String>>,
}

impl ValidateInput for CreateItem {
    fn validate_input(&self) -> Result<(), CoreError> {
        self.validate()?;
        Ok(())
    }
}

impl ValidateInput for UpdateItem {
    fn validate_input(&self) -> Result<(), CoreError> {
        validate_patch_text("title", &self.title, validate_required_text)
    }
}
