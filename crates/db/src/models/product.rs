//! Product entity model and DTOs.

use catalog_core::error::CoreError;
use catalog_core::patch::Patch;
use catalog_core::types::DbId;
use catalog_core::validation::{
    validate_patch, validate_patch_text, validate_price, validate_required_text,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::ValidateInput;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
pub struct CreateProduct {
    #[validate(custom(function = "validate_required_text"))]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    pub price: f64,
    pub description: Option<String>,
}

/// DTO for partially updating a product.
///
/// `description: null` clears the column; leaving the key out keeps it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub price: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    pub description: Patch<Option<String>>,
}

impl ValidateInput for CreateProduct {
    fn validate_input(&self) -> Result<(), CoreError> {
        self.validate()?;
        Ok(())
    }
}

impl ValidateInput for UpdateProduct {
    fn validate_input(&self) -> Result<(), CoreError> {
        validate_patch_text("name", &self.name, validate_required_text)?;
        validate_patch("price", &self.price, validate_price)?;
        Ok(())
    }
}
