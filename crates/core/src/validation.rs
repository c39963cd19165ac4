//! Field validation rules for catalog payloads.
//!
//! The rules are plain functions so they can back `#[validate(custom)]`
//! attributes on create DTOs and be applied by hand to the `Patch` fields of
//! update DTOs. Negative prices are accepted as given; only non-finite
//! values are rejected because they cannot round-trip through JSON.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::patch::Patch;

/// Reject empty or whitespace-only text for required string fields.
pub fn validate_required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error("blank", "must not be blank"));
    }
    Ok(())
}

/// Reject `NaN` and infinities. Takes the value directly, matching how the
/// `validator` derive passes `Copy` fields to custom rules.
pub fn validate_price(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(rule_error("not_finite", "must be a finite number"));
    }
    Ok(())
}

/// Run `rule` against a `Copy` patch field only when the caller supplied it.
pub fn validate_patch<T: Copy>(
    field: &'static str,
    patch: &Patch<T>,
    rule: fn(T) -> Result<(), ValidationError>,
) -> Result<(), CoreError> {
    if let Patch::Set(value) = patch {
        rule(*value).map_err(|err| field_error(field, &err))?;
    }
    Ok(())
}

/// [`validate_patch`] for string fields checked by `&str` rules.
pub fn validate_patch_text(
    field: &'static str,
    patch: &Patch<String>,
    rule: fn(&str) -> Result<(), ValidationError>,
) -> Result<(), CoreError> {
    if let Patch::Set(value) = patch {
        rule(value.as_str()).map_err(|err| field_error(field, &err))?;
    }
    Ok(())
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| errs.iter().map(move |err| field_message(&field, err)))
            .collect();
        messages.sort();
        CoreError::Validation(messages.join("; "))
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn field_error(field: &str, err: &ValidationError) -> CoreError {
    CoreError::Validation(field_message(field, err))
}

fn field_message(field: &str, err: &ValidationError) -> String {
    match &err.message {
        Some(message) => format!("{field} {message}"),
        None => format!("{field} is invalid ({})", err.code),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn blank_text_rejected() {
        assert!(validate_required_text("").is_err());
        assert!(validate_required_text("   ").is_err());
        assert!(validate_required_text("Widget").is_ok());
    }

    #[test]
    fn non_finite_price_rejected() {
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn zero_and_negative_price_accepted() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(-3.5).is_ok());
    }

    #[test]
    fn unchanged_patch_skips_rule() {
        let patch: Patch<String> = Patch::Unchanged;
        assert!(validate_patch_text("name", &patch, validate_required_text).is_ok());
    }

    #[test]
    fn set_patch_runs_rule_and_names_field() {
        let patch = Patch::Set(String::from(" "));
        let err = validate_patch_text("name", &patch, validate_required_text).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "name must not be blank");
    }

    #[test]
    fn scalar_patch_runs_rule() {
        let patch = Patch::Set(f64::NAN);
        assert!(validate_patch("price", &patch, validate_price).is_err());
        assert!(validate_patch("price", &Patch::Set(0.0), validate_price).is_ok());
    }
}
