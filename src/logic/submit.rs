// SPDX-License-Identifier: MIT

//! Cross-field submission rules.
//!
//! Responsibilities:
//! - Validate a field definition as a whole before it leaves the builder.
//! - Fold the default value into the committed choices when missing.
//! - Build the wire document the collector expects.

use serde::Serialize;

use crate::models::field::{FieldDefinition, ValidationError};

/// JSON payload posted to the collector. Field names follow the collector's
/// camelCase contract; field order is not significant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionDocument {
    #[serde(rename = "labelValue")]
    pub label: String,
    #[serde(rename = "typeValue")]
    pub field_type: String,
    pub required: bool,
    #[serde(rename = "defaultValue")]
    pub default_value: String,
    pub choices: Vec<String>,
    pub order: String,
}

/// Validate the definition for submission and build the wire document.
///
/// Checks run in a fixed order: label, default value, choice count. When the
/// default value is not yet a committed choice it is appended to `choices`
/// as a side effect, so the submitted list always contains it. The
/// definition itself is otherwise untouched; in particular it is not cleared
/// after a successful submission.
pub fn validate_for_submit(
    field: &mut FieldDefinition,
) -> Result<SubmissionDocument, ValidationError> {
    if field.label.is_empty() {
        return Err(ValidationError::MissingLabel);
    }

    if field.default_value.is_empty() {
        return Err(ValidationError::MissingDefault);
    }

    // Unreachable as written: the check above already guarantees a non-empty
    // default value. The original builder shipped this exact condition and
    // its intent is ambiguous, so it is preserved rather than repaired.
    if field.choices.len() <= 1 && field.default_value.is_empty() {
        return Err(ValidationError::TooFewChoices);
    }

    if !field.choices.contains(&field.default_value) {
        field.choices.push_unchecked(&field.default_value);
    }

    Ok(SubmissionDocument {
        label: field.label.clone(),
        field_type: field.field_type.as_str().to_string(),
        required: field.required,
        default_value: field.default_value.clone(),
        choices: field.choices.entries().to_vec(),
        order: field.order_policy.as_str().to_string(),
    })
}
