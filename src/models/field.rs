// SPDX-License-Identifier: MIT

//! Field definition domain types: the single aggregate edited by the form,
//! its bounded choice list, and the validation error taxonomy.

/// Upper bound on committed choices per field.
///
/// The add-time check tests `len > MAX_CHOICES` before pushing, so growth
/// actually stops at 51 entries. The original builder shipped with this
/// off-by-one and downstream collectors accept it, so it is kept verbatim.
pub const MAX_CHOICES: usize = 50;

/// Field kinds a definition can take. Only multi-select exists today; the
/// enum is kept so the wire format and UI have a single extension point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    MultiSelect,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::MultiSelect => "Multi-Select",
        }
    }
}

/// Display-order policies for a field's choices. Carried as data only; the
/// builder never reorders the committed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderPolicy {
    #[default]
    Alphabetical,
}

impl OrderPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPolicy::Alphabetical => "Display Choices in Alphabetical Order",
        }
    }
}

/// Every way a form command can be rejected. All variants are recoverable:
/// the definition stays valid and the operator may retry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Duplicate choices: fields may not have duplicate choices.")]
    Duplicate,
    #[error("Too many choices: each field is only allowed up to {MAX_CHOICES} choices.")]
    TooMany,
    #[error("Blank or null input not permitted for field choices.")]
    BlankInput,
    #[error("No more choices to remove.")]
    EmptyList,
    #[error("'Field Label' is required. Form not submitted.")]
    MissingLabel,
    #[error("'Field Default Value' is required. Form not submitted.")]
    MissingDefault,
    #[error(
        "'Field Choices' must have at least 2 elements to produce a multi-select field. \
         Form not submitted."
    )]
    TooFewChoices,
}

/// Insertion-ordered choice collection with a cached textual preview.
///
/// The preview is the newline-joined rendering of the entries (trailing
/// newline after every entry) and is recomputed on every mutation, so
/// callers can display it without re-deriving it per frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceList {
    entries: Vec<String>,
    preview: String,
}

impl ChoiceList {
    /// Committed choices in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Cached newline-joined rendering of the entries.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact string equality; choice matching is deliberately case-sensitive.
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    /// Append an already-trimmed choice, enforcing the add-time rules in
    /// priority order: duplicate, bound, blank. Exactly one outcome applies.
    pub fn push(&mut self, choice: &str) -> Result<(), ValidationError> {
        if self.contains(choice) {
            return Err(ValidationError::Duplicate);
        }
        if self.entries.len() > MAX_CHOICES {
            return Err(ValidationError::TooMany);
        }
        if choice.is_empty() {
            return Err(ValidationError::BlankInput);
        }

        self.entries.push(choice.to_string());
        self.render_preview();
        Ok(())
    }

    /// Append without the add-time checks. Submission uses this to fold the
    /// default value into the committed list even when the list sits at the
    /// bound; callers must have ruled out duplicates and blanks themselves.
    pub fn push_unchecked(&mut self, choice: &str) {
        self.entries.push(choice.to_string());
        self.render_preview();
    }

    /// Remove and return the most-recently-added entry. Removal is
    /// last-in-first-out, never alphabetical.
    pub fn pop(&mut self) -> Result<String, ValidationError> {
        let removed = self.entries.pop().ok_or(ValidationError::EmptyList)?;
        self.render_preview();
        Ok(removed)
    }

    fn render_preview(&mut self) {
        let mut rendered = String::new();
        for entry in &self.entries {
            rendered.push_str(entry);
            rendered.push('\n');
        }
        self.preview = rendered;
    }
}

/// The one aggregate the form edits. Mutated only through the update
/// function; the UI renders from it and never writes to it directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Human-readable field name; required at submit time.
    pub label: String,
    /// Fixed to multi-select; not user-editable.
    pub field_type: FieldType,
    /// Whether downstream consumers must force a selection.
    pub required: bool,
    /// Required at submit time; folded into `choices` when missing.
    pub default_value: String,
    /// Committed choices plus cached preview.
    pub choices: ChoiceList,
    /// Text typed but not yet committed to `choices`. Cleared after every
    /// add attempt, removal, clear, and submit attempt.
    pub pending_choice: String,
    /// Fixed to alphabetical; not user-editable.
    pub order_policy: OrderPolicy,
}

impl FieldDefinition {
    /// Trim the pending input and try to commit it to the choice list. The
    /// buffer is cleared on success and failure alike.
    pub fn add_pending_choice(&mut self) -> Result<(), ValidationError> {
        let attempted = self.pending_choice.trim().to_string();
        self.pending_choice.clear();
        self.choices.push(&attempted)
    }

    /// Drop the most-recently-added choice and clear the input buffer.
    pub fn remove_last_choice(&mut self) -> Result<(), ValidationError> {
        self.pending_choice.clear();
        self.choices.pop().map(|_| ())
    }

    /// Return every field to its documented initial value. Always succeeds
    /// and is idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
