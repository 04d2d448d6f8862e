// SPDX-License-Identifier: MIT

//! Root Model-View-Update kernel wiring the field definition, messages, and
//! commands.
//!
//! [`update`] is the single writer of the [`FieldDefinition`]: it applies one
//! message at a time, leaves the definition consistent after every message,
//! and enqueues a [`Command`] for the one side effect the builder has (the
//! collector POST). Transport outcomes come back as messages and only touch
//! the status/error surfaces, never the definition.

use crate::logic::submit::{self, SubmissionDocument};
use crate::models::field::FieldDefinition;
use crate::transport::SubmissionTransport;
use crate::ui::components::choices::{self, ChoicesMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// The single field definition being composed.
    pub field: FieldDefinition,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    LabelChanged(String),
    DefaultValueChanged(String),
    RequiredToggled(bool),
    Choices(ChoicesMsg),
    SubmitRequested,
    SubmitCompleted(Result<(), String>),
    ClearForm,
    CancelRequested,
    DismissError,
}

/// Commands represent side effects executed between frames.
pub enum Command {
    Submit(SubmissionDocument),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::LabelChanged(text) => model.field.label = text,
        Msg::DefaultValueChanged(text) => model.field.default_value = text,
        Msg::RequiredToggled(value) => model.field.required = value,
        Msg::DismissError => model.error = None,
        Msg::Choices(m) => {
            if let Some(event) = choices::update(&mut model.field, m) {
                surface_event(model, event.message, event.is_error);
            }
        }
        Msg::ClearForm => {
            model.field.reset();
            surface_event(model, "Form cleared.".to_string(), false);
        }
        Msg::CancelRequested => surface_event(
            model,
            "This is where we'd return to the app, if we had one!".to_string(),
            false,
        ),
        Msg::SubmitRequested => {
            // A submit attempt always discards the uncommitted choice input,
            // successful or not.
            model.field.pending_choice.clear();
            match submit::validate_for_submit(&mut model.field) {
                Ok(document) => cmds.push(Command::Submit(document)),
                Err(err) => {
                    tracing::debug!(%err, "submission rejected");
                    surface_event(model, err.to_string(), true);
                }
            }
        }
        Msg::SubmitCompleted(result) => match result {
            Ok(()) => surface_event(model, "Form submitted.".to_string(), false),
            Err(err) => {
                tracing::warn!(%err, "collector submission failed");
                surface_event(model, format!("Failed to submit field:\n\n{err}"), true);
            }
        },
    }
}

/// Execute a command on the given transport and return the resulting message.
pub fn run_command(cmd: Command, transport: &dyn SubmissionTransport) -> Msg {
    match cmd {
        Command::Submit(document) => {
            let result = transport.send(&document).map_err(|err| err.to_string());
            Msg::SubmitCompleted(result)
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use std::sync::Mutex;

    use anyhow::anyhow;

    use super::*;
    use crate::models::field::ValidationError;

    /// Transport double that records documents and answers with a scripted
    /// outcome.
    struct RecordingTransport {
        sent: Mutex<Vec<SubmissionDocument>>,
        fail_with: Option<String>,
    }

    impl RecordingTransport {
        fn accepting() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }

        fn sent(&self) -> Vec<SubmissionDocument> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl SubmissionTransport for RecordingTransport {
        fn send(&self, document: &SubmissionDocument) -> anyhow::Result<()> {
            self.sent.lock().unwrap().push(document.clone());
            match &self.fail_with {
                Some(message) => Err(anyhow!("{message}")),
                None => Ok(()),
            }
        }
    }

    fn add_choice(model: &mut AppModel, text: &str) {
        let mut cmds = Vec::new();
        update(
            model,
            Msg::Choices(ChoicesMsg::InputChanged(text.into())),
            &mut cmds,
        );
        update(model, Msg::Choices(ChoicesMsg::AddChoice), &mut cmds);
        assert!(cmds.is_empty(), "choice editing never enqueues commands");
    }

    #[test]
    fn setters_apply_without_validation() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::LabelChanged("Sales Region".into()),
            &mut cmds,
        );
        update(&mut model, Msg::DefaultValueChanged("Asia".into()), &mut cmds);
        update(&mut model, Msg::RequiredToggled(true), &mut cmds);

        assert_eq!(model.field.label, "Sales Region");
        assert_eq!(model.field.default_value, "Asia");
        assert!(model.field.required);
        assert!(cmds.is_empty());
        assert!(model.error.is_none());
    }

    #[test]
    fn submit_request_enqueues_and_completes() {
        let mut model = AppModel::default();
        model.field.label = "Region".into();
        model.field.default_value = "Asia".into();
        add_choice(&mut model, "Europe");

        let mut cmds = Vec::new();
        update(&mut model, Msg::SubmitRequested, &mut cmds);

        assert_eq!(cmds.len(), 1, "submit should enqueue command");

        let transport = RecordingTransport::accepting();
        let msg = run_command(cmds.pop().unwrap(), &transport);
        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);

        assert!(model.error.is_none());
        assert_eq!(model.status.as_deref(), Some("Form submitted."));

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].label, "Region");
        assert_eq!(sent[0].choices, ["Europe", "Asia"]);
        assert_eq!(sent[0].default_value, "Asia");
    }

    #[test]
    fn submit_with_empty_label_sets_error_and_enqueues_nothing() {
        let mut model = AppModel::default();
        model.field.default_value = "Asia".into();
        add_choice(&mut model, "Europe");

        let mut cmds = Vec::new();
        update(&mut model, Msg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(
            model.error.as_deref(),
            Some(ValidationError::MissingLabel.to_string().as_str())
        );
        assert_eq!(model.field.choices.entries(), ["Europe"]);
        assert_eq!(model.field.default_value, "Asia");
    }

    #[test]
    fn submit_with_empty_default_sets_error() {
        let mut model = AppModel::default();
        model.field.label = "Region".into();
        add_choice(&mut model, "Europe");

        let mut cmds = Vec::new();
        update(&mut model, Msg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(
            model.error.as_deref(),
            Some(ValidationError::MissingDefault.to_string().as_str())
        );
    }

    #[test]
    fn submit_attempt_clears_pending_choice_even_on_failure() {
        let mut model = AppModel::default();
        model.field.pending_choice = "half-typed".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(model.field.pending_choice.is_empty());
    }

    #[test]
    fn transport_failure_surfaces_error_without_touching_field() {
        let mut model = AppModel::default();
        model.field.label = "Region".into();
        model.field.default_value = "Asia".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::SubmitRequested, &mut cmds);
        let snapshot = model.field.clone();

        let transport = RecordingTransport::failing("connection refused");
        let msg = run_command(cmds.pop().unwrap(), &transport);
        update(&mut model, msg, &mut cmds);

        assert!(
            model
                .error
                .as_deref()
                .unwrap()
                .contains("connection refused")
        );
        assert_eq!(model.field, snapshot);
    }

    #[test]
    fn submit_can_be_retried_after_success() {
        let mut model = AppModel::default();
        model.field.label = "Region".into();
        model.field.default_value = "Asia".into();
        add_choice(&mut model, "Europe");

        let transport = RecordingTransport::accepting();
        for _ in 0..2 {
            let mut cmds = Vec::new();
            update(&mut model, Msg::SubmitRequested, &mut cmds);
            assert_eq!(cmds.len(), 1);
            let msg = run_command(cmds.pop().unwrap(), &transport);
            update(&mut model, msg, &mut cmds);
        }

        // State survives submission; the default is appended exactly once.
        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
        assert_eq!(model.field.choices.entries(), ["Europe", "Asia"]);
    }

    #[test]
    fn clear_form_resets_everything_and_sets_status() {
        let mut model = AppModel::default();
        model.field.label = "Region".into();
        model.field.default_value = "Asia".into();
        model.field.required = true;
        add_choice(&mut model, "Europe");

        let mut cmds = Vec::new();
        update(&mut model, Msg::ClearForm, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.field, FieldDefinition::default());
        assert_eq!(model.status.as_deref(), Some("Form cleared."));
    }

    #[test]
    fn cancel_sets_status_only() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::CancelRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(model.error.is_none());
        assert!(
            model
                .status
                .as_deref()
                .map(|s| s.contains("return to the app"))
                .unwrap_or(false)
        );
    }

    #[test]
    fn dismiss_error_clears_modal() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(&mut model, Msg::SubmitRequested, &mut cmds);
        assert!(model.error.is_some());

        update(&mut model, Msg::DismissError, &mut cmds);

        assert!(model.error.is_none());
    }
}
