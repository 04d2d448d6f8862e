// SPDX-License-Identifier: MIT

//! Choices editor in the form's component shape: messages in, feedback out.
//!
//! Unlike the other inputs this one commits in two steps. Keystrokes land in
//! the definition's pending buffer without validation; the Add button is the
//! commit point where the duplicate/bound/blank rules run.

use eframe::egui;

use crate::models::field::FieldDefinition;

/// Messages emitted by the choices view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChoicesMsg {
    InputChanged(String),
    AddChoice,
    RemoveLast,
}

/// User-facing feedback surfaced to the status bar or error modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoicesEvent {
    /// Text shown in the status bar/modal.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

/// Apply a message to the definition. Returns a feedback event when relevant.
pub fn update(field: &mut FieldDefinition, msg: ChoicesMsg) -> Option<ChoicesEvent> {
    match msg {
        ChoicesMsg::InputChanged(text) => {
            field.pending_choice = text;
            None
        }
        ChoicesMsg::AddChoice => match field.add_pending_choice() {
            Ok(()) => Some(ChoicesEvent {
                message: "Choice added.".to_string(),
                is_error: false,
            }),
            Err(err) => {
                tracing::debug!(%err, "choice rejected");
                Some(ChoicesEvent {
                    message: err.to_string(),
                    is_error: true,
                })
            }
        },
        ChoicesMsg::RemoveLast => match field.remove_last_choice() {
            Ok(()) => Some(ChoicesEvent {
                message: "Choice removed.".to_string(),
                is_error: false,
            }),
            Err(err) => Some(ChoicesEvent {
                message: err.to_string(),
                is_error: true,
            }),
        },
    }
}

/// Render the choices UI and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, field: &FieldDefinition) -> Vec<ChoicesMsg> {
    let mut msgs = Vec::new();

    ui.label("Field Choices");
    ui.add_space(4.0);

    let mut buffer = field.pending_choice.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .hint_text("ex. 'Asia'")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(ChoicesMsg::InputChanged(buffer));
    }

    // Enter commits the buffered choice, same as clicking Add.
    if response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
        msgs.push(ChoicesMsg::AddChoice);
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .button(format!("{} Add Choice", egui_phosphor::regular::PLUS))
            .clicked()
        {
            msgs.push(ChoicesMsg::AddChoice);
        }

        if ui
            .button(format!(
                "{} Remove Choice",
                egui_phosphor::regular::TRASH_SIMPLE
            ))
            .on_hover_text("Removes the most recently added choice")
            .clicked()
        {
            msgs.push(ChoicesMsg::RemoveLast);
        }
    });

    ui.add_space(4.0);
    render_preview(ui, field);

    msgs
}

/// Read-only textarea mirroring the committed choice list.
fn render_preview(ui: &mut egui::Ui, field: &FieldDefinition) {
    let mut preview = field.choices.preview().to_string();
    ui.add(
        egui::TextEdit::multiline(&mut preview)
            .hint_text("Added choices will display here!")
            .desired_rows(6)
            .desired_width(f32::INFINITY)
            .interactive(false),
    );
}
