// SPDX-License-Identifier: MIT

//! Top-level egui application shell for composing a field definition.
//! Handles layout, form controls, and wiring to the submission transport.
//!
//! The shell renders purely from the model snapshot: blanking an input box
//! after a commit is nothing more than redrawing from the already-cleared
//! buffer, so no widget is ever manipulated directly.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::mvu::{self, AppModel, Command, Msg};
use crate::transport::{HttpCollector, SubmissionTransport};
use crate::ui::components::choices;

/// Stateful egui application for building and submitting field definitions.
pub struct FieldBuilderApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for FieldBuilderApp {
    fn default() -> Self {
        Self::with_transport(Arc::new(HttpCollector::default()))
    }
}

impl FieldBuilderApp {
    /// Build the app around an arbitrary transport. A single worker thread
    /// executes commands so submissions reach the collector in request order.
    pub fn with_transport(transport: Arc<dyn SubmissionTransport>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        std::thread::spawn(move || {
            for cmd in cmd_rx.iter() {
                let msg = mvu::run_command(cmd, transport.as_ref());
                let _ = msg_tx.send(msg);
            }
        });

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for FieldBuilderApp {
    /// Drive a single UI frame: drain transport outcomes, apply inbox
    /// messages to the model, dispatch enqueued commands, and render the
    /// top bar, form body, error modal, and status panel.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Field Builder");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_label_input(ui);
                ui.add_space(12.0);

                self.render_type_group(ui);
                ui.add_space(12.0);

                self.render_default_value_input(ui);
                ui.add_space(12.0);

                let choice_msgs = choices::view(ui, &self.model.field);
                self.inbox.extend(choice_msgs.into_iter().map(Msg::Choices));
                ui.add_space(12.0);

                self.render_order_input(ui);
                ui.add_space(16.0);

                self.render_action_buttons(ui);
                ui.add_space(8.0);
            });
        });
    }
}

impl FieldBuilderApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render the field label input.
    fn render_label_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Label");
        ui.add_space(4.0);
        let mut label = self.model.field.label.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut label)
                    .hint_text("ex. 'Sales Region'")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.inbox.push(Msg::LabelChanged(label));
        }
    }

    /// Grouped block with the (fixed) field type and the required toggle.
    fn render_type_group(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label("Field Type");
                egui::ComboBox::from_id_salt("field_type")
                    .selected_text(self.model.field.field_type.as_str())
                    .show_ui(ui, |ui| {
                        // Single variant today; the dropdown is the extension point.
                        let _ = ui.selectable_label(true, self.model.field.field_type.as_str());
                    });

                ui.separator();

                let mut required = self.model.field.required;
                if ui
                    .checkbox(&mut required, "This field requires input")
                    .changed()
                {
                    self.inbox.push(Msg::RequiredToggled(required));
                }
            });
        });
    }

    /// Render the default value input.
    fn render_default_value_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Field Default Value");
        ui.add_space(4.0);
        let mut default_value = self.model.field.default_value.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut default_value)
                    .hint_text("ex. 'Asia'")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.inbox.push(Msg::DefaultValueChanged(default_value));
        }
    }

    /// Render the (fixed) display-order selector.
    fn render_order_input(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Order of Choices");
            egui::ComboBox::from_id_salt("order_policy")
                .selected_text(self.model.field.order_policy.as_str())
                .show_ui(ui, |ui| {
                    let _ = ui.selectable_label(true, self.model.field.order_policy.as_str());
                });
        });
    }

    /// Save / Cancel / Clear row at the bottom of the form.
    fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let save = egui::Button::new(format!(
                "{} Save Changes",
                egui_phosphor::regular::FLOPPY_DISK
            ));
            if ui.add(save).clicked() {
                self.inbox.push(Msg::SubmitRequested);
            }

            if ui
                .button(format!("{} Cancel", egui_phosphor::regular::X))
                .clicked()
            {
                self.inbox.push(Msg::CancelRequested);
            }

            if ui
                .button("Clear Form")
                .on_hover_text("Start over from an empty definition")
                .clicked()
            {
                self.inbox.push(Msg::ClearForm);
            }
        });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Validation error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} submitting…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text("Waiting for the collector to answer");
                }
            });
        }
    }
}
