//! App shell: input form, inline notice, modal dialog, and key bindings.

use std::sync::Arc;

use eframe::egui;
use reverser_core::{Outcome, ReversalController, SubmitError, TracingSink};

use crate::ui::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeTone {
    Result,
    ValidationError,
}

/// Non-blocking in-window text; overwrites whatever was shown before.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InlineNotice {
    text: String,
    tone: NoticeTone,
}

/// Blocking dialog content; stays up until acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ModalNotice {
    title: String,
    body: String,
}

pub struct ReverserApp {
    controller: ReversalController,
    palette: Palette,
    input: String,
    inline: Option<InlineNotice>,
    modal: Option<ModalNotice>,
    focus_input: bool,
}

impl ReverserApp {
    pub fn new() -> Self {
        Self {
            controller: ReversalController::new(Arc::new(TracingSink)),
            palette: Palette::nord(),
            input: String::new(),
            inline: None,
            modal: None,
            // The field takes focus on the first frame.
            focus_input: true,
        }
    }

    /// Feeds the current field content to the controller and maps the
    /// outcome onto the two presentation channels. The field content itself
    /// is never altered here.
    fn submit_current_input(&mut self) {
        match self.controller.submit(&self.input) {
            Ok(Outcome::Inline(result)) => {
                self.inline = Some(InlineNotice {
                    text: format!("Reversed String: {}", result.reversed),
                    tone: NoticeTone::Result,
                });
            }
            Ok(Outcome::Modal(result)) => {
                self.modal = Some(ModalNotice {
                    title: "Reversed String".to_string(),
                    body: result.reversed,
                });
            }
            Err(err @ SubmitError::EmptyInput) => {
                self.inline = Some(InlineNotice {
                    text: err.to_string(),
                    tone: NoticeTone::ValidationError,
                });
                self.focus_input = true;
            }
            Err(err) => {
                self.modal = Some(ModalNotice {
                    title: "Error".to_string(),
                    body: err.to_string(),
                });
            }
        }
    }

    fn show_modal(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.modal.clone() else {
            return;
        };

        let mut acknowledged = false;
        let modal = egui::Modal::new(egui::Id::new("reverser_modal")).show(ctx, |ui| {
            ui.set_width(240.0);
            ui.heading(&notice.title);
            ui.separator();
            ui.label(egui::RichText::new(&notice.body).monospace());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        });

        if acknowledged || modal.should_close() {
            self.modal = None;
            self.focus_input = true;
        }
    }
}

impl eframe::App for ReverserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Cancel gesture wins in any state, modal open or not.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.cancel();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Window-level confirm bind; suspended while the modal blocks
        // interaction.
        if self.modal.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.submit_current_input();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new("String Reverser")
                        .heading()
                        .strong()
                        .color(self.palette.text),
                );
                ui.add_space(14.0);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .id_salt("reverser_input")
                        .font(egui::TextStyle::Monospace)
                        .text_color(self.palette.entry_text)
                        .desired_width(260.0),
                );
                if self.focus_input {
                    response.request_focus();
                    self.focus_input = false;
                }

                ui.add_space(10.0);
                let submit = egui::Button::new(
                    egui::RichText::new("Submit").color(self.palette.button_text),
                )
                .fill(self.palette.button_background);
                if ui.add(submit).clicked() {
                    self.submit_current_input();
                }

                ui.add_space(24.0);
                if let Some(notice) = &self.inline {
                    let color = match notice.tone {
                        NoticeTone::Result => self.palette.result_text,
                        NoticeTone::ValidationError => self.palette.error_text,
                    };
                    ui.label(egui::RichText::new(&notice.text).monospace().color(color));
                }
            });
        });

        self.show_modal(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_lands_in_the_inline_notice() {
        let mut app = ReverserApp::new();
        app.input = "hello".to_string();

        app.submit_current_input();

        let notice = app.inline.expect("inline notice");
        assert_eq!(notice.text, "Reversed String: olleh");
        assert_eq!(notice.tone, NoticeTone::Result);
        assert!(app.modal.is_none());
    }

    #[test]
    fn long_input_opens_the_modal_and_keeps_the_inline_notice() {
        let mut app = ReverserApp::new();
        app.input = "hello".to_string();
        app.submit_current_input();

        app.input = "abcdefghijk".to_string();
        app.submit_current_input();

        let modal = app.modal.expect("modal notice");
        assert_eq!(modal.title, "Reversed String");
        assert_eq!(modal.body, "kjihgfedcba");
        // Only the inline path rewrites the label.
        assert_eq!(
            app.inline.expect("previous inline").text,
            "Reversed String: olleh"
        );
    }

    #[test]
    fn empty_input_shows_validation_text_and_refocuses_the_field() {
        let mut app = ReverserApp::new();
        app.focus_input = false;
        app.input = "   ".to_string();

        app.submit_current_input();

        let notice = app.inline.expect("inline notice");
        assert_eq!(notice.text, "Input cannot be empty!");
        assert_eq!(notice.tone, NoticeTone::ValidationError);
        assert!(app.focus_input);
        assert_eq!(app.input, "   ");
    }

    #[test]
    fn submitting_never_rewrites_the_field_content() {
        let mut app = ReverserApp::new();
        app.input = "tkinter".to_string();

        app.submit_current_input();

        assert_eq!(app.input, "tkinter");
        assert_eq!(
            app.inline.expect("inline notice").text,
            "Reversed String: retnikt"
        );
    }
}
