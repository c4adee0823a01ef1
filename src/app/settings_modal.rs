//! Settings dialog (service address)

use super::App;
use crate::constants::DEFAULT_BASE_URL;
use crate::theme;
use crate::ui::components::{icon_button, section_label};
use eframe::egui;

impl App {
    pub fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut save = false;
        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(360.0);

                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Settings")
                                .size(theme::FONT_HEADING)
                                .strong(),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if icon_button(ui, egui_phosphor::regular::X, theme::STATUS_ERROR).clicked() {
                            self.show_settings = false;
                        }
                    });
                });
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                section_label(ui, "Service Address");
                ui.add_space(2.0);
                let response = theme::input_frame()
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.base_url_draft)
                                .hint_text(DEFAULT_BASE_URL)
                                .frame(false)
                                .desired_width(ui.available_width()),
                        )
                    })
                    .inner;
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    save = true;
                }

                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    if ui
                        .add(theme::button(format!(
                            "{}  Reset",
                            egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                        )))
                        .clicked()
                    {
                        self.base_url_draft = DEFAULT_BASE_URL.to_string();
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(theme::button_accent(format!(
                                "{}  Save",
                                egui_phosphor::regular::FLOPPY_DISK
                            )))
                            .clicked()
                        {
                            save = true;
                        }
                    });
                });
            });

        if save {
            let draft = self.base_url_draft.clone();
            self.set_base_url(&draft);
            self.show_settings = false;
        } else if modal_response.should_close() {
            self.show_settings = false;
        }
    }
}
