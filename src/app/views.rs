//! Main window layout: input row, action buttons, result card and footer

use super::App;
use crate::constants::*;
use crate::theme;
use crate::ui::components::{icon_button, render_display};
use eframe::egui;

impl App {
    pub fn render_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .frame(egui::Frame::new().fill(theme::BG_BASE).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{}  {}",
                                egui_phosphor::regular::GLOBE,
                                self.handler.base_url()
                            ))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("v{}", APP_VERSION))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                });
            });
    }

    pub fn render_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE).inner_margin(egui::Margin::same(24)))
            .show(ctx, |ui| {
                let width = ui.available_width().min(theme::CONTENT_WIDTH);
                let side = ((ui.available_width() - width) / 2.0).max(0.0);

                ui.horizontal_top(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        self.render_header(ui);
                        ui.add_space(theme::SPACING_LG);
                        self.render_input_row(ui);
                        ui.add_space(theme::SPACING_MD);
                        self.render_action_buttons(ui);
                        ui.add_space(theme::SPACING_XL);
                        theme::card_frame().show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            render_display(ui, &self.session.display);
                        });
                    });
                });
            });
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Package Measurement Converter")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let response = icon_button(ui, egui_phosphor::regular::GEAR, theme::ACCENT)
                    .on_hover_text("Settings");
                if response.clicked() {
                    self.base_url_draft = self.handler.base_url().to_string();
                    self.show_settings = true;
                }
            });
        });
    }

    fn render_input_row(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        theme::input_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(egui_phosphor::regular::RULER)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.session.input)
                        .hint_text("Enter measurement string...")
                        .frame(false)
                        .desired_width(ui.available_width()),
                );
                if self.focus_input {
                    self.focus_input = false;
                    response.request_focus();
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                    self.focus_input = true;
                }
            });
        });
        if submit {
            self.submit_convert(ui.ctx());
        }
    }

    fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .add(theme::button_accent(format!(
                    "{}  Convert",
                    egui_phosphor::regular::ARROWS_LEFT_RIGHT
                )))
                .clicked()
            {
                self.submit_convert(ui.ctx());
            }
            if ui
                .add(theme::button(format!(
                    "{}  History",
                    egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE
                )))
                .clicked()
            {
                self.submit_history(ui.ctx());
            }
            if ui
                .add(theme::button(format!("{}  Clear", egui_phosphor::regular::ERASER)))
                .clicked()
            {
                self.clear_all();
            }

            if self.is_busy() {
                ui.add_space(theme::SPACING_SM);
                ui.spinner();
            }
        });
    }
}
