//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::display::{DisplayState, ResultView};
use crate::theme;
use eframe::egui;

/// Square icon button painted by hand, highlighted on hover
pub fn icon_button(ui: &mut egui::Ui, icon: &str, hover_color: egui::Color32) -> egui::Response {
    let size = theme::ICON_BUTTON_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    let color = if response.hovered() {
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        hover_color
    } else {
        theme::TEXT_DIM
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(theme::FONT_HEADING),
        color,
    );

    response
}

/// Section label used in dialogs
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::ACCENT),
        )
        .selectable(false),
    );
}

/// Render the result and error regions
pub fn render_display(ui: &mut egui::Ui, display: &DisplayState) {
    match &display.result {
        Some(ResultView::Text(text)) => {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                )
                .wrap(),
            );
        }
        Some(ResultView::History(lines)) => {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("History:")
                        .size(theme::FONT_BODY)
                        .strong(),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);
            egui::ScrollArea::vertical()
                .max_height(ui.available_height())
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for line in lines {
                        ui.horizontal_wrapped(|ui| {
                            ui.add_space(theme::SPACING_MD);
                            ui.label(egui::RichText::new("•").color(theme::ACCENT));
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(line)
                                        .size(theme::FONT_LABEL)
                                        .color(theme::TEXT_SECONDARY),
                                )
                                .wrap(),
                            );
                        });
                    }
                });
        }
        None => {}
    }

    if let Some(error) = &display.error {
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}  {}", egui_phosphor::regular::WARNING_CIRCLE, error))
                    .size(theme::FONT_BODY)
                    .color(theme::STATUS_ERROR),
            )
            .wrap(),
        );
    }

    if display.result.is_none() && display.error.is_none() {
        ui.add(
            egui::Label::new(
                egui::RichText::new("Results will appear here.")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
    }
}
