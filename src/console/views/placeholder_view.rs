use eframe::egui::{self, RichText};

use crate::console::router::{Placeholder, Route};
use crate::console::state::AppState;
use crate::console::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, placeholder: Placeholder) {
    ui.heading(RichText::new(placeholder.title()).strong().color(colors::TEXT_PRIMARY));
    ui.add_space(12.0);
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(RichText::new("🚧").size(32.0));
            ui.label(RichText::new("Coming soon").size(18.0).color(colors::TEXT_PRIMARY));
            ui.label(
                RichText::new(format!("{} management is not available yet.", placeholder.title()))
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(32.0);
        });
    });
}

pub fn render_not_found(ui: &mut egui::Ui, state: &mut AppState, path: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("404").size(48.0).strong().color(colors::TEXT_PRIMARY));
        ui.label(RichText::new(format!("No page at {}", path)).color(colors::TEXT_SECONDARY));
        ui.add_space(16.0);
        if ui.add(styles::primary_button("Return to Home")).clicked() {
            state.go(Route::Dashboard);
        }
    });
}
