use eframe::egui::{self, RichText};

use crate::console::state::AppState;
use crate::console::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        ui.add_space(((available_rect.height() - 320.0) / 2.0).max(24.0));

        styles::card_frame().show(ui, |ui| {
            ui.set_width(340.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🏢 Realty Admin").size(26.0).strong().color(colors::TEXT_PRIMARY));
                ui.label(RichText::new("Sign in to manage the platform").color(colors::TEXT_SECONDARY));
            });
            ui.add_space(16.0);

            if let Some(ref error) = state.auth_state.error {
                ui.colored_label(colors::ERROR, error.as_str());
                ui.add_space(8.0);
            }

            ui.label(RichText::new("Email").color(colors::TEXT_SECONDARY));
            ui.add(
                egui::TextEdit::singleline(&mut state.auth_state.email_input)
                    .hint_text("admin@example.com")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            ui.label(RichText::new("Password").color(colors::TEXT_SECONDARY));
            let password = ui.add(
                egui::TextEdit::singleline(&mut state.auth_state.password_input)
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
            let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let loading = state.auth_state.loading;
                let clicked = ui
                    .add_enabled(!loading, styles::primary_button("Sign in").min_size(egui::vec2(120.0, 32.0)))
                    .clicked();
                if clicked || (submitted && !loading) {
                    state.handle_login();
                }
                if loading {
                    ui.spinner();
                    ui.label(RichText::new("Signing in...").color(colors::TEXT_SECONDARY));
                }
            });
        });
    });
}
