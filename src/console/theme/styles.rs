//! Theme Styling Functions
//!
//! Frame builders and widget helpers shared by the console views.

use eframe::egui::{self, Color32, CornerRadius, RichText, Stroke};

use super::colors;
use crate::shared::records::BadgeColor;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.window_fill = colors::SURFACE;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.panel_fill = colors::CONTENT_BG;

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::INPUT_BG;
    style.visuals.widgets.hovered.weak_bg_fill = colors::BORDER;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors::ACCENT_HOVER);
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors::SEPARATOR);

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}

pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SIDEBAR_BG)
        .inner_margin(egui::Margin::symmetric(8, 12))
}

pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CONTENT_BG)
        .inner_margin(egui::Margin::same(20))
}

/// Bordered white card, used for stats and tables
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
}

/// Create a frame for sidebar entries
pub fn nav_item_frame(is_current: bool) -> egui::Frame {
    let fill = if is_current {
        colors::SIDEBAR_ACTIVE
    } else {
        colors::SIDEBAR_BG
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 6))
}

/// Create a frame for modal dialogs
pub fn dialog_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 16,
            spread: 0,
            color: Color32::from_black_alpha(48),
        })
}

pub fn primary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label.to_string()).color(colors::TEXT_LIGHT))
        .fill(colors::ACCENT)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6))
}

pub fn danger_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label.to_string()).color(colors::TEXT_LIGHT))
        .fill(colors::DANGER)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6))
}

/// Pill-shaped status label
pub fn badge(ui: &mut egui::Ui, text: &str, color: BadgeColor) -> egui::Response {
    let fill = colors::badge_color(color);
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), 32))
        .stroke(Stroke::new(1.0, fill))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(fill));
        })
        .response
}
