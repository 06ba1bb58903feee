use eframe::egui::{self, RichText};

use crate::console::router::Route;
use crate::console::state::AppState;
use crate::console::theme::{colors, styles};
use crate::shared::records::{display_amount, BadgeColor};

struct StatCard {
    title: &'static str,
    value: String,
    description: String,
    accent: egui::Color32,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new("Dashboard").strong().color(colors::TEXT_PRIMARY));
            ui.label(RichText::new("Welcome to your estate management dashboard").color(colors::TEXT_SECONDARY));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!state.dashboard.is_loading(), egui::Button::new("⟳ Refresh")).clicked() {
                state.dashboard.refresh();
            }
            if state.dashboard.is_loading() {
                ui.spinner();
            }
        });
    });
    ui.add_space(16.0);

    let cards = stat_cards(state);
    egui::Grid::new("dashboard-stats")
        .num_columns(3)
        .spacing([16.0, 16.0])
        .show(ui, |ui| {
            for (i, card) in cards.iter().enumerate() {
                styles::card_frame().show(ui, |ui| {
                    ui.set_min_width(220.0);
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(egui::vec2(4.0, 16.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, card.accent);
                        ui.label(RichText::new(card.title).color(colors::TEXT_SECONDARY));
                    });
                    ui.label(RichText::new(&card.value).size(24.0).strong().color(colors::TEXT_PRIMARY));
                    ui.label(RichText::new(&card.description).small().color(colors::TEXT_SECONDARY));
                });
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(24.0);
    ui.label(RichText::new("Quick Actions").strong().color(colors::TEXT_PRIMARY));
    ui.horizontal(|ui| {
        for (label, route) in [
            ("Add Developer", Route::Developers),
            ("New Project", Route::Projects),
            ("Manage Leads", Route::Leads),
            ("Generate Invoice", Route::Invoices),
        ] {
            if ui.button(label).clicked() {
                state.go(route);
            }
        }
    });
}

fn stat_cards(state: &AppState) -> Vec<StatCard> {
    let stats = state.dashboard.stats();
    let count = |value: Option<usize>| value.map(|v| v.to_string()).unwrap_or_else(|| "...".to_string());

    vec![
        StatCard {
            title: "Total Developers",
            value: count(stats.map(|s| s.total_developers)),
            description: "Registered developers".to_string(),
            accent: colors::badge_color(BadgeColor::Blue),
        },
        StatCard {
            title: "Projects",
            value: count(stats.map(|s| s.total_projects)),
            description: "Real estate projects".to_string(),
            accent: colors::badge_color(BadgeColor::Green),
        },
        StatCard {
            title: "Total Leads",
            value: count(stats.map(|s| s.total_leads)),
            description: format!("{} pending", count(stats.map(|s| s.pending_leads))),
            accent: colors::badge_color(BadgeColor::Purple),
        },
        StatCard {
            title: "Invoices",
            value: count(stats.map(|s| s.total_invoices)),
            description: format!("{} overdue", count(stats.map(|s| s.overdue_invoices))),
            accent: colors::badge_color(BadgeColor::Orange),
        },
        StatCard {
            title: "Total Revenue",
            value: stats
                .map(|s| format!("₹{}", display_amount(s.total_revenue)))
                .unwrap_or_else(|| "...".to_string()),
            description: "All invoices, any status".to_string(),
            accent: colors::badge_color(BadgeColor::Emerald),
        },
    ]
}
