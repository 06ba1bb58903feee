use eframe::egui::{self, RichText};

use crate::console::router::{nav_groups, Route};
use crate::console::state::AppState;
use crate::console::theme::{colors, styles};

pub mod crud_view;
pub mod dashboard_view;
pub mod entity_views;
pub mod login_view;
pub mod placeholder_view;

pub use crud_view::{Cell, EntityView, FormContext};

/// The shell (top bar and sidebar) is hidden on the login screen.
pub fn shows_shell(state: &AppState) -> bool {
    state.router.current() != &Route::Login
}

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("🏢 Realty Admin").size(18.0).strong().color(colors::TEXT_LIGHT));
                ui.add_space(12.0);
                ui.label(RichText::new(state.router.current().title()).color(colors::SIDEBAR_HEADING));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.session.is_authenticated() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        ui.add_space(8.0);
                        ui.colored_label(colors::STATUS_ONLINE, "● Signed in");
                    }
                });
            });
        });
}

pub fn render_sidebar(ctx: &egui::Context, state: &mut AppState) {
    let mut target = None;

    egui::SidePanel::left("sidebar")
        .exact_width(220.0)
        .resizable(false)
        .frame(styles::sidebar_frame())
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (group, routes) in nav_groups() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(group.to_uppercase()).small().strong().color(colors::SIDEBAR_HEADING));
                    ui.add_space(4.0);

                    for route in routes {
                        let is_current = state.router.current() == &route;
                        let response = styles::nav_item_frame(is_current)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(RichText::new(route.title()).color(colors::SIDEBAR_TEXT));
                            })
                            .response
                            .interact(egui::Sense::click())
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if response.clicked() && !is_current {
                            target = Some(route);
                        }
                    }
                }
            });
        });

    if let Some(route) = target {
        state.go(route);
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::content_frame())
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| render_route(ui, state));
        });
}

fn render_route(ui: &mut egui::Ui, state: &mut AppState) {
    let none = FormContext::default();
    match state.router.current().clone() {
        Route::Login => login_view::render(ui, state),
        Route::Dashboard => dashboard_view::render(ui, state),
        Route::Developers => crud_view::render(ui, &mut state.developers, &none),
        Route::Projects => {
            let context = FormContext {
                developers: state.developer_options.options(),
                developers_loading: state.developer_options.is_loading(),
            };
            crud_view::render(ui, &mut state.projects, &context);
        }
        Route::Leads => crud_view::render(ui, &mut state.leads, &none),
        Route::Invoices => crud_view::render(ui, &mut state.invoices, &none),
        Route::AdminUsers => crud_view::render(ui, &mut state.admin_users, &none),
        Route::Countries => crud_view::render(ui, &mut state.countries, &none),
        Route::Amenities => crud_view::render(ui, &mut state.amenities, &none),
        Route::Placeholder(placeholder) => placeholder_view::render(ui, placeholder),
        Route::NotFound(path) => placeholder_view::render_not_found(ui, state, &path),
    }
}
