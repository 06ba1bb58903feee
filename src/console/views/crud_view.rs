//! One table-plus-dialog layout shared by every entity screen.

use eframe::egui::{self, RichText};

use crate::console::screen::{Dialog, Entity, FormMode, Phase, ScreenTask};
use crate::console::theme::{colors, styles};
use crate::shared::records::{BadgeColor, Developer};

/// One table cell
pub enum Cell {
    Text(String),
    /// De-emphasised, e.g. creation dates
    Muted(String),
    Badge(String, BadgeColor),
}

/// Data a form may need from outside its own screen
#[derive(Default)]
pub struct FormContext<'a> {
    pub developers: &'a [Developer],
    /// Developer choices are still being fetched
    pub developers_loading: bool,
}

/// How an entity is laid out on screen
pub trait EntityView: Entity {
    const TITLE: &'static str;
    const SUBTITLE: &'static str;
    const SEARCH_HINT: &'static str;
    const HEADERS: &'static [&'static str];

    fn cells(record: &Self::Record) -> Vec<Cell>;

    /// `original` is the record being edited, `None` when creating
    fn form_ui(
        ui: &mut egui::Ui,
        form: &mut Self::Form,
        original: Option<&Self::Record>,
        context: &FormContext<'_>,
    );
}

enum Intent {
    Create,
    Edit(i64),
    Delete(i64),
    Submit,
    Close,
    ConfirmDelete,
    CancelDelete,
}

pub fn render<E: EntityView>(ui: &mut egui::Ui, task: &mut ScreenTask<E>, context: &FormContext<'_>) {
    let mut intents = Vec::new();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new(E::TITLE).strong().color(colors::TEXT_PRIMARY));
            ui.label(RichText::new(E::SUBTITLE).color(colors::TEXT_SECONDARY));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(styles::primary_button(&format!("+ Add {}", E::NOUN))).clicked() {
                intents.push(Intent::Create);
            }
        });
    });
    ui.add_space(12.0);

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        render_search(ui, task);
        ui.add_space(8.0);
        render_table(ui, task, &mut intents);
    });

    render_dialog(ui.ctx(), task, context, &mut intents);
    render_delete_confirm(ui.ctx(), task, &mut intents);

    for intent in intents {
        match intent {
            Intent::Create => task.screen.open_create(),
            Intent::Edit(id) => {
                if !task.screen.open_edit(id) {
                    tracing::warn!("{} {} is no longer loaded", E::NOUN, id);
                }
            }
            Intent::Delete(id) => task.screen.request_delete(id),
            Intent::Submit => task.submit(),
            Intent::Close => task.screen.close_dialog(),
            Intent::ConfirmDelete => task.confirm_delete(),
            Intent::CancelDelete => task.screen.cancel_delete(),
        }
    }
}

fn render_search<E: EntityView>(ui: &mut egui::Ui, task: &mut ScreenTask<E>) {
    let mut query = task.screen.query().to_string();
    ui.horizontal(|ui| {
        ui.label("🔍");
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(E::SEARCH_HINT)
                .desired_width(360.0),
        );
        if response.changed() {
            task.screen.set_query(query);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "{} of {}",
                    task.screen.filtered_len(),
                    task.screen.records().len()
                ))
                .color(colors::TEXT_SECONDARY),
            );
        });
    });
}

fn render_table<E: EntityView>(ui: &mut egui::Ui, task: &ScreenTask<E>, intents: &mut Vec<Intent>) {
    let screen = &task.screen;

    if screen.is_loading() && screen.records().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.spinner();
            ui.label(RichText::new(format!("Loading {}...", E::TITLE.to_lowercase())).color(colors::TEXT_SECONDARY));
            ui.add_space(24.0);
        });
        return;
    }

    if screen.filtered_len() == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new(format!("No {} found", E::TITLE.to_lowercase())).color(colors::TEXT_SECONDARY));
            ui.add_space(24.0);
        });
        return;
    }

    egui::ScrollArea::both().auto_shrink([false, true]).show(ui, |ui| {
        egui::Grid::new((E::COLLECTION, "table"))
            .striped(true)
            .num_columns(E::HEADERS.len() + 1)
            .spacing([24.0, 10.0])
            .show(ui, |ui| {
                for header in E::HEADERS {
                    ui.label(RichText::new(*header).strong().color(colors::TEXT_SECONDARY));
                }
                ui.label(RichText::new("Actions").strong().color(colors::TEXT_SECONDARY));
                ui.end_row();

                for record in screen.filtered() {
                    for cell in E::cells(record) {
                        match cell {
                            Cell::Text(text) => {
                                ui.label(RichText::new(text).color(colors::TEXT_PRIMARY));
                            }
                            Cell::Muted(text) => {
                                ui.label(RichText::new(text).color(colors::TEXT_SECONDARY));
                            }
                            Cell::Badge(text, color) => {
                                styles::badge(ui, &text, color);
                            }
                        }
                    }
                    let id = E::id(record);
                    ui.horizontal(|ui| {
                        if ui.small_button("✏ Edit").clicked() {
                            intents.push(Intent::Edit(id));
                        }
                        if ui.small_button(RichText::new("🗑 Delete").color(colors::ERROR)).clicked() {
                            intents.push(Intent::Delete(id));
                        }
                    });
                    ui.end_row();
                }
            });
    });
}

fn render_dialog<E: EntityView>(
    ctx: &egui::Context,
    task: &mut ScreenTask<E>,
    context: &FormContext<'_>,
    intents: &mut Vec<Intent>,
) {
    let submitting = task.screen.phase() == Phase::Submitting;
    let Some(Dialog { mode, form, error }) = task.screen.dialog_mut() else {
        return;
    };
    let original = match &*mode {
        FormMode::Edit { original } => Some(original),
        FormMode::Create => None,
    };
    let editing = original.is_some();
    let title = if editing {
        format!("Edit {}", E::NOUN)
    } else {
        format!("Add {}", E::NOUN)
    };

    let mut open = true;
    egui::Window::new(title)
        .id(egui::Id::new((E::COLLECTION, "dialog")))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::dialog_frame())
        .show(ctx, |ui| {
            E::form_ui(ui, form, original, context);

            if let Some(error) = error.as_ref() {
                ui.add_space(8.0);
                ui.colored_label(colors::ERROR, error.as_str());
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let label = if editing { "Update" } else { "Create" };
                if ui.add_enabled(!submitting, styles::primary_button(label)).clicked() {
                    intents.push(Intent::Submit);
                }
                if ui.button("Cancel").clicked() {
                    intents.push(Intent::Close);
                }
                if submitting {
                    ui.spinner();
                }
            });
        });

    if !open {
        intents.push(Intent::Close);
    }
}

fn render_delete_confirm<E: EntityView>(
    ctx: &egui::Context,
    task: &ScreenTask<E>,
    intents: &mut Vec<Intent>,
) {
    let Some(id) = task.screen.pending_delete() else {
        return;
    };
    let deleting = task.screen.phase() == Phase::Deleting;

    egui::Window::new(format!("Delete {}?", E::NOUN))
        .id(egui::Id::new((E::COLLECTION, "confirm-delete")))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::dialog_frame())
        .show(ctx, |ui| {
            ui.label(format!("This permanently removes {} #{}.", E::NOUN, id));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(!deleting, styles::danger_button("Delete")).clicked() {
                    intents.push(Intent::ConfirmDelete);
                }
                if ui.add_enabled(!deleting, egui::Button::new("Cancel")).clicked() {
                    intents.push(Intent::CancelDelete);
                }
                if deleting {
                    ui.spinner();
                }
            });
        });
}

/// Two-column label/input layout for dialog forms
pub fn form_grid(ui: &mut egui::Ui, id: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, add_contents);
}

pub fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(260.0));
    ui.end_row();
}

pub fn multiline_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(3)
            .desired_width(260.0),
    );
    ui.end_row();
}

pub fn password_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .password(true)
            .hint_text(hint)
            .desired_width(260.0),
    );
    ui.end_row();
}

/// Fixed-vocabulary select. `None` shows the stored value when there is one
/// (a value outside the vocabulary), else "Select...".
pub fn choice_field<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut Option<T>,
    options: &[T],
    name: fn(T) -> &'static str,
    stored: Option<&str>,
) {
    ui.label(label);
    let unset = stored.filter(|s| !s.trim().is_empty()).unwrap_or("Select...");
    egui::ComboBox::from_id_salt(label)
        .selected_text(value.map(name).unwrap_or(unset))
        .width(260.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, Some(*option), name(*option));
            }
        });
    ui.end_row();
}
