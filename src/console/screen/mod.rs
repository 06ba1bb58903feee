//! Generic CRUD Screen
//!
//! One state machine serves every entity screen:
//!
//! ```text
//! Idle ──mount──▶ Loading ──list──▶ Ready ──submit──▶ Submitting ──▶ Ready
//!                                     └────confirm────▶ Deleting ───▶ Ready
//! ```
//!
//! [`CrudScreen`] is pure: intents return a [`Command`] and results are fed
//! back through [`CrudScreen::apply`]. [`ScreenTask`] wires it to the
//! runtime. Every successful mutation re-fetches the whole list; nothing is
//! merged locally.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::error::FormError;
use crate::shared::records::BadgeColor;

pub mod command;
pub mod driver;

pub use command::{execute, item_path, Command, Outcome};
pub use driver::{Lookup, ScreenTask};

/// Search text, kept both as typed and case-folded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive substring match
    pub fn hits(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.folded)
    }

    /// Exact substring match
    pub fn hits_exact(&self, field: &str) -> bool {
        field.contains(&self.raw)
    }
}

/// A record type with its own screen
pub trait Entity: Send + Sync + 'static {
    type Record: Clone + fmt::Debug + Send + Sync + DeserializeOwned + 'static;
    type Form: EntityForm<Record = Self::Record>;

    /// List/create endpoint; `{COLLECTION}/{id}` is the item endpoint
    const COLLECTION: &'static str;
    /// Singular noun for logs and dialogs
    const NOUN: &'static str;

    fn id(record: &Self::Record) -> i64;

    /// Whether the record passes the screen's search filter
    fn matches(record: &Self::Record, query: &SearchQuery) -> bool;

    /// Status-like value shown as a colored badge
    fn badge(_record: &Self::Record) -> Option<(&str, BadgeColor)> {
        None
    }
}

/// Editable draft of a record, converted to a wire payload on submit
pub trait EntityForm: Clone + Default + fmt::Debug {
    type Record;
    type Create: Serialize + fmt::Debug + Send + Sync + 'static;
    type Update: Serialize + fmt::Debug + Send + Sync + 'static;

    /// Prefill from an existing record. Secrets stay blank.
    fn from_record(record: &Self::Record) -> Self;

    fn to_create(&self) -> Result<Self::Create, FormError>;

    /// Full update payload; fields the form does not edit come from `original`
    fn to_update(&self, original: &Self::Record) -> Result<Self::Update, FormError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted yet
    Idle,
    Loading,
    Ready,
    Submitting,
    Deleting,
}

/// Whether the dialog creates a new record or edits an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<R> {
    Create,
    Edit { original: R },
}

impl<R> FormMode<R> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

/// Open create/edit dialog
pub struct Dialog<E: Entity> {
    pub mode: FormMode<E::Record>,
    pub form: E::Form,
    /// Last validation or request failure
    pub error: Option<String>,
}

impl<E: Entity> fmt::Debug for Dialog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialog")
            .field("mode", &self.mode)
            .field("form", &self.form)
            .field("error", &self.error)
            .finish()
    }
}

/// Why a submit did not produce a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    NoDialog,
    /// A mutation is already in flight
    Busy,
    Invalid(FormError),
}

pub struct CrudScreen<E: Entity> {
    phase: Phase,
    records: Vec<E::Record>,
    query: SearchQuery,
    /// Indices into `records` that pass `query`
    visible: Vec<usize>,
    dialog: Option<Dialog<E>>,
    pending_delete: Option<i64>,
    generation: u64,
}

impl<E: Entity> Default for CrudScreen<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> CrudScreen<E> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            records: Vec::new(),
            query: SearchQuery::default(),
            visible: Vec::new(),
            dialog: None,
            pending_delete: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting | Phase::Deleting)
    }

    pub fn records(&self) -> &[E::Record] {
        &self.records
    }

    pub fn filtered(&self) -> impl Iterator<Item = &E::Record> + '_ {
        self.visible.iter().map(move |&i| &self.records[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dialog(&self) -> Option<&Dialog<E>> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog<E>> {
        self.dialog.as_mut()
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Start (or restart) loading the list. Results from earlier fetches
    /// will be discarded.
    pub fn mount(&mut self) -> Command<E> {
        self.generation += 1;
        if !self.is_busy() {
            self.phase = Phase::Loading;
        }
        Command::FetchList {
            generation: self.generation,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = SearchQuery::new(query);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.query.is_empty() || E::matches(record, &self.query))
            .map(|(i, _)| i)
            .collect();
    }

    pub fn open_create(&mut self) {
        self.dialog = Some(Dialog {
            mode: FormMode::Create,
            form: E::Form::default(),
            error: None,
        });
    }

    /// Open the edit dialog for `id`; false if no such record is loaded
    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(record) = self.records.iter().find(|r| E::id(r) == id) else {
            return false;
        };
        self.dialog = Some(Dialog {
            form: E::Form::from_record(record),
            mode: FormMode::Edit {
                original: record.clone(),
            },
            error: None,
        });
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Validate the open form and produce the create or update request
    pub fn submit(&mut self) -> Result<Command<E>, SubmitRejected> {
        if self.is_busy() {
            return Err(SubmitRejected::Busy);
        }
        let dialog = self.dialog.as_mut().ok_or(SubmitRejected::NoDialog)?;

        let command = match &dialog.mode {
            FormMode::Create => dialog.form.to_create().map(Command::Create),
            FormMode::Edit { original } => {
                let id = E::id(original);
                dialog
                    .form
                    .to_update(original)
                    .map(|body| Command::Update { id, body })
            }
        };

        match command {
            Ok(command) => {
                dialog.error = None;
                self.phase = Phase::Submitting;
                Ok(command)
            }
            Err(e) => {
                dialog.error = Some(e.to_string());
                Err(SubmitRejected::Invalid(e))
            }
        }
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Option<Command<E>> {
        if self.is_busy() {
            return None;
        }
        let id = self.pending_delete?;
        self.phase = Phase::Deleting;
        Some(Command::Delete { id })
    }

    /// Fold a result into the state; may ask for a follow-up fetch
    pub fn apply(&mut self, outcome: Outcome<E>) -> Option<Command<E>> {
        match outcome {
            Outcome::Listed { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(
                        "Discarding stale {} list (generation {} < {})",
                        E::NOUN,
                        generation,
                        self.generation
                    );
                    return None;
                }
                match result {
                    Ok(records) => {
                        self.records = records;
                        self.refilter();
                    }
                    Err(e) => tracing::error!("Failed to fetch {} list: {}", E::NOUN, e),
                }
                if self.phase == Phase::Loading {
                    self.phase = Phase::Ready;
                }
                None
            }
            Outcome::Saved(result) => {
                self.phase = Phase::Ready;
                match result {
                    Ok(record) => {
                        tracing::info!("Saved {} {}", E::NOUN, E::id(&record));
                        self.dialog = None;
                        Some(self.mount())
                    }
                    Err(e) => {
                        tracing::error!("Failed to save {}: {}", E::NOUN, e);
                        if let Some(dialog) = self.dialog.as_mut() {
                            dialog.error = Some(e.to_string());
                        }
                        None
                    }
                }
            }
            Outcome::Deleted { id, result } => {
                self.phase = Phase::Ready;
                self.pending_delete = None;
                match result {
                    Ok(()) => {
                        tracing::info!("Deleted {} {}", E::NOUN, id);
                        Some(self.mount())
                    }
                    Err(e) => {
                        tracing::error!("Failed to delete {} {}: {}", E::NOUN, id, e);
                        None
                    }
                }
            }
        }
    }
}
