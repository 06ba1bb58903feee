//! Realty Admin - Main Library
//!
//! Back-office console for a real-estate listing platform. Operators sign in
//! and manage developers, projects, leads, invoices, admin users, countries
//! and amenities through a native desktop UI that talks to the platform's
//! REST backend.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no UI or transport dependency
//!   - Record wire shapes and their fixed vocabularies
//!   - Form validation errors
//!   - Layered configuration
//!
//! - **`console`** - Native desktop app (egui/eframe)
//!   - Typed API client with bearer-token auth
//!   - Session gate and routing
//!   - Generic CRUD screen and per-entity forms
//!   - Dashboard, shell and theme
//!
//! # Usage
//!
//! ```rust,no_run
//! use realty_admin::console::{ApiClient, Config, Session};
//! use realty_admin::shared::records::Country;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(Config::load()?, Session::in_memory());
//! client.set_token("token")?;
//! let countries: Vec<Country> = client.get("/admin/countries").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **UI**: egui is single-threaded immediate mode; all state lives on the UI thread
//! - **Requests**: run on a tokio runtime and report back over `std::sync::mpsc`
//! - **Session**: the token sits behind `Arc<RwLock<_>>` and is shared by every client clone
//!
//! # Error Handling
//!
//! Each layer has its own `thiserror` enum: `ApiError`, `SessionError`,
//! `FormError`, `ConfigError`. Failures are logged with `tracing` and leave
//! the UI in its previous state.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod console;
