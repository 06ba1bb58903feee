//! Admin Console Module
//!
//! Native desktop console (egui/eframe) for the real-estate platform's
//! back office.
//!
//! # Architecture
//!
//! - **`config`** - Server URL, login path, token file location
//! - **`session`** - Bearer token storage and the shared session handle
//! - **`api`** - Typed HTTP client; attaches the token to every request
//! - **`auth`** - Login form state and the login call
//! - **`router`** - Route table and the session gate
//! - **`task`** - Runs requests on tokio and hands results to the UI thread
//! - **`screen`** - Generic list/create/edit/delete state machine
//! - **`entities`** / **`forms`** - Per-entity bindings for the generic screen
//! - **`dashboard`** - Summary figures
//! - **`state`** - Everything the views read and mutate
//! - **`views`** / **`theme`** - egui rendering
//!
//! # Module Structure
//!
//! ```text
//! console/
//! ├── main.rs       - Binary entry point
//! ├── screen/       - CrudScreen, commands, runtime driver
//! ├── forms/        - One form per entity
//! ├── state/        - AppState
//! ├── views/        - Shell, login, dashboard, CRUD table and dialogs
//! └── theme/        - Colors and frame builders
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod entities;
pub mod forms;
pub mod router;
pub mod screen;
pub mod session;
pub mod state;
pub mod task;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use api::{ApiClient, ApiError};
pub use auth::{login, AuthState, LoginError};
pub use config::Config;
pub use router::{gate, Navigation, Route, Router};
pub use session::{FileTokenStore, MemoryTokenStore, Session, SessionError, TokenStore};
pub use state::AppState;
