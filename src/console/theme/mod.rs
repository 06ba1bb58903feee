//! Theme Module
//!
//! Slate admin palette, frame builders for the shell, and the mapping from
//! badge color tokens to real colors.
//!
//! # Usage
//!
//! ```ignore
//! use realty_admin::console::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::sidebar_frame().show(ui, |ui| {
//!     // Navigation
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
