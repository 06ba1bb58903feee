//! Test suite for the admin console
//!
//! - `common` - fake backend and client fixtures
//! - `integration` - client, session and CRUD flows against real HTTP
//! - `property` - proptest properties of filtering and the session gate

pub mod common;
