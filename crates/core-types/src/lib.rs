//! # Heroes Core Types
//!
//! The resource schema shared by every other crate in the workspace: the
//! `Race` record, its embedded `BaseAttributes`, the opaque `RecordId`, and the
//! pagination types that travel between the views and the data access port.
//!
//! This is a Layer 0 crate. It depends on nothing else in the workspace.

pub mod error;
pub mod pagination;
pub mod race;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use pagination::{Page, Pagination};
pub use race::{BaseAttributes, Race, RecordId};

/// The name under which races are exposed by the backing store.
pub const RACES: &str = "races";
