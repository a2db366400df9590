//! # Heroes Admin
//!
//! A terminal admin for the race resource of a heroes REST store. The crate
//! is the application shell: it assembles the data provider and the two
//! views (`assemble`), maps paths to routes, and moves between the list and
//! the detail view.

pub mod app;
pub mod browse;
pub mod error;
pub mod loading;
pub mod navigator;
pub mod notify;
pub mod routes;

pub use app::assemble;
pub use error::AppError;
pub use navigator::Navigator;
pub use notify::TerminalNotifier;
pub use routes::{RESOURCES, ResourceDefinition, Route};
