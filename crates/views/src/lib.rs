//! # Heroes Views
//!
//! The two rendering surfaces of the admin: the race `ListView` and the race
//! `DetailView`. Each view owns its fetched data for exactly one render cycle,
//! calls the `DataProvider` when it is mounted, and reports failures through a
//! `Notifier` instead of propagating them.
//!
//! Rendering is split in two steps: the views expose plain row/section data
//! (what the tests assert on), and `render` turns that into terminal text.

pub mod columns;
pub mod detail;
pub mod list;
pub mod notify;
pub mod render;
pub mod state;

pub use columns::{ACTIONS_LABEL, Column, RACE_COLUMNS};
pub use detail::{DetailView, Section, Treatment};
pub use list::{ListRow, ListView, ShowAction};
pub use notify::{MemoryNotifier, Notification, NotificationKind, Notifier};
pub use state::{FailureKind, Ticket, ViewFailure, ViewState};
