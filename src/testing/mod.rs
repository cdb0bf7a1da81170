//! Headless testing helpers: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive an [`App`](crate::app::App) the way a visitor
//! drives the page: clicking arrows, scrolling sections into view, and letting
//! time pass. Use [`render_to_string`] and related helpers to turn widget
//! output into plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{render_to_string, snapshots_to_string, timeline_to_string};
