//! Snapshot rendering helpers.
//!
//! Functions for converting widget output and recorded [`Snapshot`]s into
//! plain-text strings suitable for snapshot testing and assertions.

use std::fmt::Write as _;

use tokio::time::Instant;

use crate::app::Snapshot;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a widget to a plain text string.
///
/// Each line of the rendered output is right-trimmed of spaces. Lines are
/// separated by `'\n'` and the final line has no trailing newline.
///
/// # Examples
///
/// ```ignore
/// use resurtech_site::testing::render_to_string;
/// use resurtech_site::widgets::{Counter, CounterConfig};
///
/// let counter = Counter::new(CounterConfig::new(40.0).with_suffix("+")).unwrap();
/// assert_eq!(render_to_string(&counter), "0+");
/// ```
pub fn render_to_string(widget: &dyn Widget) -> String {
    trim_lines(&widget.render())
}

/// Join the views of recorded snapshots, oldest first.
///
/// Each snapshot becomes a `== <widget type>` header line followed by its
/// view.
pub fn snapshots_to_string(snapshots: &[Snapshot]) -> String {
    let mut out = String::new();
    for (i, snap) in snapshots.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "== {}\n{}", snap.widget_type, trim_lines(&snap.view));
    }
    out
}

/// Like [`snapshots_to_string`], with each header stamped by the time elapsed
/// since `origin` in milliseconds.
pub fn timeline_to_string(snapshots: &[Snapshot], origin: Instant) -> String {
    let mut out = String::new();
    for (i, snap) in snapshots.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let elapsed = snap.at.saturating_duration_since(origin).as_millis();
        let _ = write!(
            out,
            "== +{elapsed}ms {}\n{}",
            snap.widget_type,
            trim_lines(&snap.view)
        );
    }
    out
}

fn trim_lines(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================
