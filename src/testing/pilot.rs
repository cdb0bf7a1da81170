//! Pilot: visitor-level interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) and provides methods that
//! read like what a visitor does on the page (click the carousel arrows,
//! scroll a section into view, wait), plus helpers to inspect what was
//! painted.

use std::time::Duration;

use tokio::time::Instant;

use crate::app::{App, AppConfig, Snapshot};
use crate::event::WidgetEvent;
use crate::widget::{Widget, WidgetId};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless page driver for testing.
///
/// Must be used inside a tokio runtime; tests usually run with paused time so
/// that [`advance`](Self::advance) is instant and deterministic.
///
/// # Examples
///
/// ```ignore
/// use resurtech_site::testing::Pilot;
///
/// let mut pilot = Pilot::new();
/// let id = pilot.mount(carousel);
/// pilot.click_next(id);
/// pilot.advance(Duration::from_millis(500)).await;
/// ```
pub struct Pilot {
    app: App,
    started: Instant,
}

impl Pilot {
    /// Create a pilot over an empty app with the default config.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a pilot over an empty app with `config`.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            app: App::new(config),
            started: Instant::now(),
        }
    }

    /// Mount a widget on the page.
    pub fn mount(&mut self, widget: impl Widget + 'static) -> WidgetId {
        self.app.mount(widget)
    }

    // ── Visitor input ────────────────────────────────────────────────

    /// Click a carousel's "next" arrow.
    pub fn click_next(&mut self, id: WidgetId) {
        self.app.send(id, WidgetEvent::Next);
    }

    /// Click a carousel's "previous" arrow.
    pub fn click_previous(&mut self, id: WidgetId) {
        self.app.send(id, WidgetEvent::Previous);
    }

    /// Scroll a widget into the viewport.
    pub fn scroll_into_view(&mut self, id: WidgetId) {
        self.app.send(id, WidgetEvent::Visibility(true));
    }

    /// Scroll a widget out of the viewport.
    pub fn scroll_out_of_view(&mut self, id: WidgetId) {
        self.app.send(id, WidgetEvent::Visibility(false));
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Let `duration` of page time pass, applying every timer and frame that
    /// falls inside it.
    pub async fn advance(&mut self, duration: Duration) {
        self.app.run_for(duration).await;
    }

    /// Page time since the pilot was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// When the pilot was created.
    pub fn started(&self) -> Instant {
        self.started
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// What the widget currently shows, or `None` once unmounted.
    pub fn view(&self, id: WidgetId) -> Option<String> {
        self.app.render(id)
    }

    /// Take every snapshot recorded so far, oldest first.
    pub fn snapshots(&mut self) -> Vec<Snapshot> {
        self.app.take_snapshots()
    }

    /// Take the views painted for `id` so far, oldest first. Snapshots of
    /// other widgets are discarded.
    pub fn views_of(&mut self, id: WidgetId) -> Vec<String> {
        self.app
            .take_snapshots()
            .into_iter()
            .filter(|snap| snap.widget == id)
            .map(|snap| snap.view)
            .collect()
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
