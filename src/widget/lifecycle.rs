//! Widget lifecycle: mount, update, teardown.
//!
//! The [`LifecycleTracker`] records which widgets are live in the [`App`](crate::app::App)
//! and queues the transitions between those states so callers (tests, the
//! preview binary) can observe them in order.

use std::collections::HashSet;

use slotmap::new_key_type;

new_key_type! {
    /// Identifier for a mounted widget. Copy, lightweight (u64).
    pub struct WidgetId;
}

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// A lifecycle transition of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The widget was mounted and its background tasks armed.
    Mount { widget: WidgetId },
    /// The widget's visible state changed.
    Update { widget: WidgetId },
    /// The widget was torn down and its tasks cancelled.
    Unmount { widget: WidgetId },
}

// ---------------------------------------------------------------------------
// LifecycleTracker
// ---------------------------------------------------------------------------

/// Tracks live widgets and accumulates lifecycle transitions.
///
/// Transitions that make no sense for the widget's current state (mounting
/// twice, updating or unmounting a widget that is not live) are dropped
/// rather than queued.
#[derive(Debug, Default)]
pub struct LifecycleTracker {
    live: HashSet<WidgetId>,
    queue: Vec<LifecycleEvent>,
}

impl LifecycleTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mount. Returns `false` if the widget was already live.
    pub fn mount(&mut self, widget: WidgetId) -> bool {
        let fresh = self.live.insert(widget);
        if fresh {
            self.queue.push(LifecycleEvent::Mount { widget });
        }
        fresh
    }

    /// Record a state change of a live widget. Returns `false` if it is not live.
    pub fn update(&mut self, widget: WidgetId) -> bool {
        let live = self.live.contains(&widget);
        if live {
            self.queue.push(LifecycleEvent::Update { widget });
        }
        live
    }

    /// Record a teardown. Returns `false` if the widget was not live.
    pub fn unmount(&mut self, widget: WidgetId) -> bool {
        let was_live = self.live.remove(&widget);
        if was_live {
            self.queue.push(LifecycleEvent::Unmount { widget });
        }
        was_live
    }

    /// Whether the widget is currently live.
    pub fn is_live(&self, widget: WidgetId) -> bool {
        self.live.contains(&widget)
    }

    /// Number of live widgets.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Take every queued transition, oldest first.
    pub fn drain(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.queue)
    }

    /// Whether transitions are waiting to be drained.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
