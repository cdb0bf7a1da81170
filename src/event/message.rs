//! Widget events and the envelope that routes them.
//!
//! Events arrive from three places: scheduled tasks (timers, frame loops),
//! the page (visibility, navigation clicks), and widgets themselves via
//! [`Command::Post`](super::Command::Post).

use tokio::time::Instant;

use crate::widget::WidgetId;

// ---------------------------------------------------------------------------
// WidgetEvent
// ---------------------------------------------------------------------------

/// Something a widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The auto-advance timer fired.
    Autoplay,
    /// A visual transition finished (the headless stand-in for `transitionend`).
    TransitionEnd,
    /// The frame following a silent clone jump has been painted.
    JumpPainted,
    /// A display refresh, stamped with the time it was sampled.
    Frame(Instant),
    /// The widget's viewport intersection changed.
    Visibility(bool),
    /// The "next" arrow was clicked.
    Next,
    /// The "previous" arrow was clicked.
    Previous,
}

impl WidgetEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEvent::Autoplay => "Autoplay",
            WidgetEvent::TransitionEnd => "TransitionEnd",
            WidgetEvent::JumpPainted => "JumpPainted",
            WidgetEvent::Frame(_) => "Frame",
            WidgetEvent::Visibility(_) => "Visibility",
            WidgetEvent::Next => "Next",
            WidgetEvent::Previous => "Previous",
        }
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// An event addressed to a mounted widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    /// The widget the event is for.
    pub widget: WidgetId,
    /// The event payload.
    pub event: WidgetEvent,
}

impl Envelope {
    /// Address `event` to `widget`.
    pub fn new(widget: WidgetId, event: WidgetEvent) -> Self {
        Self { widget, event }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
