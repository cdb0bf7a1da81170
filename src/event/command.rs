//! Commands returned by widgets for the app to execute.
//!
//! A widget never owns a timer. It asks for one by returning a command that
//! names a [`TaskSlot`]; the app keeps at most one task per slot per widget,
//! so re-arming a slot replaces (and cancels) the previous task.

use std::time::Duration;

use super::message::WidgetEvent;

/// Per-widget slot a scheduled task occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSlot {
    /// Recurring auto-advance timer.
    Autoplay,
    /// One-shot timer standing in for the end of a CSS transition.
    Transition,
    /// Display-refresh callback chain.
    Frames,
}

/// Side effect requested by a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Deliver `event` once after `after`, replacing whatever occupies `slot`.
    Once {
        slot: TaskSlot,
        after: Duration,
        event: WidgetEvent,
    },
    /// Deliver `event` every `period` (first delivery after one period),
    /// replacing whatever occupies `slot`.
    Every {
        slot: TaskSlot,
        period: Duration,
        event: WidgetEvent,
    },
    /// Start delivering [`WidgetEvent::Frame`] at the app's frame rate.
    Frames { slot: TaskSlot },
    /// Cancel the task in `slot`, if any.
    Cancel(TaskSlot),
    /// Deliver `event` back to the widget on the next turn of the event loop.
    Post(WidgetEvent),
    /// The widget's rendered state changed.
    Render,
}

impl Command {
    /// The slot this command arms or cancels, if any.
    pub fn slot(&self) -> Option<TaskSlot> {
        match self {
            Command::Once { slot, .. } | Command::Every { slot, .. } | Command::Frames { slot } => {
                Some(*slot)
            }
            Command::Cancel(slot) => Some(*slot),
            Command::Post(_) | Command::Render => None,
        }
    }
}
