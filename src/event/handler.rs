//! Local dispatch queue for events posted by widgets themselves.
//!
//! Task-driven events travel through the app's channel; events a widget
//! posts to itself ([`Command::Post`](super::Command::Post)) go through this
//! queue instead and are delivered on the next turn, ahead of the channel.

use std::collections::VecDeque;

use super::message::Envelope;

/// FIFO queue of locally posted envelopes.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    queue: VecDeque<Envelope>,
}

impl EventDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an envelope.
    pub fn push(&mut self, envelope: Envelope) {
        self.queue.push_back(envelope);
    }

    /// Take the oldest envelope.
    pub fn pop(&mut self) -> Option<Envelope> {
        self.queue.pop_front()
    }

    /// Drop every envelope addressed to `widget` (used on teardown).
    pub fn discard_for(&mut self, widget: crate::widget::WidgetId) {
        self.queue.retain(|env| env.widget != widget);
    }

    /// Number of queued envelopes.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::WidgetEvent;
    use crate::widget::WidgetId;
    use slotmap::SlotMap;

    fn two_ids() -> (WidgetId, WidgetId) {
        let mut sm: SlotMap<WidgetId, ()> = SlotMap::with_key();
        (sm.insert(()), sm.insert(()))
    }

    #[test]
    fn new_dispatcher_is_empty() {
        let d = EventDispatcher::new();
        assert!(d.is_empty());
        assert_eq!(d.pending_count(), 0);
    }

    #[test]
    fn pop_is_fifo() {
        let (a, _) = two_ids();
        let mut d = EventDispatcher::new();
        d.push(Envelope::new(a, WidgetEvent::Next));
        d.push(Envelope::new(a, WidgetEvent::Previous));
        assert_eq!(d.pop().map(|e| e.event), Some(WidgetEvent::Next));
        assert_eq!(d.pop().map(|e| e.event), Some(WidgetEvent::Previous));
        assert!(d.pop().is_none());
    }

    #[test]
    fn discard_for_keeps_other_widgets() {
        let (a, b) = two_ids();
        let mut d = EventDispatcher::new();
        d.push(Envelope::new(a, WidgetEvent::JumpPainted));
        d.push(Envelope::new(b, WidgetEvent::Next));
        d.push(Envelope::new(a, WidgetEvent::Next));
        d.discard_for(a);
        assert_eq!(d.pending_count(), 1);
        assert_eq!(d.pop().map(|e| e.widget), Some(b));
    }
}
