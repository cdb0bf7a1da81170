//! Owned, cancellable scheduled tasks.
//!
//! Every timer or frame loop a widget asks for runs as a tokio task that
//! posts [`Envelope`]s into the app's channel. The [`TaskHandle`] owns that
//! task: dropping the handle aborts it, so tearing a widget down is a matter
//! of dropping its handles.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

use crate::event::{Envelope, TaskSlot, WidgetEvent};
use crate::widget::WidgetId;

/// Handle to a running scheduled task. Aborts the task on drop.
pub struct TaskHandle {
    slot: TaskSlot,
    join: JoinHandle<()>,
}

impl TaskHandle {
    /// Deliver `envelope` once after `after`.
    pub fn once(
        slot: TaskSlot,
        tx: UnboundedSender<Envelope>,
        envelope: Envelope,
        after: Duration,
    ) -> Self {
        let join = tokio::spawn(async move {
            time::sleep(after).await;
            if tx.send(envelope).is_err() {
                trace!(?slot, "receiver gone, timer dropped");
            }
        });
        Self { slot, join }
    }

    /// Deliver `envelope` every `period`, the first time one period from now.
    pub fn every(
        slot: TaskSlot,
        tx: UnboundedSender<Envelope>,
        envelope: Envelope,
        period: Duration,
    ) -> Self {
        let join = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(envelope).is_err() {
                    trace!(?slot, "receiver gone, interval stopped");
                    break;
                }
            }
        });
        Self { slot, join }
    }

    /// Deliver a [`WidgetEvent::Frame`] stamped with the sample time every
    /// `frame_interval`, the first one immediately.
    pub fn frames(
        slot: TaskSlot,
        tx: UnboundedSender<Envelope>,
        widget: WidgetId,
        frame_interval: Duration,
    ) -> Self {
        let join = tokio::spawn(async move {
            let mut ticker = time::interval(frame_interval);
            // A late frame is skipped, not replayed.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                let now = ticker.tick().await;
                if tx.send(Envelope::new(widget, WidgetEvent::Frame(now))).is_err() {
                    trace!(?slot, "receiver gone, frame loop stopped");
                    break;
                }
            }
        });
        Self { slot, join }
    }

    /// The slot this task occupies.
    pub fn slot(&self) -> TaskSlot {
        self.slot
    }

    /// Whether the task has run to completion (or was aborted).
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Abort the task now.
    pub fn cancel(self) {
        self.join.abort();
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.join.abort();
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("slot", &self.slot)
            .field("finished", &self.join.is_finished())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
