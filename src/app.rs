//! App struct: widget registry, scheduled tasks, event loop.
//!
//! [`App`] owns the mounted widgets and every task they asked for. All widget
//! state is touched only from the task that drives the app, so the timers and
//! frame loops never race with navigation: they post events into a channel
//! and the app applies them one at a time.
//!
//! The app spawns tokio tasks and must be used inside a runtime. A
//! current-thread runtime is enough.

use std::collections::HashMap;
use std::time::Duration;

use slotmap::SlotMap;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{self, Instant};
use tracing::{debug, trace};

use crate::event::{Command, Envelope, EventDispatcher, TaskSlot, WidgetEvent};
use crate::task::TaskHandle;
use crate::widget::{LifecycleEvent, LifecycleTracker, Widget, WidgetId};

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Display refresh rate used for frame loops.
    pub frame_rate: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { frame_rate: 60 }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frame rate (builder). Zero is treated as one frame per second.
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Time between two display refreshes.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A widget's rendered state, captured each time it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub widget: WidgetId,
    pub widget_type: String,
    pub view: String,
    /// App clock when the snapshot was taken.
    pub at: Instant,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Single-threaded widget host.
pub struct App {
    widgets: SlotMap<WidgetId, Box<dyn Widget>>,
    tasks: HashMap<(WidgetId, TaskSlot), TaskHandle>,
    lifecycle: LifecycleTracker,
    dispatcher: EventDispatcher,
    tx: UnboundedSender<Envelope>,
    rx: UnboundedReceiver<Envelope>,
    snapshots: Vec<Snapshot>,
    config: AppConfig,
}

impl App {
    /// Create an app with no widgets.
    pub fn new(config: AppConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            widgets: SlotMap::with_key(),
            tasks: HashMap::new(),
            lifecycle: LifecycleTracker::new(),
            dispatcher: EventDispatcher::new(),
            tx,
            rx,
            snapshots: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ── Mounting ─────────────────────────────────────────────────────

    /// Mount a widget and start whatever background work it requests.
    pub fn mount(&mut self, widget: impl Widget + 'static) -> WidgetId {
        let widget_type = widget.widget_type().to_owned();
        let id = self.widgets.insert(Box::new(widget));
        self.lifecycle.mount(id);
        debug!(widget = ?id, %widget_type, "mounted");

        let commands = match self.widgets.get_mut(id) {
            Some(widget) => widget.on_mount(),
            None => Vec::new(),
        };
        self.apply(id, commands);
        id
    }

    /// Tear a widget down, cancelling all of its tasks and queued events.
    ///
    /// Returns `false` if the widget was not mounted.
    pub fn unmount(&mut self, id: WidgetId) -> bool {
        if self.widgets.remove(id).is_none() {
            return false;
        }
        let before = self.tasks.len();
        // Dropping the handles aborts the tasks.
        self.tasks.retain(|(owner, _), _| *owner != id);
        self.dispatcher.discard_for(id);
        self.lifecycle.unmount(id);
        debug!(widget = ?id, cancelled = before - self.tasks.len(), "unmounted");
        true
    }

    /// Tear down every widget.
    pub fn unmount_all(&mut self) {
        let ids: Vec<_> = self.widgets.keys().collect();
        for id in ids {
            self.unmount(id);
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Deliver an event to a widget right away (page input such as a click
    /// or a visibility change).
    pub fn send(&mut self, id: WidgetId, event: WidgetEvent) {
        self.dispatch(Envelope::new(id, event));
    }

    /// Deliver one envelope. Envelopes for widgets that are gone are dropped.
    pub fn dispatch(&mut self, envelope: Envelope) {
        let Envelope { widget: id, event } = envelope;
        let commands = match self.widgets.get_mut(id) {
            Some(widget) => {
                trace!(widget = ?id, event = event.name(), "dispatch");
                widget.handle(&event)
            }
            None => {
                trace!(widget = ?id, event = event.name(), "dropping event for unmounted widget");
                return;
            }
        };
        self.apply(id, commands);
    }

    fn apply(&mut self, id: WidgetId, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Once { slot, after, event } => {
                    let handle =
                        TaskHandle::once(slot, self.tx.clone(), Envelope::new(id, event), after);
                    self.tasks.insert((id, slot), handle);
                }
                Command::Every { slot, period, event } => {
                    let handle =
                        TaskHandle::every(slot, self.tx.clone(), Envelope::new(id, event), period);
                    self.tasks.insert((id, slot), handle);
                }
                Command::Frames { slot } => {
                    let handle =
                        TaskHandle::frames(slot, self.tx.clone(), id, self.config.frame_interval());
                    self.tasks.insert((id, slot), handle);
                }
                Command::Cancel(slot) => {
                    self.tasks.remove(&(id, slot));
                }
                Command::Post(event) => self.dispatcher.push(Envelope::new(id, event)),
                Command::Render => self.record(id),
            }
        }
    }

    fn record(&mut self, id: WidgetId) {
        if let Some(widget) = self.widgets.get(id) {
            self.snapshots.push(Snapshot {
                widget: id,
                widget_type: widget.widget_type().to_owned(),
                view: widget.render(),
                at: Instant::now(),
            });
            self.lifecycle.update(id);
        }
    }

    // ── Event loop ───────────────────────────────────────────────────

    /// Wait for the next event and apply it. Locally posted events go first.
    ///
    /// Waits forever if no widget has anything scheduled. Returns `None`
    /// only if the channel closed, which cannot happen while the app holds
    /// its own sender.
    pub async fn step(&mut self) -> Option<Envelope> {
        let envelope = match self.dispatcher.pop() {
            Some(envelope) => envelope,
            None => self.rx.recv().await?,
        };
        self.dispatch(envelope);
        Some(envelope)
    }

    /// Apply every event that is already waiting, without blocking.
    /// Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let next = match self.dispatcher.pop() {
                Some(envelope) => Some(envelope),
                None => self.rx.try_recv().ok(),
            };
            match next {
                Some(envelope) => {
                    self.dispatch(envelope);
                    applied += 1;
                }
                None => return applied,
            }
        }
    }

    /// Run the event loop for `duration` of app time.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = time::sleep(duration);
        tokio::pin!(deadline);
        loop {
            if let Some(envelope) = self.dispatcher.pop() {
                self.dispatch(envelope);
                continue;
            }
            let received = tokio::select! {
                biased;
                envelope = self.rx.recv() => envelope,
                _ = &mut deadline => None,
            };
            match received {
                Some(envelope) => self.dispatch(envelope),
                None => break,
            }
        }
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// Borrow a mounted widget as its concrete type.
    pub fn widget<W: Widget + 'static>(&self, id: WidgetId) -> Option<&W> {
        self.widgets.get(id)?.as_any().downcast_ref::<W>()
    }

    /// Mutably borrow a mounted widget as its concrete type.
    pub fn widget_mut<W: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.widgets.get_mut(id)?.as_any_mut().downcast_mut::<W>()
    }

    /// Render a mounted widget.
    pub fn render(&self, id: WidgetId) -> Option<String> {
        self.widgets.get(id).map(|w| w.render())
    }

    pub fn is_mounted(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Whether `id` has a task in `slot`.
    pub fn has_task(&self, id: WidgetId, slot: TaskSlot) -> bool {
        self.tasks.contains_key(&(id, slot))
    }

    /// Number of live tasks across all widgets.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Take every snapshot recorded so far, oldest first.
    pub fn take_snapshots(&mut self) -> Vec<Snapshot> {
        std::mem::take(&mut self.snapshots)
    }

    /// Take every lifecycle transition recorded so far, oldest first.
    pub fn lifecycle_events(&mut self) -> Vec<LifecycleEvent> {
        self.lifecycle.drain()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
