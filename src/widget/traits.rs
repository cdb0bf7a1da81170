//! Widget trait: mount, event handling, headless render.
//!
//! Widgets are plain state machines. They never touch timers or clocks
//! directly; instead every handler returns a list of [`Command`]s which the
//! [`App`](crate::app::App) turns into scheduled tasks. This keeps the widget
//! logic synchronous and testable without a runtime.

use std::any::Any;

use crate::event::{Command, WidgetEvent};

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by the interactive widgets.
///
/// Widget is object-safe so the app can hold a heterogeneous set of mounted
/// widgets as `Box<dyn Widget>`.
pub trait Widget {
    /// The type name for this widget (e.g. "Carousel", "Counter").
    fn widget_type(&self) -> &str;

    /// Render the widget's current state as text.
    ///
    /// This is the headless counterpart of painting: one line per visual row.
    fn render(&self) -> String;

    /// Called once when the widget is mounted. Returns the commands needed to
    /// start its background work (timers, frame loops).
    fn on_mount(&mut self) -> Vec<Command> {
        Vec::new()
    }

    /// React to an event routed to this widget.
    fn handle(&mut self, event: &WidgetEvent) -> Vec<Command>;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TaskSlot;
    use std::time::Duration;

    // -----------------------------------------------------------------------
    // Test widget
    // -----------------------------------------------------------------------

    #[derive(Debug, Default)]
    struct Ticker {
        ticks: u32,
    }

    impl Widget for Ticker {
        fn widget_type(&self) -> &str {
            "Ticker"
        }

        fn render(&self) -> String {
            format!("ticks={}", self.ticks)
        }

        fn on_mount(&mut self) -> Vec<Command> {
            vec![Command::Every {
                slot: TaskSlot::Autoplay,
                period: Duration::from_secs(1),
                event: WidgetEvent::Autoplay,
            }]
        }

        fn handle(&mut self, event: &WidgetEvent) -> Vec<Command> {
            if *event == WidgetEvent::Autoplay {
                self.ticks += 1;
                vec![Command::Render]
            } else {
                Vec::new()
            }
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct Inert;

    impl Widget for Inert {
        fn widget_type(&self) -> &str {
            "Inert"
        }

        fn render(&self) -> String {
            String::new()
        }

        fn handle(&mut self, _event: &WidgetEvent) -> Vec<Command> {
            Vec::new()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    // -----------------------------------------------------------------------
    // Widget trait
    // -----------------------------------------------------------------------

    #[test]
    fn widget_type_name() {
        assert_eq!(Ticker::default().widget_type(), "Ticker");
    }

    #[test]
    fn on_mount_default_is_empty() {
        assert!(Inert.on_mount().is_empty());
    }

    #[test]
    fn on_mount_can_schedule() {
        let cmds = Ticker::default().on_mount();
        assert_eq!(cmds.len(), 1);
        assert!(matches!(cmds[0], Command::Every { slot: TaskSlot::Autoplay, .. }));
    }

    #[test]
    fn handle_updates_render() {
        let mut ticker = Ticker::default();
        let cmds = ticker.handle(&WidgetEvent::Autoplay);
        assert_eq!(cmds, vec![Command::Render]);
        assert_eq!(ticker.render(), "ticks=1");
    }

    #[test]
    fn handle_ignores_unrelated_events() {
        let mut ticker = Ticker::default();
        assert!(ticker.handle(&WidgetEvent::Next).is_empty());
        assert_eq!(ticker.ticks, 0);
    }

    #[test]
    fn widget_as_any_mut_downcast() {
        let mut boxed: Box<dyn Widget> = Box::new(Ticker::default());
        boxed
            .as_any_mut()
            .downcast_mut::<Ticker>()
            .unwrap()
            .ticks = 7;
        assert_eq!(boxed.render(), "ticks=7");
        assert!(boxed.as_any().downcast_ref::<Inert>().is_none());
    }
}
