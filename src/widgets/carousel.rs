//! Carousel: an infinitely looping slider with seamless wrap-around.
//!
//! The slides are laid out on an extended track that carries a copy of the
//! last slide in front of the first and a copy of the first slide after the
//! last:
//!
//! ```text
//! index:   0      1   2   ...   N     N+1
//! slide:  [N']   [1] [2]  ...  [N]   [1']
//! ```
//!
//! Moving onto a copy animates like any other move. Once that transition has
//! settled the carousel silently jumps to the real slide the copy stands for,
//! with transitions disabled, so the jump is never seen. Transitions come
//! back only after the jump has been painted.

use std::any::Any;
use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::event::{Command, TaskSlot, WidgetEvent};
use crate::geometry::{TrackStyle, Transition};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// CarouselConfig
// ---------------------------------------------------------------------------

/// Timing and layout for a [`Carousel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// How many slides share the viewport. Only affects slide width.
    pub visible_slides: usize,
    /// Delay between automatic advances.
    pub autoplay_interval: Duration,
    /// Duration of the slide transition.
    pub transition_duration: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_slides: 3,
            autoplay_interval: Duration::from_millis(5000),
            transition_duration: Duration::from_millis(500),
        }
    }
}

impl CarouselConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of visible slides (builder).
    pub fn with_visible_slides(mut self, visible: usize) -> Self {
        self.visible_slides = visible;
        self
    }

    /// Set the autoplay interval (builder).
    pub fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval = interval;
        self
    }

    /// Set the transition duration (builder).
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.visible_slides == 0 {
            return Err(Error::InvalidConfig(
                "carousel must show at least one slide".to_owned(),
            ));
        }
        if self.autoplay_interval.is_zero() {
            return Err(Error::InvalidConfig(
                "carousel autoplay interval must be non-zero".to_owned(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Phase / Settle
// ---------------------------------------------------------------------------

/// Where the carousel is in its move cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Resting on a slide with transitions enabled.
    Settled,
    /// An animated move is in flight.
    Transitioning,
    /// Just jumped off a boundary copy with transitions disabled; waiting for
    /// the jump to be painted.
    ClonedBoundary,
}

/// What [`Carousel::on_transition_settled`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// The carousel rests on a real slide; nothing changed.
    Idle,
    /// The carousel sat on a boundary copy and jumped to its original.
    Jumped { from: usize, to: usize },
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// Looping slider over a fixed, non-empty set of items.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    /// `[last copy, items..., first copy]`.
    track: Vec<T>,
    /// Number of real items.
    len: usize,
    /// Index into `track`, always in `0..=len + 1`.
    position: usize,
    transition_enabled: bool,
    phase: CarouselPhase,
    config: CarouselConfig,
}

impl<T: Clone> Carousel<T> {
    /// Build a carousel over `items`, resting on the first real item.
    pub fn new(items: Vec<T>, config: CarouselConfig) -> Result<Self> {
        config.validate()?;
        let (first, last) = match (items.first(), items.last()) {
            (Some(first), Some(last)) => (first.clone(), last.clone()),
            _ => return Err(Error::EmptyCarousel),
        };
        let len = items.len();
        let mut track = Vec::with_capacity(len + 2);
        track.push(last);
        track.extend(items);
        track.push(first);

        Ok(Self {
            track,
            len,
            position: 1,
            transition_enabled: true,
            phase: CarouselPhase::Settled,
            config,
        })
    }
}

impl<T> Carousel<T> {
    /// Move one slide forward. Returns `false` (and does nothing) when already
    /// on the trailing copy; the pending settle handles the wrap.
    pub fn advance(&mut self) -> bool {
        if self.position >= self.len + 1 {
            return false;
        }
        self.move_to(self.position + 1);
        true
    }

    /// Move one slide back. Returns `false` (and does nothing) when already on
    /// the leading copy.
    pub fn retreat(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.move_to(self.position - 1);
        true
    }

    /// Timer-driven advance. Same boundary rule as [`advance`](Self::advance).
    pub fn tick(&mut self) -> bool {
        self.advance()
    }

    /// Handle the end of a visual transition.
    ///
    /// Reads the position at call time, so a move that landed while an
    /// earlier transition was still running is what gets corrected.
    pub fn on_transition_settled(&mut self) -> Settle {
        match self.position {
            0 => self.jump_to(self.len),
            p if p == self.len + 1 => self.jump_to(1),
            _ => {
                if self.phase == CarouselPhase::Transitioning {
                    self.phase = CarouselPhase::Settled;
                }
                Settle::Idle
            }
        }
    }

    /// Re-enable transitions once the silent jump has been painted.
    ///
    /// Returns `false` when there is no jump to finish (for instance because a
    /// move already re-enabled transitions).
    pub fn finish_jump(&mut self) -> bool {
        if self.phase != CarouselPhase::ClonedBoundary {
            return false;
        }
        self.transition_enabled = true;
        self.phase = CarouselPhase::Settled;
        debug!(position = self.position, "carousel transitions re-enabled");
        true
    }

    fn move_to(&mut self, position: usize) {
        self.position = position;
        self.transition_enabled = true;
        self.phase = CarouselPhase::Transitioning;
        debug!(position, "carousel move");
    }

    fn jump_to(&mut self, to: usize) -> Settle {
        let from = self.position;
        // Disable first: the jump itself must not animate.
        self.transition_enabled = false;
        self.position = to;
        self.phase = CarouselPhase::ClonedBoundary;
        debug!(from, to, "carousel clone jump");
        Settle::Jumped { from, to }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Current index into the extended track.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the next position change animates.
    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Number of real items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a carousel cannot be built without items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the carousel rests on one of the boundary copies.
    pub fn on_clone(&self) -> bool {
        self.position == 0 || self.position == self.len + 1
    }

    /// The real items, in slide order.
    pub fn items(&self) -> &[T] {
        &self.track[1..=self.len]
    }

    /// The extended track, copies included.
    pub fn extended_items(&self) -> &[T] {
        &self.track
    }

    /// Zero-based index of the real item currently shown. Copies map to the
    /// item they duplicate.
    pub fn real_index(&self) -> usize {
        match self.position {
            0 => self.len - 1,
            p if p == self.len + 1 => 0,
            p => p - 1,
        }
    }

    /// The real item currently shown.
    pub fn current_item(&self) -> &T {
        &self.track[self.real_index() + 1]
    }

    /// The slides inside the viewport, starting at the current position.
    pub fn visible_window(&self) -> &[T] {
        let end = (self.position + self.config.visible_slides).min(self.track.len());
        &self.track[self.position..end]
    }

    /// Style of the track at the current position.
    pub fn track_style(&self) -> TrackStyle {
        let transition = if self.transition_enabled {
            Transition::Animated(self.config.transition_duration)
        } else {
            Transition::None
        };
        TrackStyle::compute(
            self.track.len(),
            self.config.visible_slides,
            self.position,
            transition,
        )
    }

    /// Commands after a successful move: settle timer, restarted autoplay, repaint.
    fn moved(&self) -> Vec<Command> {
        vec![
            Command::Once {
                slot: TaskSlot::Transition,
                after: self.config.transition_duration,
                event: WidgetEvent::TransitionEnd,
            },
            self.autoplay(),
            Command::Render,
        ]
    }

    fn autoplay(&self) -> Command {
        Command::Every {
            slot: TaskSlot::Autoplay,
            period: self.config.autoplay_interval,
            event: WidgetEvent::Autoplay,
        }
    }
}

impl<T: fmt::Display + 'static> Widget for Carousel<T> {
    fn widget_type(&self) -> &str {
        "Carousel"
    }

    fn render(&self) -> String {
        let mut out = format!(
            "slide {}/{} @{}\n{}",
            self.real_index() + 1,
            self.len,
            self.position,
            self.track_style()
        );
        for item in self.visible_window() {
            out.push_str("\n| ");
            out.push_str(&item.to_string());
        }
        out
    }

    fn on_mount(&mut self) -> Vec<Command> {
        vec![self.autoplay(), Command::Render]
    }

    fn handle(&mut self, event: &WidgetEvent) -> Vec<Command> {
        match event {
            WidgetEvent::Autoplay => {
                if self.tick() {
                    self.moved()
                } else {
                    Vec::new()
                }
            }
            WidgetEvent::Next => {
                if self.advance() {
                    self.moved()
                } else {
                    Vec::new()
                }
            }
            WidgetEvent::Previous => {
                if self.retreat() {
                    self.moved()
                } else {
                    Vec::new()
                }
            }
            WidgetEvent::TransitionEnd => match self.on_transition_settled() {
                Settle::Jumped { .. } => vec![
                    Command::Render,
                    Command::Post(WidgetEvent::JumpPainted),
                    self.autoplay(),
                ],
                Settle::Idle => Vec::new(),
            },
            WidgetEvent::JumpPainted => {
                if self.finish_jump() {
                    vec![Command::Render]
                } else {
                    Vec::new()
                }
            }
            WidgetEvent::Frame(_) | WidgetEvent::Visibility(_) => Vec::new(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
