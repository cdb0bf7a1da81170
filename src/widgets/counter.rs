//! Counter: a number that counts up from zero the first time it is seen.
//!
//! The counter sits idle until its element intersects the viewport, then
//! animates once over a fixed duration with a quartic ease-out. Later
//! visibility changes are ignored.

use std::any::Any;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::content::ImpactStat;
use crate::error::{Error, Result};
use crate::event::{Command, TaskSlot, WidgetEvent};
use crate::widget::Widget;

/// Quartic ease-out: fast start, gentle landing. `ease_out_quart(1.0) == 1.0`.
#[inline]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

// ---------------------------------------------------------------------------
// CounterConfig
// ---------------------------------------------------------------------------

/// What a [`Counter`] counts to and how it is displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    pub target: f64,
    pub duration: Duration,
    /// Appended verbatim after the number.
    pub suffix: String,
    /// `0` truncates to an integer.
    pub decimals: usize,
    /// Fraction of the element that must be on screen to count as visible.
    pub threshold: f64,
}

impl CounterConfig {
    /// Count to `target` over two seconds, no suffix, no decimals.
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration: Duration::from_millis(2000),
            suffix: String::new(),
            decimals: 0,
            threshold: 0.1,
        }
    }

    /// Set the animation duration (builder).
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the suffix (builder).
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the number of decimal places (builder).
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the visibility threshold (builder).
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl From<&ImpactStat> for CounterConfig {
    fn from(stat: &ImpactStat) -> Self {
        CounterConfig::new(stat.target)
            .with_suffix(stat.suffix.clone())
            .with_decimals(stat.decimals)
    }
}

// ---------------------------------------------------------------------------
// Phase / FrameOutcome
// ---------------------------------------------------------------------------

/// One-way animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    /// Not yet seen.
    Idle,
    /// Counting. `started_at` is stamped by the first frame.
    Animating { started_at: Option<Instant> },
    /// Reached the target; never animates again.
    Done,
}

/// Result of feeding a frame to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep scheduling frames.
    Continue,
    /// The animation reached the target on this frame.
    Finished,
    /// The counter is not animating; the frame was dropped.
    Ignored,
}

// ---------------------------------------------------------------------------
// Counter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Counter {
    config: CounterConfig,
    phase: CounterPhase,
    progress: f64,
    displayed: f64,
}

impl Counter {
    pub fn new(config: CounterConfig) -> Result<Self> {
        if !config.target.is_finite() {
            return Err(Error::NonFiniteTarget(config.target));
        }
        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(Error::InvalidConfig(format!(
                "counter threshold {} is outside 0..=1",
                config.threshold
            )));
        }
        Ok(Self {
            config,
            phase: CounterPhase::Idle,
            progress: 0.0,
            displayed: 0.0,
        })
    }

    /// React to an intersection change. Returns `true` only for the call that
    /// starts the animation.
    pub fn on_visibility_changed(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Animating { started_at: None };
        debug!(target_value = self.config.target, "counter started");
        true
    }

    /// React to an intersection ratio, applying the configured threshold.
    pub fn observe_ratio(&mut self, ratio: f64) -> bool {
        let intersecting = ratio > 0.0 && ratio >= self.config.threshold;
        self.on_visibility_changed(intersecting)
    }

    /// Advance the animation to `now`.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutcome {
        let started_at = match &mut self.phase {
            CounterPhase::Animating { started_at } => *started_at.get_or_insert(now),
            _ => return FrameOutcome::Ignored,
        };

        let progress = if self.config.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(started_at);
            (elapsed.as_secs_f64() / self.config.duration.as_secs_f64()).min(1.0)
        };
        // Frames can arrive out of order; never count backwards.
        self.progress = self.progress.max(progress);

        if self.progress >= 1.0 {
            self.displayed = self.config.target;
            self.phase = CounterPhase::Done;
            debug!(target_value = self.config.target, "counter finished");
            FrameOutcome::Finished
        } else {
            self.displayed = ease_out_quart(self.progress) * self.config.target;
            FrameOutcome::Continue
        }
    }

    /// The number as shown, suffix included.
    pub fn formatted(&self) -> String {
        if self.config.decimals > 0 {
            format!(
                "{:.*}{}",
                self.config.decimals, self.displayed, self.config.suffix
            )
        } else {
            format!("{}{}", self.displayed.floor() as i64, self.config.suffix)
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        self.phase != CounterPhase::Idle
    }

    pub fn is_done(&self) -> bool {
        self.phase == CounterPhase::Done
    }

    /// Raw (unformatted) displayed value.
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Linear progress in `0..=1`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }
}

impl Widget for Counter {
    fn widget_type(&self) -> &str {
        "Counter"
    }

    fn render(&self) -> String {
        self.formatted()
    }

    fn on_mount(&mut self) -> Vec<Command> {
        vec![Command::Render]
    }

    fn handle(&mut self, event: &WidgetEvent) -> Vec<Command> {
        match event {
            WidgetEvent::Visibility(visible) => {
                if self.on_visibility_changed(*visible) {
                    vec![Command::Frames {
                        slot: TaskSlot::Frames,
                    }]
                } else {
                    Vec::new()
                }
            }
            WidgetEvent::Frame(now) => match self.on_frame(*now) {
                FrameOutcome::Continue => vec![Command::Render],
                FrameOutcome::Finished => {
                    vec![Command::Cancel(TaskSlot::Frames), Command::Render]
                }
                FrameOutcome::Ignored => vec![Command::Cancel(TaskSlot::Frames)],
            },
            _ => Vec::new(),
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
