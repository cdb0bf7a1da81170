//! Carousel track geometry: slide widths, track offsets, transitions.
//!
//! The carousel lays every slide of its extended sequence side by side on a
//! single horizontal track and moves the track, not the slides. All values
//! are percentages of the viewport width, matching how the site's stylesheet
//! positions the track.

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// Whether a track move animates, and for how long.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The move slides over the given duration with `ease` timing.
    Animated(Duration),
    /// The move is applied instantly (used for the clone jump).
    None,
}

impl Transition {
    /// Whether this transition animates.
    #[inline]
    pub fn is_animated(self) -> bool {
        matches!(self, Transition::Animated(_))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Animated(d) => write!(f, "transform {}s ease", d.as_secs_f64()),
            Transition::None => f.write_str("none"),
        }
    }
}

// ---------------------------------------------------------------------------
// TrackStyle
// ---------------------------------------------------------------------------

/// Computed style for the carousel track at a given position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackStyle {
    /// Width of one slide, in percent of the viewport.
    pub slide_width: f64,
    /// Width of the whole track (all extended slides), in percent of the viewport.
    pub track_width: f64,
    /// Leftward translation of the track, in percent of the viewport.
    pub offset: f64,
    /// How the track gets to `offset`.
    pub transition: Transition,
}

impl TrackStyle {
    /// Compute the track style for `slides` extended slides with `visible`
    /// of them on screen, positioned at `position`.
    ///
    /// `visible` must be non-zero; the carousel validates this at construction.
    pub fn compute(slides: usize, visible: usize, position: usize, transition: Transition) -> Self {
        let slide_width = slide_width(visible);
        Self {
            slide_width,
            track_width: slides as f64 * 100.0 / visible as f64,
            offset: position as f64 * slide_width,
            transition,
        }
    }
}

impl fmt::Display for TrackStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width: {:.4}%; transform: translateX(-{:.4}%); transition: {}",
            self.track_width, self.offset, self.transition
        )
    }
}

/// Width of a single slide when `visible` slides share the viewport.
#[inline]
pub fn slide_width(visible: usize) -> f64 {
    100.0 / visible as f64
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_SECOND: Duration = Duration::from_millis(500);

    #[test]
    fn slide_width_divides_viewport() {
        assert_eq!(slide_width(1), 100.0);
        assert_eq!(slide_width(4), 25.0);
    }

    #[test]
    fn track_spans_all_extended_slides() {
        let style = TrackStyle::compute(7, 3, 1, Transition::Animated(HALF_SECOND));
        assert!((style.track_width - 233.333_333).abs() < 1e-3);
        assert!((style.offset - 33.333_333).abs() < 1e-3);
    }

    #[test]
    fn offset_scales_with_position() {
        let a = TrackStyle::compute(4, 2, 1, Transition::None);
        let b = TrackStyle::compute(4, 2, 3, Transition::None);
        assert_eq!(a.offset, 50.0);
        assert_eq!(b.offset, 150.0);
    }

    #[test]
    fn display_renders_css() {
        let style = TrackStyle::compute(4, 2, 1, Transition::Animated(HALF_SECOND));
        assert_eq!(
            style.to_string(),
            "width: 200.0000%; transform: translateX(-50.0000%); transition: transform 0.5s ease"
        );
    }

    #[test]
    fn display_without_transition() {
        let style = TrackStyle::compute(3, 1, 2, Transition::None);
        assert_eq!(
            style.to_string(),
            "width: 300.0000%; transform: translateX(-200.0000%); transition: none"
        );
    }

    #[test]
    fn transition_is_animated() {
        assert!(Transition::Animated(HALF_SECOND).is_animated());
        assert!(!Transition::None.is_animated());
    }
}
