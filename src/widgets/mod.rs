//! Built-in widgets: Carousel, Counter.

pub mod carousel;
pub mod counter;

pub use carousel::{Carousel, CarouselConfig, CarouselPhase, Settle};
pub use counter::{ease_out_quart, Counter, CounterConfig, CounterPhase, FrameOutcome};
