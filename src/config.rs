//! Site configuration loaded from TOML.
//!
//! Every key is optional; anything left out falls back to what the home page
//! ships with.
//!
//! ```toml
//! [carousel]
//! interval_ms = 5000
//! visible_slides = 3
//! transition_ms = 500
//!
//! [counter]
//! duration_ms = 2000
//! threshold = 0.1
//! frame_rate = 60
//!
//! [[stats]]
//! label = "Laptops Given"
//! target = 120
//! suffix = "+"
//!
//! [[testimonials]]
//! quote = "..."
//! name = "Grace E."
//! location = "Lagos"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::AppConfig;
use crate::content::{default_stats, default_testimonials, ImpactStat, Testimonial};
use crate::error::{Error, Result};
use crate::widgets::{CarouselConfig, CounterConfig};

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// `[carousel]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub interval_ms: u64,
    pub visible_slides: usize,
    pub transition_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            visible_slides: 3,
            transition_ms: 500,
        }
    }
}

/// `[counter]` section, shared by every impact counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    pub duration_ms: u64,
    pub threshold: f64,
    /// Refresh rate of the frame loop.
    pub frame_rate: u32,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            threshold: 0.1,
            frame_rate: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

/// Everything the home page needs to mount its widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselSettings,
    pub counter: CounterSettings,
    pub stats: Vec<ImpactStat>,
    pub testimonials: Vec<Testimonial>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselSettings::default(),
            counter: CounterSettings::default(),
            stats: default_stats(),
            testimonials: default_testimonials(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(
            path = %path.display(),
            testimonials = config.testimonials.len(),
            stats = config.stats.len(),
            "loaded site config"
        );
        Ok(config)
    }

    /// Check the values the widgets would reject at mount time.
    pub fn validate(&self) -> Result<()> {
        if self.testimonials.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        self.carousel_config().validate()?;
        if !(0.0..=1.0).contains(&self.counter.threshold) {
            return Err(Error::InvalidConfig(format!(
                "counter threshold {} is outside 0..=1",
                self.counter.threshold
            )));
        }
        if self.counter.frame_rate == 0 {
            return Err(Error::InvalidConfig(
                "counter frame rate must be non-zero".to_owned(),
            ));
        }
        if let Some(stat) = self.stats.iter().find(|s| !s.target.is_finite()) {
            return Err(Error::NonFiniteTarget(stat.target));
        }
        Ok(())
    }

    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig::new()
            .with_visible_slides(self.carousel.visible_slides)
            .with_autoplay_interval(Duration::from_millis(self.carousel.interval_ms))
            .with_transition_duration(Duration::from_millis(self.carousel.transition_ms))
    }

    /// One counter config per stat, in page order.
    pub fn counter_configs(&self) -> Vec<CounterConfig> {
        let duration = Duration::from_millis(self.counter.duration_ms);
        self.stats
            .iter()
            .map(|stat| {
                CounterConfig::from(stat)
                    .with_duration(duration)
                    .with_threshold(self.counter.threshold)
            })
            .collect()
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig::new().with_frame_rate(self.counter.frame_rate)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
