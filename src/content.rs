//! Static page content: testimonials and impact statistics.
//!
//! These records are supplied to the widgets at mount time and never change
//! afterwards. The defaults mirror what the home page ships with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One testimonial card shown in the "Stories of Hope" carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub location: String,
    /// Avatar URL.
    #[serde(default)]
    pub image: String,
}

impl Testimonial {
    pub fn new(
        quote: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            name: name.into(),
            location: location.into(),
            image: image.into(),
        }
    }
}

impl fmt::Display for Testimonial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}, {}", self.quote, self.name, self.location)
    }
}

/// A headline number in the "Our Impact So Far" section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactStat {
    pub label: String,
    pub target: f64,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub decimals: usize,
}

impl ImpactStat {
    pub fn new(label: impl Into<String>, target: f64) -> Self {
        Self {
            label: label.into(),
            target,
            suffix: String::new(),
            decimals: 0,
        }
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
}

const AVATAR_GRACE: &str =
    "https://images.unsplash.com/photo-1607746882042-944635dfe10e?w=60&h=60&fit=crop&crop=face";
const AVATAR_IBRAHIM: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=60&h=60&fit=crop&crop=face";
const AVATAR_CHIDI: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=60&h=60&fit=crop&crop=face";

/// The testimonials shown on the home page, in slide order.
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "I received a laptop through Resurtech and used it to complete my UI/UX course. \
             Today, I've landed my first remote job!",
            "Grace E.",
            "Lagos",
            AVATAR_GRACE,
        ),
        Testimonial::new(
            "I always kept my old gadgets at home because I didn't know what to do with them. \
             Now I donate them to Resurtech, and it feels good to know they're helping someone else.",
            "Femi A.",
            "Abuja",
            AVATAR_GRACE,
        ),
        Testimonial::new(
            "Volunteering with Resurtech opened my eyes to how much impact a single laptop can make.",
            "Ibrahim Y.",
            "Volunteer",
            AVATAR_IBRAHIM,
        ),
        Testimonial::new(
            "My daughter needed a laptop for her online classes during the pandemic. Resurtech \
             helped us when we couldn't afford one. She's now excelling in her studies!",
            "Amina S.",
            "Kano",
            AVATAR_IBRAHIM,
        ),
        Testimonial::new(
            "As a startup founder, donating our old equipment through Resurtech allows us to give \
             back to the community while being environmentally responsible.",
            "Chidi O.",
            "Port Harcourt",
            AVATAR_CHIDI,
        ),
    ]
}

/// The impact counters shown on the home page.
pub fn default_stats() -> Vec<ImpactStat> {
    vec![
        ImpactStat::new("Laptops Given", 120.0).with_suffix("+"),
        ImpactStat::new("Tons of eWaste Recycled", 2.1).with_decimals(1),
        ImpactStat::new("Volunteers Joined", 40.0).with_suffix("+"),
    ]
}
