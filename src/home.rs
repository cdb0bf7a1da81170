//! The home page: one testimonial carousel and a row of impact counters.

use tracing::info;

use crate::app::App;
use crate::config::SiteConfig;
use crate::content::Testimonial;
use crate::error::Result;
use crate::event::WidgetEvent;
use crate::widget::WidgetId;
use crate::widgets::{Carousel, Counter};

/// Ids of the widgets mounted for the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub carousel: WidgetId,
    /// One per stat, in page order.
    pub counters: Vec<WidgetId>,
}

impl HomePage {
    /// Build and mount every widget described by `config`.
    ///
    /// Nothing is mounted if any widget fails to build.
    pub fn mount(app: &mut App, config: &SiteConfig) -> Result<Self> {
        let carousel = Carousel::new(config.testimonials.clone(), config.carousel_config())?;
        let counters = config
            .counter_configs()
            .into_iter()
            .map(Counter::new)
            .collect::<Result<Vec<_>>>()?;

        let page = HomePage {
            carousel: app.mount(carousel),
            counters: counters.into_iter().map(|c| app.mount(c)).collect(),
        };
        info!(
            testimonials = config.testimonials.len(),
            counters = page.counters.len(),
            "home page mounted"
        );
        Ok(page)
    }

    /// The visitor scrolled the impact section into view.
    pub fn scroll_to_impact(&self, app: &mut App) {
        for &id in &self.counters {
            app.send(id, WidgetEvent::Visibility(true));
        }
    }

    /// The testimonial carousel, if still mounted.
    pub fn testimonials<'a>(&self, app: &'a App) -> Option<&'a Carousel<Testimonial>> {
        app.widget::<Carousel<Testimonial>>(self.carousel)
    }

    /// Current text of every counter, in page order.
    pub fn counter_texts(&self, app: &App) -> Vec<String> {
        self.counters
            .iter()
            .filter_map(|&id| app.widget::<Counter>(id))
            .map(Counter::formatted)
            .collect()
    }

    /// Tear the page down, cancelling every timer and frame loop.
    pub fn unmount(self, app: &mut App) {
        app.unmount(self.carousel);
        for id in self.counters {
            app.unmount(id);
        }
    }
}
