//! Runs the home page headlessly and prints what a visitor would see.
//!
//! Usage: `home-preview [site.toml] [seconds]`

use std::collections::HashSet;
use std::time::Duration;

use resurtech_site::app::{App, Snapshot};
use resurtech_site::config::SiteConfig;
use resurtech_site::home::HomePage;
use resurtech_site::testing::timeline_to_string;
use tokio::time::Instant;
use tracing::{info, trace, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SECONDS: u64 = 12;

#[tokio::main(flavor = "current_thread")]
async fn main() -> resurtech_site::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resurtech_site=info,home_preview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let seconds = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seconds)) => seconds,
        Some(Err(err)) => {
            warn!(%err, default = DEFAULT_SECONDS, "ignoring invalid duration");
            DEFAULT_SECONDS
        }
        None => DEFAULT_SECONDS,
    };

    let origin = Instant::now();
    let mut app = App::new(config.app_config());
    let page = HomePage::mount(&mut app, &config)?;
    page.scroll_to_impact(&mut app);

    for _ in 0..seconds {
        app.run_for(Duration::from_secs(1)).await;
        let transitions = app.lifecycle_events();
        trace!(count = transitions.len(), "lifecycle transitions");
        let snapshots = latest_per_widget(app.take_snapshots());
        if !snapshots.is_empty() {
            println!("{}", timeline_to_string(&snapshots, origin));
        }
    }

    info!(counters = ?page.counter_texts(&app), "preview finished");
    page.unmount(&mut app);
    Ok(())
}

/// Keep only the last snapshot of each widget, in the order they were taken.
fn latest_per_widget(snapshots: Vec<Snapshot>) -> Vec<Snapshot> {
    let mut seen = HashSet::new();
    let mut latest: Vec<_> = snapshots
        .into_iter()
        .rev()
        .filter(|snap| seen.insert(snap.widget))
        .collect();
    latest.reverse();
    latest
}
