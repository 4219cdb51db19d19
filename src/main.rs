mod api;
mod config;
mod core;
mod input;
mod playback;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::api::{ApiClient, MockTripFeed, PositionSource, Session, TripApi};
use crate::config::AppConfig;
use crate::core::{TrackedPosition, TripId};
use crate::playback::{TrackerConfig, TripTracker};

/// Command-line options for a tracking session
struct Options {
    route_file: Option<PathBuf>,
    trip_id: Option<String>,
    interval_secs: Option<u64>,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        route_file: None,
        trip_id: None,
        interval_secs: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--trip-id" => {
                let value = args.next().context("--trip-id requires a value")?;
                options.trip_id = Some(value);
            }
            "--interval-secs" => {
                let value = args.next().context("--interval-secs requires a value")?;
                options.interval_secs =
                    Some(value.parse().context("--interval-secs must be a number")?);
            }
            "--help" | "-h" => {
                eprintln!(
                    "usage: fleet-track [ROUTE_FILE] [--trip-id ID] [--interval-secs N]"
                );
                std::process::exit(0);
            }
            other if !other.starts_with('-') => {
                options.route_file = Some(PathBuf::from(other));
            }
            other => bail!("unknown option: {}", other),
        }
    }

    Ok(options)
}

/// Resolve the route to play: a local file wins, then the backend, then
/// the canned demo feed.
async fn resolve_route(
    options: &Options,
    config: &AppConfig,
    trip_id: &TripId,
) -> Result<Vec<TrackedPosition>> {
    if let Some(path) = &options.route_file {
        return input::load_route(path)
            .with_context(|| format!("Failed to load route from {}", path.display()));
    }

    if let Some(base_url) = &config.api_base_url {
        let session = Session::load().context(
            "No saved session; sign in first or pass a route file",
        )?;
        let client = Arc::new(ApiClient::new(base_url.clone(), session)?);
        let trips = TripApi::new(client);
        return Ok(trips.fetch_route(trip_id).await?);
    }

    warn!("no backend configured, using the canned demo route");
    let feed = MockTripFeed::with_demo_route(trip_id.clone());
    Ok(feed.fetch_route(trip_id).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let options = parse_args()?;
    let config = AppConfig::load();

    let trip_id = TripId::new(
        options.trip_id.clone().unwrap_or_else(|| "demo".to_string()),
    );

    let route = resolve_route(&options, &config, &trip_id).await?;

    let tick_interval = Duration::from_secs(
        options.interval_secs.unwrap_or(config.tick_interval_secs),
    );
    let (tracker, mut updates) =
        TripTracker::start(trip_id, route, TrackerConfig { tick_interval })?;

    loop {
        tokio::select! {
            update = updates.recv() => {
                match update {
                    Some(update) => {
                        info!(
                            position = update.position,
                            total = update.total,
                            latitude = update.latitude,
                            longitude = update.longitude,
                            status = %update.status,
                            "vehicle position"
                        );
                        if update.finished {
                            info!("route complete");
                            break;
                        }
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracker.stop();
                info!("tracking cancelled");
                break;
            }
        }
    }

    Ok(())
}
