use crate::core::{TrackedPosition, TripId};
use crate::playback::{PlaybackEngine, PlaybackError};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// Size of the update channel to the rendering surface
const UPDATE_CHANNEL_CAPACITY: usize = 16;

/// How the tracker paces cursor advances
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Fixed interval between ticks
    pub tick_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            // The recorded console advanced the marker once per hour
            tick_interval: Duration::from_secs(3600),
        }
    }
}

/// Snapshot sent to the rendering surface on every cursor transition
#[derive(Debug, Clone, PartialEq)]
pub struct PositionUpdate {
    /// Cursor index into the route
    pub position: usize,
    /// Total number of positions in the route
    pub total: usize,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable trip milestone
    pub status: String,
    /// Whether the cursor now holds at the final position
    pub finished: bool,
}

impl PositionUpdate {
    fn snapshot(engine: &PlaybackEngine) -> Self {
        let current: &TrackedPosition = engine.current();
        Self {
            position: engine.position(),
            total: engine.total_positions(),
            latitude: current.latitude,
            longitude: current.longitude,
            status: current.status.clone(),
            finished: engine.is_finished(),
        }
    }
}

/// Timer-driven playback session for one trip's tracking view
///
/// Owns a background task that advances a [`PlaybackEngine`] at a fixed
/// interval and sends one [`PositionUpdate`] per transition, plus an
/// initial snapshot at index 0. The handle is scoped to the view: call
/// [`stop`](TripTracker::stop) when the view is dismissed and no further
/// updates will be delivered. Dropping the receiver ends the task too.
pub struct TripTracker {
    trip_id: TripId,
    stop_tx: watch::Sender<bool>,
}

impl TripTracker {
    /// Start a playback session over `route`.
    ///
    /// Fails if the route is empty. Otherwise the returned receiver yields
    /// the initial snapshot immediately, then one update per tick until
    /// the route is exhausted or the session is stopped.
    pub fn start(
        trip_id: TripId,
        route: Vec<TrackedPosition>,
        config: TrackerConfig,
    ) -> Result<(Self, mpsc::Receiver<PositionUpdate>), PlaybackError> {
        let mut engine = PlaybackEngine::new(route)?;
        let (update_tx, update_rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);
        let (stop_tx, mut stop_rx) = watch::channel(false);

        info!(
            trip = %trip_id,
            positions = engine.total_positions(),
            interval_secs = config.tick_interval.as_secs(),
            "starting trip playback"
        );

        let task_trip_id = trip_id.clone();
        tokio::spawn(async move {
            // Initial snapshot so the view can render before the first tick
            if update_tx.send(PositionUpdate::snapshot(&engine)).await.is_err() {
                return;
            }

            let mut interval = tokio::time::interval(config.tick_interval);
            // The first interval tick completes immediately; consume it so
            // ticks land one full interval apart.
            interval.tick().await;

            while !engine.is_finished() {
                // Stop wins over a due tick so no update slips out after
                // the view has been dismissed.
                tokio::select! {
                    biased;

                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            debug!(trip = %task_trip_id, "playback stopped");
                            break;
                        }
                    }
                    _ = interval.tick() => {
                        if !engine.tick() {
                            break;
                        }
                        debug!(
                            trip = %task_trip_id,
                            position = engine.position(),
                            status = %engine.current().status,
                            "cursor advanced"
                        );
                        if update_tx.send(PositionUpdate::snapshot(&engine)).await.is_err() {
                            break;
                        }
                    }
                }
            }

            info!(trip = %task_trip_id, "trip playback ended");
        });

        Ok((Self { trip_id, stop_tx }, update_rx))
    }

    /// The trip this session is tracking
    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    /// Stop the session. No further updates are delivered after this
    /// returns; the hold at the final position is preserved by whoever
    /// consumed the last update.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_route() -> Vec<TrackedPosition> {
        vec![
            TrackedPosition::new(12.97, 77.59, "Started"),
            TrackedPosition::new(13.03, 77.59, "Hebbal"),
            TrackedPosition::new(13.08, 77.62, "Airport"),
        ]
    }

    fn fast_config() -> TrackerConfig {
        TrackerConfig {
            tick_interval: Duration::from_millis(5),
        }
    }

    #[tokio::test]
    async fn test_empty_route_fails_to_start() {
        let result = TripTracker::start(TripId::new("t1"), vec![], fast_config());
        assert!(matches!(result, Err(PlaybackError::EmptyRoute)));
    }

    #[tokio::test]
    async fn test_plays_route_to_completion() {
        let (_tracker, mut updates) =
            TripTracker::start(TripId::new("t1"), short_route(), fast_config()).unwrap();

        let mut seen = Vec::new();
        while let Some(update) = updates.recv().await {
            seen.push(update);
        }

        let statuses: Vec<&str> = seen.iter().map(|u| u.status.as_str()).collect();
        assert_eq!(statuses, vec!["Started", "Hebbal", "Airport"]);

        // Cursor advanced by exactly one per update, never skipping
        for (i, update) in seen.iter().enumerate() {
            assert_eq!(update.position, i);
            assert_eq!(update.total, 3);
        }
        assert!(seen.last().unwrap().finished);
    }

    #[tokio::test]
    async fn test_stop_delivers_no_further_updates() {
        let slow = TrackerConfig {
            tick_interval: Duration::from_secs(60),
        };
        let (tracker, mut updates) =
            TripTracker::start(TripId::new("t1"), short_route(), slow).unwrap();

        // Initial snapshot arrives before any tick
        let first = updates.recv().await.unwrap();
        assert_eq!(first.position, 0);
        assert_eq!(first.status, "Started");
        assert!(!first.finished);

        tracker.stop();

        // The task exits without sending anything else
        assert!(updates.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stop_preempts_pending_ticks() {
        // Interval far shorter than the time spent receiving, so ticks
        // are always pending alongside the stop signal
        let (tracker, mut updates) =
            TripTracker::start(TripId::new("t1"), short_route(), fast_config()).unwrap();

        tracker.stop();

        // The stop lands before the task observes any due tick, so only
        // the initial snapshot gets through
        let first = updates.recv().await.unwrap();
        assert_eq!(first.position, 0);
        assert!(updates.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_single_position_route_sends_only_snapshot() {
        let route = vec![TrackedPosition::new(12.97, 77.59, "Depot")];
        let (_tracker, mut updates) =
            TripTracker::start(TripId::new("t1"), route, fast_config()).unwrap();

        let first = updates.recv().await.unwrap();
        assert_eq!(first.position, 0);
        assert!(first.finished);
        assert!(updates.recv().await.is_none());
    }
}
