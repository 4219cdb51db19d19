use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::error::ApiError;
use crate::api::trips::PositionSource;
use crate::core::{TrackedPosition, TripId};

/// In-memory position source for testing and offline demos
///
/// Serves injected routes instead of calling the backend, mirroring the
/// canned driver-update arrays the console shipped with.
pub struct MockTripFeed {
    routes: Mutex<HashMap<TripId, Vec<TrackedPosition>>>,
}

impl MockTripFeed {
    /// Create an empty feed
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
        }
    }

    /// Create a feed that answers `trip_id` with the canned demo route
    pub fn with_demo_route(trip_id: TripId) -> Self {
        let feed = Self::new();
        feed.inject_route(trip_id, Self::demo_route());
        feed
    }

    /// Register a route for a trip
    pub fn inject_route(&self, trip_id: TripId, route: Vec<TrackedPosition>) {
        self.routes
            .lock()
            .expect("mock feed lock poisoned")
            .insert(trip_id, route);
    }

    /// The canned Bengaluru-to-airport route
    pub fn demo_route() -> Vec<TrackedPosition> {
        vec![
            TrackedPosition::new(12.97, 77.59, "Started"),
            TrackedPosition::new(13.00, 77.59, "Mekhri Circle"),
            TrackedPosition::new(13.03, 77.59, "Hebbal"),
            TrackedPosition::new(13.06, 77.60, "Jakkur"),
            TrackedPosition::new(13.08, 77.62, "Airport"),
        ]
    }
}

impl Default for MockTripFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PositionSource for MockTripFeed {
    async fn fetch_route(&self, trip_id: &TripId) -> Result<Vec<TrackedPosition>, ApiError> {
        self.routes
            .lock()
            .expect("mock feed lock poisoned")
            .get(trip_id)
            .cloned()
            .ok_or_else(|| ApiError::RouteNotFound(trip_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_injected_route_is_served() {
        let feed = MockTripFeed::new();
        let trip = TripId::new("trip-9");
        feed.inject_route(
            trip.clone(),
            vec![TrackedPosition::new(12.97, 77.59, "Started")],
        );

        let route = feed.fetch_route(&trip).await.unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route[0].status, "Started");
    }

    #[tokio::test]
    async fn test_unknown_trip_is_not_found() {
        let feed = MockTripFeed::new();
        let err = feed.fetch_route(&TripId::new("missing")).await.unwrap_err();
        assert!(matches!(err, ApiError::RouteNotFound(_)));
    }

    #[tokio::test]
    async fn test_demo_route_is_playable() {
        let feed = MockTripFeed::with_demo_route(TripId::new("demo"));
        let route = feed.fetch_route(&TripId::new("demo")).await.unwrap();
        assert!(route.len() > 1);
        assert_eq!(route.first().unwrap().status, "Started");
        assert_eq!(route.last().unwrap().status, "Airport");
    }
}
