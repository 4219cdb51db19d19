use async_trait::async_trait;
use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::core::{TrackedPosition, Trip, TripId};

/// Source of recorded routes, keyed by trip
///
/// The tracking view only needs the ordered position list; where it comes
/// from (backend, canned data, a future streaming feed) is behind this
/// trait.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Fetch the ordered route for a trip.
    ///
    /// Fails with [`ApiError::RouteNotFound`] when the trip has no
    /// recorded positions.
    async fn fetch_route(&self, trip_id: &TripId) -> Result<Vec<TrackedPosition>, ApiError>;
}

/// Trip resource calls against the fleet backend
pub struct TripApi {
    client: Arc<ApiClient>,
}

impl TripApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List trips visible to the signed-in user
    pub async fn list_trips(&self) -> Result<Vec<Trip>, ApiError> {
        self.client.get_json("trips").await
    }
}

/// Translate a raw client error for a route fetch: a 404 means the trip
/// has no recorded route; everything else passes through.
fn map_route_error(err: ApiError, trip_id: &TripId) -> ApiError {
    match err {
        ApiError::Status { status: 404, .. } => ApiError::RouteNotFound(trip_id.to_string()),
        other => other,
    }
}

#[async_trait]
impl PositionSource for TripApi {
    async fn fetch_route(&self, trip_id: &TripId) -> Result<Vec<TrackedPosition>, ApiError> {
        let path = format!("trips/{}/positions", trip_id);
        self.client
            .get_json::<Vec<TrackedPosition>>(&path)
            .await
            .map_err(|e| map_route_error(e, trip_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_deserializes_from_backend_shape() {
        let json = r#"[
            {"latitude": 12.97, "longitude": 77.59, "status": "Started"},
            {"latitude": 13.03, "longitude": 77.59, "status": "Hebbal",
             "recorded_at": "2026-03-01T09:15:00Z"}
        ]"#;

        let route: Vec<TrackedPosition> = serde_json::from_str(json).unwrap();
        assert_eq!(route.len(), 2);
        assert_eq!(route[0].status, "Started");
        assert!(route[0].recorded_at.is_none());
        assert!(route[1].recorded_at.is_some());
    }

    #[test]
    fn test_missing_route_maps_to_route_not_found() {
        let trip = TripId::new("trip-42");
        let err = ApiError::Status {
            status: 404,
            path: "trips/trip-42/positions".to_string(),
        };

        match map_route_error(err, &trip) {
            ApiError::RouteNotFound(id) => assert_eq!(id, "trip-42"),
            other => panic!("expected RouteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_other_statuses_pass_through() {
        let trip = TripId::new("trip-42");

        let err = ApiError::Status {
            status: 503,
            path: "trips/trip-42/positions".to_string(),
        };
        assert!(matches!(
            map_route_error(err, &trip),
            ApiError::Status { status: 503, .. }
        ));

        let err = ApiError::Transport("connection refused".to_string());
        assert!(matches!(map_route_error(err, &trip), ApiError::Transport(_)));
    }
}
