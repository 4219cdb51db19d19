use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// One location/status sample along a trip's path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedPosition {
    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Human-readable trip milestone ("Started", "Reached Hebbal", ...)
    pub status: String,

    /// When the sample was recorded, if the source provides it.
    /// Routes are meaningful by order alone, so this may be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl TrackedPosition {
    /// Create an untimestamped position sample
    pub fn new(latitude: f64, longitude: f64, status: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            status: status.into(),
            recorded_at: None,
        }
    }

    /// Coordinates as a (latitude, longitude) pair
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Identifier of a trip, as carried in the tracking view's query parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub String);

impl TripId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
