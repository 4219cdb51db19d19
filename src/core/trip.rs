use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::core::TripId;

/// Lifecycle status of a trip as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Summary record for a single vehicle journey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,

    /// Display name of the assigned driver
    pub driver_name: String,

    /// Registration plate of the assigned vehicle
    pub vehicle_registration: String,

    pub status: TripStatus,

    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Whether the trip currently has a live position feed worth tracking
    pub fn is_trackable(&self) -> bool {
        self.status == TripStatus::InProgress
    }
}
