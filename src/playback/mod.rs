pub mod engine;
pub mod tracker;

pub use engine::PlaybackEngine;
pub use tracker::{PositionUpdate, TrackerConfig, TripTracker};

use thiserror::Error;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Cursor still has positions ahead of it
    Playing,
    /// Cursor holds at the last position; further ticks are no-ops
    Finished,
}

/// Playback configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("route contains no positions")]
    EmptyRoute,
}
