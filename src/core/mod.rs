pub mod position;
pub mod trip;

pub use position::{TrackedPosition, TripId};
pub use trip::{Trip, TripStatus};
