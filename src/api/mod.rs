pub mod client;
pub mod error;
pub mod mock;
pub mod session;
pub mod trips;

pub use client::ApiClient;
pub use error::ApiError;
pub use mock::MockTripFeed;
pub use session::Session;
pub use trips::{PositionSource, TripApi};
