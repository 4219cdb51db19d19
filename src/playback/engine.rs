use crate::core::TrackedPosition;
use crate::playback::{PlaybackError, PlaybackState};

/// Playback engine for a trip's recorded route
///
/// Owns an immutable, ordered sequence of position samples and a cursor
/// into it. The cursor only ever moves forward, one sample per tick, and
/// holds at the last sample once the route is exhausted.
pub struct PlaybackEngine {
    route: Vec<TrackedPosition>,
    current_position: usize,
    state: PlaybackState,
}

impl PlaybackEngine {
    /// Create an engine with the cursor at the first position.
    ///
    /// An empty route is a configuration error; there is nothing to play.
    pub fn new(route: Vec<TrackedPosition>) -> Result<Self, PlaybackError> {
        if route.is_empty() {
            return Err(PlaybackError::EmptyRoute);
        }

        let state = if route.len() == 1 {
            PlaybackState::Finished
        } else {
            PlaybackState::Playing
        };

        Ok(Self {
            route,
            current_position: 0,
            state,
        })
    }

    /// Get current cursor position (index into the route)
    pub fn position(&self) -> usize {
        self.current_position
    }

    /// Get total number of positions in the route
    pub fn total_positions(&self) -> usize {
        self.route.len()
    }

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if the cursor holds at the final position
    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    /// Get the position sample under the cursor
    ///
    /// Always defined: the route is non-empty and the cursor never leaves it.
    pub fn current(&self) -> &TrackedPosition {
        &self.route[self.current_position]
    }

    /// Advance the cursor by one position.
    ///
    /// Returns `true` if the cursor moved. Once the last position is
    /// reached, further ticks are no-ops and return `false`.
    pub fn tick(&mut self) -> bool {
        if self.state == PlaybackState::Finished {
            return false;
        }

        self.current_position += 1;
        if self.current_position + 1 >= self.route.len() {
            self.state = PlaybackState::Finished;
        }
        true
    }
}
