//! Playback events
//!
//! Two event channels meet at the engine:
//! - [`BackendEvent`]: position/status reports flowing IN from the backend,
//!   applied by the single owning context via `PlayerEngine::handle_event`
//! - [`PlayerEvent`]: state transitions flowing OUT to the UI, buffered and
//!   drained via `PlayerEngine::take_events`

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Status reports from the media backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendEvent {
    /// Periodic position update for the bound item
    Position {
        /// Current playback position
        position: Duration,
        /// Total item duration as known by the backend
        duration: Duration,
    },

    /// Buffering state changed
    Buffering(bool),

    /// The bound item played to its end
    Completed,

    /// The backend failed to load or render the bound item
    Failed(String),
}

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playing/paused flipped
    StateChanged {
        /// Whether the engine is now playing
        playing: bool,
    },

    /// A different item became the bound item
    TrackChanged {
        /// ID of the new bound item
        media_id: i64,
        /// ID of the previously bound item (if any)
        previous_media_id: Option<i64>,
    },

    /// Queue contents changed (set/add/remove/clear)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Backend buffering flag changed
    BufferingChanged {
        /// Whether the backend is buffering
        buffering: bool,
    },

    /// The bound item finished playing naturally
    Completed {
        /// ID of the finished item
        media_id: i64,
    },

    /// A recoverable error occurred (e.g. an unplayable item was skipped)
    Error {
        /// Error message
        message: String,
    },
}
