/// Playlist domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: i64,

    /// Playlist name
    pub name: String,

    /// Optional artwork image path
    pub artwork_path: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Playlist membership row
///
/// Positions are unique per playlist at write time but are NOT guaranteed
/// contiguous: removals leave gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Playlist ID
    pub playlist_id: i64,

    /// Media item ID
    pub media_id: i64,

    /// Position in the playlist (0-indexed, gaps permitted)
    pub position: i64,
}
