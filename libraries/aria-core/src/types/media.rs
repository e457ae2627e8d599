/// Media item domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Artist name used when no artist can be inferred from a file
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Album name used when no album can be inferred from a file
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Classification of a media file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Audio track
    Audio,

    /// Video file
    Video,
}

impl MediaKind {
    /// Database/string representation
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }

    /// Parse from the database representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "audio" => Some(MediaKind::Audio),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

/// A catalogued media item
///
/// Owned by the catalog; the `path` is globally unique and acts as the
/// natural key. Mutations (favorite toggle, play-count increment,
/// replace-on-rescan) go through catalog write operations only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Stable identifier assigned by the catalog
    pub id: i64,

    /// Display title
    pub title: String,

    /// Artist name (defaults to "Unknown Artist")
    pub artist: String,

    /// Album name (defaults to "Unknown Album")
    pub album: String,

    /// File path on disk, unique across the catalog
    pub path: String,

    /// Audio or video classification
    pub kind: MediaKind,

    /// Duration in milliseconds; may be an estimate
    pub duration_ms: i64,

    /// Optional artwork image path
    pub artwork_path: Option<String>,

    /// When the item was (last) added to the catalog
    pub date_added: DateTime<Utc>,

    /// Number of recorded plays
    pub play_count: i64,

    /// Favorite flag
    pub is_favorite: bool,
}

impl MediaItem {
    /// Get the item duration as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.max(0) as u64)
    }
}

/// An unpersisted media item produced by the scanner
///
/// Has no id yet; the catalog assigns one (or replaces the existing row
/// with the same path) on upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDraft {
    /// Display title inferred from the filename
    pub title: String,

    /// Artist name inferred from the filename
    pub artist: String,

    /// Album name
    pub album: String,

    /// File path on disk
    pub path: String,

    /// Audio or video classification
    pub kind: MediaKind,

    /// Estimated duration in milliseconds
    pub duration_ms: i64,

    /// Optional artwork image path
    pub artwork_path: Option<String>,
}

impl MediaDraft {
    /// Create a draft with default artist/album placeholders
    pub fn new(title: impl Into<String>, path: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            title: title.into(),
            artist: UNKNOWN_ARTIST.to_string(),
            album: UNKNOWN_ALBUM.to_string(),
            path: path.into(),
            kind,
            duration_ms: 0,
            artwork_path: None,
        }
    }
}
