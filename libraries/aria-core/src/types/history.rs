/// Play history domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single play-history entry
///
/// The log is append-only and hard-capped by the catalog: only the 100
/// most recent entries are retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayHistoryEntry {
    /// Entry identifier
    pub id: i64,

    /// Media item that was played
    pub media_id: i64,

    /// When the play was recorded
    pub played_at: DateTime<Utc>,
}

/// Maximum number of retained play-history rows
pub const PLAY_HISTORY_CAP: usize = 100;
