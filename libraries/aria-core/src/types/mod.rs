//! Domain types for Aria Player

mod history;
mod media;
mod playlist;

pub use history::{PlayHistoryEntry, PLAY_HISTORY_CAP};
pub use media::{MediaDraft, MediaItem, MediaKind, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
pub use playlist::{Playlist, PlaylistEntry};
