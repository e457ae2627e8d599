//! Aria Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Aria Player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `MediaItem`, `MediaDraft`, `Playlist`, `PlayHistoryEntry`
//! - **Capability Traits**: `StoragePermission`
//! - **Error Handling**: Unified `AriaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{MediaDraft, MediaKind};
//!
//! let draft = MediaDraft::new("My Favorite Song", "/music/song.mp3", MediaKind::Audio);
//! assert_eq!(draft.artist, "Unknown Artist");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{AriaError, Result};
pub use traits::{StaticPermission, StoragePermission};
pub use types::{
    MediaDraft, MediaItem, MediaKind, PlayHistoryEntry, Playlist, PlaylistEntry,
    PLAY_HISTORY_CAP, UNKNOWN_ALBUM, UNKNOWN_ARTIST,
};
