//! Derived library views
//!
//! Non-authoritative lists recomputed from the catalog on every mutation.
//! There is no incremental update path: `reload` rebuilds everything.

use aria_core::types::{MediaItem, Playlist};
use serde::{Deserialize, Serialize};

/// One full recomputation of every derived view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryViews {
    /// Every catalogued item, ordered by title
    pub all_media: Vec<MediaItem>,

    /// Audio items only
    pub songs: Vec<MediaItem>,

    /// Video items only
    pub videos: Vec<MediaItem>,

    /// Favorite items
    pub favorites: Vec<MediaItem>,

    /// Most recently added items
    pub recently_added: Vec<MediaItem>,

    /// Most played items (never-played items excluded)
    pub most_played: Vec<MediaItem>,

    /// Recently played items, most recent first
    pub recently_played: Vec<MediaItem>,

    /// All playlists, newest first
    pub playlists: Vec<Playlist>,

    /// Distinct artist names, sorted
    pub artists: Vec<String>,

    /// Distinct album names, sorted
    pub albums: Vec<String>,
}
