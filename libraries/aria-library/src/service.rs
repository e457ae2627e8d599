//! Library service - scan orchestration and the query/command surface

use crate::views::LibraryViews;
use aria_catalog::{history, media, playlists};
use aria_core::error::Result;
use aria_core::types::{MediaItem, MediaKind, Playlist};
use aria_core::StoragePermission;
use aria_scanner::{FileScanner, MediaRoots};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

/// How many rows the bounded derived views hold
const DEFAULT_VIEW_LIMIT: i64 = 20;

/// Result of a scan request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanOutcome {
    /// A scan was already in flight; this request was a no-op
    AlreadyRunning,

    /// Storage cannot be read; retry after the platform grants permission
    PermissionDenied,

    /// The scan ran to completion
    Completed {
        /// Drafts successfully written to the catalog
        processed: usize,
        /// Drafts that failed to persist
        failed: usize,
    },
}

impl ScanOutcome {
    /// Human-readable status line
    pub fn summary(&self) -> String {
        match self {
            ScanOutcome::AlreadyRunning => "Scan already in progress".to_string(),
            ScanOutcome::PermissionDenied => "Storage permission denied".to_string(),
            ScanOutcome::Completed { processed, failed } => {
                format!("Scan complete: {} processed, {} failed", processed, failed)
            }
        }
    }
}

/// The externally-facing library surface
///
/// Owns the catalog pool, the scanner and the permission capability -
/// explicitly constructed, no ambient globals. All mutations recompute every
/// derived view; callers poll [`LibraryService::version`] to notice changes.
pub struct LibraryService<P: StoragePermission> {
    pool: SqlitePool,
    scanner: FileScanner,
    roots: MediaRoots,
    permission: P,
    scanning: AtomicBool,
    views: RwLock<LibraryViews>,
    version: AtomicU64,
}

impl<P: StoragePermission> LibraryService<P> {
    /// Create a service over an existing pool
    pub fn new(pool: SqlitePool, scanner: FileScanner, roots: MediaRoots, permission: P) -> Self {
        Self {
            pool,
            scanner,
            roots,
            permission,
            scanning: AtomicBool::new(false),
            views: RwLock::new(LibraryViews::default()),
            version: AtomicU64::new(0),
        }
    }

    /// Open the catalog, run migrations and build the service
    pub async fn open(
        database_url: &str,
        scanner: FileScanner,
        roots: MediaRoots,
        permission: P,
    ) -> Result<Self> {
        let pool = aria_catalog::create_pool(database_url)
            .await
            .map_err(|e| aria_core::AriaError::storage(e.to_string()))?;
        aria_catalog::run_migrations(&pool).await?;

        Ok(Self::new(pool, scanner, roots, permission))
    }

    /// Close the catalog connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// The underlying pool, for callers that need direct catalog access
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Whether a scan is currently in flight
    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::SeqCst)
    }

    /// Version counter bumped on every view reload
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Snapshot of the current derived views
    pub async fn views(&self) -> LibraryViews {
        self.views.read().await.clone()
    }

    // ===== Scanning =====

    /// Run a full scan without progress reporting
    pub async fn scan(&self) -> Result<ScanOutcome> {
        self.scan_with_progress(|_, _| {}).await
    }

    /// Run a full scan
    ///
    /// Single-flight: a call while another scan is running returns
    /// [`ScanOutcome::AlreadyRunning`] immediately. `progress` receives
    /// `(completed, total)` after every persisted item; the completed count
    /// never decreases.
    pub async fn scan_with_progress<F>(&self, progress: F) -> Result<ScanOutcome>
    where
        F: Fn(usize, usize),
    {
        if self.scanning.swap(true, Ordering::SeqCst) {
            tracing::debug!("scan requested while one is already running");
            return Ok(ScanOutcome::AlreadyRunning);
        }

        let result = self.scan_inner(progress).await;
        self.scanning.store(false, Ordering::SeqCst);
        result
    }

    async fn scan_inner<F>(&self, progress: F) -> Result<ScanOutcome>
    where
        F: Fn(usize, usize),
    {
        if !self.permission.can_read_storage() {
            tracing::warn!("scan aborted: storage permission denied");
            return Ok(ScanOutcome::PermissionDenied);
        }

        let drafts = self.scanner.scan_roots(self.roots.roots());
        let total = drafts.len();
        tracing::info!("scan discovered {} candidate files", total);

        let mut processed = 0usize;
        let mut failed = 0usize;
        let mut completed = 0usize;

        for draft in &drafts {
            match media::upsert(&self.pool, draft).await {
                Ok(_) => processed += 1,
                Err(e) => {
                    tracing::warn!("Failed to persist {}: {}", draft.path, e);
                    failed += 1;
                }
            }

            completed += 1;
            progress(completed, total);
        }

        self.reload().await?;

        let outcome = ScanOutcome::Completed { processed, failed };
        tracing::info!("{}", outcome.summary());
        Ok(outcome)
    }

    // ===== Derived views =====

    /// Recompute every derived view in one pass and bump the version counter
    pub async fn reload(&self) -> Result<u64> {
        let all_media = media::get_all(&self.pool).await?;
        let songs = media::get_by_kind(&self.pool, MediaKind::Audio).await?;
        let videos = media::get_by_kind(&self.pool, MediaKind::Video).await?;
        let favorites = media::get_favorites(&self.pool).await?;
        let recently_added = media::recently_added(&self.pool, DEFAULT_VIEW_LIMIT).await?;
        let most_played = media::most_played(&self.pool, DEFAULT_VIEW_LIMIT).await?;
        let recently_played = history::recently_played(&self.pool, DEFAULT_VIEW_LIMIT).await?;
        let playlist_list = playlists::get_all(&self.pool).await?;
        let artists = media::distinct_artists(&self.pool).await?;
        let albums = media::distinct_albums(&self.pool).await?;

        let mut views = self.views.write().await;
        *views = LibraryViews {
            all_media,
            songs,
            videos,
            favorites,
            recently_added,
            most_played,
            recently_played,
            playlists: playlist_list,
            artists,
            albums,
        };
        drop(views);

        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(version)
    }

    // ===== Queries =====

    /// Search the catalog (empty query yields an empty list)
    pub async fn search(&self, query: &str) -> Result<Vec<MediaItem>> {
        media::search(&self.pool, query).await
    }

    /// Media by exact artist name
    pub async fn media_by_artist(&self, artist: &str) -> Result<Vec<MediaItem>> {
        media::get_by_artist(&self.pool, artist).await
    }

    /// Media by exact album name
    pub async fn media_by_album(&self, album: &str) -> Result<Vec<MediaItem>> {
        media::get_by_album(&self.pool, album).await
    }

    /// Most recently added items
    pub async fn recently_added(&self, limit: i64) -> Result<Vec<MediaItem>> {
        media::recently_added(&self.pool, limit).await
    }

    /// Most played items
    pub async fn most_played(&self, limit: i64) -> Result<Vec<MediaItem>> {
        media::most_played(&self.pool, limit).await
    }

    /// Recently played items
    pub async fn recently_played(&self, limit: i64) -> Result<Vec<MediaItem>> {
        history::recently_played(&self.pool, limit).await
    }

    /// Media of a playlist, in position order
    pub async fn playlist_media(&self, playlist_id: i64) -> Result<Vec<MediaItem>> {
        playlists::media_for(&self.pool, playlist_id).await
    }

    // ===== Commands (each followed by a full reload) =====

    /// Flip the favorite flag of an item
    pub async fn toggle_favorite(&self, item: &MediaItem) -> Result<()> {
        media::set_favorite(&self.pool, item.id, !item.is_favorite).await?;
        self.reload().await?;
        Ok(())
    }

    /// Record that an item was played
    pub async fn media_played(&self, item: &MediaItem) -> Result<()> {
        media::increment_play_count(&self.pool, item.id).await?;
        history::record_play(&self.pool, item.id).await?;
        self.reload().await?;
        Ok(())
    }

    /// Create a playlist
    pub async fn create_playlist(
        &self,
        name: &str,
        artwork_path: Option<&str>,
    ) -> Result<Playlist> {
        let playlist = playlists::create(&self.pool, name, artwork_path).await?;
        self.reload().await?;
        Ok(playlist)
    }

    /// Delete a playlist (membership cascades)
    pub async fn delete_playlist(&self, playlist_id: i64) -> Result<()> {
        playlists::delete(&self.pool, playlist_id).await?;
        self.reload().await?;
        Ok(())
    }

    /// Rename a playlist
    pub async fn rename_playlist(&self, playlist_id: i64, name: &str) -> Result<()> {
        playlists::rename(&self.pool, playlist_id, name).await?;
        self.reload().await?;
        Ok(())
    }

    /// Append a media item to a playlist
    pub async fn add_to_playlist(&self, playlist_id: i64, media_id: i64) -> Result<()> {
        playlists::add_media(&self.pool, playlist_id, media_id).await?;
        self.reload().await?;
        Ok(())
    }

    /// Remove a media item from a playlist
    pub async fn remove_from_playlist(&self, playlist_id: i64, media_id: i64) -> Result<()> {
        playlists::remove_media(&self.pool, playlist_id, media_id).await?;
        self.reload().await?;
        Ok(())
    }
}
