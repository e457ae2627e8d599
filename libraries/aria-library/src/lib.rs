//! Aria Player Library Service
//!
//! Orchestrates scanner -> catalog writes and exposes the single
//! externally-facing query/command surface.
//!
//! # Architecture
//!
//! - **Single-flight scanning**: at most one scan runs at a time; a second
//!   request is a no-op that returns immediately
//! - **Full reload on every mutation**: there is no incremental view update
//!   path; every command recomputes all derived views
//! - **Pull-based change notification**: a monotonically-increasing version
//!   counter replaces observer callbacks; callers poll it and re-read the
//!   views snapshot when it moves
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_library::LibraryService;
//! use aria_scanner::{FileScanner, MediaRoots};
//! use aria_core::StaticPermission;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = LibraryService::open(
//!     "sqlite://aria.db",
//!     FileScanner::new(),
//!     MediaRoots::detect(),
//!     StaticPermission(true),
//! )
//! .await?;
//!
//! let outcome = service.scan().await?;
//! println!("{}", outcome.summary());
//!
//! let views = service.views().await;
//! println!("{} songs, {} videos", views.songs.len(), views.videos.len());
//! # Ok(())
//! # }
//! ```

mod service;
mod views;

pub use service::{LibraryService, ScanOutcome};
pub use views::LibraryViews;
