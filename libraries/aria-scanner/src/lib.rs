//! Aria Player Scanner
//!
//! Filesystem discovery for Aria Player: walks configured media roots,
//! classifies files by extension, infers title/artist from file names and
//! estimates durations from file sizes.
//!
//! The scanner emits unpersisted [`aria_core::MediaDraft`] records; it never
//! touches the catalog and never de-duplicates (path uniqueness at the
//! catalog handles that implicitly).
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_scanner::{FileScanner, MediaRoots};
//!
//! let roots = MediaRoots::detect();
//! let drafts = FileScanner::new().scan_roots(roots.roots());
//! for draft in &drafts {
//!     println!("{} - {}", draft.artist, draft.title);
//! }
//! ```

mod error;
pub mod metadata;
mod roots;
mod scanner;

pub use error::{Result, ScanError};
pub use roots::MediaRoots;
pub use scanner::{classify_extension, draft_from_path, is_audio_file, is_video_file, FileScanner};
