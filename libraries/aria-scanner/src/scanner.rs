//! File scanning for media files

use crate::metadata;
use crate::{Result, ScanError};
use aria_core::types::{MediaDraft, MediaKind, UNKNOWN_ALBUM};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported audio file extensions
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "aac", "ogg", "wav", "m4a", "wma", "opus"];

/// Supported video file extensions
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "flv", "webm", "mov", "3gp"];

/// Scanner for media files in directories
pub struct FileScanner {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Maximum depth to traverse (`None` for unlimited)
    max_depth: Option<usize>,
}

impl Default for FileScanner {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
        }
    }
}

impl FileScanner {
    /// Create a new file scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Scan a single directory for media files
    ///
    /// Unreadable subtrees are skipped silently; the traversal is
    /// best-effort and only errors when the root itself is unusable.
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<MediaDraft>> {
        if !path.exists() {
            return Err(ScanError::PathNotFound(path.display().to_string()));
        }

        if !path.is_dir() {
            return Err(ScanError::InvalidPath(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let mut drafts = Vec::new();
        let mut walker = WalkDir::new(path).follow_links(self.follow_links);

        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(draft) = draft_from_path(entry.path()) {
                drafts.push(draft);
            }
        }

        Ok(drafts)
    }

    /// Scan multiple root directories for media files
    ///
    /// Roots that do not exist or cannot be read are skipped with a warning;
    /// the scan never fails wholesale because one root is inaccessible.
    /// No de-duplication happens here: the same path under two roots is
    /// emitted twice.
    pub fn scan_roots(&self, roots: &[PathBuf]) -> Vec<MediaDraft> {
        let mut all_drafts = Vec::new();

        for root in roots {
            if !root.exists() {
                tracing::debug!("skipping missing root {}", root.display());
                continue;
            }

            match self.scan_directory(root) {
                Ok(mut drafts) => all_drafts.append(&mut drafts),
                Err(e) => {
                    tracing::warn!("Failed to scan {}: {}", root.display(), e);
                }
            }
        }

        all_drafts
    }
}

/// Build a draft for a file, or `None` if it is not a recognized media file
pub fn draft_from_path(path: &Path) -> Option<MediaDraft> {
    let extension = media_extension(path)?;
    let kind = classify_extension(&extension)?;

    let (title, artist) = metadata::infer_title_artist(path);

    // Size lookup failures degrade to a zero-length estimate; the file is
    // still catalogued.
    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    Some(MediaDraft {
        title,
        artist,
        album: UNKNOWN_ALBUM.to_string(),
        path: path.display().to_string(),
        kind,
        duration_ms: metadata::estimate_duration_ms(&extension, file_size),
        artwork_path: None,
    })
}

/// Classify a lowercase extension against the two disjoint allow-lists
pub fn classify_extension(extension: &str) -> Option<MediaKind> {
    if AUDIO_EXTENSIONS.contains(&extension) {
        Some(MediaKind::Audio)
    } else if VIDEO_EXTENSIONS.contains(&extension) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Check if a file is a supported audio file
pub fn is_audio_file(path: &Path) -> bool {
    media_extension(path)
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a file is a supported video file
pub fn is_video_file(path: &Path) -> bool {
    media_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Get the lowercase extension from a path
fn media_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_extension() {
        assert_eq!(classify_extension("mp3"), Some(MediaKind::Audio));
        assert_eq!(classify_extension("flac"), Some(MediaKind::Audio));
        assert_eq!(classify_extension("opus"), Some(MediaKind::Audio));
        assert_eq!(classify_extension("mp4"), Some(MediaKind::Video));
        assert_eq!(classify_extension("3gp"), Some(MediaKind::Video));
        assert_eq!(classify_extension("txt"), None);
        assert_eq!(classify_extension(""), None);
    }

    #[test]
    fn test_allow_lists_are_disjoint() {
        for ext in AUDIO_EXTENSIONS {
            assert!(!VIDEO_EXTENSIONS.contains(ext), "{} in both lists", ext);
        }
    }

    #[test]
    fn test_is_audio_file() {
        assert!(is_audio_file(Path::new("test.mp3")));
        assert!(is_audio_file(Path::new("test.MP3")));
        assert!(is_audio_file(Path::new("test.flac")));
        assert!(!is_audio_file(Path::new("test.mp4")));
        assert!(!is_audio_file(Path::new("test.txt")));
        assert!(!is_audio_file(Path::new("test")));
    }

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file(Path::new("movie.mkv")));
        assert!(is_video_file(Path::new("movie.WebM")));
        assert!(!is_video_file(Path::new("movie.mp3")));
    }

    #[test]
    fn test_draft_from_unrecognized_path() {
        assert!(draft_from_path(Path::new("/tmp/readme.txt")).is_none());
        assert!(draft_from_path(Path::new("/tmp/no_extension")).is_none());
    }

    #[test]
    fn test_draft_from_missing_file_still_classified() {
        // Metadata lookup fails, so the size-based estimate is zero, but the
        // file still yields a classified draft.
        let draft = draft_from_path(Path::new("/definitely/missing/Muse - Starlight.mp3")).unwrap();
        assert_eq!(draft.kind, MediaKind::Audio);
        assert_eq!(draft.artist, "Muse");
        assert_eq!(draft.title, "Starlight");
        assert_eq!(draft.duration_ms, 0);
    }
}
