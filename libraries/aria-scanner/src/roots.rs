//! Media root resolution
//!
//! Platform-conventional media directories plus any mounted secondary
//! volumes. Root resolution never fails: unavailable locations are simply
//! absent from the list.

use std::path::PathBuf;

/// Mount points probed for secondary storage volumes
const VOLUME_MOUNT_POINTS: &[&str] = &["/storage", "/mnt", "/media", "/Volumes"];

/// The set of directories a scan covers
#[derive(Debug, Clone, Default)]
pub struct MediaRoots {
    roots: Vec<PathBuf>,
}

impl MediaRoots {
    /// Detect platform-conventional media directories and mounted volumes
    pub fn detect() -> Self {
        let mut roots = Vec::new();

        if let Some(dir) = dirs::audio_dir() {
            roots.push(dir);
        }
        if let Some(dir) = dirs::video_dir() {
            roots.push(dir);
        }
        if let Some(home) = dirs::home_dir() {
            roots.push(home.join("Music"));
            roots.push(home.join("Movies"));
            roots.push(home.join("Videos"));
        }

        roots.extend(secondary_volumes());

        Self::with_roots(roots)
    }

    /// Use an explicit list of roots
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        let mut deduped: Vec<PathBuf> = Vec::new();
        for root in roots {
            if !deduped.contains(&root) {
                deduped.push(root);
            }
        }
        Self { roots: deduped }
    }

    /// The resolved root directories
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Whether no roots were resolved
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Probe the conventional mount points for secondary storage volumes
fn secondary_volumes() -> Vec<PathBuf> {
    let mut volumes = Vec::new();

    for mount in VOLUME_MOUNT_POINTS {
        let Ok(entries) = std::fs::read_dir(mount) else {
            continue;
        };

        for entry in entries.filter_map(std::result::Result::ok) {
            let path = entry.path();
            if path.is_dir() {
                volumes.push(path);
            }
        }
    }

    volumes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_roots_dedupes() {
        let roots = MediaRoots::with_roots(vec![
            PathBuf::from("/music"),
            PathBuf::from("/videos"),
            PathBuf::from("/music"),
        ]);

        assert_eq!(roots.roots().len(), 2);
    }

    #[test]
    fn test_detect_never_fails() {
        // Whatever the host looks like, detection returns a (possibly empty) set
        let _ = MediaRoots::detect();
    }
}
