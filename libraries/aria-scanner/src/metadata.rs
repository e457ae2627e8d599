//! Filename-based metadata inference
//!
//! No container metadata is read. Title and artist come from the filename,
//! the duration from the file size and a per-format bitrate table. Both are
//! documented approximations.

use aria_core::types::UNKNOWN_ARTIST;
use std::path::Path;

/// Delimiter between artist and title in conventional file names
const ARTIST_TITLE_DELIMITER: &str = " - ";

/// Assumed bytes-per-second per extension, for duration estimation
///
/// Lossless formats are assigned a much higher assumed rate than lossy ones;
/// video rates are rough container averages.
const ASSUMED_BYTES_PER_SECOND: &[(&str, u64)] = &[
    // Audio, lossless
    ("flac", 100_000),
    ("wav", 176_400),
    // Audio, lossy
    ("mp3", 40_000),
    ("aac", 32_000),
    ("ogg", 32_000),
    ("m4a", 32_000),
    ("wma", 32_000),
    ("opus", 24_000),
    // Video
    ("mp4", 375_000),
    ("mkv", 500_000),
    ("avi", 375_000),
    ("flv", 125_000),
    ("webm", 375_000),
    ("mov", 500_000),
    ("3gp", 62_500),
];

/// Fallback rate when the extension has no table entry
const FALLBACK_BYTES_PER_SECOND: u64 = 40_000;

/// Infer `(title, artist)` from a file name
///
/// The extension is stripped; if the stem contains `" - "`, the part before
/// the first occurrence becomes the artist and the remainder the title.
/// Otherwise the whole stem is the title and the artist defaults to
/// "Unknown Artist".
pub fn infer_title_artist(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown");

    match stem.split_once(ARTIST_TITLE_DELIMITER) {
        Some((artist, title)) => (title.to_string(), artist.to_string()),
        None => (stem.to_string(), UNKNOWN_ARTIST.to_string()),
    }
}

/// Estimate a duration in milliseconds from the file size
///
/// `file_size_bytes / assumed_bytes_per_second`, scaled to milliseconds.
/// Always succeeds: unrecognized extensions use the fallback rate.
pub fn estimate_duration_ms(extension: &str, file_size_bytes: u64) -> i64 {
    let rate = ASSUMED_BYTES_PER_SECOND
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map_or(FALLBACK_BYTES_PER_SECOND, |(_, rate)| *rate);

    (file_size_bytes.saturating_mul(1000) / rate) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_with_delimiter() {
        let (title, artist) = infer_title_artist(Path::new("/music/Muse - Starlight.mp3"));
        assert_eq!(artist, "Muse");
        assert_eq!(title, "Starlight");
    }

    #[test]
    fn test_infer_splits_on_first_delimiter_only() {
        let (title, artist) = infer_title_artist(Path::new("AC - DC - Thunderstruck.flac"));
        assert_eq!(artist, "AC");
        assert_eq!(title, "DC - Thunderstruck");
    }

    #[test]
    fn test_infer_without_delimiter() {
        let (title, artist) = infer_title_artist(Path::new("/music/Starlight.mp3"));
        assert_eq!(title, "Starlight");
        assert_eq!(artist, "Unknown Artist");
    }

    #[test]
    fn test_infer_hyphen_without_spaces_not_split() {
        let (title, artist) = infer_title_artist(Path::new("twenty-one.mp3"));
        assert_eq!(title, "twenty-one");
        assert_eq!(artist, "Unknown Artist");
    }

    #[test]
    fn test_estimate_scales_with_size() {
        let small = estimate_duration_ms("mp3", 400_000);
        let large = estimate_duration_ms("mp3", 4_000_000);
        assert_eq!(small, 10_000);
        assert_eq!(large, 100_000);
    }

    #[test]
    fn test_lossless_assumed_shorter_than_lossy_for_same_size() {
        let size = 10_000_000;
        let flac = estimate_duration_ms("flac", size);
        let mp3 = estimate_duration_ms("mp3", size);
        assert!(flac < mp3);
    }

    #[test]
    fn test_unknown_extension_uses_fallback() {
        assert_eq!(estimate_duration_ms("xyz", 40_000), 1000);
    }
}
