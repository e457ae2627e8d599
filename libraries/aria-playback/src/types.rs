//! Core types for the playback engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    Off,

    /// Loop the entire queue
    All,

    /// Loop the current item only
    One,
}

impl RepeatMode {
    /// Next mode in the toggle cycle: Off -> All -> One -> Off
    pub fn next(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// "Previous" restarts the current item beyond this elapsed position
    /// (default: 3 seconds)
    pub previous_restart_threshold: Duration,

    /// Skip items the backend fails to load instead of surfacing the error
    /// on automatic advance (default: true)
    pub skip_unplayable: bool,

    /// Initial volume (0.0 - 1.0, default: 1.0)
    pub volume: f32,

    /// Initial playback speed (default: 1.0)
    pub speed: f32,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            previous_restart_threshold: Duration::from_secs(3),
            skip_unplayable: true,
            volume: 1.0,
            speed: 1.0,
            repeat: RepeatMode::Off,
            shuffle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.previous_restart_threshold, Duration::from_secs(3));
        assert!(config.skip_unplayable);
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.repeat, RepeatMode::Off);
        assert!(!config.shuffle);
    }

    #[test]
    fn repeat_mode_cycle() {
        assert_eq!(RepeatMode::Off.next(), RepeatMode::All);
        assert_eq!(RepeatMode::All.next(), RepeatMode::One);
        assert_eq!(RepeatMode::One.next(), RepeatMode::Off);
    }
}
