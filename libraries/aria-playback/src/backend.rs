//! Media backend trait
//!
//! The rendering backend is an external collaborator: it exposes transport
//! primitives and reports progress through [`crate::BackendEvent`] messages
//! that the owning context feeds into the engine.

use crate::error::Result;
use aria_core::types::MediaItem;
use std::time::Duration;

/// Platform audio/video backend
///
/// Implementations bind one item at a time. `load` replaces any previously
/// bound item; a load still in flight is superseded by the next call.
pub trait MediaBackend: Send {
    /// Bind an item for playback
    fn load(&mut self, item: &MediaItem) -> Result<()>;

    /// Start or resume playback of the bound item
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Stop playback and release the bound item
    fn stop(&mut self) -> Result<()>;

    /// Seek within the bound item
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set output volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32) -> Result<()>;

    /// Set playback speed (1.0 = normal)
    fn set_speed(&mut self, speed: f32) -> Result<()>;
}
