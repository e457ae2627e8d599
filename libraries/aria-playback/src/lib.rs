//! Aria Player - Playback Engine
//!
//! Platform-agnostic playback management for Aria Player.
//!
//! This crate provides:
//! - Transient playback queue with a bound-item state machine
//! - Repeat modes (Off, All, One) and a shuffled traversal order
//! - Modular next/previous navigation with wraparound
//! - Auto-advance on track completion
//! - Seek clamping, volume/speed mirroring, loop markers
//!
//! # Architecture
//!
//! `aria-playback` is completely platform-agnostic:
//! - No dependency on the catalog: items arrive as caller-supplied lists
//! - The rendering backend is a trait ([`MediaBackend`]); its position and
//!   status callbacks enter the engine as [`BackendEvent`] messages
//! - All engine mutation happens through `&mut self` from a single owning
//!   execution context, which serializes transport commands against
//!   completion callbacks
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_playback::{BackendEvent, MediaBackend, PlayerConfig, PlayerEngine, Result};
//! use aria_core::types::MediaItem;
//! use std::time::Duration;
//!
//! struct MyBackend { /* platform player handle */ }
//!
//! impl MediaBackend for MyBackend {
//!     fn load(&mut self, _item: &MediaItem) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn stop(&mut self) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _volume: f32) -> Result<()> { Ok(()) }
//!     fn set_speed(&mut self, _speed: f32) -> Result<()> { Ok(()) }
//! }
//!
//! let mut engine = PlayerEngine::new(MyBackend {}, PlayerConfig::default());
//!
//! // Feed backend position callbacks from the owning context:
//! engine.handle_event(BackendEvent::Position {
//!     position: Duration::from_secs(10),
//!     duration: Duration::from_secs(180),
//! }).ok();
//! ```

mod backend;
mod engine;
mod error;
mod events;
mod traversal;
pub mod types;

// Public exports
pub use backend::MediaBackend;
pub use engine::PlayerEngine;
pub use error::{PlaybackError, Result};
pub use events::{BackendEvent, PlayerEvent};
pub use types::{PlayerConfig, RepeatMode};
