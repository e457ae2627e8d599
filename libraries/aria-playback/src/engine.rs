//! Playback engine - the queue/state machine
//!
//! Owns the transient queue, the bound-item state and the mode toggles, and
//! forwards transport commands to the platform [`MediaBackend`].
//!
//! All mutation goes through `&mut self` from one owning execution context;
//! backend callbacks enter through [`PlayerEngine::handle_event`] on that
//! same context, so a transport command and a completion callback can never
//! interleave into an inconsistent (index, bound item) pair.

use crate::backend::MediaBackend;
use crate::error::{PlaybackError, Result};
use crate::events::{BackendEvent, PlayerEvent};
use crate::traversal::Traversal;
use crate::types::{PlayerConfig, RepeatMode};
use aria_core::types::MediaItem;
use std::time::Duration;

/// Bound-item state
///
/// Explicit Empty/Bound instead of a nullable current item: the index is
/// only present when it is valid for the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    /// No item bound
    Empty,

    /// An item is loaded into the backend
    Bound {
        /// Index of the bound item in the queue
        index: usize,
        /// Playing (true) or paused (false)
        playing: bool,
    },
}

/// Direction of index stepping, for skip-on-failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepDirection {
    Forward,
    Backward,
}

/// The playback engine
pub struct PlayerEngine<B: MediaBackend> {
    backend: B,

    // Queue and traversal order
    queue: Vec<MediaItem>,
    traversal: Traversal,

    // State
    binding: Binding,
    buffering: bool,
    position: Duration,
    duration: Duration,

    // Modes
    repeat: RepeatMode,
    shuffle: bool,

    // Mirrored backend settings
    volume: f32,
    speed: f32,

    // Loop markers (enforcement is the backend's concern)
    loop_start: Option<Duration>,
    loop_end: Option<Duration>,

    config: PlayerConfig,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<B: MediaBackend> PlayerEngine<B> {
    /// Create a new engine over a backend
    pub fn new(backend: B, config: PlayerConfig) -> Self {
        Self {
            backend,
            queue: Vec::new(),
            traversal: Traversal::sequential(),
            binding: Binding::Empty,
            buffering: false,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            repeat: config.repeat,
            shuffle: config.shuffle,
            volume: config.volume.clamp(0.0, 1.0),
            speed: config.speed,
            loop_start: None,
            loop_end: None,
            config,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback control =====

    /// Play an item, optionally within a queue
    ///
    /// Replaces the whole queue with the supplied list (or a singleton of
    /// the item) and binds the item at its position in that list. A backend
    /// load failure is recoverable: the new queue stays loaded, the engine
    /// returns to Empty, and the caller may pick another index.
    pub fn play_item(&mut self, item: MediaItem, queue: Option<Vec<MediaItem>>) -> Result<()> {
        let queue = queue.unwrap_or_else(|| vec![item.clone()]);
        let index = queue.iter().position(|m| m.id == item.id).unwrap_or(0);
        self.load_queue(queue, index)
    }

    /// Play a video item, optionally within a queue
    ///
    /// Same semantics as [`PlayerEngine::play_item`]; videos and songs share
    /// one engine.
    pub fn play_video_item(&mut self, item: MediaItem, queue: Option<Vec<MediaItem>>) -> Result<()> {
        self.play_item(item, queue)
    }

    /// Start or resume playback
    pub fn play(&mut self) -> Result<()> {
        match self.binding {
            Binding::Bound { playing: true, .. } => Ok(()),
            Binding::Bound { index, playing: false } => {
                self.backend.play()?;
                self.binding = Binding::Bound {
                    index,
                    playing: true,
                };
                self.emit_state_changed(true);
                Ok(())
            }
            Binding::Empty => {
                if self.queue.is_empty() {
                    return Err(PlaybackError::QueueEmpty);
                }
                let first = self.traversal.first();
                self.step_and_bind(first, StepDirection::Forward)
            }
        }
    }

    /// Pause playback
    pub fn pause(&mut self) -> Result<()> {
        if let Binding::Bound {
            index,
            playing: true,
        } = self.binding
        {
            self.backend.pause()?;
            self.binding = Binding::Bound {
                index,
                playing: false,
            };
            self.emit_state_changed(false);
        }
        Ok(())
    }

    /// Toggle between playing and paused; no-op when nothing is bound
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        match self.binding {
            Binding::Empty => Ok(()),
            Binding::Bound { playing: true, .. } => self.pause(),
            Binding::Bound { playing: false, .. } => self.play(),
        }
    }

    /// Stop playback and unbind the current item; the queue is retained
    pub fn stop(&mut self) -> Result<()> {
        self.backend.stop()?;
        self.binding = Binding::Empty;
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.clear_loop();
        self.emit_state_changed(false);
        Ok(())
    }

    // ===== Seek =====

    /// Seek to a position in the bound item, clamped to `[0, duration]`
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if self.binding == Binding::Empty {
            return Err(PlaybackError::NoItemBound);
        }

        let target = position.min(self.duration);
        self.backend.seek(target)?;
        self.position = target;
        Ok(())
    }

    /// Seek relative to the current position
    ///
    /// Deltas below zero clamp to the start, beyond the duration to the end.
    pub fn seek_relative(&mut self, delta_ms: i64) -> Result<()> {
        if self.binding == Binding::Empty {
            return Err(PlaybackError::NoItemBound);
        }

        let current_ms = self.position.as_millis() as i64;
        let duration_ms = self.duration.as_millis() as i64;
        let target_ms = (current_ms + delta_ms).clamp(0, duration_ms);

        self.seek(Duration::from_millis(target_ms as u64))
    }

    // ===== Next / previous =====

    /// Skip to the next item in traversal order, with wraparound
    pub fn play_next(&mut self) -> Result<()> {
        let Binding::Bound { index, .. } = self.binding else {
            return self.play();
        };
        if self.queue.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }

        let next = self.traversal.next(index, self.queue.len());
        self.step_and_bind(next, StepDirection::Forward)
    }

    /// Go to the previous item, or restart the current one
    ///
    /// More than 3 seconds into the item (configurable), this seeks to zero
    /// on the current item instead of moving the index.
    pub fn play_previous(&mut self) -> Result<()> {
        let Binding::Bound { index, .. } = self.binding else {
            return self.play();
        };
        if self.queue.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }

        if self.position > self.config.previous_restart_threshold {
            self.backend.seek(Duration::ZERO)?;
            self.position = Duration::ZERO;
            return Ok(());
        }

        let previous = self.traversal.previous(index, self.queue.len());
        self.step_and_bind(previous, StepDirection::Backward)
    }

    /// Jump directly to a queue index
    pub fn play_at_index(&mut self, index: usize) -> Result<()> {
        if index >= self.queue.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        self.bind(index)
    }

    // ===== Queue mutation =====

    /// Replace the queue and start playing at `start_index`
    pub fn set_queue(&mut self, items: Vec<MediaItem>, start_index: usize) -> Result<()> {
        if items.is_empty() {
            return self.clear_queue();
        }
        if start_index >= items.len() {
            return Err(PlaybackError::IndexOutOfBounds(start_index));
        }

        self.load_queue(items, start_index)
    }

    /// Append an item to the queue
    pub fn add_to_queue(&mut self, item: MediaItem) {
        self.queue.push(item);
        self.traversal.push();
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Remove the item at `index` from the queue
    ///
    /// Removing before the bound index shifts the binding down; removing the
    /// bound item itself rebinds the engine's item reference at the clamped
    /// index WITHOUT issuing a transport command.
    pub fn remove_from_queue(&mut self, index: usize) -> Result<MediaItem> {
        if index >= self.queue.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        let removed = self.queue.remove(index);
        self.traversal.remove(index);

        match self.binding {
            Binding::Empty => {}
            Binding::Bound {
                index: current,
                playing,
            } => {
                if index < current {
                    self.binding = Binding::Bound {
                        index: current - 1,
                        playing,
                    };
                } else if index == current {
                    if self.queue.is_empty() {
                        self.backend.stop()?;
                        self.binding = Binding::Empty;
                        self.position = Duration::ZERO;
                        self.duration = Duration::ZERO;
                        self.emit_state_changed(false);
                    } else {
                        // Clamp into bounds and rebind the reference only -
                        // the backend keeps its current transport state
                        let clamped = current.min(self.queue.len() - 1);
                        self.binding = Binding::Bound {
                            index: clamped,
                            playing,
                        };
                        self.duration = self.queue[clamped].duration();
                        self.emit(PlayerEvent::TrackChanged {
                            media_id: self.queue[clamped].id,
                            previous_media_id: Some(removed.id),
                        });
                    }
                }
            }
        }

        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
        Ok(removed)
    }

    /// Clear the queue and reset to Empty
    pub fn clear_queue(&mut self) -> Result<()> {
        self.backend.stop()?;
        self.queue.clear();
        self.traversal = Traversal::sequential();
        self.binding = Binding::Empty;
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.clear_loop();
        self.emit(PlayerEvent::QueueChanged { length: 0 });
        self.emit_state_changed(false);
        Ok(())
    }

    // ===== Modes =====

    /// Cycle the repeat mode: Off -> All -> One -> Off
    pub fn toggle_repeat_mode(&mut self) -> RepeatMode {
        self.repeat = self.repeat.next();
        self.repeat
    }

    /// Flip the shuffle flag
    ///
    /// Turning shuffle on builds a randomized traversal order starting at
    /// the bound item; the queue elements are never reordered. Turning it
    /// off resumes sequential order from the bound index.
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;

        self.traversal = if self.shuffle {
            Traversal::shuffled(self.queue.len(), self.current_index())
        } else {
            Traversal::sequential()
        };

        self.shuffle
    }

    // ===== Volume / speed / loop markers =====

    /// Set output volume, clamped to `[0, 1]`
    pub fn set_volume(&mut self, volume: f32) -> Result<()> {
        let clamped = volume.clamp(0.0, 1.0);
        self.backend.set_volume(clamped)?;
        self.volume = clamped;
        Ok(())
    }

    /// Set playback speed, clamped to `[0.25, 4.0]`
    pub fn set_playback_speed(&mut self, speed: f32) -> Result<()> {
        let clamped = speed.clamp(0.25, 4.0);
        self.backend.set_speed(clamped)?;
        self.speed = clamped;
        Ok(())
    }

    /// Record the current position as the loop start marker
    pub fn mark_loop_start(&mut self) -> Result<Duration> {
        if self.binding == Binding::Empty {
            return Err(PlaybackError::NoItemBound);
        }
        self.loop_start = Some(self.position);
        Ok(self.position)
    }

    /// Record the current position as the loop end marker
    pub fn mark_loop_end(&mut self) -> Result<Duration> {
        if self.binding == Binding::Empty {
            return Err(PlaybackError::NoItemBound);
        }
        self.loop_end = Some(self.position);
        Ok(self.position)
    }

    /// Clear both loop markers
    pub fn clear_loop(&mut self) {
        self.loop_start = None;
        self.loop_end = None;
    }

    /// Current loop markers `(start, end)`
    pub fn loop_markers(&self) -> (Option<Duration>, Option<Duration>) {
        (self.loop_start, self.loop_end)
    }

    // ===== Backend events =====

    /// Apply a backend status report
    ///
    /// Must be called from the same context that issues transport commands.
    pub fn handle_event(&mut self, event: BackendEvent) -> Result<()> {
        match event {
            BackendEvent::Position { position, duration } => {
                self.position = position;
                if duration > Duration::ZERO {
                    self.duration = duration;
                }

                // Track completion: the backend reported a position at or
                // past the end
                if matches!(self.binding, Binding::Bound { playing: true, .. })
                    && self.duration > Duration::ZERO
                    && position >= self.duration
                {
                    self.handle_completion()?;
                }
                Ok(())
            }
            BackendEvent::Buffering(buffering) => {
                if self.buffering != buffering {
                    self.buffering = buffering;
                    self.emit(PlayerEvent::BufferingChanged { buffering });
                }
                Ok(())
            }
            BackendEvent::Completed => self.handle_completion(),
            BackendEvent::Failed(message) => {
                tracing::warn!("backend failure: {}", message);
                self.emit(PlayerEvent::Error { message });

                if let Binding::Bound {
                    index,
                    playing: true,
                } = self.binding
                {
                    if self.config.skip_unplayable && self.queue.len() > 1 {
                        let next = self.traversal.next(index, self.queue.len());
                        if self.step_and_bind(next, StepDirection::Forward).is_ok() {
                            return Ok(());
                        }
                    }
                    self.binding = Binding::Bound {
                        index,
                        playing: false,
                    };
                    self.emit_state_changed(false);
                }
                Ok(())
            }
        }
    }

    // ===== Accessors =====

    /// The bound item, if any
    pub fn current_item(&self) -> Option<&MediaItem> {
        match self.binding {
            Binding::Empty => None,
            Binding::Bound { index, .. } => self.queue.get(index),
        }
    }

    /// The bound index, if any
    pub fn current_index(&self) -> Option<usize> {
        match self.binding {
            Binding::Empty => None,
            Binding::Bound { index, .. } => Some(index),
        }
    }

    /// The queue contents, in queue order
    pub fn queue(&self) -> &[MediaItem] {
        &self.queue
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the engine is playing
    pub fn is_playing(&self) -> bool {
        matches!(self.binding, Binding::Bound { playing: true, .. })
    }

    /// Whether the backend reported buffering
    pub fn is_buffering(&self) -> bool {
        self.buffering
    }

    /// Last reported position in the bound item
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Duration of the bound item as currently known
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether shuffle is on
    pub fn is_shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    /// Mirrored volume
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Mirrored playback speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Drain the pending UI events
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    /// Replace the queue wholesale and bind `index`
    ///
    /// A backend load failure is recoverable: the new queue stays loaded,
    /// the engine returns to Empty, and the caller may pick another index.
    fn load_queue(&mut self, items: Vec<MediaItem>, index: usize) -> Result<()> {
        self.queue = items;
        self.traversal = if self.shuffle {
            Traversal::shuffled(self.queue.len(), Some(index))
        } else {
            Traversal::sequential()
        };
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });

        if let Err(e) = self.bind(index) {
            self.binding = Binding::Empty;
            self.emit(PlayerEvent::Error {
                message: e.to_string(),
            });
            return Err(e);
        }

        Ok(())
    }

    /// Bind the item at `index` and start playback
    ///
    /// On load failure nothing is mutated; the previous binding (still valid
    /// for the unchanged queue) survives and the error surfaces.
    fn bind(&mut self, index: usize) -> Result<()> {
        let item = self.queue[index].clone();

        self.backend.load(&item)?;
        self.backend.play()?;

        let previous_media_id = self.current_item().map(|m| m.id);
        self.binding = Binding::Bound {
            index,
            playing: true,
        };
        self.position = Duration::ZERO;
        self.duration = item.duration();
        self.clear_loop();

        self.emit(PlayerEvent::TrackChanged {
            media_id: item.id,
            previous_media_id,
        });
        self.emit_state_changed(true);
        Ok(())
    }

    /// Bind `index`, stepping over unplayable items when configured
    ///
    /// At most one full pass over the queue; if nothing is playable the
    /// engine degrades to paused and the last error surfaces.
    fn step_and_bind(&mut self, start: usize, direction: StepDirection) -> Result<()> {
        let len = self.queue.len();
        let mut index = start;

        for attempt in 0..len {
            match self.bind(index) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    self.emit(PlayerEvent::Error {
                        message: e.to_string(),
                    });

                    if !self.config.skip_unplayable || attempt + 1 == len {
                        return Err(e);
                    }

                    index = match direction {
                        StepDirection::Forward => self.traversal.next(index, len),
                        StepDirection::Backward => self.traversal.previous(index, len),
                    };
                }
            }
        }

        Err(PlaybackError::QueueEmpty)
    }

    /// Auto-advance policy on track completion
    fn handle_completion(&mut self) -> Result<()> {
        let Binding::Bound { index, .. } = self.binding else {
            return Ok(());
        };

        self.emit(PlayerEvent::Completed {
            media_id: self.queue[index].id,
        });

        if self.repeat == RepeatMode::One {
            // Replay the same item
            self.backend.seek(Duration::ZERO)?;
            self.backend.play()?;
            self.position = Duration::ZERO;
            return Ok(());
        }

        let is_last = self.traversal.is_last(index, self.queue.len());
        if self.repeat == RepeatMode::All || !is_last {
            let next = self.traversal.next(index, self.queue.len());
            if let Err(e) = self.step_and_bind(next, StepDirection::Forward) {
                // Nothing playable: degrade to paused rather than stall
                self.binding = Binding::Bound {
                    index,
                    playing: false,
                };
                self.emit_state_changed(false);
                tracing::warn!("auto-advance found no playable item: {}", e);
            }
        } else {
            // Repeat off at the last item: stay bound, stop advancing
            self.backend.pause()?;
            self.binding = Binding::Bound {
                index,
                playing: false,
            };
            self.emit_state_changed(false);
        }

        Ok(())
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_state_changed(&mut self, playing: bool) {
        self.emit(PlayerEvent::StateChanged { playing });
    }
}
