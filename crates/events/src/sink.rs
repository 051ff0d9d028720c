//! Playback sink abstraction.
//!
//! Decouples classification from how a sound is actually produced, so the
//! dispatcher can drive the companion socket, a local player, or an
//! in-memory recorder in tests.

use crate::SoundCategory;
use std::sync::{Arc, Mutex};

/// Anything that can turn a category into an audible sound.
///
/// Implementations must not block: `play` is called from the editor's
/// event handler. Failures are reported through a [`FailureObserver`],
/// never returned.
pub trait PlaybackSink: Send + Sync {
    /// Request playback of the clip for `category`.
    fn play(&self, category: SoundCategory);

    /// Volume changed. Sinks that don't control volume ignore this.
    fn set_volume(&self, _volume: u32) {}
}

/// Type alias for shared sink reference.
pub type PlaybackSinkRef = Arc<dyn PlaybackSink>;

/// A playback request that did not produce a sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackFailure {
    pub category: SoundCategory,
    pub reason: String,
}

/// Hook invoked when a fire-and-forget playback fails.
pub type FailureObserver = Arc<dyn Fn(PlaybackFailure) + Send + Sync + 'static>;

/// Observer that only logs.
pub fn log_failures() -> FailureObserver {
    Arc::new(|failure: PlaybackFailure| {
        tracing::warn!(
            category = %failure.category,
            reason = %failure.reason,
            "Playback failed"
        );
    })
}

/// In-memory sink for testing.
///
/// Captures every requested category in order.
#[derive(Default)]
pub struct RecordingSink {
    played: Mutex<Vec<SoundCategory>>,
    volumes: Mutex<Vec<u32>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All categories played so far.
    pub fn played(&self) -> Vec<SoundCategory> {
        self.played.lock().unwrap().clone()
    }

    /// Volumes pushed through `set_volume`.
    pub fn volumes(&self) -> Vec<u32> {
        self.volumes.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.played.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.played.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.played.lock().unwrap().is_empty()
    }
}

impl PlaybackSink for RecordingSink {
    fn play(&self, category: SoundCategory) {
        self.played.lock().unwrap().push(category);
    }

    fn set_volume(&self, volume: u32) {
        self.volumes.lock().unwrap().push(volume);
    }
}

/// Sink that discards all requests.
pub struct NullSink;

impl PlaybackSink for NullSink {
    fn play(&self, _category: SoundCategory) {}
}
