//! Shared contracts for keytone.
//!
//! Defines the editor notifications the host forwards, the eight sound
//! categories with their fixed wire ids, and the `PlaybackSink` trait every
//! playback transport implements.

mod category;
mod editor;
mod sink;

pub use category::SoundCategory;
pub use editor::{ChangeEvent, ContentChange, SelectionEvent};
pub use sink::{
    log_failures, FailureObserver, NullSink, PlaybackFailure, PlaybackSink, PlaybackSinkRef,
    RecordingSink,
};
