//! Playback sinks for keytone.
//!
//! Two interchangeable [`PlaybackSink`](keytone_events::PlaybackSink)
//! implementations:
//!
//! - [`RemoteSink`]: forwards wire ids to the companion player over a
//!   persistent loopback connection.
//! - [`LocalSink`]: runs the platform's command-line player directly.
//!
//! Both dispatch without blocking the caller and report failures through a
//! [`FailureObserver`](keytone_events::FailureObserver).

mod backend;
mod error;
mod library;
mod local;
mod remote;
mod select;
mod volume;

pub use backend::Backend;
pub use error::{PlayerError, Result};
pub use library::SoundLibrary;
pub use local::{LocalPlayer, LocalSink};
pub use remote::{
    companion_addr, RemoteSink, COMPANION_PORT, COMPANION_STARTUP_DELAY, DEFAULT_QUEUE_CAPACITY,
};
pub use select::SinkKind;
pub use volume::{Platform, VolumeConfig, VolumeStep};
