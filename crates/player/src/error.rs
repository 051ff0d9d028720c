//! Error types for playback.

use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur while producing a sound.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// No supported audio command was found on this system.
    #[error("no audio player available on {0}")]
    NoBackend(&'static str),

    /// The audio command could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The audio command ran but reported an error.
    #[error("{program} exited with {status}: {stderr}")]
    Exited {
        program: &'static str,
        status: String,
        stderr: String,
    },

    /// Could not reach the companion player.
    #[error("failed to connect to companion at {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Sink needs a tokio runtime to dispatch work.
    #[error("no tokio runtime available for playback")]
    NoRuntime,

    #[error("unknown sink kind: {0}")]
    UnknownSink(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
