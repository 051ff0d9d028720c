//! Companion player for keytone.
//!
//! Listens on loopback, accepts one client and plays the clip whose index
//! the client sends. Used where the editor host can't play audio itself.

mod clip;
mod error;
mod server;

pub use clip::{ClipPlayer, CommandClipPlayer, RecordingClipPlayer};
pub use error::{CompanionError, Result};
pub use server::{bind, parse_request, run, serve_connection, StopReason, MAX_REQUEST_LEN};
