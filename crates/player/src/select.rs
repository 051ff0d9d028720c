//! Choosing the playback transport.

use crate::error::PlayerError;
use crate::volume::Platform;
use std::str::FromStr;

/// Which sink carries sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Companion player over loopback TCP.
    Remote,
    /// OS audio command in this process.
    Local,
}

impl SinkKind {
    /// Windows plays through the companion; everything else plays locally.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => SinkKind::Remote,
            _ => SinkKind::Local,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SinkKind::Remote => "remote",
            SinkKind::Local => "local",
        }
    }
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SinkKind {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "remote" | "companion" => Ok(SinkKind::Remote),
            "local" => Ok(SinkKind::Local),
            other => Err(PlayerError::UnknownSink(other.to_string())),
        }
    }
}
