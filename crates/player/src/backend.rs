//! OS audio commands.

use crate::error::{PlayerError, Result};
use crate::volume::{Platform, VolumeConfig};
use std::ffi::OsString;
use std::path::Path;

/// A command-line audio player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// macOS afplay.
    Afplay,
    /// MPlayer.
    MPlayer,
    /// mpg123 player.
    Mpg123,
    /// mpg321 player.
    Mpg321,
    /// SoX play.
    SoxPlay,
    /// ALSA aplay.
    Aplay,
    /// PulseAudio paplay.
    Paplay,
    /// VLC without an interface.
    Cvlc,
    /// PowerShell driving `System.Media.SoundPlayer`.
    PowerShell,
}

/// Unix players in preference order.
const UNIX_CANDIDATES: [Backend; 7] = [
    Backend::MPlayer,
    Backend::Mpg123,
    Backend::Mpg321,
    Backend::SoxPlay,
    Backend::Aplay,
    Backend::Paplay,
    Backend::Cvlc,
];

impl Backend {
    pub const fn binary_name(self) -> &'static str {
        match self {
            Backend::Afplay => "afplay",
            Backend::MPlayer => "mplayer",
            Backend::Mpg123 => "mpg123",
            Backend::Mpg321 => "mpg321",
            Backend::SoxPlay => "play",
            Backend::Aplay => "aplay",
            Backend::Paplay => "paplay",
            Backend::Cvlc => "cvlc",
            Backend::PowerShell => "powershell",
        }
    }

    /// Candidates for `platform`, best first.
    pub fn candidates(platform: Platform) -> &'static [Backend] {
        match platform {
            Platform::MacOs => &[Backend::Afplay],
            Platform::Windows => &[Backend::PowerShell],
            Platform::Linux | Platform::Other => &UNIX_CANDIDATES,
        }
    }

    /// First candidate for `platform` found on `PATH`.
    pub fn detect(platform: Platform) -> Result<Backend> {
        Self::candidates(platform)
            .iter()
            .copied()
            .find(|b| which::which(b.binary_name()).is_ok())
            .ok_or(PlayerError::NoBackend(platform.label()))
    }

    /// Arguments to play `path` at `volume`. Only afplay and mplayer take a volume.
    pub fn args(self, path: &Path, volume: &VolumeConfig) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        match self {
            Backend::Afplay => {
                args.push("-v".into());
                args.push(volume.mac_vol.to_string().into());
            }
            Backend::MPlayer => {
                args.push("-af".into());
                args.push(format!("volume={}", volume.linux_vol).into());
            }
            Backend::Mpg123 | Backend::Mpg321 | Backend::SoxPlay | Backend::Aplay => {
                args.push("-q".into());
            }
            Backend::Cvlc => {
                args.push("--play-and-exit".into());
            }
            Backend::Paplay => {}
            Backend::PowerShell => {
                let quoted = path.to_string_lossy().replace('\'', "''");
                args.push("-NoProfile".into());
                args.push("-NonInteractive".into());
                args.push("-Command".into());
                args.push(format!("(New-Object Media.SoundPlayer '{quoted}').PlaySync();").into());
                return args;
            }
        }
        args.push(path.as_os_str().to_owned());
        args
    }
}
