//! Per-platform volume settings.
//!
//! Each platform's player uses its own units, so the three volumes are
//! stored side by side and only the current platform's one is stepped.

use serde::{Deserialize, Serialize};

/// Operating system family, as far as playback is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Other => "other",
        }
    }

    /// `(step, min, max)` for volume commands, if the platform has a volume.
    pub fn volume_range(&self) -> Option<(u32, u32, u32)> {
        match self {
            Platform::MacOs => Some((1, 1, 10)),
            Platform::Windows => Some((10, 10, 100)),
            Platform::Linux => Some((1, 1, 10)),
            Platform::Other => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Volume for every platform's player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeConfig {
    /// `afplay -v` scalar, 1..=10.
    pub mac_vol: u32,
    /// 10..=100. The Windows player has no volume control yet.
    pub win_vol: u32,
    /// `mplayer -af volume=` value, 1..=10.
    pub linux_vol: u32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            mac_vol: 1,
            win_vol: 100,
            linux_vol: 1,
        }
    }
}

/// Result of a volume step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeStep {
    /// Volume after the step. 0 on platforms without a volume.
    pub volume: u32,
    /// The step hit a bound and was clamped.
    pub clamped: bool,
}

impl VolumeConfig {
    /// Volume used by `platform`'s player. 0 if it has none.
    pub fn for_platform(&self, platform: Platform) -> u32 {
        match platform {
            Platform::MacOs => self.mac_vol,
            Platform::Windows => self.win_vol,
            Platform::Linux => self.linux_vol,
            Platform::Other => 0,
        }
    }

    /// Overwrite `platform`'s volume without clamping.
    pub fn set_for_platform(&mut self, platform: Platform, volume: u32) {
        match platform {
            Platform::MacOs => self.mac_vol = volume,
            Platform::Windows => self.win_vol = volume,
            Platform::Linux => self.linux_vol = volume,
            Platform::Other => {}
        }
    }

    pub fn raise(&mut self, platform: Platform) -> VolumeStep {
        self.step(platform, true)
    }

    pub fn lower(&mut self, platform: Platform) -> VolumeStep {
        self.step(platform, false)
    }

    fn step(&mut self, platform: Platform, up: bool) -> VolumeStep {
        let Some((step, min, max)) = platform.volume_range() else {
            return VolumeStep {
                volume: 0,
                clamped: false,
            };
        };

        let current = self.for_platform(platform);
        let (target, clamped) = if up {
            let next = current.saturating_add(step);
            (next.min(max), next > max)
        } else {
            let next = current.saturating_sub(step);
            (next.max(min), next < min)
        };

        self.set_for_platform(platform, target);
        VolumeStep {
            volume: target,
            clamped,
        }
    }
}
