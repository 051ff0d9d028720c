//! Persisted settings for keytone.
//!
//! A small JSON key-value file holding whether sounds are enabled and the
//! volume for each platform. A missing file means defaults.

use keytone_player::VolumeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no config directory for this user")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Persisted values, keyed by fixed names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub enabled: bool,
    pub mac_volume: u32,
    pub win_volume: u32,
    pub linux_volume: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let volume = VolumeConfig::default();
        Self {
            enabled: true,
            mac_volume: volume.mac_vol,
            win_volume: volume.win_vol,
            linux_volume: volume.linux_vol,
        }
    }
}

impl Settings {
    pub fn volume(&self) -> VolumeConfig {
        VolumeConfig {
            mac_vol: self.mac_volume,
            win_vol: self.win_volume,
            linux_vol: self.linux_volume,
        }
    }

    pub fn set_volume(&mut self, volume: VolumeConfig) {
        self.mac_volume = volume.mac_vol;
        self.win_volume = volume.win_vol;
        self.linux_volume = volume.linux_vol;
    }
}

/// JSON file backing [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/keytone/settings.json`.
    pub fn default_location() -> Result<Self> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dir.join("keytone").join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Settings> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(settings).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;

        std::fs::write(&self.path, json).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.enabled);
        assert_eq!(settings.volume(), VolumeConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));

        let mut settings = Settings::default();
        settings.enabled = false;
        settings.set_volume(VolumeConfig {
            mac_vol: 4,
            win_vol: 60,
            linux_vol: 9,
        });
        store.save(&settings).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_uses_fixed_key_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        for key in ["enabled", "mac_volume", "win_volume", "linux_volume"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"mac_volume": 5}"#).unwrap();

        let settings = SettingsStore::new(&path).load().unwrap();
        assert_eq!(settings.mac_volume, 5);
        assert!(settings.enabled);
        assert_eq!(settings.win_volume, 100);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let result = SettingsStore::new(&path).load();
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }
}
