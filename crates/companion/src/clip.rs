use async_trait::async_trait;
use keytone_player::{LocalPlayer, PlayerError, VolumeConfig};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Plays one clip to completion.
#[async_trait]
pub trait ClipPlayer: Send + Sync {
    async fn play_clip(&self, path: &Path) -> Result<(), PlayerError>;
}

/// Runs the platform's audio command at a fixed volume.
pub struct CommandClipPlayer {
    player: LocalPlayer,
    volume: VolumeConfig,
}

impl CommandClipPlayer {
    pub fn new(player: LocalPlayer, volume: VolumeConfig) -> Self {
        Self { player, volume }
    }
}

#[async_trait]
impl ClipPlayer for CommandClipPlayer {
    async fn play_clip(&self, path: &Path) -> Result<(), PlayerError> {
        self.player.play(path, &self.volume).await
    }
}

/// Records requested clips instead of playing them.
#[derive(Default)]
pub struct RecordingClipPlayer {
    played: Mutex<Vec<PathBuf>>,
}

impl RecordingClipPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<PathBuf> {
        self.played.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipPlayer for RecordingClipPlayer {
    async fn play_clip(&self, path: &Path) -> Result<(), PlayerError> {
        self.played.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
