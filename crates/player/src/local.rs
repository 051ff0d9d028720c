//! In-process playback through an OS audio command.

use crate::backend::Backend;
use crate::error::{PlayerError, Result};
use crate::library::SoundLibrary;
use crate::volume::{Platform, VolumeConfig};
use keytone_events::{log_failures, FailureObserver, PlaybackFailure, PlaybackSink, SoundCategory};
use std::path::Path;
use std::process::Stdio;
use std::sync::Mutex;
use tokio::runtime::Handle;

/// Plays a file with a detected command-line player.
#[derive(Debug, Clone, Copy)]
pub struct LocalPlayer {
    backend: Backend,
}

impl LocalPlayer {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Pick the best player available on this machine.
    pub fn detect() -> Result<Self> {
        Backend::detect(Platform::current()).map(Self::new)
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Play `path` and wait for the player to exit.
    ///
    /// Resolves to an error if the player can't start or exits non-zero.
    pub async fn play(&self, path: &Path, volume: &VolumeConfig) -> Result<()> {
        let program = self.backend.binary_name();
        let output = tokio::process::Command::new(program)
            .args(self.backend.args(path, volume))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| PlayerError::Spawn { program, source })?;

        if !output.status.success() {
            return Err(PlayerError::Exited {
                program,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Sink that spawns a player per request and never waits for it.
pub struct LocalSink {
    player: LocalPlayer,
    library: SoundLibrary,
    platform: Platform,
    volume: Mutex<VolumeConfig>,
    runtime: Handle,
    on_failure: FailureObserver,
}

impl LocalSink {
    /// Must be called from within a tokio runtime.
    pub fn new(player: LocalPlayer, library: SoundLibrary, volume: VolumeConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| PlayerError::NoRuntime)?;
        Ok(Self {
            player,
            library,
            platform: Platform::current(),
            volume: Mutex::new(volume),
            runtime,
            on_failure: log_failures(),
        })
    }

    pub fn with_failure_observer(mut self, observer: FailureObserver) -> Self {
        self.on_failure = observer;
        self
    }

    /// Override which platform's volume slot is used.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn volume(&self) -> VolumeConfig {
        *self.volume.lock().unwrap()
    }
}

impl PlaybackSink for LocalSink {
    fn play(&self, category: SoundCategory) {
        let path = self.library.clip(category);
        let volume = self.volume();
        let player = self.player;
        let on_failure = self.on_failure.clone();

        self.runtime.spawn(async move {
            if let Err(e) = player.play(&path, &volume).await {
                on_failure(PlaybackFailure {
                    category,
                    reason: e.to_string(),
                });
            }
        });
    }

    fn set_volume(&self, volume: u32) {
        self.volume
            .lock()
            .unwrap()
            .set_for_platform(self.platform, volume);
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_missing_file_is_rejected() {
        // Either paplay is not installed or it rejects the missing file.
        let player = LocalPlayer::new(Backend::Paplay);
        let result = player
            .play(Path::new("/nonexistent/keytone/key.wav"), &VolumeConfig::default())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_failures_reach_observer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let observer: FailureObserver = Arc::new(move |failure: PlaybackFailure| {
            let _ = tx.send(failure);
        });

        let sink = LocalSink::new(
            LocalPlayer::new(Backend::Paplay),
            SoundLibrary::new("/nonexistent/keytone"),
            VolumeConfig::default(),
        )
        .unwrap()
        .with_failure_observer(observer);

        sink.play(SoundCategory::Enter);

        let failure = rx.recv().await.unwrap();
        assert_eq!(failure.category, SoundCategory::Enter);
        assert!(!failure.reason.is_empty());
    }

    #[tokio::test]
    async fn test_set_volume_updates_platform_slot() {
        let sink = LocalSink::new(
            LocalPlayer::new(Backend::MPlayer),
            SoundLibrary::new("/nonexistent/keytone"),
            VolumeConfig::default(),
        )
        .unwrap()
        .with_platform(Platform::Linux);

        sink.set_volume(6);
        assert_eq!(sink.volume().linux_vol, 6);
        assert_eq!(sink.volume().mac_vol, 1);
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let result = LocalSink::new(
            LocalPlayer::new(Backend::Aplay),
            SoundLibrary::new("/tmp"),
            VolumeConfig::default(),
        );
        assert!(matches!(result, Err(PlayerError::NoRuntime)));
    }
}
