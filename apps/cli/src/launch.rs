//! Building the playback sink at startup.

use anyhow::{Context, Result};
use keytone_events::PlaybackSinkRef;
use keytone_player::{
    LocalPlayer, LocalSink, RemoteSink, SinkKind, SoundLibrary, VolumeConfig,
    COMPANION_STARTUP_DELAY,
};
use std::net::SocketAddr;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Child;

/// Start the companion player. The child dies with the returned handle.
pub fn spawn_companion(program: &Path, sounds_dir: &Path, addr: SocketAddr) -> Result<Child> {
    let child = tokio::process::Command::new(program)
        .arg("--sounds-dir")
        .arg(sounds_dir)
        .arg("--addr")
        .arg(addr.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to start companion {}", program.display()))?;
    tracing::info!(program = %program.display(), pid = ?child.id(), "Spawned companion");
    Ok(child)
}

/// Everything that must outlive the dispatcher.
pub struct Playback {
    pub sink: PlaybackSinkRef,
    pub companion: Option<Child>,
}

/// Build the sink for `kind`, spawning the companion first if asked to.
pub async fn connect_sink(
    kind: SinkKind,
    library: &SoundLibrary,
    volume: VolumeConfig,
    companion_addr: SocketAddr,
    companion_program: Option<&Path>,
) -> Result<Playback> {
    match kind {
        SinkKind::Remote => {
            let companion = match companion_program {
                Some(program) => {
                    let child = spawn_companion(program, library.dir(), companion_addr)?;
                    tokio::time::sleep(COMPANION_STARTUP_DELAY).await;
                    Some(child)
                }
                None => None,
            };

            let sink = RemoteSink::connect(companion_addr).await?;
            Ok(Playback {
                sink: Arc::new(sink),
                companion,
            })
        }
        SinkKind::Local => {
            let player = LocalPlayer::detect()?;
            tracing::info!(backend = player.backend().binary_name(), "Using local audio backend");
            let sink = LocalSink::new(player, library.clone(), volume)?;
            Ok(Playback {
                sink: Arc::new(sink),
                companion: None,
            })
        }
    }
}
