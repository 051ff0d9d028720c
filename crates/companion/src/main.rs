use anyhow::{Context, Result};
use clap::Parser;
use keytone_companion::{bind, run, CommandClipPlayer};
use keytone_player::{companion_addr, LocalPlayer, SoundLibrary, VolumeConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Plays keytone clips requested over a loopback socket.
#[derive(Debug, Parser)]
#[command(name = "keytone-companion", version, about)]
struct Args {
    /// Directory containing the clips. Defaults to the executable's directory.
    #[arg(long)]
    sounds_dir: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, default_value_t = companion_addr())]
    addr: SocketAddr,
}

fn default_sounds_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate executable")?;
    Ok(exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".")))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,keytone=debug")),
        )
        .init();

    let args = Args::parse();
    let sounds_dir = match args.sounds_dir {
        Some(dir) => dir,
        None => default_sounds_dir()?,
    };

    let library = SoundLibrary::new(sounds_dir);
    for missing in library.missing() {
        tracing::warn!(clip = %missing.display(), "Clip not found");
    }

    let player = LocalPlayer::detect().context("no audio player found")?;
    tracing::info!(backend = player.backend().binary_name(), "Using audio backend");
    let player = Arc::new(CommandClipPlayer::new(player, VolumeConfig::default()));

    let listener = bind(args.addr).await?;
    tracing::info!(addr = %args.addr, dir = %library.dir().display(), "Companion listening");

    let reason = run(listener, &library, player).await?;
    tracing::info!(%reason, "Companion exiting");
    Ok(())
}
