use anyhow::{Context, Result};
use clap::Parser;
use keytone::launch::connect_sink;
use keytone::Host;
use keytone_classifier::SoundDispatcher;
use keytone_player::{companion_addr, Platform, SinkKind, SoundLibrary};
use keytone_settings::SettingsStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Plays game-style sounds for editor events read from stdin.
#[derive(Debug, Parser)]
#[command(name = "keytone", version, about)]
struct Args {
    /// Directory containing the clips. Defaults to `audio/` next to the executable.
    #[arg(long)]
    sounds_dir: Option<PathBuf>,

    /// Playback transport (`local` or `remote`). Defaults by platform.
    #[arg(long)]
    sink: Option<SinkKind>,

    /// Companion address for the remote sink.
    #[arg(long, default_value_t = companion_addr())]
    companion_addr: SocketAddr,

    /// Companion executable to spawn before connecting.
    #[arg(long)]
    companion: Option<PathBuf>,

    /// Settings file. Defaults to the user config directory.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn default_sounds_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate executable")?;
    let dir = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(dir.join("audio"))
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

    tracing::info!("Starting keytone");

    let args = Args::parse();
    let platform = Platform::current();

    let store = match args.settings {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::default_location()?,
    };
    let settings = store.load().context("failed to load settings")?;

    let sounds_dir = match args.sounds_dir {
        Some(dir) => dir,
        None => default_sounds_dir()?,
    };
    let library = SoundLibrary::new(sounds_dir);

    let kind = args.sink.unwrap_or_else(|| SinkKind::for_platform(platform));
    tracing::info!(%kind, %platform, enabled = settings.enabled, "Selecting sink");

    let playback = connect_sink(
        kind,
        &library,
        settings.volume(),
        args.companion_addr,
        args.companion.as_deref(),
    )
    .await?;

    let dispatcher = SoundDispatcher::new(playback.sink.clone());
    let mut host = Host::new(dispatcher, settings)
        .with_store(store)
        .with_platform(platform);

    host.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("event stream failed")?;

    drop(host);
    drop(playback);
    tracing::info!("keytone stopped");
    Ok(())
}
