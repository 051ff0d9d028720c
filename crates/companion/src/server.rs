//! Companion serving loop.
//!
//! Accepts a single client and starts one clip per request until the client
//! goes away or sends something it can't handle. Clips play on their own
//! tasks so the next read is never held up by playback. Nothing is written
//! back.

use crate::clip::ClipPlayer;
use crate::error::{CompanionError, Result};
use keytone_events::SoundCategory;
use keytone_player::SoundLibrary;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Bytes read per request. Wire ids are one ASCII digit.
pub const MAX_REQUEST_LEN: usize = 2;

/// Why the serving loop ended.
#[derive(Debug)]
pub enum StopReason {
    /// The client closed the connection.
    PeerClosed,
    /// Payload was not a decimal integer.
    Malformed(String),
    /// Integer did not name a clip.
    OutOfRange(usize),
    /// Reading from the socket failed.
    ReadFailed(std::io::Error),
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::PeerClosed => write!(f, "client closed the connection"),
            StopReason::Malformed(payload) => write!(f, "malformed request {payload:?}"),
            StopReason::OutOfRange(index) => write!(f, "no clip at index {index}"),
            StopReason::ReadFailed(e) => write!(f, "read failed: {e}"),
        }
    }
}

/// Decode one request into a category.
pub fn parse_request(bytes: &[u8]) -> std::result::Result<SoundCategory, StopReason> {
    let text = String::from_utf8_lossy(bytes);
    let index: usize = text
        .trim()
        .parse()
        .map_err(|_| StopReason::Malformed(text.to_string()))?;
    SoundCategory::from_wire_id(index).ok_or(StopReason::OutOfRange(index))
}

/// Serve requests from `stream` until the loop ends.
///
/// Each clip is spawned and never awaited. Playback failures are logged and
/// do not end the loop.
pub async fn serve_connection<S, P>(
    stream: &mut S,
    library: &SoundLibrary,
    player: Arc<P>,
) -> StopReason
where
    S: AsyncRead + Unpin,
    P: ClipPlayer + ?Sized + 'static,
{
    let mut buf = [0u8; MAX_REQUEST_LEN];
    loop {
        let n = match stream.read(&mut buf).await {
            Ok(0) => return StopReason::PeerClosed,
            Ok(n) => n,
            Err(e) => return StopReason::ReadFailed(e),
        };

        let category = match parse_request(&buf[..n]) {
            Ok(category) => category,
            Err(reason) => return reason,
        };

        let clip = library.clip(category);
        tracing::debug!(%category, clip = %clip.display(), "Playing clip");
        let player = Arc::clone(&player);
        tokio::spawn(async move {
            if let Err(e) = player.play_clip(&clip).await {
                tracing::warn!(%category, error = %e, "Clip playback failed");
            }
        });
    }
}

/// Bind the companion socket.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| CompanionError::Bind { addr, source })
}

/// Accept one client on `listener`, serve it, and shut the connection down.
pub async fn run<P>(listener: TcpListener, library: &SoundLibrary, player: Arc<P>) -> Result<StopReason>
where
    P: ClipPlayer + ?Sized + 'static,
{
    let (mut stream, peer) = listener.accept().await.map_err(CompanionError::Accept)?;
    tracing::info!(%peer, "Client connected");

    let reason = serve_connection(&mut stream, library, player).await;
    tracing::info!(%reason, "Serving loop ended");

    let _ = stream.shutdown().await;
    Ok(reason)
}
