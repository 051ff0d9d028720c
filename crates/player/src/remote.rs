//! Sink that forwards categories to the companion player over loopback TCP.
//!
//! Wire format: the ASCII decimal id of the category, no delimiter, no
//! length prefix. Nothing is expected back.

use crate::error::{PlayerError, Result};
use keytone_events::{log_failures, FailureObserver, PlaybackFailure, PlaybackSink, SoundCategory};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Port the companion player listens on.
pub const COMPANION_PORT: u16 = 6969;

/// Time to give a freshly spawned companion before connecting.
pub const COMPANION_STARTUP_DELAY: Duration = Duration::from_millis(500);

/// Pending requests held while the socket is busy.
pub const DEFAULT_QUEUE_CAPACITY: usize = 32;

/// `127.0.0.1:6969`.
pub fn companion_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, COMPANION_PORT))
}

/// Persistent connection to the companion player.
///
/// `play` only enqueues; a writer task owns the socket. When the connection
/// breaks it stays broken: later requests are reported as failures.
pub struct RemoteSink {
    tx: mpsc::Sender<SoundCategory>,
    connected: Arc<AtomicBool>,
    dropped: AtomicU64,
    on_failure: FailureObserver,
    reader: JoinHandle<()>,
}

impl RemoteSink {
    /// Connect once to `addr`. Must be called from within a tokio runtime.
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        Self::connect_with(addr, log_failures()).await
    }

    pub async fn connect_with(addr: SocketAddr, on_failure: FailureObserver) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|source| PlayerError::Connect { addr, source })?;
        let _ = stream.set_nodelay(true);
        tracing::info!(%addr, "Connected to companion player");

        let (read_half, write_half) = stream.into_split();
        let (tx, rx) = mpsc::channel(DEFAULT_QUEUE_CAPACITY);
        let connected = Arc::new(AtomicBool::new(true));

        tokio::spawn(write_loop(
            write_half,
            rx,
            Arc::clone(&connected),
            on_failure.clone(),
        ));
        let reader = tokio::spawn(read_loop(read_half, Arc::clone(&connected)));

        Ok(Self {
            tx,
            connected,
            dropped: AtomicU64::new(0),
            on_failure,
            reader,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Requests dropped because the queue was full.
    pub fn dropped_requests(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn fail(&self, category: SoundCategory, reason: &str) {
        (self.on_failure)(PlaybackFailure {
            category,
            reason: reason.to_string(),
        });
    }
}

impl PlaybackSink for RemoteSink {
    fn play(&self, category: SoundCategory) {
        if !self.is_connected() {
            self.fail(category, "companion connection closed");
            return;
        }

        match self.tx.try_send(category) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                // Rate-limit logging: only log every 10th drop to avoid spam
                if dropped % 10 == 1 {
                    tracing::warn!(dropped, %category, "Companion queue full, dropping sounds");
                }
                self.fail(category, "companion queue full");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.fail(category, "companion writer stopped");
            }
        }
    }
}

impl Drop for RemoteSink {
    fn drop(&mut self) {
        // The writer exits once `tx` is gone and shuts the socket down.
        self.reader.abort();
    }
}

async fn write_loop(
    mut writer: OwnedWriteHalf,
    mut rx: mpsc::Receiver<SoundCategory>,
    connected: Arc<AtomicBool>,
    on_failure: FailureObserver,
) {
    while let Some(category) = rx.recv().await {
        if let Err(e) = writer.write_all(category.wire_payload().as_bytes()).await {
            connected.store(false, Ordering::SeqCst);
            tracing::warn!(error = %e, %category, "Companion write failed, closing connection");
            on_failure(PlaybackFailure {
                category,
                reason: e.to_string(),
            });
            break;
        }
    }

    let _ = writer.shutdown().await;
    connected.store(false, Ordering::SeqCst);
    tracing::debug!("Companion writer stopped");
}

async fn read_loop(mut reader: OwnedReadHalf, connected: Arc<AtomicBool>) {
    let mut buf = [0u8; 256];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => {
                tracing::info!("Companion closed the connection");
                break;
            }
            Ok(n) => {
                tracing::debug!(data = %String::from_utf8_lossy(&buf[..n]), "Companion says");
            }
            Err(e) => {
                tracing::debug!(error = %e, "Companion read failed");
                break;
            }
        }
    }
    connected.store(false, Ordering::SeqCst);
}
