//! Wire protocol tests against a real loopback socket.

use async_trait::async_trait;
use keytone_companion::{bind, run, ClipPlayer, RecordingClipPlayer, StopReason};
use keytone_events::{PlaybackSink, SoundCategory};
use keytone_player::{PlayerError, RemoteSink, SoundLibrary};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

const SOUNDS: &str = "/opt/keytone/audio";

struct Companion {
    addr: SocketAddr,
    player: Arc<RecordingClipPlayer>,
    handle: JoinHandle<StopReason>,
}

/// Records each clip as it starts, then holds playback for `delay`.
struct SlowClipPlayer {
    started: RecordingClipPlayer,
    delay: Duration,
    fail: bool,
}

impl SlowClipPlayer {
    fn new(delay: Duration) -> Self {
        Self {
            started: RecordingClipPlayer::new(),
            delay,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Duration::ZERO)
        }
    }
}

#[async_trait]
impl ClipPlayer for SlowClipPlayer {
    async fn play_clip(&self, path: &Path) -> Result<(), PlayerError> {
        self.started.play_clip(path).await?;
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(PlayerError::NoBackend("test"));
        }
        Ok(())
    }
}

async fn start_with<P>(player: Arc<P>) -> (SocketAddr, JoinHandle<StopReason>)
where
    P: ClipPlayer + 'static,
{
    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let library = SoundLibrary::new(SOUNDS);
        run(listener, &library, player).await.unwrap()
    });
    (addr, handle)
}

async fn start() -> Companion {
    let player = Arc::new(RecordingClipPlayer::new());
    let (addr, handle) = start_with(Arc::clone(&player)).await;

    Companion {
        addr,
        player,
        handle,
    }
}

fn clip(name: &str) -> PathBuf {
    PathBuf::from(SOUNDS).join(name)
}

async fn wait_for_plays(player: &RecordingClipPlayer, count: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while player.played().len() < count {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("companion did not play in time");
}

async fn finish(handle: JoinHandle<StopReason>) -> StopReason {
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("serving loop did not end")
        .unwrap()
}

#[tokio::test]
async fn test_digit_three_plays_enter_once() {
    let companion = start().await;
    let mut client = TcpStream::connect(companion.addr).await.unwrap();

    client.write_all(b"3").await.unwrap();
    wait_for_plays(&companion.player, 1).await;
    drop(client);

    assert!(matches!(finish(companion.handle).await, StopReason::PeerClosed));
    assert_eq!(companion.player.played(), vec![clip("enter.wav")]);
}

#[tokio::test]
async fn test_sequential_requests() {
    let companion = start().await;
    let mut client = TcpStream::connect(companion.addr).await.unwrap();

    for (i, id) in [b"4", b"0", b"7"].iter().enumerate() {
        client.write_all(*id).await.unwrap();
        wait_for_plays(&companion.player, i + 1).await;
    }
    drop(client);
    finish(companion.handle).await;

    assert_eq!(
        companion.player.played(),
        vec![clip("key.wav"), clip("arrow.wav"), clip("tab.wav")]
    );
}

#[tokio::test]
async fn test_out_of_range_ends_loop() {
    let companion = start().await;
    let mut client = TcpStream::connect(companion.addr).await.unwrap();

    client.write_all(b"9").await.unwrap();

    assert!(matches!(finish(companion.handle).await, StopReason::OutOfRange(9)));
    assert!(companion.player.played().is_empty());

    // Server shut the connection down without replying.
    let mut buf = [0u8; 4];
    let n = client.read(&mut buf).await.unwrap_or(0);
    assert_eq!(n, 0);
}

#[tokio::test]
async fn test_non_numeric_ends_loop() {
    let companion = start().await;
    let mut client = TcpStream::connect(companion.addr).await.unwrap();

    client.write_all(b"ok").await.unwrap();

    assert!(matches!(finish(companion.handle).await, StopReason::Malformed(_)));
    assert!(companion.player.played().is_empty());
}

#[tokio::test]
async fn test_remote_sink_drives_companion() {
    let companion = start().await;
    let sink = RemoteSink::connect(companion.addr).await.unwrap();

    sink.play(SoundCategory::Delete);
    wait_for_plays(&companion.player, 1).await;
    sink.play(SoundCategory::Spacebar);
    wait_for_plays(&companion.player, 2).await;
    drop(sink);

    assert!(matches!(finish(companion.handle).await, StopReason::PeerClosed));
    assert_eq!(
        companion.player.played(),
        vec![clip("delete.wav"), clip("spacebar.wav")]
    );
}

#[tokio::test]
async fn test_slow_playback_keeps_up_with_typing() {
    let player = Arc::new(SlowClipPlayer::new(Duration::from_millis(250)));
    let (addr, handle) = start_with(Arc::clone(&player)).await;
    let sink = RemoteSink::connect(addr).await.unwrap();

    // Just past the debounce window, so every keystroke reaches the sink.
    for _ in 0..6 {
        sink.play(SoundCategory::Key);
        tokio::time::sleep(Duration::from_millis(120)).await;
    }
    wait_for_plays(&player.started, 6).await;
    assert!(!handle.is_finished());

    drop(sink);
    assert!(matches!(finish(handle).await, StopReason::PeerClosed));
    assert_eq!(player.started.played(), vec![clip("key.wav"); 6]);
}

#[tokio::test]
async fn test_playback_failure_keeps_serving() {
    let player = Arc::new(SlowClipPlayer::failing());
    let (addr, handle) = start_with(Arc::clone(&player)).await;
    let mut client = TcpStream::connect(addr).await.unwrap();

    client.write_all(b"3").await.unwrap();
    wait_for_plays(&player.started, 1).await;
    client.write_all(b"6").await.unwrap();
    wait_for_plays(&player.started, 2).await;
    drop(client);

    assert!(matches!(finish(handle).await, StopReason::PeerClosed));
    assert_eq!(player.started.played(), vec![clip("enter.wav"), clip("spacebar.wav")]);
}
