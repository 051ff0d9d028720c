//! Event loop between the editor bridge and the dispatcher.

use crate::bridge::{parse_line, HostMessage, Notice};
use crate::commands;
use keytone_classifier::SoundDispatcher;
use keytone_player::Platform;
use keytone_settings::{Settings, SettingsStore};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Owns the dispatcher and settings for one editor session.
pub struct Host {
    dispatcher: SoundDispatcher,
    settings: Settings,
    store: Option<SettingsStore>,
    platform: Platform,
}

impl Host {
    /// `settings.enabled` overrides the dispatcher's gate.
    pub fn new(dispatcher: SoundDispatcher, settings: Settings) -> Self {
        let mut dispatcher = dispatcher;
        if settings.enabled {
            dispatcher.enable();
        } else {
            dispatcher.disable();
        }

        Self {
            dispatcher,
            settings,
            store: None,
            platform: Platform::current(),
        }
    }

    /// Persist settings changes to `store`.
    pub fn with_store(mut self, store: SettingsStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn dispatcher(&self) -> &SoundDispatcher {
        &self.dispatcher
    }

    /// Route one message. Returns notices for the user.
    pub fn handle(&mut self, message: HostMessage) -> Vec<Notice> {
        match message {
            HostMessage::Change(event) => {
                self.dispatcher.on_change(&event);
                Vec::new()
            }
            HostMessage::Selection(event) => {
                self.dispatcher.on_selection_change(&event);
                Vec::new()
            }
            HostMessage::Command { command } => {
                tracing::info!(?command, "Running command");
                let outcome = commands::apply(
                    command,
                    &mut self.dispatcher,
                    &mut self.settings,
                    self.platform,
                );
                if outcome.settings_changed {
                    self.persist();
                }
                outcome.notices
            }
        }
    }

    /// Parse and route one line. Malformed lines are logged and skipped.
    pub fn handle_line(&mut self, line: &str) -> Vec<Notice> {
        match parse_line(line) {
            Ok(Some(message)) => self.handle(message),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed message");
                Vec::new()
            }
        }
    }

    /// Process lines from `input` until EOF, writing notices to `output`.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            for notice in self.handle_line(&line) {
                output.write_all(notice.to_line().as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
            output.flush().await?;
        }

        tracing::info!("Editor closed the event stream");
        Ok(())
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.settings) {
            tracing::warn!(error = %e, "Failed to save settings");
        }
    }
}
