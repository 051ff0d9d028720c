//! Enable/disable and volume commands.

use crate::bridge::{Command, Notice};
use keytone_classifier::SoundDispatcher;
use keytone_player::Platform;
use keytone_settings::Settings;

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub notices: Vec<Notice>,
    /// Settings were modified and should be persisted.
    pub settings_changed: bool,
}

impl CommandOutcome {
    fn unchanged(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            settings_changed: false,
        }
    }
}

/// Apply `command` to the dispatcher and the in-memory settings.
pub fn apply(
    command: Command,
    dispatcher: &mut SoundDispatcher,
    settings: &mut Settings,
    platform: Platform,
) -> CommandOutcome {
    match command {
        Command::Enable => {
            if !dispatcher.enable() {
                return CommandOutcome::unchanged(Notice::warning("keytone is already enabled"));
            }
            settings.enabled = true;
            CommandOutcome {
                notices: vec![Notice::info("keytone enabled")],
                settings_changed: true,
            }
        }
        Command::Disable => {
            if !dispatcher.disable() {
                return CommandOutcome::unchanged(Notice::warning("keytone is already disabled"));
            }
            settings.enabled = false;
            CommandOutcome {
                notices: vec![Notice::info("keytone disabled")],
                settings_changed: true,
            }
        }
        Command::VolumeUp | Command::VolumeDown => {
            let up = command == Command::VolumeUp;
            let mut volume = settings.volume();
            let step = if up {
                volume.raise(platform)
            } else {
                volume.lower(platform)
            };

            let mut notices = Vec::new();
            if step.clamped {
                notices.push(Notice::warning(if up {
                    "keytone already at maximum volume"
                } else {
                    "keytone already at minimum volume"
                }));
            }
            notices.push(Notice::info(format!(
                "keytone volume {}: {}",
                if up { "raised" } else { "lowered" },
                step.volume
            )));

            let settings_changed = platform.volume_range().is_some();
            if settings_changed {
                settings.set_volume(volume);
                dispatcher.sink().set_volume(step.volume);
            }

            CommandOutcome {
                notices,
                settings_changed,
            }
        }
    }
}
