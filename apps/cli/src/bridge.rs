//! Line protocol between the editor extension and this process.
//!
//! Each stdin line is one JSON message:
//!
//! ```text
//! {"type":"change","contentChanges":[{"text":"a","rangeLength":0}],"isActiveDocument":true}
//! {"type":"selection","hasEmptySelection":true,"isActiveEditorDocument":true}
//! {"type":"command","command":"volume_up"}
//! ```
//!
//! Notices for the user go back on stdout, one JSON object per line.

use keytone_events::{ChangeEvent, SelectionEvent};
use serde::{Deserialize, Serialize};

/// User-facing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Enable,
    Disable,
    VolumeUp,
    VolumeDown,
}

/// One inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    Change(ChangeEvent),
    Selection(SelectionEvent),
    Command { command: Command },
}

/// Parse a stdin line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<HostMessage>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Message to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Serialized form written to stdout.
    pub fn to_line(&self) -> String {
        serde_json::json!({
            "type": "notice",
            "level": self.level,
            "message": self.message,
        })
        .to_string()
    }
}
