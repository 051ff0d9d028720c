//! Sound categories and their wire identifiers.

use serde::{Deserialize, Serialize};

/// Sound played for a classified editor event.
///
/// The discriminants are the wire ids understood by the companion player.
/// They index its clip list directly and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCategory {
    /// Cursor moved without an edit (arrow keys, clicks).
    Arrow = 0,
    /// Multi-character deletion.
    Cut = 1,
    /// Single-character deletion (backspace/delete).
    Delete = 2,
    /// Newline, including newlines followed by auto-indent.
    Enter = 3,
    /// A single visible character.
    Key = 4,
    /// Multi-character insertion.
    Paste = 5,
    Spacebar = 6,
    /// Tab or soft-tab indentation.
    Tab = 7,
}

impl SoundCategory {
    /// All categories in wire-id order.
    pub const ALL: [SoundCategory; 8] = [
        SoundCategory::Arrow,
        SoundCategory::Cut,
        SoundCategory::Delete,
        SoundCategory::Enter,
        SoundCategory::Key,
        SoundCategory::Paste,
        SoundCategory::Spacebar,
        SoundCategory::Tab,
    ];

    /// Numeric identifier sent to the companion player.
    pub fn wire_id(self) -> u8 {
        self as u8
    }

    /// Look up a category by its wire id.
    pub fn from_wire_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// ASCII payload for the companion protocol (decimal digits, no delimiter).
    pub fn wire_payload(self) -> String {
        self.wire_id().to_string()
    }

    /// Clip file name for this category.
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCategory::Arrow => "arrow.wav",
            SoundCategory::Cut => "cut.wav",
            SoundCategory::Delete => "delete.wav",
            SoundCategory::Enter => "enter.wav",
            SoundCategory::Key => "key.wav",
            SoundCategory::Paste => "paste.wav",
            SoundCategory::Spacebar => "spacebar.wav",
            SoundCategory::Tab => "tab.wav",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoundCategory::Arrow => "arrow",
            SoundCategory::Cut => "cut",
            SoundCategory::Delete => "delete",
            SoundCategory::Enter => "enter",
            SoundCategory::Key => "key",
            SoundCategory::Paste => "paste",
            SoundCategory::Spacebar => "spacebar",
            SoundCategory::Tab => "tab",
        }
    }
}

impl std::fmt::Display for SoundCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
