//! Raw editor notifications as delivered by the editor host.

use serde::{Deserialize, Serialize};

/// One text replacement inside a document change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentChange {
    /// Text inserted in place of the replaced range. Empty for deletions.
    #[serde(default)]
    pub text: String,
    /// Length of the replaced range, in characters.
    #[serde(default)]
    pub range_length: usize,
}

/// A document mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// Replacements making up this edit. Only the first one is classified.
    #[serde(default)]
    pub content_changes: Vec<ContentChange>,
    /// Whether the changed document is the one in the focused editor.
    #[serde(default)]
    pub is_active_document: bool,
}

impl ChangeEvent {
    /// Text inserted at the cursor of the active document.
    pub fn insert(text: impl Into<String>) -> Self {
        Self::replace(text, 0)
    }

    /// `len` characters removed from the active document.
    pub fn delete(len: usize) -> Self {
        Self::replace("", len)
    }

    /// `len` characters replaced by `text` in the active document.
    pub fn replace(text: impl Into<String>, len: usize) -> Self {
        Self {
            content_changes: vec![ContentChange {
                text: text.into(),
                range_length: len,
            }],
            is_active_document: true,
        }
    }

    /// Mark the event as coming from a background document.
    pub fn in_background(mut self) -> Self {
        self.is_active_document = false;
        self
    }

    /// The change that decides the sound, if any.
    pub fn primary_change(&self) -> Option<&ContentChange> {
        self.content_changes.first()
    }
}

/// A selection or cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEvent {
    /// True when the primary selection is a bare cursor.
    pub has_empty_selection: bool,
    /// Whether the event belongs to the focused editor's document.
    #[serde(default)]
    pub is_active_editor_document: bool,
}

impl SelectionEvent {
    /// Cursor moved in the active editor with nothing selected.
    pub fn cursor() -> Self {
        Self {
            has_empty_selection: true,
            is_active_editor_document: true,
        }
    }

    /// Text selected in the active editor.
    pub fn range() -> Self {
        Self {
            has_empty_selection: false,
            is_active_editor_document: true,
        }
    }

    pub fn in_background(mut self) -> Self {
        self.is_active_editor_document = false;
        self
    }
}
