//! Edit classification rules.
//!
//! Pure domain logic - no I/O, no timing.

use keytone_events::{ContentChange, SoundCategory};

/// Inserted texts treated as a Tab press (hard tab and common soft tabs).
pub const TAB_INSERTIONS: &[&str] = &["\t", "  ", "    "];

/// Classify a single content change. First match wins.
pub fn classify_change(change: &ContentChange) -> SoundCategory {
    let text = change.text.as_str();

    if text.is_empty() {
        return if change.range_length == 1 {
            SoundCategory::Delete
        } else {
            SoundCategory::Cut
        };
    }

    match text {
        " " => SoundCategory::Spacebar,
        "\n" => SoundCategory::Enter,
        t if TAB_INSERTIONS.contains(&t) => SoundCategory::Tab,
        // Auto-indent after Enter inserts "\n" plus padding, so anything that
        // trims to nothing is still an Enter.
        t => match t.trim().chars().count() {
            0 => SoundCategory::Enter,
            1 => SoundCategory::Key,
            _ => SoundCategory::Paste,
        },
    }
}
