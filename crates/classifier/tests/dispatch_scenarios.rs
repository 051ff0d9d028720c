//! End-to-end scenarios for the dispatcher.
//!
//! Time is driven by a `ManualClock`, so nothing here sleeps.

use keytone_classifier::{ManualClock, SoundDispatcher, DEBOUNCE_WINDOW};
use keytone_events::{ChangeEvent, RecordingSink, SelectionEvent, SoundCategory};
use std::sync::Arc;

struct Harness {
    dispatcher: SoundDispatcher,
    sink: Arc<RecordingSink>,
    clock: ManualClock,
}

impl Harness {
    fn new() -> Self {
        let sink = Arc::new(RecordingSink::new());
        let clock = ManualClock::new();
        let dispatcher = SoundDispatcher::new(sink.clone()).with_clock(Arc::new(clock.clone()));
        Self {
            dispatcher,
            sink,
            clock,
        }
    }

    /// Move past any open debounce window.
    fn pause(&self) {
        self.clock.advance(DEBOUNCE_WINDOW * 2);
    }

    fn change(&mut self, event: ChangeEvent) -> Option<SoundCategory> {
        self.dispatcher.on_change(&event)
    }

    fn select(&mut self, event: SelectionEvent) -> Option<SoundCategory> {
        self.dispatcher.on_selection_change(&event)
    }
}

// =============================================================================
// Classification
// =============================================================================

mod classification {
    use super::*;

    #[test]
    fn test_typing_sequence() {
        let mut h = Harness::new();
        let inputs = [
            (ChangeEvent::insert("f"), SoundCategory::Key),
            (ChangeEvent::insert(" "), SoundCategory::Spacebar),
            (ChangeEvent::insert("\n"), SoundCategory::Enter),
            (ChangeEvent::insert("\n    "), SoundCategory::Enter),
            (ChangeEvent::insert("    "), SoundCategory::Tab),
            (ChangeEvent::insert("\t"), SoundCategory::Tab),
            (ChangeEvent::insert("  "), SoundCategory::Tab),
            (ChangeEvent::insert("let x = 1;"), SoundCategory::Paste),
            (ChangeEvent::delete(1), SoundCategory::Delete),
            (ChangeEvent::delete(5), SoundCategory::Cut),
        ];

        for (event, expected) in inputs.iter().cloned() {
            h.pause();
            assert_eq!(h.change(event.clone()), Some(expected), "{event:?}");
        }

        let expected: Vec<_> = inputs.iter().map(|(_, c)| *c).collect();
        assert_eq!(h.sink.played(), expected);
    }

    #[test]
    fn test_delete_one_char() {
        let mut h = Harness::new();
        h.change(ChangeEvent::delete(1));
        assert_eq!(h.sink.played(), vec![SoundCategory::Delete]);
    }

    #[test]
    fn test_delete_five_chars_in_one_change() {
        let mut h = Harness::new();
        h.change(ChangeEvent::delete(5));
        assert_eq!(h.sink.played(), vec![SoundCategory::Cut]);
    }

    #[test]
    fn test_only_first_content_change_counts() {
        let mut h = Harness::new();
        let mut event = ChangeEvent::insert("a");
        event.content_changes.push(keytone_events::ContentChange {
            text: "lots of text".to_string(),
            range_length: 0,
        });

        assert_eq!(h.change(event), Some(SoundCategory::Key));
        assert_eq!(h.sink.len(), 1);
    }
}

// =============================================================================
// Debounce
// =============================================================================

mod debounce {
    use super::*;

    #[test]
    fn test_burst_emits_once() {
        let mut h = Harness::new();

        assert_eq!(h.change(ChangeEvent::insert("a")), Some(SoundCategory::Key));
        h.clock.advance_ms(30);
        assert_eq!(h.change(ChangeEvent::insert("bc")), None);

        assert_eq!(h.sink.played(), vec![SoundCategory::Key]);
    }

    #[test]
    fn test_separated_events_emit_twice() {
        let mut h = Harness::new();

        h.change(ChangeEvent::insert("a"));
        h.clock.advance_ms(150);
        h.change(ChangeEvent::insert("b"));

        assert_eq!(h.sink.played(), vec![SoundCategory::Key, SoundCategory::Key]);
    }

    #[test]
    fn test_autocomplete_burst_coalesces() {
        let mut h = Harness::new();

        h.change(ChangeEvent::insert("p"));
        for text in ["rintln", "!", "()", ";"] {
            h.clock.advance_ms(2);
            h.change(ChangeEvent::insert(text));
        }

        assert_eq!(h.sink.played(), vec![SoundCategory::Key]);
    }

    #[test]
    fn test_selection_burst_emits_once() {
        let mut h = Harness::new();

        assert_eq!(h.select(SelectionEvent::cursor()), Some(SoundCategory::Arrow));
        h.clock.advance_ms(40);
        assert_eq!(h.select(SelectionEvent::cursor()), None);
        h.clock.advance_ms(40);
        assert_eq!(h.select(SelectionEvent::cursor()), None);

        assert_eq!(h.sink.played(), vec![SoundCategory::Arrow]);
    }
}

// =============================================================================
// Selection / edit interplay
// =============================================================================

mod selection {
    use super::*;

    #[test]
    fn test_insert_then_select_plays_key_only() {
        let mut h = Harness::new();

        assert_eq!(h.change(ChangeEvent::insert("a")), Some(SoundCategory::Key));
        assert_eq!(h.select(SelectionEvent::cursor()), None);

        assert_eq!(h.sink.played(), vec![SoundCategory::Key]);
    }

    #[test]
    fn test_select_without_edit_plays_arrow() {
        let mut h = Harness::new();

        assert_eq!(h.select(SelectionEvent::cursor()), Some(SoundCategory::Arrow));
        assert_eq!(h.sink.played(), vec![SoundCategory::Arrow]);
    }

    #[test]
    fn test_echo_consumes_edit_then_arrows_resume() {
        let mut h = Harness::new();

        h.change(ChangeEvent::insert("a"));
        h.select(SelectionEvent::cursor());
        h.pause();
        assert_eq!(h.select(SelectionEvent::cursor()), Some(SoundCategory::Arrow));

        assert_eq!(h.sink.played(), vec![SoundCategory::Key, SoundCategory::Arrow]);
    }

    #[test]
    fn test_range_selection_plays_nothing() {
        let mut h = Harness::new();

        assert_eq!(h.select(SelectionEvent::range()), None);
        assert!(h.sink.is_empty());
    }

    #[test]
    fn test_background_selection_keeps_pending_edit() {
        let mut h = Harness::new();

        h.change(ChangeEvent::insert("a"));
        assert_eq!(h.select(SelectionEvent::cursor().in_background()), None);
        h.pause();
        // The edit is still pending, so this is its echo.
        assert_eq!(h.select(SelectionEvent::cursor()), None);

        assert_eq!(h.sink.played(), vec![SoundCategory::Key]);
    }

    #[test]
    fn test_debounced_change_does_not_mark_edit() {
        let mut h = Harness::new();

        h.change(ChangeEvent::insert("a"));
        h.select(SelectionEvent::cursor());
        h.clock.advance_ms(10);
        // Dropped by the change window: no edit recorded.
        h.change(ChangeEvent::insert("b"));
        h.pause();

        assert_eq!(h.select(SelectionEvent::cursor()), Some(SoundCategory::Arrow));
    }
}

// =============================================================================
// Gate
// =============================================================================

mod gate {
    use super::*;

    #[test]
    fn test_gate_off_emits_nothing() {
        let mut h = Harness::new();
        h.dispatcher.disable();

        h.change(ChangeEvent::insert("a"));
        h.pause();
        h.select(SelectionEvent::cursor());
        h.pause();
        h.change(ChangeEvent::delete(3));
        h.pause();
        h.select(SelectionEvent::range());

        assert!(h.sink.is_empty());
    }

    #[test]
    fn test_reenable_resumes() {
        let mut h = Harness::new();

        assert!(h.dispatcher.disable());
        h.change(ChangeEvent::insert("a"));
        assert!(h.dispatcher.enable());
        h.change(ChangeEvent::insert("a"));

        assert_eq!(h.sink.played(), vec![SoundCategory::Key]);
    }
}
