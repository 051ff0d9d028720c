//! Event dispatch: gate, debounce, classify, forward.

use crate::classify::classify_change;
use crate::debounce::{Clock, Debouncer, SystemClock, DEBOUNCE_WINDOW};
use crate::gate::DispatchGate;
use crate::tracker::{EditState, EditTracker, SelectionOutcome};
use keytone_events::{ChangeEvent, PlaybackSinkRef, SelectionEvent, SoundCategory};
use std::sync::Arc;
use std::time::Duration;

/// Everything the two classifiers share, constructed once at activation.
///
/// Methods take `&mut self`: the editor serializes event delivery, so the
/// dispatcher is driven from a single task and needs no locking.
pub struct SoundDispatcher {
    gate: DispatchGate,
    tracker: EditTracker,
    change_debounce: Debouncer,
    selection_debounce: Debouncer,
    clock: Arc<dyn Clock>,
    sink: PlaybackSinkRef,
}

impl SoundDispatcher {
    /// Create an active dispatcher on the wall clock.
    pub fn new(sink: PlaybackSinkRef) -> Self {
        Self {
            gate: DispatchGate::default(),
            tracker: EditTracker::new(),
            change_debounce: Debouncer::new(DEBOUNCE_WINDOW),
            selection_debounce: Debouncer::new(DEBOUNCE_WINDOW),
            clock: Arc::new(SystemClock),
            sink,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Use a different debounce window for both classifiers.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.change_debounce = Debouncer::new(window);
        self.selection_debounce = Debouncer::new(window);
        self
    }

    pub fn with_gate(mut self, active: bool) -> Self {
        self.gate = DispatchGate::new(active);
        self
    }

    pub fn is_active(&self) -> bool {
        self.gate.is_active()
    }

    /// Open the gate. Returns false if it was already open.
    pub fn enable(&mut self) -> bool {
        self.gate.enable()
    }

    /// Close the gate. Returns false if it was already closed.
    pub fn disable(&mut self) -> bool {
        self.gate.disable()
    }

    pub fn edit_state(&self) -> EditState {
        self.tracker.state()
    }

    pub fn sink(&self) -> &PlaybackSinkRef {
        &self.sink
    }

    /// Handle a document change. Returns the category forwarded to the sink.
    pub fn on_change(&mut self, event: &ChangeEvent) -> Option<SoundCategory> {
        if !self.gate.is_active() {
            return None;
        }

        if !self.change_debounce.admit(self.clock.now()) {
            tracing::debug!("change suppressed by debounce");
            return None;
        }

        if !event.is_active_document {
            tracing::debug!("change ignored: not the active document");
            return None;
        }

        let Some(change) = event.primary_change() else {
            tracing::debug!("change ignored: no content changes");
            return None;
        };

        let category = classify_change(change);
        self.tracker.record_edit();
        self.emit(category);
        Some(category)
    }

    /// Handle a selection change. Emits Arrow for pure cursor movement.
    pub fn on_selection_change(&mut self, event: &SelectionEvent) -> Option<SoundCategory> {
        if !self.gate.is_active() {
            return None;
        }

        if !self.selection_debounce.admit(self.clock.now()) {
            tracing::debug!("selection suppressed by debounce");
            return None;
        }

        if !event.is_active_editor_document {
            tracing::debug!("selection ignored: not the active editor");
            return None;
        }

        match self.tracker.observe_selection(event.has_empty_selection) {
            SelectionOutcome::Navigation => {
                self.emit(SoundCategory::Arrow);
                Some(SoundCategory::Arrow)
            }
            SelectionOutcome::EditEcho => {
                tracing::debug!("selection consumed as echo of previous edit");
                None
            }
            SelectionOutcome::Ignored => None,
        }
    }

    fn emit(&self, category: SoundCategory) {
        tracing::debug!(%category, id = category.wire_id(), "dispatching sound");
        self.sink.play(category);
    }
}
