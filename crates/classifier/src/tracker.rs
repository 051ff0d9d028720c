//! Edit tracking between the change and selection classifiers.
//!
//! Editors fire a selection change for nearly every edit, because the cursor
//! moves as a side effect of typing. Both arrive with the same shape, so the
//! selection classifier needs to know whether an edit just happened.

/// Where the tracker stands relative to the last edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// No edit pending; an empty selection change is navigation.
    #[default]
    AwaitingEdit,
    /// An edit was classified and its selection echo has not arrived yet.
    EditJustOccurred,
}

/// How a selection change was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Pure cursor movement.
    Navigation,
    /// Cursor moved because of the preceding edit. The edit is consumed.
    EditEcho,
    /// A non-empty selection with no edit pending.
    Ignored,
}

#[derive(Debug, Default)]
pub struct EditTracker {
    state: EditState,
}

impl EditTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// A change event produced a sound.
    pub fn record_edit(&mut self) {
        self.state = EditState::EditJustOccurred;
    }

    /// Interpret a selection change and advance the state.
    pub fn observe_selection(&mut self, has_empty_selection: bool) -> SelectionOutcome {
        match self.state {
            EditState::EditJustOccurred => {
                self.state = EditState::AwaitingEdit;
                SelectionOutcome::EditEcho
            }
            EditState::AwaitingEdit if has_empty_selection => SelectionOutcome::Navigation,
            EditState::AwaitingEdit => SelectionOutcome::Ignored,
        }
    }
}
