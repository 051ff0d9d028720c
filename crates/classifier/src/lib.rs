//! Editor event classification for keytone.
//!
//! Turns raw document-change and selection-change notifications into at most
//! one [`SoundCategory`](keytone_events::SoundCategory) per qualifying event.
//!
//! # Architecture
//!
//! ```text
//! change event ──► gate ──► debounce ──► filters ──► classify ──► sink
//!                                                       │
//!                                                  EditTracker
//!                                                       │
//! selection event ─► gate ─► debounce ─► filters ───────┘──► Arrow ──► sink
//! ```
//!
//! # Example
//!
//! ```
//! use keytone_classifier::SoundDispatcher;
//! use keytone_events::{ChangeEvent, RecordingSink, SelectionEvent, SoundCategory};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut dispatcher = SoundDispatcher::new(sink.clone());
//!
//! dispatcher.on_change(&ChangeEvent::insert("a"));
//! dispatcher.on_selection_change(&SelectionEvent::cursor());
//!
//! assert_eq!(sink.played(), vec![SoundCategory::Key]);
//! ```

mod classify;
mod debounce;
mod dispatcher;
mod gate;
mod tracker;

pub use classify::{classify_change, TAB_INSERTIONS};
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock, DEBOUNCE_WINDOW};
pub use dispatcher::SoundDispatcher;
pub use gate::DispatchGate;
pub use tracker::{EditState, EditTracker, SelectionOutcome};
