//! Terminal input module (board-facing).
//!
//! This module is independent of any UI framework beyond crossterm's event
//! types. It maps key events into [`crate::types::PuzzleAction`]s and turns
//! raw mouse presses, drags and releases into the discrete
//! [`crate::types::DragEvent`]s the board consumes.

pub mod drag;
pub mod map;

pub use tui_wordsearch_types as types;

pub use drag::DragTracker;
pub use map::{handle_key_event, should_quit};
