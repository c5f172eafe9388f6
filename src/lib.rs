//! TUI Word Search (workspace facade crate).
//!
//! This package exposes `tui_wordsearch::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! environment-driven [`config`] used by the terminal binary.

pub mod config;

pub use tui_wordsearch_core as core;
pub use tui_wordsearch_input as input;
pub use tui_wordsearch_term as term;
pub use tui_wordsearch_types as types;

pub use config::GameConfig;
