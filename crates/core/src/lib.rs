//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the word-search board: line rasterization, word
//! placement and drag judging. It has **zero dependencies** on terminals,
//! input devices or wall-clock time, making it:
//!
//! - **Deterministic**: the same seed produces the same board
//! - **Testable**: randomness and the reveal delay are injected
//! - **Portable**: any host that can deliver drag events and ticks can drive it
//!
//! # Module Structure
//!
//! - [`line`]: Bresenham rasterization between two cells
//! - [`placement`]: content normalization, filler alphabet and random placement
//! - [`grid`]: flat row-major cell storage
//! - [`board`]: [`PuzzleBoard`], hiding content and the drag state machine
//! - [`rng`]: [`RandomSource`] seam and a seedable LCG
//! - [`timer`]: [`Timer`] seam and a tick-driven one-shot countdown
//! - [`presentation`]: [`Presentation`] seam from visual state to host assets
//! - [`snapshot`]: serializable copy of the observable board state
//!
//! # Example
//!
//! ```
//! use tui_wordsearch_core::PuzzleBoard;
//! use tui_wordsearch_types::{BoardEvent, Dimensions, REVEAL_DELAY_MS};
//!
//! let mut board = PuzzleBoard::new(Dimensions::new(8, 8), 12345);
//! let placement = board.hide("Hello").unwrap();
//!
//! // Drag from the first letter to the last.
//! board.start_drag(placement.start);
//! board.enter(placement.end());
//! assert_eq!(board.end_drag(placement.end()), Some(true));
//!
//! // The verdict is revealed after the delay.
//! board.tick(REVEAL_DELAY_MS);
//! assert!(board
//!     .take_events()
//!     .contains(&BoardEvent::ContentJudged { correct: true }));
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod line;
pub mod placement;
pub mod presentation;
pub mod rng;
pub mod snapshot;
pub mod timer;

pub use tui_wordsearch_types as types;

// Re-export commonly used types for convenience
pub use board::PuzzleBoard;
pub use error::BoardError;
pub use grid::{Cell, Grid};
pub use line::{rasterize, LinePoints};
pub use placement::Placement;
pub use presentation::{present, Presentation};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::BoardSnapshot;
pub use timer::{OneShotTimer, Timer};
