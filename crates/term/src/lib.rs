//! Terminal presentation layer.
//!
//! A small rendering layer for playing the puzzle in a terminal. The board
//! crate only knows visual states; this crate decides what they look like
//! ([`TerminalPalette`]), where the board sits on screen ([`BoardView`]) and
//! owns the terminal session ([`TerminalRenderer`]).
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Share one [`GridGeometry`](crate::types::GridGeometry) between drawing and
//!   mouse hit-testing
//! - Allow precise control over aspect ratio (e.g. 3 chars wide per cell)

pub mod palette;
pub mod renderer;
pub mod view;

pub use tui_wordsearch_core as core;
pub use tui_wordsearch_types as types;

pub use palette::{Rgb, TerminalPalette, TileStyle};
pub use renderer::TerminalRenderer;
pub use view::{BoardView, Viewport};
