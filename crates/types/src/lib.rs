//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behaviour beyond simple arithmetic, making
//! them usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Board coordinates are `(x, y)` pairs of signed integers:
//!
//! - **x** grows to the right (column)
//! - **y** grows downward (row)
//! - `(0, 0)` is the top-left cell
//!
//! Coordinates are signed so that line rasterization and direction stepping can
//! leave the board without wrapping; [`Dimensions::contains`] decides whether a
//! coordinate is on the board.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `REVEAL_DELAY_MS` | 1000 | Delay between releasing a drag and revealing the verdict |
//!
//! # Examples
//!
//! ```
//! use tui_wordsearch_types::{Coord, Dimensions, Direction, PuzzleAction};
//!
//! let dims = Dimensions::new(8, 6);
//! assert_eq!(dims.fittable(), 6);
//!
//! let start = Coord::new(1, 1);
//! assert_eq!(start.offset(Direction::DownRight, 3), Coord::new(4, 4));
//! assert!(dims.contains(Coord::new(7, 5)));
//! assert!(!dims.contains(Coord::new(8, 5)));
//!
//! assert_eq!(PuzzleAction::from_str("hint"), Some(PuzzleAction::ShowHint));
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 8;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 8;

/// Letters used to pad the board around the hidden word
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Upper bound on random (direction, start) draws when hiding a word
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between the end of a drag and the reveal of the verdict
pub const REVEAL_DELAY_MS: u32 = 1000;

/// An integer grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step `steps` cells from `self` along `direction`.
    pub fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Board size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Longest straight run that fits in any direction: `min(width, height)`.
    ///
    /// ```
    /// use tui_wordsearch_types::Dimensions;
    ///
    /// assert_eq!(Dimensions::new(8, 8).fittable(), 8);
    /// assert_eq!(Dimensions::new(3, 12).fittable(), 3);
    /// ```
    pub fn fittable(&self) -> usize {
        self.width.min(self.height) as usize
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    /// Row-major flat index of `coord`, or `None` when off the board.
    #[inline(always)]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some((coord.y as usize) * (self.width as usize) + (coord.x as usize))
    }

    /// Inverse of [`Dimensions::index_of`].
    ///
    /// The caller must pass an index below [`Dimensions::area`].
    #[inline(always)]
    pub fn coord_of(&self, index: usize) -> Coord {
        let w = self.width.max(1) as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

/// The eight unit directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// All directions, clockwise from `Up`.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Unit step `(dx, dy)`; never `(0, 0)`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Direction whose delta is `(dx, dy)`, if it is a unit step.
    ///
    /// ```
    /// use tui_wordsearch_types::Direction;
    ///
    /// assert_eq!(Direction::from_delta(1, 1), Some(Direction::DownRight));
    /// assert_eq!(Direction::from_delta(0, 0), None);
    /// assert_eq!(Direction::from_delta(2, 0), None);
    /// ```
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::UpRight => "upRight",
            Direction::Right => "right",
            Direction::DownRight => "downRight",
            Direction::Down => "down",
            Direction::DownLeft => "downLeft",
            Direction::Left => "left",
            Direction::UpLeft => "upLeft",
        }
    }
}

/// How a cell should currently be drawn.
///
/// - **None**: idle tile
/// - **Highlighted**: part of the drag in progress (or the hint)
/// - **Correct**: revealed answer cell
/// - **Wrong**: highlighted cell that was not part of the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualState {
    #[default]
    None,
    Highlighted,
    Correct,
    Wrong,
}

impl VisualState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualState::None => "none",
            VisualState::Highlighted => "highlighted",
            VisualState::Correct => "correct",
            VisualState::Wrong => "wrong",
        }
    }
}

/// Discrete drag gesture events delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragEvent {
    /// Pointer pressed on a cell
    Start(Coord),
    /// Pointer moved onto another cell while pressed
    Enter(Coord),
    /// Pointer released
    End(Coord),
}

/// Board-side events, consumed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardEvent {
    /// A word was hidden and the board is ready for a drag.
    ContentHidden { len: usize },
    /// The delayed reveal ran; `correct` is the verdict for the last drag.
    ContentJudged { correct: bool },
}

/// Non-drag actions a player can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    /// Highlight the first letter of the hidden word
    ShowHint,
    /// Hide the next word from the list
    NextWord,
}

impl PuzzleAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use tui_wordsearch_types::PuzzleAction;
    ///
    /// assert_eq!(PuzzleAction::from_str("showHint"), Some(PuzzleAction::ShowHint));
    /// assert_eq!(PuzzleAction::from_str("next"), Some(PuzzleAction::NextWord));
    /// assert_eq!(PuzzleAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "showhint" | "hint" => Some(PuzzleAction::ShowHint),
            "nextword" | "next" => Some(PuzzleAction::NextWord),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PuzzleAction::ShowHint => "showHint",
            PuzzleAction::NextWord => "nextWord",
        }
    }
}

/// Placement of a board on a terminal surface.
///
/// Shared by the renderer (where to draw a cell) and the input layer (which
/// cell a mouse position falls on). `origin_x`/`origin_y` is the top-left
/// terminal cell of board cell `(0, 0)`; each board cell spans
/// `cell_w` x `cell_h` terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub dims: Dimensions,
}

impl GridGeometry {
    /// Center a bordered board inside a `viewport_w` x `viewport_h` surface.
    ///
    /// One terminal cell is reserved on every side for the frame.
    pub fn centered(dims: Dimensions, cell_w: u16, cell_h: u16, viewport_w: u16, viewport_h: u16) -> Self {
        let frame_w = dims.width.saturating_mul(cell_w).saturating_add(2);
        let frame_h = dims.height.saturating_mul(cell_h).saturating_add(2);
        Self {
            origin_x: viewport_w.saturating_sub(frame_w) / 2 + 1,
            origin_y: viewport_h.saturating_sub(frame_h) / 2 + 1,
            cell_w,
            cell_h,
            dims,
        }
    }

    /// Width of the board area in terminal columns (frame excluded)
    pub fn board_width(&self) -> u16 {
        self.dims.width.saturating_mul(self.cell_w)
    }

    /// Height of the board area in terminal rows (frame excluded)
    pub fn board_height(&self) -> u16 {
        self.dims.height.saturating_mul(self.cell_h)
    }

    /// Board cell under terminal position `(column, row)`.
    ///
    /// ```
    /// use tui_wordsearch_types::{Coord, Dimensions, GridGeometry};
    ///
    /// let geo = GridGeometry { origin_x: 1, origin_y: 1, cell_w: 3, cell_h: 1, dims: Dimensions::new(4, 4) };
    /// assert_eq!(geo.cell_at(1, 1), Some(Coord::new(0, 0)));
    /// assert_eq!(geo.cell_at(6, 2), Some(Coord::new(1, 1)));
    /// assert_eq!(geo.cell_at(0, 1), None);
    /// assert_eq!(geo.cell_at(13, 1), None);
    /// ```
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let x = (column - self.origin_x) / self.cell_w;
        let y = (row - self.origin_y) / self.cell_h;
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        Some(Coord::new(x as i32, y as i32))
    }

    /// Top-left terminal position of board cell `coord`.
    pub fn cell_origin(&self, coord: Coord) -> Option<(u16, u16)> {
        if !self.dims.contains(coord) {
            return None;
        }
        let x = self
            .origin_x
            .saturating_add((coord.x as u16).saturating_mul(self.cell_w));
        let y = self
            .origin_y
            .saturating_add((coord.y as u16).saturating_mul(self.cell_h));
        Some((x, y))
    }
}
