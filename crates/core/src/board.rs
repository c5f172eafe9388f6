//! Board module - the word-search puzzle
//!
//! [`PuzzleBoard`] owns the grid, hides a word in it and judges drag gestures.
//! Randomness and the reveal delay are injected so the whole board is
//! deterministic under test.
//!
//! # Drag gesture
//!
//! ```text
//! Idle --start_drag--> Dragging --enter*--> Dragging --end_drag--> Idle
//!                                                          |
//!                                       reveal after delay (tick)
//! ```
//!
//! A verdict is computed when the drag ends but only revealed once the timer
//! fires. Starting another drag before that cancels the reveal.

use std::collections::HashSet;

use tracing::{debug, info, trace, warn};

use crate::error::BoardError;
use crate::grid::{Cell, Grid};
use crate::line::LinePoints;
use crate::placement::{display_alphabet, find_placement, normalize_content, Placement};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::BoardSnapshot;
use crate::timer::{OneShotTimer, Timer};
use crate::types::{
    BoardEvent, Coord, Dimensions, DragEvent, VisualState, MAX_PLACEMENT_ATTEMPTS,
    REVEAL_DELAY_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { anchor: Coord, current: Coord },
}

/// Word-search board with injected random source `R` and reveal timer `T`.
#[derive(Debug, Clone)]
pub struct PuzzleBoard<R = SimpleRng, T = OneShotTimer> {
    grid: Grid,
    rng: R,
    timer: T,
    placement: Option<Placement>,
    has_content: bool,
    drag: DragState,
    /// Verdict waiting for the timer
    pending_verdict: Option<bool>,
    reveal_delay_ms: u32,
    max_attempts: u32,
    events: Vec<BoardEvent>,
}

impl PuzzleBoard {
    /// Board with the default seeded LCG and countdown timer.
    pub fn new(dims: Dimensions, seed: u32) -> Self {
        Self::with_parts(dims, SimpleRng::new(seed), OneShotTimer::new())
    }
}

impl<R: RandomSource, T: Timer> PuzzleBoard<R, T> {
    pub fn with_parts(dims: Dimensions, rng: R, timer: T) -> Self {
        Self {
            grid: Grid::new(dims),
            rng,
            timer,
            placement: None,
            has_content: false,
            drag: DragState::Idle,
            pending_verdict: None,
            reveal_delay_ms: REVEAL_DELAY_MS,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            events: Vec::new(),
        }
    }

    /// Bound the number of random placement draws per [`hide`](Self::hide).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_reveal_delay_ms(mut self, delay_ms: u32) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    pub fn dims(&self) -> Dimensions {
        self.grid.dims()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.grid.get(coord)
    }

    /// A word is hidden and has not been judged yet.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Cell the current drag started on.
    pub fn drag_anchor(&self) -> Option<Coord> {
        match self.drag {
            DragState::Dragging { anchor, .. } => Some(anchor),
            DragState::Idle => None,
        }
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// First letter of the hidden word.
    pub fn hint_anchor(&self) -> Option<Coord> {
        self.placement.map(|p| p.start)
    }

    /// A verdict is waiting for the reveal delay.
    pub fn reveal_pending(&self) -> bool {
        self.pending_verdict.is_some()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Hide `content` on the board.
    ///
    /// Whitespace is stripped and the rest uppercased before anything else.
    /// Length problems are reported without touching the board. Otherwise the
    /// board is cleared (including any drag or pending reveal) and the word is
    /// placed along a random direction; the remaining cells get random letters.
    pub fn hide(&mut self, content: &str) -> Result<Placement, BoardError> {
        let content = normalize_content(content);
        let len = content.chars().count();
        if len == 0 {
            return Err(BoardError::EmptyContent);
        }
        let max = self.dims().fittable();
        if len > max {
            return Err(BoardError::ContentTooLong { len, max });
        }

        let alphabet = display_alphabet(&content);
        self.reset();

        let Some((placement, attempts)) =
            find_placement(self.dims(), len, &mut self.rng, self.max_attempts)
        else {
            warn!(content = %content, attempts = self.max_attempts, "cannot place content");
            return Err(BoardError::PlacementFailed {
                attempts: self.max_attempts,
            });
        };

        for (coord, letter) in placement.cells().zip(content.chars()) {
            if let Some(cell) = self.grid.get_mut(coord) {
                cell.letter = Some(letter);
                cell.occupied = true;
                cell.answer = true;
            }
        }

        for cell in self.grid.cells_mut() {
            if cell.occupied {
                continue;
            }
            let pick = self.rng.next_below(alphabet.len() as u32) as usize;
            cell.letter = alphabet.get(pick).copied();
            cell.occupied = true;
            cell.answer = false;
        }

        self.placement = Some(placement);
        self.has_content = true;
        self.events.push(BoardEvent::ContentHidden { len });
        debug!(
            len,
            attempts,
            direction = placement.direction.as_str(),
            x = placement.start.x,
            y = placement.start.y,
            "content hidden"
        );
        Ok(placement)
    }

    /// Begin a drag on `cell`.
    ///
    /// Ignored without content or off the board. Cancels a pending reveal.
    pub fn start_drag(&mut self, cell: Coord) {
        if !self.has_content || !self.dims().contains(cell) {
            return;
        }

        if self.pending_verdict.take().is_some() {
            self.timer.cancel();
            trace!("pending reveal cancelled by new drag");
        }

        self.drag = DragState::Dragging {
            anchor: cell,
            current: cell,
        };
        self.highlight_line(cell, cell);
        trace!(x = cell.x, y = cell.y, "drag started");
    }

    /// The pointer moved onto `cell` while dragging.
    pub fn enter(&mut self, cell: Coord) {
        let DragState::Dragging { anchor, current } = self.drag else {
            return;
        };
        if cell == current || !self.has_content || !self.dims().contains(cell) {
            return;
        }

        self.highlight_line(anchor, cell);
        self.drag = DragState::Dragging {
            anchor,
            current: cell,
        };
    }

    /// Finish the drag and schedule the reveal.
    ///
    /// Returns the verdict that will be revealed, or `None` when no drag was in
    /// progress.
    pub fn end_drag(&mut self, cell: Coord) -> Option<bool> {
        if !self.is_dragging() {
            return None;
        }
        self.drag = DragState::Idle;

        let correct = self.selection_matches_answer();
        self.pending_verdict = Some(correct);
        self.timer.schedule(self.reveal_delay_ms);
        trace!(x = cell.x, y = cell.y, correct, "drag ended");
        Some(correct)
    }

    /// Dispatch an input-layer event.
    ///
    /// Returns the verdict when the event ended a drag.
    pub fn handle_drag(&mut self, event: DragEvent) -> Option<bool> {
        match event {
            DragEvent::Start(c) => {
                self.start_drag(c);
                None
            }
            DragEvent::Enter(c) => {
                self.enter(c);
                None
            }
            DragEvent::End(c) => self.end_drag(c),
        }
    }

    /// Highlight the first letter of the hidden word.
    pub fn show_hint(&mut self) {
        if !self.has_content {
            return;
        }
        if let Some(cell) = self.hint_anchor().and_then(|c| self.grid.get_mut(c)) {
            cell.state = VisualState::Highlighted;
        }
    }

    /// Highlighted cells are exactly the answer cells.
    pub fn selection_matches_answer(&self) -> bool {
        self.grid
            .cells()
            .iter()
            .all(|c| (c.state == VisualState::Highlighted) == c.answer)
    }

    /// Advance time. Returns `true` when the reveal ran on this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.timer.advance(elapsed_ms) {
            return false;
        }
        let Some(correct) = self.pending_verdict.take() else {
            return false;
        };
        self.reveal(correct);
        true
    }

    /// Take all queued board events.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        let dims = self.dims();
        out.width = dims.width;
        out.height = dims.height;
        out.letters.clear();
        out.letters
            .extend(self.grid.cells().iter().map(|c| c.letter.unwrap_or(' ')));
        out.states.clear();
        out.states
            .extend(self.grid.cells().iter().map(|c| c.state));
        out.has_content = self.has_content;
        out.dragging = self.is_dragging();
        out.reveal_pending = self.reveal_pending();
        out.hint_anchor = if self.has_content {
            self.hint_anchor()
        } else {
            None
        };
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut out = BoardSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    fn reset(&mut self) {
        self.grid.clear();
        self.timer.cancel();
        self.pending_verdict = None;
        self.drag = DragState::Idle;
        self.placement = None;
        self.has_content = false;
    }

    fn highlight_line(&mut self, from: Coord, to: Coord) {
        let line: HashSet<Coord> = LinePoints::new(from, to).collect();
        for (coord, cell) in self.grid.iter_mut() {
            cell.state = if line.contains(&coord) {
                VisualState::Highlighted
            } else {
                VisualState::None
            };
        }
    }

    fn reveal(&mut self, correct: bool) {
        for cell in self.grid.cells_mut() {
            if cell.answer {
                cell.state = VisualState::Correct;
            } else if cell.state == VisualState::Highlighted {
                cell.state = VisualState::Wrong;
            }
        }
        self.has_content = false;
        self.events.push(BoardEvent::ContentJudged { correct });
        info!(correct, "content judged");
    }
}
