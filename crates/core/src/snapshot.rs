use serde::{Deserialize, Serialize};

use crate::types::{Coord, Dimensions, VisualState};

/// Observable board state, detached from the board.
///
/// `letters` and `states` are row-major; blank cells carry `' '`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u16,
    pub height: u16,
    pub letters: Vec<char>,
    pub states: Vec<VisualState>,
    pub has_content: bool,
    pub dragging: bool,
    pub reveal_pending: bool,
    pub hint_anchor: Option<Coord>,
}

impl BoardSnapshot {
    pub fn dims(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.dims()
            .index_of(coord)
            .and_then(|i| self.letters.get(i).copied())
    }

    pub fn state_at(&self, coord: Coord) -> Option<VisualState> {
        self.dims()
            .index_of(coord)
            .and_then(|i| self.states.get(i).copied())
    }

    /// Letters as one string per row.
    pub fn rows(&self) -> Vec<String> {
        let w = self.width.max(1) as usize;
        self.letters
            .chunks(w)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Number of cells currently in `state`.
    pub fn count_state(&self, state: VisualState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}
