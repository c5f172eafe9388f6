//! Placement module - choosing where the hidden word goes
//!
//! Placement is reject-and-retry: draw a direction and a start cell, check the
//! last letter would still be on the board, and try again otherwise. The number
//! of draws is bounded by the caller.

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;
use crate::types::{Coord, Dimensions, Direction, ALPHABET};

/// Where the current word lives on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub start: Coord,
    pub direction: Direction,
    pub len: usize,
}

impl Placement {
    /// Coordinate of the last letter.
    pub fn end(&self) -> Coord {
        self.start
            .offset(self.direction, self.len.saturating_sub(1) as i32)
    }

    /// Answer cells in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Placement {
            start,
            direction,
            len,
        } = *self;
        (0..len as i32).map(move |i| start.offset(direction, i))
    }

    pub fn fits(&self, dims: Dimensions) -> bool {
        dims.contains(self.start) && dims.contains(self.end())
    }
}

/// Strip all whitespace and uppercase the rest, one letter per input char.
///
/// Letters whose uppercase form is more than one char (`ß` -> `SS`) are kept
/// as they are, so every letter still fills exactly one cell.
///
/// ```
/// use tui_wordsearch_core::placement::normalize_content;
///
/// assert_eq!(normalize_content(" he llo\n"), "HELLO");
/// assert_eq!(normalize_content("straße"), "STRAßE");
/// ```
pub fn normalize_content(content: &str) -> String {
    content
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(upper_one)
        .collect()
}

fn upper_one(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Letters the filler draws from: the word's own letters first (in order of
/// first appearance), then the rest of `A-Z`, without duplicates.
pub fn display_alphabet(content: &str) -> Vec<char> {
    let mut letters: Vec<char> = Vec::with_capacity(ALPHABET.len() + content.len());
    for c in content.chars().chain(ALPHABET.chars()) {
        if !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}

/// Draw one random placement candidate. It may not fit.
pub fn random_candidate<R: RandomSource>(dims: Dimensions, len: usize, rng: &mut R) -> Placement {
    let direction = Direction::ALL[rng.next_below(Direction::ALL.len() as u32) as usize];
    let x = rng.next_below(dims.width as u32) as i32;
    let y = rng.next_below(dims.height as u32) as i32;
    Placement {
        start: Coord::new(x, y),
        direction,
        len,
    }
}

/// Draw candidates until one fits, at most `max_attempts` times.
///
/// Returns the placement and the number of draws it took.
pub fn find_placement<R: RandomSource>(
    dims: Dimensions,
    len: usize,
    rng: &mut R,
    max_attempts: u32,
) -> Option<(Placement, u32)> {
    if dims.area() == 0 {
        return None;
    }
    (1..=max_attempts).find_map(|attempt| {
        let candidate = random_candidate(dims, len, rng);
        candidate.fits(dims).then_some((candidate, attempt))
    })
}
