use thiserror::Error;

/// Why a word could not be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Checked before anything on the board is touched.
    #[error("content length {len} exceeds the longest run the board can fit ({max})")]
    ContentTooLong { len: usize, max: usize },

    /// Nothing left to hide once whitespace is stripped.
    #[error("content is empty after removing whitespace")]
    EmptyContent,

    /// Every random draw ran off the board. The board is left cleared.
    #[error("could not place content after {attempts} attempts")]
    PlacementFailed { attempts: u32 },
}
