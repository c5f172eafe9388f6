//! Presentation seam - how a visual state turns into something drawable
//!
//! The board only tracks [`VisualState`]; choosing a sprite, colour or glyph
//! for it belongs to the host. Any `Fn(VisualState) -> A` works as a
//! presentation, so simple hosts can pass a closure.

use crate::snapshot::BoardSnapshot;
use crate::types::{Coord, VisualState};

pub trait Presentation {
    type Asset;

    fn asset_for(&self, state: VisualState) -> Self::Asset;
}

impl<A, F> Presentation for F
where
    F: Fn(VisualState) -> A,
{
    type Asset = A;

    fn asset_for(&self, state: VisualState) -> A {
        self(state)
    }
}

/// Every cell of `snapshot` with its letter and asset, row-major.
pub fn present<'a, P: Presentation>(
    presentation: &'a P,
    snapshot: &'a BoardSnapshot,
) -> impl Iterator<Item = (Coord, char, P::Asset)> + 'a {
    let dims = snapshot.dims();
    snapshot
        .letters
        .iter()
        .zip(snapshot.states.iter())
        .enumerate()
        .map(move |(i, (&letter, &state))| (dims.coord_of(i), letter, presentation.asset_for(state)))
}
