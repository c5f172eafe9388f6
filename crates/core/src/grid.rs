//! Grid module - flat storage for the puzzle cells
//!
//! Cells are stored row-major (`y * width + x`). A cell does not know its own
//! position; [`Grid::iter`] pairs each cell with the coordinate derived from its
//! index.

use crate::types::{Coord, Dimensions, VisualState};

/// A single tile of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Letter shown on the tile; `None` while the board is cleared
    pub letter: Option<char>,
    pub occupied: bool,
    /// Part of the hidden word
    pub answer: bool,
    pub state: VisualState,
}

impl Cell {
    /// Reset to the blank, unoccupied state.
    pub fn clear(&mut self) {
        *self = Cell::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::default(); dims.area()],
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Get cell at `coord`
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.dims.index_of(coord).and_then(|i| self.cells.get(i))
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        let i = self.dims.index_of(coord)?;
        self.cells.get_mut(i)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (dims.coord_of(i), cell))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Coord, &mut Cell)> + '_ {
        let dims = self.dims;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, cell)| (dims.coord_of(i), cell))
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }

    /// Coordinates of every cell in `state`, row-major.
    pub fn coords_in_state(&self, state: VisualState) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.state == state)
            .map(|(c, _)| c)
            .collect()
    }

    /// Coordinates of every answer cell, row-major.
    pub fn answer_coords(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.answer)
            .map(|(c, _)| c)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new_is_blank() {
        let grid = Grid::new(Dimensions::new(4, 3));
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn test_grid_get_out_of_bounds() {
        let grid = Grid::new(Dimensions::new(4, 3));
        assert!(grid.get(Coord::new(-1, 0)).is_none());
        assert!(grid.get(Coord::new(0, -1)).is_none());
        assert!(grid.get(Coord::new(4, 0)).is_none());
        assert!(grid.get(Coord::new(0, 3)).is_none());
        assert!(grid.get(Coord::new(3, 2)).is_some());
    }

    #[test]
    fn test_grid_iter_derives_coords_row_major() {
        let mut grid = Grid::new(Dimensions::new(3, 2));
        grid.get_mut(Coord::new(2, 1)).unwrap().letter = Some('Z');

        let coords: Vec<Coord> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[3], Coord::new(0, 1));
        assert_eq!(coords[5], Coord::new(2, 1));
        assert_eq!(grid.iter().last().unwrap().1.letter, Some('Z'));
    }

    #[test]
    fn test_grid_clear_resets_every_field() {
        let mut grid = Grid::new(Dimensions::new(2, 2));
        for (_, cell) in grid.iter_mut() {
            cell.letter = Some('A');
            cell.occupied = true;
            cell.answer = true;
            cell.state = VisualState::Wrong;
        }
        grid.clear();
        assert!(grid.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn test_grid_state_queries() {
        let mut grid = Grid::new(Dimensions::new(3, 3));
        grid.get_mut(Coord::new(1, 1)).unwrap().state = VisualState::Highlighted;
        grid.get_mut(Coord::new(0, 2)).unwrap().answer = true;

        assert_eq!(
            grid.coords_in_state(VisualState::Highlighted),
            vec![Coord::new(1, 1)]
        );
        assert_eq!(grid.answer_coords(), vec![Coord::new(0, 2)]);
    }
}
