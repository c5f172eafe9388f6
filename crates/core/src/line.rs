//! Line module - Bresenham rasterization between two grid cells
//!
//! Produces every cell on the discrete straight line from `a` to `b`, both
//! endpoints included, exactly one cell per unit step along the dominant axis.
//! Iteration always runs along increasing x of the (possibly transposed) line,
//! so the output of `rasterize(a, b)` may be the reverse of `rasterize(b, a)`
//! but both contain the same cells.

use crate::types::Coord;

/// Lazy iterator over the cells of a Bresenham line.
#[derive(Debug, Clone)]
pub struct LinePoints {
    steep: bool,
    x: i32,
    x_end: i32,
    y: i32,
    y_step: i32,
    dx: i32,
    dy: i32,
    error: i32,
    done: bool,
}

impl LinePoints {
    pub fn new(a: Coord, b: Coord) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (a.x, a.y, b.x, b.y);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        Self {
            steep,
            x: x0,
            x_end: x1,
            y: y0,
            y_step: if y0 < y1 { 1 } else { -1 },
            dx,
            dy: (y1 - y0).abs(),
            error: dx / 2,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.done {
            return None;
        }

        let point = if self.steep {
            Coord::new(self.y, self.x)
        } else {
            Coord::new(self.x, self.y)
        };

        if self.x == self.x_end {
            self.done = true;
            return Some(point);
        }

        self.x += 1;
        self.error -= self.dy;
        if self.error < 0 {
            self.y += self.y_step;
            self.error += self.dx;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let n = (self.x_end - self.x) as usize + 1;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Cells on the line from `a` to `b`, inclusive.
pub fn rasterize(a: Coord, b: Coord) -> Vec<Coord> {
    LinePoints::new(a, b).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(list: &[(i32, i32)]) -> Vec<Coord> {
        list.iter().map(|&p| Coord::from(p)).collect()
    }

    #[test]
    fn single_point_line() {
        let c = Coord::new(3, 4);
        assert_eq!(rasterize(c, c), vec![c]);
    }

    #[test]
    fn shallow_line_steps_once_per_column() {
        let line = rasterize(Coord::new(0, 0), Coord::new(4, 2));
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]));
    }

    #[test]
    fn steep_line_is_transposed_back() {
        let line = rasterize(Coord::new(0, 0), Coord::new(1, 3));
        assert_eq!(line.len(), 4);
        assert_eq!(line.first(), Some(&Coord::new(0, 0)));
        assert_eq!(line.last(), Some(&Coord::new(1, 3)));
        for w in line.windows(2) {
            assert_eq!(w[1].y - w[0].y, 1);
        }
    }

    #[test]
    fn reversed_endpoints_iterate_from_smaller_x() {
        let line = rasterize(Coord::new(5, 0), Coord::new(0, 0));
        assert_eq!(line.first(), Some(&Coord::new(0, 0)));
        assert_eq!(line.last(), Some(&Coord::new(5, 0)));
    }

    #[test]
    fn negative_slope() {
        let line = rasterize(Coord::new(0, 3), Coord::new(3, 0));
        assert_eq!(line, pts(&[(0, 3), (1, 2), (2, 1), (3, 0)]));
    }

    #[test]
    fn size_hint_matches_output() {
        let it = LinePoints::new(Coord::new(-2, 7), Coord::new(9, -1));
        let expected = it.len();
        assert_eq!(it.count(), expected);
        assert_eq!(expected, 12);
    }
}
