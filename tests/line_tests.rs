//! Line tests - Bresenham rasterization properties

use std::collections::HashSet;

use tui_wordsearch::core::{rasterize, LinePoints, SimpleRng};
use tui_wordsearch::types::Coord;

fn set(points: &[(i32, i32)]) -> HashSet<Coord> {
    points.iter().map(|&p| Coord::from(p)).collect()
}

fn line_set(a: (i32, i32), b: (i32, i32)) -> HashSet<Coord> {
    rasterize(a.into(), b.into()).into_iter().collect()
}

#[test]
fn test_horizontal_line() {
    assert_eq!(
        line_set((0, 0), (5, 0)),
        set(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
    );
}

#[test]
fn test_vertical_line() {
    assert_eq!(
        line_set((0, 0), (0, 5)),
        set(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)])
    );
}

#[test]
fn test_diagonal_line() {
    assert_eq!(
        line_set((0, 0), (3, 3)),
        set(&[(0, 0), (1, 1), (2, 2), (3, 3)])
    );
}

#[test]
fn test_line_is_symmetric_for_sampled_pairs() {
    let mut rng = SimpleRng::new(31337);
    for _ in 0..500 {
        let a = Coord::new(rng.next_range(41) as i32 - 20, rng.next_range(41) as i32 - 20);
        let b = Coord::new(rng.next_range(41) as i32 - 20, rng.next_range(41) as i32 - 20);
        let ab: HashSet<Coord> = rasterize(a, b).into_iter().collect();
        let ba: HashSet<Coord> = rasterize(b, a).into_iter().collect();
        assert_eq!(ab, ba, "asymmetric line between {:?} and {:?}", a, b);
    }
}

#[test]
fn test_line_has_no_gaps_or_duplicates() {
    let mut rng = SimpleRng::new(7);
    for _ in 0..300 {
        let a = Coord::new(rng.next_range(30) as i32, rng.next_range(30) as i32);
        let b = Coord::new(rng.next_range(30) as i32, rng.next_range(30) as i32);
        let line = rasterize(a, b);

        let dominant = (b.x - a.x).abs().max((b.y - a.y).abs());
        assert_eq!(line.len() as i32, dominant + 1);

        let unique: HashSet<Coord> = line.iter().copied().collect();
        assert_eq!(unique.len(), line.len());

        assert!(line.contains(&a) && line.contains(&b));
        for w in line.windows(2) {
            assert!((w[1].x - w[0].x).abs() <= 1 && (w[1].y - w[0].y).abs() <= 1);
        }
    }
}

#[test]
fn test_line_is_deterministic() {
    let a = Coord::new(2, 9);
    let b = Coord::new(13, 4);
    assert_eq!(rasterize(a, b), rasterize(a, b));
    assert_eq!(LinePoints::new(a, b).collect::<Vec<_>>(), rasterize(a, b));
}
