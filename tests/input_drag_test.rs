//! Mouse input driving the board through the shared grid geometry

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_wordsearch::core::PuzzleBoard;
use tui_wordsearch::input::DragTracker;
use tui_wordsearch::term::{BoardView, Viewport};
use tui_wordsearch::types::{Coord, Dimensions, GridGeometry, REVEAL_DELAY_MS};

fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen_pos(geo: &GridGeometry, cell: Coord) -> (u16, u16) {
    let (x, y) = geo.cell_origin(cell).unwrap();
    (x + geo.cell_w / 2, y + geo.cell_h / 2)
}

#[test]
fn test_mouse_gesture_over_answer_is_correct() {
    let mut board = PuzzleBoard::new(Dimensions::new(8, 8), 2024);
    let p = board.hide("mouse").unwrap();

    let view = BoardView::default();
    let geo = view.geometry(&board.snapshot(), Viewport::new(80, 24));
    let mut tracker = DragTracker::new();

    let mut feed = |board: &mut PuzzleBoard, ev: MouseEvent| {
        let mut verdict = None;
        for drag in tracker.handle_mouse(ev, &geo) {
            verdict = verdict.or(board.handle_drag(drag));
        }
        verdict
    };

    let down = mouse(MouseEventKind::Down(MouseButton::Left), screen_pos(&geo, p.start));
    assert_eq!(feed(&mut board, down), None);
    for cell in p.cells().skip(1) {
        let moved = mouse(MouseEventKind::Drag(MouseButton::Left), screen_pos(&geo, cell));
        assert_eq!(feed(&mut board, moved), None);
    }
    assert!(board.is_dragging());
    assert!(board.selection_matches_answer());

    let up = mouse(MouseEventKind::Up(MouseButton::Left), screen_pos(&geo, p.end()));
    assert_eq!(feed(&mut board, up), Some(true));
    assert!(!board.is_dragging());
    assert!(board.reveal_pending());
    assert!(board.tick(REVEAL_DELAY_MS));
}

#[test]
fn test_release_off_board_ends_at_last_cell() {
    let mut board = PuzzleBoard::new(Dimensions::new(6, 6), 8);
    board.hide("abc").unwrap();

    let geo = BoardView::default().geometry(&board.snapshot(), Viewport::new(60, 20));
    let mut tracker = DragTracker::new();

    for drag in tracker.handle_mouse(
        mouse(MouseEventKind::Down(MouseButton::Left), screen_pos(&geo, Coord::new(1, 1))),
        &geo,
    ) {
        board.handle_drag(drag);
    }
    for drag in tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), (0, 0)), &geo) {
        board.handle_drag(drag);
    }
    assert!(!board.is_dragging());
    assert!(board.reveal_pending());
}
