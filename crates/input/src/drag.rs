//! Mouse drag tracking for terminal environments.
//!
//! Terminals report every pointer movement while a button is held; the board
//! only wants to hear about cell changes. The tracker hit-tests positions
//! against a [`GridGeometry`] and emits `Start` / `Enter` / `End` once per
//! gesture boundary or cell change.

use arrayvec::ArrayVec;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Coord, DragEvent, GridGeometry};

/// Tracks the left-button gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: bool,
    last: Option<Coord>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last board cell the pointer was over during the current gesture.
    pub fn last_cell(&self) -> Option<Coord> {
        self.last
    }

    /// Translate one mouse event.
    ///
    /// At most two events come out: a press while a gesture is still open (the
    /// release was lost) closes the old gesture before starting the new one.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        geometry: &GridGeometry,
    ) -> ArrayVec<DragEvent, 2> {
        let mut out = ArrayVec::new();
        let cell = geometry.cell_at(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(end) = self.finish(None) {
                    out.push(end);
                }
                if let Some(cell) = cell {
                    self.active = true;
                    self.last = Some(cell);
                    out.push(DragEvent::Start(cell));
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let (true, Some(cell)) = (self.active, cell) {
                    if self.last != Some(cell) {
                        self.last = Some(cell);
                        out.push(DragEvent::Enter(cell));
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(end) = self.finish(cell) {
                    out.push(end);
                }
            }
            _ => {}
        }

        out
    }

    /// Close the open gesture, e.g. when the terminal loses focus.
    pub fn cancel(&mut self) -> Option<DragEvent> {
        self.finish(None)
    }

    fn finish(&mut self, at: Option<Coord>) -> Option<DragEvent> {
        if !self.active {
            return None;
        }
        self.active = false;
        let end = at.or(self.last)?;
        self.last = None;
        Some(DragEvent::End(end))
    }
}
