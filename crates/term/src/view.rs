//! BoardView: encodes a board snapshot as terminal commands.
//!
//! This module is pure (no I/O). It writes crossterm commands into a byte
//! buffer, which keeps it unit-testable; [`crate::renderer`] flushes the buffer.

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::{BoardSnapshot, Presentation};
use crate::palette::{Rgb, TileStyle};
use crate::types::{Coord, GridGeometry};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FRAME: Rgb = Rgb::new(200, 200, 200);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Lays the board out in the middle of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 3x1 leaves a space on each side of the letter.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where the board of `snap` lands inside `viewport`.
    ///
    /// The input layer uses the same geometry for hit-testing.
    pub fn geometry(&self, snap: &BoardSnapshot, viewport: Viewport) -> GridGeometry {
        GridGeometry::centered(
            snap.dims(),
            self.cell_w,
            self.cell_h,
            viewport.width,
            viewport.height,
        )
    }

    /// Encode a full redraw: frame, tiles, title above and `status` below.
    pub fn encode_into<P>(
        &self,
        snap: &BoardSnapshot,
        palette: &P,
        status: &str,
        viewport: Viewport,
        out: &mut Vec<u8>,
    ) -> Result<()>
    where
        P: Presentation<Asset = TileStyle>,
    {
        let geo = self.geometry(snap, viewport);

        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.encode_frame(&geo, out)?;

        for (i, (&letter, &state)) in snap.letters.iter().zip(snap.states.iter()).enumerate() {
            let coord = snap.dims().coord_of(i);
            self.encode_tile(&geo, coord, letter, palette.asset_for(state), out)?;
        }

        let plain = TileStyle::new(TEXT, BLACK, false);
        if geo.origin_y >= 2 {
            put_str(out, geo.origin_x - 1, geo.origin_y - 2, "WORD SEARCH", TileStyle { bold: true, ..plain })?;
        }
        let status_row = geo
            .origin_y
            .saturating_add(geo.board_height())
            .saturating_add(1);
        if status_row < viewport.height {
            let room = viewport.width.saturating_sub(geo.origin_x - 1) as usize;
            let text: String = status.chars().take(room).collect();
            put_str(out, geo.origin_x - 1, status_row, &text, plain)?;
        }

        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn encode_frame(&self, geo: &GridGeometry, out: &mut Vec<u8>) -> Result<()> {
        let style = TileStyle::new(FRAME, BLACK, false);
        let left = geo.origin_x - 1;
        let top = geo.origin_y - 1;
        let inner_w = geo.board_width() as usize;
        let bottom = geo.origin_y.saturating_add(geo.board_height());
        let right = geo.origin_x.saturating_add(geo.board_width());

        let horizontal = "─".repeat(inner_w);
        put_str(out, left, top, &format!("┌{horizontal}┐"), style)?;
        for row in geo.origin_y..bottom {
            put_str(out, left, row, "│", style)?;
            put_str(out, right, row, "│", style)?;
        }
        put_str(out, left, bottom, &format!("└{horizontal}┘"), style)?;
        Ok(())
    }

    fn encode_tile(
        &self,
        geo: &GridGeometry,
        coord: Coord,
        letter: char,
        style: TileStyle,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        let Some((x, y)) = geo.cell_origin(coord) else {
            return Ok(());
        };
        let mid_row = self.cell_h / 2;
        let pad_left = ((self.cell_w - 1) / 2) as usize;
        let pad_right = (self.cell_w as usize) - 1 - pad_left;

        for dy in 0..self.cell_h {
            let text = if dy == mid_row {
                format!("{}{}{}", " ".repeat(pad_left), letter, " ".repeat(pad_right))
            } else {
                " ".repeat(self.cell_w as usize)
            };
            put_str(out, x, y.saturating_add(dy), &text, style)?;
        }
        Ok(())
    }
}

fn put_str(out: &mut Vec<u8>, x: u16, y: u16, s: &str, style: TileStyle) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    apply_style_into(out, style)?;
    out.queue(Print(s))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: TileStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
