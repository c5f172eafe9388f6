//! TerminalRenderer: owns the terminal while the puzzle is running.
//!
//! Switches to the alternate screen with mouse capture on [`enter`], restores
//! everything on [`exit`], and redraws only when the frame inputs change.
//!
//! [`enter`]: TerminalRenderer::enter
//! [`exit`]: TerminalRenderer::exit

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::{BoardSnapshot, Presentation};
use crate::palette::TileStyle;
use crate::view::{BoardView, Viewport};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    last: Option<(BoardSnapshot, String, Viewport)>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw the board unless nothing changed since the last frame.
    ///
    /// Returns whether anything was written.
    pub fn draw<P>(
        &mut self,
        view: &BoardView,
        snap: &BoardSnapshot,
        palette: &P,
        status: &str,
        viewport: Viewport,
    ) -> Result<bool>
    where
        P: Presentation<Asset = TileStyle>,
    {
        if let Some((last_snap, last_status, last_vp)) = &self.last {
            if last_snap == snap && last_status == status && *last_vp == viewport {
                return Ok(false);
            }
        }

        self.buf.clear();
        view.encode_into(snap, palette, status, viewport, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some((last_snap, last_status, last_vp)) => {
                last_snap.clone_from(snap);
                last_status.clear();
                last_status.push_str(status);
                *last_vp = viewport;
            }
            None => self.last = Some((snap.clone(), status.to_string(), viewport)),
        }
        Ok(true)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}
