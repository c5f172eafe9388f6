//! Tile styles for each visual state.

use crate::core::Presentation;
use crate::types::VisualState;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How one board tile is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl TileStyle {
    pub const fn new(fg: Rgb, bg: Rgb, bold: bool) -> Self {
        Self { fg, bg, bold }
    }
}

/// Terminal rendition of the four tile states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPalette {
    pub idle: TileStyle,
    pub highlighted: TileStyle,
    pub correct: TileStyle,
    pub wrong: TileStyle,
}

impl Default for TerminalPalette {
    fn default() -> Self {
        let ink = Rgb::new(235, 235, 235);
        Self {
            idle: TileStyle::new(Rgb::new(200, 200, 205), Rgb::new(45, 45, 55), false),
            highlighted: TileStyle::new(ink, Rgb::new(0, 150, 160), true),
            correct: TileStyle::new(ink, Rgb::new(40, 150, 60), true),
            wrong: TileStyle::new(ink, Rgb::new(175, 45, 45), true),
        }
    }
}

impl Presentation for TerminalPalette {
    type Asset = TileStyle;

    fn asset_for(&self, state: VisualState) -> TileStyle {
        match state {
            VisualState::None => self.idle,
            VisualState::Highlighted => self.highlighted,
            VisualState::Correct => self.correct,
            VisualState::Wrong => self.wrong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_a_distinct_style() {
        let p = TerminalPalette::default();
        let styles = [
            p.asset_for(VisualState::None),
            p.asset_for(VisualState::Highlighted),
            p.asset_for(VisualState::Correct),
            p.asset_for(VisualState::Wrong),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
