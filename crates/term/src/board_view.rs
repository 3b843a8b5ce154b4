//! BoardView: maps the core board into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Tiles are drawn at their continuous pixel positions scaled down to
//! terminal cells, so a board rendered mid-move shows tiles sliding
//! between cells.

use crate::core::{Board, Tile};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CELL_PX, GRID_COLS, GRID_ROWS};

/// Tile fill colors, indexed by `log2(value) - 1` (2, 4, 8, ... 512).
///
/// Values past the end of the table reuse the last entry.
const TILE_COLORS: [Rgb; 9] = [
    Rgb::new(237, 229, 218),
    Rgb::new(238, 225, 201),
    Rgb::new(243, 178, 122),
    Rgb::new(246, 150, 101),
    Rgb::new(247, 124, 95),
    Rgb::new(247, 95, 59),
    Rgb::new(237, 208, 115),
    Rgb::new(237, 204, 99),
    Rgb::new(236, 202, 80),
];

const BACKGROUND_COLOR: Rgb = Rgb::new(198, 192, 190);
const OUTLINE_COLOR: Rgb = Rgb::new(187, 173, 160);
const FONT_COLOR: Rgb = Rgb::new(119, 110, 101);

/// Fill color for a tile of the given value.
pub fn tile_color(value: u32) -> Rgb {
    let idx = (value.max(2).ilog2() - 1) as usize;
    TILE_COLORS[idx.min(TILE_COLORS.len() - 1)]
}

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

/// A lightweight terminal renderer for the 2048 board.
pub struct BoardView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 10x5 keeps the board square-ish under typical glyph aspect
        // ratios and gives sliding tiles one terminal column per pass.
        Self {
            cell_w: 10,
            cell_h: 5,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the board into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only pay for a
    /// resize when the terminal size changes.
    pub fn render_into(&self, board: &Board, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_w = (GRID_COLS as u16) * self.cell_w;
        let board_h = (GRID_ROWS as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: OUTLINE_COLOR,
            bg: BACKGROUND_COLOR,
            bold: false,
        };
        let border = CellStyle {
            fg: OUTLINE_COLOR,
            bg: CellStyle::default().bg,
            bold: false,
        };

        // Board background.
        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', bg);

        // Tiles at their (possibly mid-slide) pixel positions.
        for tile in board.tiles() {
            self.draw_tile(fb, start_x, start_y, tile);
        }

        // Separator lines go over the tiles, then the outer border.
        self.draw_grid_lines(fb, start_x, start_y, board_w, board_h, bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, viewport, &mut fb);
        fb
    }

    /// Scale a logical pixel offset to terminal columns.
    fn term_x(&self, px: i32) -> u16 {
        (px * self.cell_w as i32 / CELL_PX) as u16
    }

    /// Scale a logical pixel offset to terminal rows.
    fn term_y(&self, px: i32) -> u16 {
        (px * self.cell_h as i32 / CELL_PX) as u16
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, tile: &Tile) {
        let tx = start_x + 1 + self.term_x(tile.x);
        let ty = start_y + 1 + self.term_y(tile.y);

        let style = CellStyle {
            fg: FONT_COLOR,
            bg: tile_color(tile.value),
            bold: true,
        };
        fb.fill_rect(tx, ty, self.cell_w, self.cell_h, ' ', style);

        let label = tile.value.to_string();
        fb.put_str_centered(tx, ty + self.cell_h / 2, self.cell_w, &label, style);
    }

    fn draw_grid_lines(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        board_w: u16,
        board_h: u16,
        style: CellStyle,
    ) {
        for i in 1..GRID_COLS as u16 {
            let x = start_x + i * self.cell_w;
            for dy in 0..board_h {
                fb.put_char(x, start_y + 1 + dy, '│', style);
            }
        }
        for i in 1..GRID_ROWS as u16 {
            let y = start_y + i * self.cell_h;
            for dx in 0..board_w {
                fb.put_char(start_x + 1 + dx, y, '─', style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
