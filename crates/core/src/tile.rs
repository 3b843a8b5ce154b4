//! Tile module - a single numbered tile and its animation state.
//!
//! A tile lives in two coordinate systems at once: a grid cell (row, col)
//! used by game logic, and a continuous pixel position used only while the
//! tile slides. At rest the two always agree (`x == col * CELL_PX`).

use crate::types::{Coord, CELL_PX};

/// Rounding mode for recomputing a sliding tile's grid cell from pixels.
///
/// Rounds toward the direction of travel: `Ceil` for leftward/upward motion,
/// `Floor` for rightward/downward. This keeps a tile registered in its own
/// cell rather than its neighbor's while still in transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Ceil,
    Floor,
}

impl Rounding {
    #[inline]
    fn cell_of(self, px: i32) -> i32 {
        match self {
            Rounding::Floor => px.div_euclid(CELL_PX),
            Rounding::Ceil => (px + CELL_PX - 1).div_euclid(CELL_PX),
        }
    }
}

/// A numbered tile on the board.
///
/// Invariant: `value` is a power of two >= 2. Tiles are created on spawn
/// with value 2 or 4, doubled when another tile merges into them, and
/// dropped when they merge into another tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub value: u32,
    pub row: u8,
    pub col: u8,
    /// Pixel position of the tile's top-left corner.
    pub x: i32,
    pub y: i32,
    /// Set when this tile has absorbed a partner during the current move
    /// command; cleared when the next move command begins.
    pub(crate) merged: bool,
}

impl Tile {
    /// Create a tile at rest in the given cell.
    pub fn new(value: u32, row: u8, col: u8) -> Self {
        Self {
            value,
            row,
            col,
            x: col as i32 * CELL_PX,
            y: row as i32 * CELL_PX,
            merged: false,
        }
    }

    /// Grid coordinate as (row, col).
    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    /// Whether this tile already absorbed a partner during the current move.
    pub fn merged_this_move(&self) -> bool {
        self.merged
    }

    /// Advance the pixel position by one animation step.
    pub(crate) fn advance(&mut self, delta: (i32, i32)) {
        self.x += delta.0;
        self.y += delta.1;
    }

    /// Recompute (row, col) from the pixel position.
    ///
    /// Called after every animation step; the rounding mode must match the
    /// direction of travel.
    pub(crate) fn reindex(&mut self, rounding: Rounding) {
        self.row = rounding.cell_of(self.y) as u8;
        self.col = rounding.cell_of(self.x) as u8;
    }

    /// True when the pixel position sits exactly on the tile's cell.
    pub fn at_rest(&self) -> bool {
        self.x == self.col as i32 * CELL_PX && self.y == self.row as i32 * CELL_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MOVE_STEP_PX;

    #[test]
    fn new_tile_is_at_rest() {
        let tile = Tile::new(2, 1, 3);
        assert_eq!(tile.coord(), (1, 3));
        assert_eq!((tile.x, tile.y), (3 * CELL_PX, CELL_PX));
        assert!(tile.at_rest());
    }

    #[test]
    fn ceil_keeps_leftward_slider_in_its_own_cell() {
        // Sliding left out of column 1: the tile stays registered in
        // column 1 until it fully reaches column 0.
        let mut tile = Tile::new(2, 0, 1);
        while tile.x > 0 {
            tile.advance((-MOVE_STEP_PX, 0));
            tile.reindex(Rounding::Ceil);
            let expected = if tile.x > 0 { 1 } else { 0 };
            assert_eq!(tile.col, expected, "at x={}", tile.x);
        }
        assert!(tile.at_rest());
    }

    #[test]
    fn floor_keeps_rightward_slider_in_its_own_cell() {
        let mut tile = Tile::new(2, 0, 2);
        while tile.x < 3 * CELL_PX {
            tile.advance((MOVE_STEP_PX, 0));
            tile.reindex(Rounding::Floor);
            let expected = if tile.x < 3 * CELL_PX { 2 } else { 3 };
            assert_eq!(tile.col, expected, "at x={}", tile.x);
        }
        assert!(tile.at_rest());
    }

    #[test]
    fn vertical_reindex_uses_row() {
        let mut tile = Tile::new(4, 2, 0);
        tile.advance((0, MOVE_STEP_PX));
        tile.reindex(Rounding::Floor);
        assert_eq!(tile.row, 2);
        tile.advance((0, CELL_PX - MOVE_STEP_PX));
        tile.reindex(Rounding::Floor);
        assert_eq!(tile.row, 3);
    }
}
