//! Move resolver - slides and merges tiles toward a boundary.
//!
//! A move command is resolved as a series of passes. Each pass visits every
//! tile in boundary-first order and advances it by at most one animation
//! step; a pass that moves nothing and merges nothing is the fixed point.
//! Running one pass per frame is what produces the sliding animation.
//!
//! The four directions differ only in their policy bundle: processing
//! order, step delta, boundary edge, neighbor cell, and mid-slide rounding.
//! One policy-driven loop serves all four.

use crate::board::{Board, MAX_TILES};
use crate::tile::{Rounding, Tile};
use crate::types::{Coord, Direction, CELL_PX, GRID_COLS, GRID_ROWS, MOVE_STEP_PX};

/// Per-direction policy bundle for one resolution pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DirectionPolicy {
    /// +1 toward increasing row/col, -1 toward zero.
    sign: i32,
    horizontal: bool,
    /// Pixel step applied to an advancing tile.
    delta: (i32, i32),
    /// Process tiles in descending lane order (right/down moves).
    reverse: bool,
    rounding: Rounding,
}

impl DirectionPolicy {
    pub(crate) fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self {
                sign: -1,
                horizontal: true,
                delta: (-MOVE_STEP_PX, 0),
                reverse: false,
                rounding: Rounding::Ceil,
            },
            Direction::Right => Self {
                sign: 1,
                horizontal: true,
                delta: (MOVE_STEP_PX, 0),
                reverse: true,
                rounding: Rounding::Floor,
            },
            Direction::Up => Self {
                sign: -1,
                horizontal: false,
                delta: (0, -MOVE_STEP_PX),
                reverse: false,
                rounding: Rounding::Ceil,
            },
            Direction::Down => Self {
                sign: 1,
                horizontal: false,
                delta: (0, MOVE_STEP_PX),
                reverse: true,
                rounding: Rounding::Floor,
            },
        }
    }

    /// Pixel position along the axis of travel.
    fn lane_px(&self, tile: &Tile) -> i32 {
        if self.horizontal {
            tile.x
        } else {
            tile.y
        }
    }

    /// Grid coordinate along the axis of travel.
    fn lane_cell(&self, tile: &Tile) -> u8 {
        if self.horizontal {
            tile.col
        } else {
            tile.row
        }
    }

    /// True when the tile sits on the edge this direction moves toward.
    fn at_boundary(&self, tile: &Tile) -> bool {
        let limit = if self.horizontal {
            GRID_COLS
        } else {
            GRID_ROWS
        };
        if self.sign < 0 {
            self.lane_cell(tile) == 0
        } else {
            self.lane_cell(tile) == limit - 1
        }
    }

    /// The adjacent cell in the direction of travel.
    ///
    /// Only meaningful away from the boundary.
    fn neighbor_coord(&self, tile: &Tile) -> Coord {
        if self.horizontal {
            (tile.row, (tile.col as i32 + self.sign) as u8)
        } else {
            ((tile.row as i32 + self.sign) as u8, tile.col)
        }
    }

    /// Signed pixel distance still to travel before reaching the neighbor.
    fn travel_gap(&self, tile: &Tile, neighbor: &Tile) -> i32 {
        self.sign * (self.lane_px(neighbor) - self.lane_px(tile))
    }

    /// A merge partner more than one step away is approached, not merged;
    /// the merge completes once within a single step of contact.
    fn can_approach(&self, tile: &Tile, neighbor: &Tile) -> bool {
        self.travel_gap(tile, neighbor) > MOVE_STEP_PX
    }

    /// A tile may slide past-or-toward a non-partner only while more than a
    /// full cell plus one step away.
    fn can_advance(&self, tile: &Tile, neighbor: &Tile) -> bool {
        self.travel_gap(tile, neighbor) > CELL_PX + MOVE_STEP_PX
    }
}

/// What a single resolution pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassOutcome {
    pub moved: bool,
    pub merged: bool,
}

impl PassOutcome {
    /// A pass with neither movement nor merge is the fixed point.
    pub fn updated(&self) -> bool {
        self.moved || self.merged
    }
}

/// Run one animation pass over every tile.
///
/// Tiles closest to the target boundary resolve first. Neighbor lookups use
/// the cell occupancy from the start of the pass, so a tile consumed by a
/// merge still blocks (or attracts) followers until the pass ends; removals
/// are collected during the pass and applied when the board is re-keyed
/// (mark-and-compact).
pub(crate) fn run_pass(board: &mut Board, policy: &DirectionPolicy) -> PassOutcome {
    let mut tiles = board.take_all();
    tiles.sort_unstable_by_key(|tile| policy.lane_cell(tile));
    if policy.reverse {
        tiles.reverse();
    }

    let mut index = [[None::<usize>; GRID_COLS as usize]; GRID_ROWS as usize];
    for (i, tile) in tiles.iter().enumerate() {
        index[tile.row as usize][tile.col as usize] = Some(i);
    }

    let mut removed = [false; MAX_TILES];
    let mut outcome = PassOutcome::default();

    for i in 0..tiles.len() {
        if removed[i] || policy.at_boundary(&tiles[i]) {
            continue;
        }

        let (nrow, ncol) = policy.neighbor_coord(&tiles[i]);
        match index[nrow as usize][ncol as usize] {
            None => {
                let tile = &mut tiles[i];
                tile.advance(policy.delta);
                tile.reindex(policy.rounding);
                outcome.moved = true;
            }
            Some(j) => {
                let mergeable = tiles[i].value == tiles[j].value
                    && !tiles[i].merged_this_move()
                    && !tiles[j].merged_this_move();
                if mergeable {
                    if policy.can_approach(&tiles[i], &tiles[j]) {
                        let tile = &mut tiles[i];
                        tile.advance(policy.delta);
                        tile.reindex(policy.rounding);
                        outcome.moved = true;
                    } else {
                        let partner = &mut tiles[j];
                        partner.value *= 2;
                        partner.merged = true;
                        removed[i] = true;
                        outcome.merged = true;
                    }
                } else if policy.can_advance(&tiles[i], &tiles[j]) {
                    let tile = &mut tiles[i];
                    tile.advance(policy.delta);
                    tile.reindex(policy.rounding);
                    outcome.moved = true;
                }
                // Otherwise blocked: no step, no reindex.
            }
        }
    }

    board.rekey(
        tiles
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !removed[*i])
            .map(|(_, tile)| tile),
    );
    outcome
}
