//! Board module - sparse coordinate-keyed tile storage.
//!
//! The board maps each occupied (row, col) cell to its tile. At rest no two
//! tiles share a cell; during a move the resolver takes the tiles out,
//! slides them, and re-keys the map from their updated positions.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::tile::Tile;
use crate::types::{Coord, GRID_COLS, GRID_ROWS};

/// Maximum number of tiles the grid can hold
pub const MAX_TILES: usize = (GRID_ROWS as usize) * (GRID_COLS as usize);

/// The 4x4 board, keyed by grid coordinate.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tiles: HashMap<Coord, Tile>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            tiles: HashMap::with_capacity(MAX_TILES),
        }
    }

    /// Place the opening position: two tiles of value 2 in random cells.
    pub fn seed_start(&mut self, rng: &mut SimpleRng) {
        for _ in 0..2 {
            if let Some(coord) = self.random_empty(rng) {
                self.insert(Tile::new(2, coord.0, coord.1));
            }
        }
    }

    /// Spawn one new tile of value 2 or 4 in a uniformly random empty cell.
    ///
    /// Returns the coordinate used, or `None` when the board is full
    /// (silent no-op).
    pub fn spawn(&mut self, rng: &mut SimpleRng) -> Option<Coord> {
        let coord = self.random_empty(rng)?;
        let value = rng.spawn_value();
        self.insert(Tile::new(value, coord.0, coord.1));
        Some(coord)
    }

    /// Tile at a coordinate, if any
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    /// Iterate over all tiles (order is unspecified)
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Number of tiles on the board
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True when all 16 cells are occupied
    pub fn is_full(&self) -> bool {
        self.tiles.len() == MAX_TILES
    }

    /// Place a tile under its own coordinate, replacing any occupant.
    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.coord(), tile);
    }

    /// Sorted coordinate set, for settled-state assertions.
    pub fn coords(&self) -> ArrayVec<Coord, MAX_TILES> {
        let mut coords: ArrayVec<Coord, MAX_TILES> = self.tiles.keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    /// Take every tile off the board for one resolution pass.
    pub(crate) fn take_all(&mut self) -> ArrayVec<Tile, MAX_TILES> {
        self.tiles.drain().map(|(_, tile)| tile).collect()
    }

    /// Re-key the map from the tiles' current (row, col) positions.
    pub(crate) fn rekey(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.clear();
        for tile in tiles {
            self.tiles.insert(tile.coord(), tile);
        }
    }

    /// Clear every tile's merge marker at the start of a move command.
    pub(crate) fn clear_merge_marks(&mut self) {
        for tile in self.tiles.values_mut() {
            tile.merged = false;
        }
    }

    fn random_empty(&self, rng: &mut SimpleRng) -> Option<Coord> {
        let empties = self.empty_cells();
        if empties.is_empty() {
            return None;
        }
        let pick = rng.next_range(empties.len() as u32) as usize;
        Some(empties[pick])
    }

    fn empty_cells(&self) -> ArrayVec<Coord, MAX_TILES> {
        let mut cells = ArrayVec::new();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                if !self.tiles.contains_key(&(row, col)) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }
}
