//! Game state - owns the board and RNG and drives move resolution.
//!
//! The state machine is deliberately frame-stepped: `begin_move` arms a
//! direction, then each `step` call runs one animation pass so the caller
//! can redraw between passes. Once a pass changes nothing the move settles,
//! a tile spawns (only if the move changed the board), and control returns
//! to input handling. Input is never examined while a move is in flight.

use crate::board::Board;
use crate::moves::{run_pass, DirectionPolicy};
use crate::rng::SimpleRng;
use crate::types::{Coord, Direction};

/// Result of a settled move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether any tile slid or merged at any point during the move.
    pub changed: bool,
    /// Where the post-move tile spawned. `None` when the move was a no-op
    /// (no spawn under corrected semantics) or the board was full.
    pub spawned: Option<Coord>,
}

/// Result of driving an in-flight move by one animation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStep {
    /// Tiles are still sliding; redraw and step again.
    Sliding,
    /// The move reached its fixed point and is complete.
    Settled(MoveOutcome),
}

#[derive(Debug, Clone, Copy)]
struct ActiveMove {
    policy: DirectionPolicy,
    changed: bool,
}

/// Complete game state: board, RNG, and the move in flight (if any).
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    rng: SimpleRng,
    active: Option<ActiveMove>,
}

impl GameState {
    /// Create a game with an empty board and the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            rng: SimpleRng::new(seed),
            active: None,
        }
    }

    /// Place the two opening tiles.
    pub fn start(&mut self) {
        self.board.seed_start(&mut self.rng);
    }

    /// True while a move command is still resolving.
    pub fn is_sliding(&self) -> bool {
        self.active.is_some()
    }

    /// Arm a move in the given direction.
    ///
    /// Merge markers reset here, at the move-command boundary, never
    /// between passes. Ignored if a move is already in flight.
    pub fn begin_move(&mut self, direction: Direction) {
        if self.active.is_some() {
            return;
        }
        self.board.clear_merge_marks();
        self.active = Some(ActiveMove {
            policy: DirectionPolicy::for_direction(direction),
            changed: false,
        });
    }

    /// Drive the in-flight move by one animation pass.
    ///
    /// Returns `Sliding` while tiles are moving. The pass that changes
    /// nothing settles the move: a tile spawns if and only if some earlier
    /// pass slid or merged a tile, and the outcome is reported.
    pub fn step(&mut self) -> MoveStep {
        let Some(active) = self.active.as_mut() else {
            return MoveStep::Settled(MoveOutcome::default());
        };

        let pass = run_pass(&mut self.board, &active.policy);
        if pass.updated() {
            active.changed = true;
            return MoveStep::Sliding;
        }

        let changed = active.changed;
        self.active = None;
        let spawned = if changed {
            self.board.spawn(&mut self.rng)
        } else {
            None
        };
        MoveStep::Settled(MoveOutcome { changed, spawned })
    }

    /// Resolve a whole move command to its fixed point.
    ///
    /// Equivalent to `begin_move` plus stepping until settled, without the
    /// intermediate frames. Used by tests and benches.
    pub fn resolve(&mut self, direction: Direction) -> MoveOutcome {
        self.begin_move(direction);
        loop {
            if let MoveStep::Settled(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// Current RNG state (for restarting a game with the same sequence).
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn start_places_two_tiles() {
        let mut state = GameState::new(12345);
        assert!(state.board.is_empty());
        state.start();
        assert_eq!(state.board.len(), 2);
    }

    #[test]
    fn step_without_active_move_settles_unchanged() {
        let mut state = GameState::new(1);
        assert_eq!(state.step(), MoveStep::Settled(MoveOutcome::default()));
    }

    #[test]
    fn begin_move_is_ignored_while_sliding() {
        let mut state = GameState::new(1);
        state.board.insert(Tile::new(2, 0, 3));
        state.begin_move(Direction::Left);
        assert_eq!(state.step(), MoveStep::Sliding);
        // A second command mid-slide must not restart the move.
        state.begin_move(Direction::Right);
        assert!(state.is_sliding());
        assert_eq!(state.step(), MoveStep::Sliding);
    }

    #[test]
    fn sliding_move_settles_and_spawns() {
        let mut state = GameState::new(77);
        state.board.insert(Tile::new(2, 0, 3));

        let outcome = state.resolve(Direction::Left);
        assert!(outcome.changed);
        let spawned = outcome.spawned.unwrap();

        assert_eq!(state.board.len(), 2);
        assert_eq!(state.board.tile_at((0, 0)).unwrap().value, 2);
        assert!(state.board.tile_at(spawned).is_some());
    }

    #[test]
    fn noop_move_does_not_spawn() {
        let mut state = GameState::new(5);
        state.board.insert(Tile::new(2, 0, 0));

        let outcome = state.resolve(Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(outcome.spawned, None);
        assert_eq!(state.board.len(), 1);
    }

    #[test]
    fn merge_markers_reset_between_move_commands() {
        let mut state = GameState::new(9);
        state.board.insert(Tile::new(2, 0, 0));
        state.board.insert(Tile::new(2, 0, 1));

        let first = state.resolve(Direction::Left);
        assert!(first.changed);
        let merged_tile = state.board.tile_at((0, 0)).unwrap();
        assert_eq!(merged_tile.value, 4);
        assert!(merged_tile.merged_this_move());

        // Arming the next command clears the marker.
        state.begin_move(Direction::Right);
        assert!(state
            .board
            .tiles()
            .all(|tile| !tile.merged_this_move()));
    }
}
