//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and move
//! resolution logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: sparse (row, col) -> tile map with random spawning
//! - [`tile`]: a numbered tile and its pixel-space animation state
//! - [`moves`]: the per-direction policy table and the resolution pass
//! - [`game_state`]: the frame-stepped move lifecycle
//! - [`rng`]: seedable LCG for reproducible tile spawning
//!
//! # Game Rules
//!
//! - Tiles slide toward the commanded boundary in fixed pixel steps.
//! - Two adjacent tiles of equal value merge into one of double the value;
//!   each tile merges at most once per move command.
//! - A move that slides or merges anything spawns one new tile (value 2 or
//!   4) in a random empty cell once it settles; a no-op move spawns nothing.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.board.len(), 2);
//!
//! let outcome = game.resolve(Direction::Left);
//! if outcome.changed {
//!     // The settled move spawned a third tile.
//!     assert!(outcome.spawned.is_some());
//! }
//! ```

pub mod board;
pub mod game_state;
pub mod moves;
pub mod rng;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MAX_TILES};
pub use game_state::{GameState, MoveOutcome, MoveStep};
pub use moves::PassOutcome;
pub use rng::SimpleRng;
pub use tile::{Rounding, Tile};
