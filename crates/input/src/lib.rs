//! Terminal input module (game-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Direction`] commands and
//! provides the quit predicate. Directional commands and quit are the whole
//! input vocabulary.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
