//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay: the board
//! is rendered into a simple framebuffer that a terminal backend flushes.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over aspect ratio (e.g. 10x5 chars per cell)

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use board_view::{tile_color, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
