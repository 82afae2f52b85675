//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and renders into a simple framebuffer
//! that is flushed to the terminal with crossterm.
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: title screen, card grid, side panel and result overlay
//! - [`renderer`]: raw-mode terminal flusher with diff redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport, TITLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
