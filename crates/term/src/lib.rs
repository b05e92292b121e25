//! Terminal presentation for the board.
//!
//! Rendering is split in two: [`GameView`] paints a [`core::GameSnapshot`]
//! into a [`FrameBuffer`] without touching the terminal, and
//! [`TerminalRenderer`] flushes framebuffers to stdout, diffing against the
//! previous frame.
//!
//! Squares are drawn two columns wide so the board reads roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use strategos_core as core;
pub use strategos_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
