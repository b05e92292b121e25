//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and turn logic.
//! It has **no dependencies** on terminal rendering or input handling, making it:
//!
//! - **Deterministic**: The same intents always produce the same game
//! - **Testable**: Unit tests for every rule and every controller transition
//! - **Portable**: Any front end drives it through [`TurnController::apply`]
//! - **Allocation-free**: Intents and snapshots never touch the heap
//!
//! # Module Structure
//!
//! - [`board`]: 11x11 grid with half-derived ownership
//! - [`rules`]: pure movement legality per piece kind
//! - [`model`]: [`BoardModel`] - cursor, selection, placement, moves, territory, king capture
//! - [`inventory`]: per-player placement stock
//! - [`controller`]: [`TurnController`] - turns, stock and the select-then-target protocol
//! - [`rejection`]: why an intent was refused
//! - [`snapshot`]: read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Halves**: rows 0-5 belong to player 1, rows 6-10 to player 2; a piece belongs
//!   to whoever owns the half it stands in
//! - **Placement**: a turn may place one piece from stock on an empty cell of the own half
//! - **Movement**: or select one of the own pieces and move it (King, Knight, Bishop, Rook
//!   move as in chess; Stones never move and cannot be captured)
//! - **Capture**: moving onto an opponent piece removes it; losing the King loses the game
//! - **Territory**: every occupied cell counts for its half's owner, the central 5x5 double
//! - **Turn limit**: after 30 turns the larger territory wins, equal territory is a draw
//!
//! # Example
//!
//! ```
//! use strategos_core::TurnController;
//! use strategos_types::{Direction, Intent, PieceKind, Player};
//!
//! let mut game = TurnController::new();
//!
//! // Player 1 steps the King from (0,0) to (1,1).
//! game.apply(Intent::Select).unwrap();
//! game.apply(Intent::MoveCursor(Direction::Right)).unwrap();
//! game.apply(Intent::MoveCursor(Direction::Down)).unwrap();
//! game.apply(Intent::MoveToCursor).unwrap();
//!
//! assert_eq!(game.turn_count(), 2);
//! assert_eq!(game.current_player(), Player::Two);
//!
//! // Player 2 cannot place in player 1's half.
//! assert!(game.apply(Intent::Place(PieceKind::Stone)).is_err());
//! ```

pub mod board;
pub mod controller;
pub mod inventory;
pub mod model;
pub mod rejection;
pub mod rules;
pub mod snapshot;

pub use strategos_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use controller::{EndReason, Outcome, Phase, TurnController};
pub use inventory::Inventory;
pub use model::BoardModel;
pub use rejection::Rejection;
pub use rules::{destinations, legal_move, Destinations};
pub use snapshot::GameSnapshot;
