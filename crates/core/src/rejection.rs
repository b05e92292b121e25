//! Why an intent was refused.
//!
//! Every rule violation is recoverable: the controller leaves state untouched and
//! hands one of these back so the caller can show a hint.

use derive_more::{Display, Error};

use crate::types::PieceKind;

/// Reason an intent left the game unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum Rejection {
    /// The game has ended; only restart and quit are accepted
    #[display("the game is over")]
    GameOver,
    /// Select or place attempted while a selected piece waits for its target
    #[display("finish or cancel the current move first")]
    AwaitingTarget,
    /// Move or cancel attempted with nothing selected
    #[display("no piece is selected")]
    NothingSelected,
    /// The current player has none of this kind left
    #[display("no {} left in stock", kind.as_str())]
    OutOfStock { kind: PieceKind },
    /// Cursor cell is occupied or outside the player's half
    #[display("cannot place here")]
    IllegalPlacement,
    /// Cursor cell holds no movable piece of the current player
    #[display("nothing of yours to select here")]
    IllegalSelection,
    /// Cursor is not a destination of the selected piece
    #[display("the selected piece cannot move here")]
    IllegalMove,
}
