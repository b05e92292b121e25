//! Terminal input module (engine-facing).
//!
//! Nothing here depends on a UI framework beyond crossterm's event
//! types. It maps key events into [`crate::types::Intent`]s,
//! one intent per key press. The game is turn-based, so there is no key-repeat
//! or timing state here.
//!
//! | Keys | Intent |
//! |------|--------|
//! | Arrows, `w` `a` `s` `d` | move the cursor |
//! | `Space` | select the piece under the cursor |
//! | `Enter`, `m` | move the selected piece to the cursor |
//! | `Esc`, `x` | cancel the selection |
//! | `k` `n` `b` `r` `o` | place King, Knight, Bishop, Rook, Stone |
//! | `F5`, `Ctrl-R` | restart |
//! | `q`, `Ctrl-C` | quit |

pub mod map;

pub use strategos_types as types;

pub use map::{handle_key_event, should_quit};
