//! Per-player placement stock.

use crate::types::{PieceKind, STARTING_STOCK};

/// Remaining pieces a player may still place, one counter per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inventory {
    counts: [u8; PieceKind::COUNT],
}

impl Inventory {
    /// The fixed opening stock: King x1, Knight x2, Bishop x1, Rook x1, Stone x10
    pub fn starting() -> Self {
        Self {
            counts: STARTING_STOCK,
        }
    }

    pub fn remaining(&self, kind: PieceKind) -> u8 {
        self.counts[kind.index()]
    }

    pub fn has(&self, kind: PieceKind) -> bool {
        self.remaining(kind) > 0
    }

    /// Take one `kind` out of stock. Returns false (and changes nothing) when none are left.
    pub fn take(&mut self, kind: PieceKind) -> bool {
        let slot = &mut self.counts[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// `(kind, remaining)` pairs in inventory order
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        PieceKind::ALL.iter().map(move |&kind| (kind, self.remaining(kind)))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::starting()
    }
}
