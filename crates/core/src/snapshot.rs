use crate::controller::{Outcome, Phase};
use crate::inventory::Inventory;
use crate::rejection::Rejection;
use crate::rules::Destinations;
use crate::types::{Cell, PieceKind, Player, Position, BOARD_SIZE};

/// Everything a renderer needs for one frame, copied out of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Grid codes indexed `[y][x]`: 0 empty, otherwise [`PieceKind::code`]
    pub board: [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub cursor: Position,
    pub selection: Option<Position>,
    pub destinations: Destinations,
    pub phase: Phase,
    pub current_player: Player,
    pub turn_count: u32,
    /// Indexed by [`Player::index`]
    pub inventories: [Inventory; 2],
    /// Indexed by [`Player::index`]
    pub scores: [u32; 2],
    pub outcome: Option<Outcome>,
    pub last_rejection: Option<Rejection>,
}

impl GameSnapshot {
    /// Decoded cell at `pos`; off-board positions read as empty
    pub fn cell(&self, pos: Position) -> Cell {
        if !pos.in_bounds() {
            return None;
        }
        PieceKind::from_code(self.board[pos.y as usize][pos.x as usize])
    }

    pub fn is_destination(&self, pos: Position) -> bool {
        self.destinations.contains(&pos)
    }

    pub fn inventory(&self, player: Player) -> &Inventory {
        &self.inventories[player.index()]
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn playable(&self) -> bool {
        self.outcome.is_none()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            cursor: Position::default(),
            selection: None,
            destinations: Destinations::new(),
            phase: Phase::AwaitingSelection,
            current_player: Player::One,
            turn_count: 1,
            inventories: [Inventory::starting(); 2],
            scores: [0; 2],
            outcome: None,
            last_rejection: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::TurnController;

    #[test]
    fn test_default_is_an_empty_opening_frame() {
        let snap = GameSnapshot::default();
        assert!(snap.board.iter().flatten().all(|&c| c == 0));
        assert_eq!(snap.cursor, Position::new(0, 0));
        assert_eq!(snap.phase, Phase::AwaitingSelection);
        assert_eq!(snap.current_player, Player::One);
        assert_eq!(snap.turn_count, 1);
        assert_eq!(*snap.inventory(Player::Two), Inventory::starting());
        assert!(snap.destinations.is_empty());
        assert!(snap.playable());
    }

    #[test]
    fn test_snapshot_into_overwrites_every_field() {
        let mut ctl = TurnController::new();
        ctl.apply(crate::types::Intent::Select).unwrap();

        let mut reused = ctl.snapshot();
        ctl.apply(crate::types::Intent::Restart).unwrap();
        ctl.snapshot_into(&mut reused);

        assert_eq!(reused, TurnController::new().snapshot());
    }
}
