//! Board model - grid, cursor, selection, territory and king-capture detection
//!
//! `BoardModel` is the single source of truth for where pieces stand. It never
//! touches inventories or turn order; the turn controller layers those on top.

use tracing::{debug, info};

use crate::board::Board;
use crate::rules::{self, Destinations};
use crate::types::*;

/// Starting pieces of player 1; player 2 mirrors them through the board centre.
const PLAYER_ONE_SETUP: [(i8, i8, PieceKind); 5] = [
    (0, 0, PieceKind::King),
    (0, 1, PieceKind::Knight),
    (0, 2, PieceKind::Knight),
    (1, 0, PieceKind::Bishop),
    (2, 0, PieceKind::Rook),
];

/// Grid plus cursor and selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel {
    board: Board,
    cursor: Position,
    selection: Option<Position>,
    /// Valid destinations of the selected piece; empty without a selection.
    destinations: Destinations,
}

impl BoardModel {
    /// Create a model with the starting position already set up
    pub fn new() -> Self {
        let mut model = Self::from_board(Board::new());
        model.initialize();
        model
    }

    /// Wrap an arbitrary grid, cursor at the origin and nothing selected
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            cursor: Position::default(),
            selection: None,
            destinations: Destinations::new(),
        }
    }

    /// Reset to the starting position
    pub fn initialize(&mut self) {
        self.board.clear();

        let last = BOARD_SIZE as i8 - 1;
        for &(x, y, kind) in PLAYER_ONE_SETUP.iter() {
            self.board.set(Position::new(x, y), Some(kind));
            self.board.set(Position::new(last - x, last - y), Some(kind));
        }

        self.cursor = Position::default();
        self.clear_selection();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `pos`, `None` when off the board
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.board.get(pos)
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn destinations(&self) -> &[Position] {
        &self.destinations
    }

    /// The cached destination set itself, for copying into snapshots
    pub fn destination_set(&self) -> &Destinations {
        &self.destinations
    }

    pub fn is_destination(&self, pos: Position) -> bool {
        self.destinations.contains(&pos)
    }

    /// Step the cursor one cell; stays put at the edge.
    ///
    /// Returns whether the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let next = self.cursor.offset(dx, dy);
        if !next.in_bounds() {
            return false;
        }
        self.cursor = next;
        true
    }

    /// Place `kind` for `player` at the cursor.
    ///
    /// Fails without mutation unless the cell is empty and lies in the
    /// player's own half.
    pub fn place_piece(&mut self, kind: PieceKind, player: Player) -> bool {
        let at = self.cursor;
        if !self.board.is_empty(at) {
            debug!(x = at.x, y = at.y, "placement rejected: cell occupied");
            return false;
        }
        if !player.owns_row(at.y) {
            debug!(
                x = at.x,
                y = at.y,
                player = player.number(),
                "placement rejected: outside own half"
            );
            return false;
        }

        self.board.set(at, Some(kind));
        info!(
            piece = kind.as_str(),
            player = player.number(),
            x = at.x,
            y = at.y,
            "piece placed"
        );
        true
    }

    /// Select `player`'s movable piece under the cursor and cache its destinations.
    pub fn select_piece(&mut self, player: Player) -> bool {
        let at = self.cursor;
        let Some((kind, owner)) = self.board.piece_at(at) else {
            return false;
        };
        if !kind.is_movable() || owner != player {
            return false;
        }

        self.selection = Some(at);
        self.destinations = rules::destinations(kind, at, &self.board);
        debug!(
            piece = kind.as_str(),
            x = at.x,
            y = at.y,
            destinations = self.destinations.len(),
            "piece selected"
        );
        true
    }

    /// Move the selected piece to the cursor, capturing whatever opponent piece stands there.
    pub fn move_piece(&mut self) -> bool {
        let Some(from) = self.selection else {
            return false;
        };
        let to = self.cursor;
        if !self.is_destination(to) {
            return false;
        }
        let Some(Some(kind)) = self.board.get(from) else {
            return false;
        };

        if let Some((captured, owner)) = self.board.piece_at(to) {
            info!(
                piece = kind.as_str(),
                captured = captured.as_str(),
                captured_owner = owner.number(),
                x = to.x,
                y = to.y,
                "piece captured"
            );
        }

        self.board.set(to, Some(kind));
        self.board.set(from, None);
        self.clear_selection();
        debug!(
            piece = kind.as_str(),
            from_x = from.x,
            from_y = from.y,
            to_x = to.x,
            to_y = to.y,
            "piece moved"
        );
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.destinations.clear();
    }

    /// Territory of `player`: every occupied cell in their half, central cells counting double.
    pub fn count_territory(&self, player: Player) -> u32 {
        self.board
            .pieces()
            .filter(|(pos, _)| pos.owner() == player)
            .map(|(pos, _)| {
                if pos.is_central() {
                    CENTER_WEIGHT
                } else {
                    EDGE_WEIGHT
                }
            })
            .sum()
    }

    /// Score shown for `player`; identical to [`BoardModel::count_territory`].
    pub fn score(&self, player: Player) -> u32 {
        self.count_territory(player)
    }

    /// Whether `player` still has a King in their half
    pub fn has_king(&self, player: Player) -> bool {
        self.board
            .pieces()
            .any(|(pos, kind)| kind == PieceKind::King && pos.owner() == player)
    }

    /// A player has lost their King.
    pub fn is_game_over(&self) -> bool {
        !self.has_king(Player::One) || !self.has_king(Player::Two)
    }

    /// Winner by king capture: the player who still has a King while the other has none.
    pub fn winner(&self) -> Option<Player> {
        match (self.has_king(Player::One), self.has_king(Player::Two)) {
            (true, false) => Some(Player::One),
            (false, true) => Some(Player::Two),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_cursor(&mut self, pos: Position) {
        assert!(pos.in_bounds());
        self.cursor = pos;
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}
