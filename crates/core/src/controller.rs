//! Turn controller - turn order, inventories and the select-then-target protocol
//!
//! The controller owns the one [`BoardModel`] of a game and is the only place
//! intents enter the core. Each accepted intent completes, turn bookkeeping
//! included, before the next one is looked at.

use tracing::{debug, info};

use crate::inventory::Inventory;
use crate::model::BoardModel;
use crate::rejection::Rejection;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Where the select-then-target protocol currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for a selection or a placement
    AwaitingSelection,
    /// A piece is selected; waiting for its destination or a cancel
    AwaitingTarget,
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    KingCaptured,
    TurnLimit,
}

/// Final result of a game; `winner` is `None` for a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub reason: EndReason,
    pub winner: Option<Player>,
}

/// Turn counter, player to move and both placement stocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GameSession {
    turn_count: u32,
    player_turn: Player,
    inventories: [Inventory; 2],
}

impl GameSession {
    fn new() -> Self {
        Self {
            turn_count: 1,
            player_turn: Player::One,
            inventories: [Inventory::starting(); 2],
        }
    }

    fn inventory(&self, player: Player) -> &Inventory {
        &self.inventories[player.index()]
    }

    fn inventory_mut(&mut self, player: Player) -> &mut Inventory {
        &mut self.inventories[player.index()]
    }

    /// Hand the turn to the other player.
    fn advance(&mut self) {
        self.turn_count += 1;
        self.player_turn = self.player_turn.opponent();
    }

    /// Turn limit reached without a king capture
    fn turns_exhausted(&self) -> bool {
        self.turn_count > TURN_LIMIT
    }
}

/// Dispatches intents to the board and keeps turn state
#[derive(Debug, Clone)]
pub struct TurnController {
    board: BoardModel,
    session: GameSession,
    phase: Phase,
    last_rejection: Option<Rejection>,
    quit_requested: bool,
}

impl TurnController {
    /// New game from the starting position
    pub fn new() -> Self {
        Self::with_board(BoardModel::new())
    }

    /// New session, player 1 to move, on an already prepared board
    pub fn with_board(board: BoardModel) -> Self {
        Self {
            board,
            session: GameSession::new(),
            phase: Phase::AwaitingSelection,
            last_rejection: None,
            quit_requested: false,
        }
    }

    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn_count(&self) -> u32 {
        self.session.turn_count
    }

    pub fn current_player(&self) -> Player {
        self.session.player_turn
    }

    pub fn inventory(&self, player: Player) -> &Inventory {
        self.session.inventory(player)
    }

    pub fn score(&self, player: Player) -> u32 {
        self.board.score(player)
    }

    pub fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// The result once the game has ended.
    ///
    /// King capture is decided first; otherwise the game runs until the turn
    /// counter passes the limit and the larger territory wins.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.board.is_game_over() {
            return Some(Outcome {
                reason: EndReason::KingCaptured,
                winner: self.board.winner(),
            });
        }

        if self.session.turns_exhausted() {
            let one = self.board.count_territory(Player::One);
            let two = self.board.count_territory(Player::Two);
            let winner = match one.cmp(&two) {
                std::cmp::Ordering::Greater => Some(Player::One),
                std::cmp::Ordering::Less => Some(Player::Two),
                std::cmp::Ordering::Equal => None,
            };
            return Some(Outcome {
                reason: EndReason::TurnLimit,
                winner,
            });
        }

        None
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Winner of a finished game; `None` while running or on a draw
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|o| o.winner)
    }

    /// Apply one intent.
    ///
    /// On rejection nothing changes except the remembered rejection.
    pub fn apply(&mut self, intent: Intent) -> Result<(), Rejection> {
        let result = self.dispatch(intent);
        match result {
            Ok(()) => self.last_rejection = None,
            Err(reason) => {
                debug!(?intent, %reason, "intent rejected");
                self.last_rejection = Some(reason);
            }
        }
        result
    }

    fn dispatch(&mut self, intent: Intent) -> Result<(), Rejection> {
        match intent {
            Intent::Quit => {
                self.quit_requested = true;
                Ok(())
            }
            Intent::Restart => {
                self.restart();
                Ok(())
            }
            Intent::MoveCursor(direction) => {
                self.ensure_running()?;
                self.board.move_cursor(direction);
                Ok(())
            }
            Intent::Select => {
                self.ensure_running()?;
                self.select()
            }
            Intent::Place(kind) => {
                self.ensure_running()?;
                self.place(kind)
            }
            Intent::MoveToCursor => {
                self.ensure_running()?;
                self.move_selected()
            }
            Intent::Cancel => {
                self.ensure_running()?;
                self.cancel()
            }
        }
    }

    fn ensure_running(&self) -> Result<(), Rejection> {
        if self.is_game_over() {
            return Err(Rejection::GameOver);
        }
        Ok(())
    }

    fn select(&mut self) -> Result<(), Rejection> {
        if self.phase == Phase::AwaitingTarget {
            return Err(Rejection::AwaitingTarget);
        }
        if !self.board.select_piece(self.current_player()) {
            return Err(Rejection::IllegalSelection);
        }
        self.phase = Phase::AwaitingTarget;
        Ok(())
    }

    fn place(&mut self, kind: PieceKind) -> Result<(), Rejection> {
        if self.phase == Phase::AwaitingTarget {
            return Err(Rejection::AwaitingTarget);
        }
        let player = self.current_player();
        if !self.session.inventory(player).has(kind) {
            return Err(Rejection::OutOfStock { kind });
        }
        if !self.board.place_piece(kind, player) {
            return Err(Rejection::IllegalPlacement);
        }
        self.session.inventory_mut(player).take(kind);
        self.end_turn();
        Ok(())
    }

    fn move_selected(&mut self) -> Result<(), Rejection> {
        if self.phase != Phase::AwaitingTarget {
            return Err(Rejection::NothingSelected);
        }
        if !self.board.move_piece() {
            return Err(Rejection::IllegalMove);
        }
        self.phase = Phase::AwaitingSelection;
        self.end_turn();
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), Rejection> {
        if self.phase != Phase::AwaitingTarget {
            return Err(Rejection::NothingSelected);
        }
        self.board.clear_selection();
        self.phase = Phase::AwaitingSelection;
        Ok(())
    }

    fn end_turn(&mut self) {
        self.session.advance();
        debug!(
            turn = self.session.turn_count,
            player = self.session.player_turn.number(),
            "turn advanced"
        );

        if let Some(outcome) = self.outcome() {
            info!(
                reason = ?outcome.reason,
                winner = outcome.winner.map_or(0, Player::number),
                score_one = self.board.score(Player::One),
                score_two = self.board.score(Player::Two),
                "game over"
            );
        }
    }

    /// Start over from the starting position.
    fn restart(&mut self) {
        self.board.initialize();
        self.session = GameSession::new();
        self.phase = Phase::AwaitingSelection;
        self.quit_requested = false;
        info!("new game");
    }

    /// Fill `out` with the current state without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.board().write_u8_grid(&mut out.board);

        out.cursor = self.board.cursor();
        out.selection = self.board.selection();
        out.destinations.clone_from(self.board.destination_set());
        out.phase = self.phase;
        out.current_player = self.session.player_turn;
        out.turn_count = self.session.turn_count;
        out.inventories = self.session.inventories;
        out.scores = [
            self.board.score(Player::One),
            self.board.score(Player::Two),
        ];
        out.outcome = self.outcome();
        out.last_rejection = self.last_rejection;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
