//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! - **Size**: 11x11 cells, coordinates `(x, y)` with `x` the column and `y` the row
//! - **Halves**: rows 0-5 belong to player 1, rows 6-10 to player 2
//! - **Central region**: rows and columns 3-7, scored at double weight
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 11 | Cells per side |
//! | `HALF_LAST_ROW` | 5 | Last row of player 1's half |
//! | `CENTER_MIN` / `CENTER_MAX` | 3 / 7 | Bounds of the central region |
//! | `CENTER_WEIGHT` | 2 | Territory weight inside the central region |
//! | `TURN_LIMIT` | 30 | The game ends once the turn counter exceeds this |
//!
//! # Examples
//!
//! ```
//! use strategos_types::{PieceKind, Player, Position, BOARD_SIZE};
//!
//! assert_eq!(PieceKind::from_letter('n'), Some(PieceKind::Knight));
//! assert_eq!(Player::One.opponent(), Player::Two);
//!
//! let pos = Position::new(3, 7);
//! assert!(pos.in_bounds());
//! assert_eq!(pos.owner(), Player::Two);
//! assert_eq!(BOARD_SIZE, 11);
//! ```

/// Board size in cells per side (11x11)
pub const BOARD_SIZE: u8 = 11;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Last row (inclusive) of player 1's half. Rows after it belong to player 2.
pub const HALF_LAST_ROW: i8 = 5;

/// First row/column (inclusive) of the central 5x5 region
pub const CENTER_MIN: i8 = 3;

/// Last row/column (inclusive) of the central 5x5 region
pub const CENTER_MAX: i8 = 7;

/// Territory weight of a controlled cell inside the central region
pub const CENTER_WEIGHT: u32 = 2;

/// Territory weight of a controlled cell outside the central region
pub const EDGE_WEIGHT: u32 = 1;

/// Number of turns played before the game is decided on territory
pub const TURN_LIMIT: u32 = 30;

/// Upper bound on destinations of a single piece (rook or bishop reach on 11x11)
pub const MAX_DESTINATIONS: usize = 2 * (BOARD_SIZE as usize - 1);

/// Placement stock each player starts with, indexed by [`PieceKind::index`]
///
/// King x1, Knight x2, Bishop x1, Rook x1, Stone x10.
pub const STARTING_STOCK: [u8; PieceKind::COUNT] = [1, 2, 1, 1, 10];


/// The five piece kinds
///
/// - **King**: one step in any direction; losing it loses the game
/// - **Knight**: L-shaped jump, ignores pieces in between
/// - **Bishop**: any distance diagonally along a clear path
/// - **Rook**: any distance orthogonally along a clear path
/// - **Stone**: placed only, never moves, cannot be captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Knight,
    Bishop,
    Rook,
    Stone,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 5;

    /// All kinds in inventory order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::King,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Stone,
    ];

    /// Dense index for per-kind tables (inventory order)
    pub fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Stone => 4,
        }
    }

    /// Non-zero grid code used by snapshots (0 is an empty cell)
    pub fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=5 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Whether the piece can ever be selected and moved
    pub fn is_movable(self) -> bool {
        self != PieceKind::Stone
    }

    /// Kind for a board letter (case-insensitive), see [`PieceKind::letter`]
    ///
    /// # Examples
    ///
    /// ```
    /// use strategos_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_letter('n'), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_letter('O'), Some(PieceKind::Stone));
    /// assert_eq!(PieceKind::from_letter('q'), None);
    /// ```
    pub fn from_letter(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.letter() == c.to_ascii_uppercase())
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Stone => "stone",
        }
    }

    /// Single uppercase letter shown on the board and used as the place key
    pub fn letter(&self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Stone => 'O',
        }
    }
}

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, owns rows 0-5
    One,
    /// Owns rows 6-10
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to humans (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Dense index for per-player tables
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Whether row `y` lies in this player's half
    pub fn owns_row(self, y: i8) -> bool {
        match self {
            Player::One => y <= HALF_LAST_ROW,
            Player::Two => y > HALF_LAST_ROW,
        }
    }
}

/// A board coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Whether the position lies on the 11x11 board
    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.x) && (0..BOARD_SIZE as i8).contains(&self.y)
    }

    /// The position shifted by `(dx, dy)` (may leave the board)
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Owner of a piece standing here, derived from the board half
    pub fn owner(&self) -> Player {
        if self.y <= HALF_LAST_ROW {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Whether the position lies in the central 5x5 region
    pub fn is_central(&self) -> bool {
        (CENTER_MIN..=CENTER_MAX).contains(&self.x) && (CENTER_MIN..=CENTER_MAX).contains(&self.y)
    }
}

/// Cursor step directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)`; rows grow downwards
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Discrete user intents dispatched to the turn controller
///
/// One intent is produced per input event, by the keyboard map or by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor one cell
    MoveCursor(Direction),
    /// Select the current player's piece under the cursor
    Select,
    /// Place a piece from the current player's stock at the cursor
    Place(PieceKind),
    /// Move the selected piece to the cursor
    MoveToCursor,
    /// Drop the current selection
    Cancel,
    /// Start a new game from the opening position
    Restart,
    /// Leave the game
    Quit,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell holding the given piece; its owner is the half it sits in
pub type Cell = Option<PieceKind>;
