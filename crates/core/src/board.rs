//! Board module - manages the game grid
//!
//! The board is an 11x11 grid where each cell is empty or holds a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..10 (left to right), y ranges 0..10 (top to bottom).
//! Pieces carry no owner tag: rows 0..=5 belong to player 1, rows 6..=10 to player 2.

use crate::types::{Cell, PieceKind, Player, Position, BOARD_SIZE, CELL_COUNT};

/// The game board - 11 columns x 11 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(pos: Position) -> Option<usize> {
        if !pos.in_bounds() {
            return None;
        }
        Some((pos.y as usize) * (BOARD_SIZE as usize) + (pos.x as usize))
    }

    /// Get cell at `pos`
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at `pos`
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// The piece at `pos` together with its owner, if any
    pub fn piece_at(&self, pos: Position) -> Option<(PieceKind, Player)> {
        self.get(pos).flatten().map(|kind| (kind, pos.owner()))
    }

    /// Iterate over every occupied cell as `(position, kind)`
    pub fn pieces(&self) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|kind| {
                let size = BOARD_SIZE as usize;
                (Position::new((idx % size) as i8, (idx / size) as i8), kind)
            })
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid as snapshot codes (0 = empty, otherwise [`PieceKind::code`])
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize]) {
        let size = BOARD_SIZE as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * size + x].map_or(0, PieceKind::code);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
