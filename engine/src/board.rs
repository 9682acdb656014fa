use std::fmt;

use crate::error::EngineError;
use crate::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals, in that order.
/// The scan order is fixed so that tie-breaks stay deterministic.
pub const WIN_CONDITIONS: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_cells(cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row][col]
    }

    /// Empty cells in row-major order: row 0 first, left to right.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_none() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn apply(&mut self, mv: Position, mark: Mark) -> Result<(), EngineError> {
        if mv.row >= BOARD_SIZE || mv.col >= BOARD_SIZE {
            return Err(EngineError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.cells[mv.row][mv.col].is_some() {
            return Err(EngineError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.cells[mv.row][mv.col] = Some(mark);
        Ok(())
    }

    pub fn undo(&mut self, mv: Position) -> Result<(), EngineError> {
        if mv.row >= BOARD_SIZE || mv.col >= BOARD_SIZE {
            return Err(EngineError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.cells[mv.row][mv.col].is_none() {
            return Err(EngineError::CellEmpty {
                row: mv.row,
                col: mv.col,
            });
        }
        self.cells[mv.row][mv.col] = None;
        Ok(())
    }

    /// All X lines are checked before any O line, so a board that
    /// somehow holds a completed line for both sides reports X. Correct
    /// play never produces such a board; the order only exists to keep
    /// the result deterministic.
    pub fn winner(&self) -> Option<Mark> {
        for mark in [Mark::X, Mark::O] {
            for condition in &WIN_CONDITIONS {
                if condition
                    .iter()
                    .all(|&(row, col)| self.cells[row][col] == Some(mark))
                {
                    return Some(mark);
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let line: Vec<&str> = cells
                .iter()
                .map(|cell| match cell {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => ".",
                })
                .collect();
            write!(f, "{}", line.join(" | "))?;
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
                writeln!(f, "{}", "-".repeat(9))?;
            }
        }
        Ok(())
    }
}
