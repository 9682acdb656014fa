//! Exhaustive minimax over the full game tree.
//!
//! Scores are a flat +10 (X wins), -10 (O wins) or 0 (draw) with no
//! depth discount: the engine is indifferent between winning in one
//! move and winning in five. Known characteristic, kept as-is.
//!
//! There is deliberately no alpha-beta pruning and no transposition
//! cache. The tree is at most 9! leaf paths, and pruning could skip
//! candidates and change which of several equal-valued moves is
//! returned, breaking the first-in-scan-order tie-break.

use crate::board::Board;
use crate::error::EngineError;
use crate::types::{Mark, Position};

pub const X_WIN_SCORE: i32 = 10;
pub const O_WIN_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Game-theoretic value of the position with `to_move` to play,
/// assuming optimal play from both sides.
///
/// The search applies and undoes moves on the caller's board; the board
/// is bit-identical to its pre-call contents when this returns.
pub fn minimax(board: &mut Board, to_move: Mark) -> i32 {
    match board.winner() {
        Some(Mark::X) => return X_WIN_SCORE,
        Some(Mark::O) => return O_WIN_SCORE,
        None => {}
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    let mut best = match to_move {
        Mark::X => i32::MIN,
        Mark::O => i32::MAX,
    };

    for mv in moves {
        board
            .apply(mv, to_move)
            .expect("move taken from available_moves");
        let score = minimax(board, to_move.opponent());
        board.undo(mv).expect("undo of the move just applied");

        best = match to_move {
            Mark::X => best.max(score),
            Mark::O => best.min(score),
        };
    }

    best
}

/// The move with the best minimax value for `to_move`.
///
/// Candidates are tried in the board's row-major scan order and only a
/// strictly better score replaces the current choice, so among
/// equal-valued moves the first one in scan order wins. The tie-break
/// is incidental, not meaningful, but it is deterministic and tests
/// rely on it.
pub fn best_move(board: &mut Board, to_move: Mark) -> Result<Position, EngineError> {
    let mut chosen = None;
    let mut best_score = match to_move {
        Mark::X => i32::MIN,
        Mark::O => i32::MAX,
    };

    for mv in board.available_moves() {
        board
            .apply(mv, to_move)
            .expect("move taken from available_moves");
        let score = minimax(board, to_move.opponent());
        board.undo(mv).expect("undo of the move just applied");

        let improves = match to_move {
            Mark::X => score > best_score,
            Mark::O => score < best_score,
        };
        if improves {
            best_score = score;
            chosen = Some(mv);
        }
    }

    chosen.ok_or(EngineError::NoAvailableMoves)
}
