use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::minimax::best_move;
use crate::session_rng::SessionRng;
use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    Random,
    Minimax,
}

/// Picks a move for the side currently to play, or `None` when the
/// game state has no moves left.
pub fn calculate_move(
    bot_type: BotType,
    state: &GameState,
    rng: &mut SessionRng,
) -> Option<Position> {
    match bot_type {
        BotType::Random => calculate_random_move(state, rng),
        BotType::Minimax => calculate_minimax_move(state),
    }
}

pub fn calculate_random_move(state: &GameState, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = state.board().available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Runs the search on a clone of the driver's board; the apply/undo
/// backtracking never touches the state passed in.
pub fn calculate_minimax_move(state: &GameState) -> Option<Position> {
    let mut board = state.board().clone();
    best_move(&mut board, state.current_mark()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, Mark};

    #[test]
    fn test_random_bot_plays_only_legal_moves() {
        let mut rng = SessionRng::new(3);
        let mut state = GameState::new();

        while !state.is_over() {
            let mv = calculate_move(BotType::Random, &state, &mut rng)
                .expect("game not over, a move must exist");
            state.place_mark(mv).unwrap();
        }
    }

    #[test]
    fn test_minimax_bot_leaves_driver_state_untouched() {
        let mut state = GameState::new();
        state.place_mark(Position::new(0, 0)).unwrap();
        let snapshot = state.board().clone();

        calculate_minimax_move(&state).unwrap();

        assert_eq!(*state.board(), snapshot);
    }

    #[test]
    fn test_bots_report_no_move_on_finished_board() {
        let mut rng = SessionRng::new(5);
        let mut state = GameState::new();
        let moves = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 0),
            (2, 0),
            (1, 1),
            (2, 2),
            (2, 1),
        ];
        for (row, col) in moves {
            state.place_mark(Position::new(row, col)).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Draw);

        assert_eq!(calculate_move(BotType::Random, &state, &mut rng), None);
        assert_eq!(calculate_move(BotType::Minimax, &state, &mut rng), None);
    }

    #[test]
    fn test_minimax_bot_takes_an_immediate_win() {
        let mut state = GameState::new();
        // X X . / O O . / . . . with X to move.
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            state.place_mark(Position::new(row, col)).unwrap();
        }
        assert_eq!(state.current_mark(), Mark::X);

        let mv = calculate_minimax_move(&state).unwrap();
        assert_eq!(mv, Position::new(0, 2));
    }
}
