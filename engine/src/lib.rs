mod board;
mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod types;

pub mod logger;
pub mod session_rng;

pub use board::{Board, BOARD_SIZE, WIN_CONDITIONS};
pub use bot_controller::{calculate_minimax_move, calculate_move, calculate_random_move, BotType};
pub use error::EngineError;
pub use game_state::GameState;
pub use minimax::{best_move, minimax, DRAW_SCORE, O_WIN_SCORE, X_WIN_SCORE};
pub use session_rng::SessionRng;
pub use types::{GameStatus, Mark, Position};
