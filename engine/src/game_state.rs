use crate::board::Board;
use crate::types::{GameStatus, Mark, Position};

/// Turn-taking wrapper around a [`Board`], owned by the driver loop for
/// the duration of one game. X always moves first.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
    history: Vec<(Mark, Position)>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn history(&self) -> &[(Mark, Position)] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    /// Places the current mark and advances the turn. Unlike the raw
    /// board mutations, this path validates everything, since drivers
    /// may feed it moves that did not come from `available_moves`.
    pub fn place_mark(&mut self, mv: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        self.board
            .apply(mv, self.current_mark)
            .map_err(|e| e.to_string())?;

        self.history.push((self.current_mark, mv));
        self.last_move = Some(mv);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = self.board.winner() {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
