/// Errors at the engine boundary.
///
/// `OutOfBounds` and `CellOccupied` are caller-discipline violations:
/// moves drawn from `Board::available_moves` can never trigger them, so
/// drivers treat them as fatal rather than recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already empty")]
    CellEmpty { row: usize, col: usize },

    #[error("no moves available")]
    NoAvailableMoves,
}
