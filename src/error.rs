/// Errors reported by the game session and its coordinate boundary.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the 8x8 board.
    #[error("position ({x}, {y}) is off the board")]
    OutOfBounds { x: usize, y: usize },

    /// Target square does not capture anything for the mover.
    #[error("illegal move at ({x}, {y})")]
    IllegalMove { x: usize, y: usize },

    #[error("unknown difficulty value {0}")]
    InvalidDifficulty(u8),

    #[error("game is not in progress")]
    NotInProgress,

    #[error("it is not this side's turn")]
    WrongTurn,

    /// A pass was requested while a legal move exists.
    #[error("cannot pass while a legal move is available")]
    PassNotAllowed,

    #[error("difficulty can only be changed between games")]
    GameInProgress,
}

/// Rejected heuristic configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// Score adjustment outside `0..=max`.
    #[error("{field} must be within 0..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        max: i32,
    },
}
