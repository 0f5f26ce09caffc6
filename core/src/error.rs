use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one cell")]
    InvalidDimension,
    #[error("Mine density must be within [0, 1]")]
    InvalidDensity,
    #[error("Cell index out of range")]
    IndexOutOfRange,
    #[error("Unknown difficulty preset")]
    UnknownDifficulty,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("No game in progress")]
    NoGame,
}

pub type Result<T> = core::result::Result<T, GameError>;
