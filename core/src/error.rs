use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board needs at least one column and one row")]
    EmptyBoard,
    #[error("mine count exceeds board capacity once the first-click safe zone is reserved")]
    TooManyMines,
    #[error("coordinates outside the board")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
