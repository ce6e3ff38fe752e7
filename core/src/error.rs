use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid width and height must both be positive")]
    InvalidDimension,
    #[error("Coordinates are outside the grid")]
    OutOfBounds,
    #[error("Too many mines, at least one cell must stay safe")]
    TooManyMines,
    #[error("A game needs at least one mine")]
    NoMines,
    #[error("Mine layout does not match the configured mine count")]
    MineCountMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
