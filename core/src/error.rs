use crate::Coord;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("A {columns}x{rows} board has an odd number of cards, pairs cannot be formed")]
    OddCardCount { columns: Coord, rows: Coord },
    #[error("Deck length does not match declared board size")]
    BoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
