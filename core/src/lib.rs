#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use score::*;
pub use session::*;
pub use timer::*;
pub use types::*;

mod card;
mod controller;
mod engine;
mod error;
mod generator;
mod render;
mod score;
mod session;
mod timer;
mod types;

/// Validated board dimensions, always holding an even, non-zero number of cards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    columns: Coord,
    rows: Coord,
}

impl GameConfig {
    const fn new_unchecked(columns: Coord, rows: Coord) -> Self {
        Self { columns, rows }
    }

    pub fn new(columns: Coord, rows: Coord) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mult(columns, rows) % 2 != 0 {
            return Err(GameError::OddCardCount { columns, rows });
        }
        Ok(Self::new_unchecked(columns, rows))
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn size(&self) -> Coord2 {
        (self.columns, self.rows)
    }

    pub const fn total_cards(&self) -> CardCount {
        mult(self.columns, self.rows)
    }

    pub const fn pair_count(&self) -> CardCount {
        self.total_cards() / 2
    }
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    /// Stable identifier, used to key persisted best scores.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|difficulty| difficulty.key() == key)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy (3x4)",
            Self::Hard => "Hard (4x6)",
        }
    }

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::new_unchecked(4, 3),
            Self::Hard => GameConfig::new_unchecked(6, 4),
        }
    }
}

/// A deck laid out row-major onto the grid of its [`GameConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cards: Array2<Card>,
}

impl Board {
    pub fn from_deck(config: GameConfig, deck: &[Symbol]) -> Result<Self> {
        if deck.len() != usize::from(config.total_cards()) {
            return Err(GameError::BoardShape);
        }

        let columns = usize::from(config.columns());
        let cards = Array2::from_shape_fn(config.size().to_nd_index(), |(x, y)| {
            Card::new((x as Coord, y as Coord), deck[y * columns + x])
        });
        Ok(Self { config, cards })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn columns(&self) -> Coord {
        self.config.columns()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn pair_count(&self) -> CardCount {
        self.config.pair_count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (columns, rows) = self.config.size();
        if coords.0 < columns && coords.1 < rows {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn card_at(&self, coords: Coord2) -> Result<&Card> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    /// Cards in deck order, row by row.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        let (columns, rows) = self.config.size();
        (0..rows).flat_map(move |y| (0..columns).map(move |x| &self[(x, y)]))
    }

    pub(crate) fn set_visibility(&mut self, coords: Coord2, visibility: Visibility) {
        self.cards[coords.to_nd_index()].set_visibility(visibility);
    }
}

impl Index<Coord2> for Board {
    type Output = Card;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cards[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    FirstPick(Coord2),
    Matched(Coord2, Coord2),
    Mismatched(Coord2, Coord2),
    Won(Coord2, Coord2),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            FirstPick(_) => true,
            Matched(..) => true,
            Mismatched(..) => true,
            Won(..) => true,
        }
    }

    /// Whether this selection completed a pair-selection and counted as a move.
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Matched(..) | Self::Mismatched(..) | Self::Won(..))
    }
}
