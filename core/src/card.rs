use crate::Coord2;
use serde::{Deserialize, Serialize};

/// Pair identity shared by exactly two cards of a deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u16);

/// Player-visible face of a card.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl Visibility {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pos: Coord2,
    symbol: Symbol,
    visibility: Visibility,
}

impl Card {
    pub const fn new(pos: Coord2, symbol: Symbol) -> Self {
        Self {
            pos,
            symbol,
            visibility: Visibility::Hidden,
        }
    }

    pub const fn pos(&self) -> Coord2 {
        self.pos
    }

    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn is_matched(&self) -> bool {
        matches!(self.visibility, Visibility::Matched)
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}
