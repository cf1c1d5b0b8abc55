use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> OneSelected
/// - OneSelected -> Idle (pair matched)
/// - OneSelected -> Resolving (pair mismatched)
/// - OneSelected -> Won (last pair matched)
/// - Resolving -> Idle (mismatched pair hidden again)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    Idle,
    OneSelected(Coord2),
    Resolving(Coord2, Coord2),
    Won,
}

impl TurnState {
    /// Input is locked while a mismatched pair waits to be hidden.
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Resolving(..))
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Turn and scoring rules for one dealt board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    board: Board,
    state: TurnState,
    move_count: Saturating<u32>,
    match_count: CardCount,
}

impl MatchEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            move_count: Saturating(0),
            match_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count.0
    }

    pub fn match_count(&self) -> CardCount {
        self.match_count
    }

    pub fn pair_count(&self) -> CardCount {
        self.board.pair_count()
    }

    pub fn card_at(&self, coords: Coord2) -> Result<&Card> {
        self.board.card_at(coords)
    }

    /// Whether a selection at `coords` would be accepted right now.
    pub fn can_select(&self, coords: Coord2) -> bool {
        let Ok(card) = self.board.card_at(coords) else {
            return false;
        };

        match self.state {
            TurnState::Idle => !card.is_matched(),
            TurnState::OneSelected(first) => first != coords && !card.is_matched(),
            TurnState::Resolving(..) | TurnState::Won => false,
        }
    }

    pub fn select(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if !self.can_select(coords) {
            log::trace!("ignored selection at {:?} in {:?}", coords, self.state);
            return Ok(NoChange);
        }

        self.board.set_visibility(coords, Visibility::Revealed);

        let first = match self.state {
            TurnState::OneSelected(first) => first,
            _ => {
                self.state = TurnState::OneSelected(coords);
                return Ok(FirstPick(coords));
            }
        };

        self.move_count += 1;

        if self.board[first].symbol() == self.board[coords].symbol() {
            self.board.set_visibility(first, Visibility::Matched);
            self.board.set_visibility(coords, Visibility::Matched);
            self.match_count += 1;

            if self.match_count == self.pair_count() {
                self.state = TurnState::Won;
                Ok(Won(first, coords))
            } else {
                self.state = TurnState::Idle;
                Ok(Matched(first, coords))
            }
        } else {
            self.state = TurnState::Resolving(first, coords);
            Ok(Mismatched(first, coords))
        }
    }

    /// Hides a mismatched pair and unlocks input. Returns the hidden pair, `None` when nothing was resolving.
    pub fn resolve_mismatch(&mut self) -> Option<(Coord2, Coord2)> {
        let TurnState::Resolving(first, second) = self.state else {
            return None;
        };

        self.board.set_visibility(first, Visibility::Hidden);
        self.board.set_visibility(second, Visibility::Hidden);
        self.state = TurnState::Idle;
        Some((first, second))
    }
}
