use alloc::collections::BTreeMap;

use crate::Difficulty;

/// Durable best-score keeper, one lowest move count per difficulty.
pub trait ScoreStore {
    fn get_best(&self, difficulty: Difficulty) -> Option<u32>;
    fn set_best(&mut self, difficulty: Difficulty, moves: u32);
}

/// Stores `moves` when nothing is recorded yet or it beats the stored value. Returns whether it was stored.
pub fn record_if_better<S: ScoreStore + ?Sized>(
    store: &mut S,
    difficulty: Difficulty,
    moves: u32,
) -> bool {
    match store.get_best(difficulty) {
        Some(best) if best <= moves => false,
        previous => {
            log::debug!(
                "new best for {}: {} moves (was {:?})",
                difficulty.key(),
                moves,
                previous
            );
            store.set_best(difficulty, moves);
            true
        }
    }
}

/// In-process store for headless use.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryScoreStore {
    best: BTreeMap<Difficulty, u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get_best(&self, difficulty: Difficulty) -> Option<u32> {
        self.best.get(&difficulty).copied()
    }

    fn set_best(&mut self, difficulty: Difficulty, moves: u32) {
        self.best.insert(difficulty, moves);
    }
}
