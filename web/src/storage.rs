use gloo::storage::{LocalStorage, Storage};
use pairflip_core::{Difficulty, ScoreStore};

use crate::utils::StorageKey;

impl StorageKey for Difficulty {
    const KEY: &'static str = "pairflip:difficulty";
}

/// Best scores kept in the browser's LocalStorage, one numeric entry per difficulty.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct LocalScoreStore;

impl LocalScoreStore {
    const PREFIX: &'static str = "pairflip:best:";

    pub(crate) fn key(difficulty: Difficulty) -> String {
        format!("{}{}", Self::PREFIX, difficulty.key())
    }
}

impl ScoreStore for LocalScoreStore {
    fn get_best(&self, difficulty: Difficulty) -> Option<u32> {
        LocalStorage::get(Self::key(difficulty)).ok()
    }

    fn set_best(&mut self, difficulty: Difficulty, moves: u32) {
        if let Err(err) = LocalStorage::set(Self::key(difficulty), moves) {
            log::error!("Could not save best score to local storage: {:?}", err);
        }
    }
}
