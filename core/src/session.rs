use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything owned by one game from deal to win; replaced wholesale on restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub difficulty: Difficulty,
    pub generation: Generation,
    pub engine: MatchEngine,
    pub timer: Timer,
    pub announced: bool,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, generation: Generation, engine: MatchEngine) -> Self {
        Self {
            difficulty,
            generation,
            engine,
            timer: Timer::started(),
            announced: false,
        }
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    pub fn win_message(&self) -> String {
        format!(
            "🎉 You Won! Moves: {} | Time: {}",
            self.engine.move_count(),
            self.timer.display()
        )
    }
}
