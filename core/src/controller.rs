use core::time::Duration;

use crate::*;

pub const UNFLIP_DELAY: Duration = Duration::from_millis(1000);
pub const WIN_MESSAGE_DELAY: Duration = Duration::from_millis(500);
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Hide a mismatched pair again and unlock input.
    Unflip,
    /// Show the win message of a finished game.
    AnnounceWin,
}

impl DeferredAction {
    pub const fn delay(self) -> Duration {
        match self {
            Self::Unflip => UNFLIP_DELAY,
            Self::AnnounceWin => WIN_MESSAGE_DELAY,
        }
    }
}

/// One-shot action the host runs after [`Deferred::delay`], then hands back to [`GameController::fire`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Deferred {
    pub generation: Generation,
    pub action: DeferredAction,
}

impl Deferred {
    pub const fn delay(&self) -> Duration {
        self.action.delay()
    }
}

/// What a card click did, plus the follow-up the host has to schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub outcome: SelectOutcome,
    pub deferred: Option<Deferred>,
}

impl Selection {
    const IGNORED: Self = Self {
        outcome: SelectOutcome::NoChange,
        deferred: None,
    };

    pub const fn has_update(&self) -> bool {
        self.outcome.has_update()
    }
}

/// Owns the current session and routes input, clock ticks and deferred actions into it.
#[derive(Debug)]
pub struct GameController<R, S> {
    renderer: R,
    store: S,
    difficulty: Difficulty,
    generation: Generation,
    session: Option<GameSession>,
}

impl<R: BoardRenderer, S: ScoreStore> GameController<R, S> {
    pub fn new(renderer: R, store: S) -> Self {
        Self {
            renderer,
            store,
            difficulty: Default::default(),
            generation: Default::default(),
            session: None,
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    pub fn load_best_scores(&mut self) {
        for difficulty in Difficulty::ALL {
            let best = self.store.get_best(difficulty);
            self.renderer.show_best_score(difficulty, best);
        }
    }

    pub fn start_game(&mut self, seed: u64) -> Generation {
        self.start_game_with(RandomDeckGenerator::new(seed))
    }

    pub fn start_game_with<G: DeckGenerator>(&mut self, generator: G) -> Generation {
        if let Some(previous) = self.session.as_mut() {
            if previous.timer.stop() {
                log::debug!(
                    "generation {} abandoned after {}s",
                    previous.generation.value(),
                    previous.timer.elapsed_secs()
                );
            }
        }

        self.generation = self.generation.next();
        let board = generator.generate(self.difficulty.config());
        self.renderer.render_board(&board);

        let session = GameSession::new(self.difficulty, self.generation, MatchEngine::new(board));
        self.renderer.update_move_count(0);
        self.renderer.update_match_count(0);
        self.renderer.clear_win_message();
        self.renderer.set_timer_display(&session.timer.display());
        self.session = Some(session);

        log::debug!(
            "started {} game, generation {}",
            self.difficulty.key(),
            self.generation.value()
        );
        self.generation
    }

    /// Changing difficulty restarts a running game, otherwise it only applies to the next start.
    pub fn select_difficulty(&mut self, difficulty: Difficulty, seed: u64) -> Option<Generation> {
        self.difficulty = difficulty;
        self.is_started().then(|| self.start_game(seed))
    }

    pub fn on_card_selected(&mut self, coords: Coord2) -> Selection {
        let Some(session) = self.session.as_mut() else {
            log::trace!("selection at {:?} before any game started", coords);
            return Selection::IGNORED;
        };

        let outcome = match session.engine.select(coords) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("rejected selection at {:?}: {}", coords, err);
                return Selection::IGNORED;
            }
        };
        log::trace!("select {:?}: {:?}", coords, outcome);

        let deferred = self.apply(outcome);
        Selection { outcome, deferred }
    }

    fn apply(&mut self, outcome: SelectOutcome) -> Option<Deferred> {
        use SelectOutcome::*;

        let session = self.session.as_mut()?;
        let board = session.engine.board();
        match outcome {
            NoChange => None,
            FirstPick(pos) => {
                self.renderer.set_card_visibility(&board[pos]);
                None
            }
            Matched(first, second) => {
                self.renderer.set_card_visibility(&board[first]);
                self.renderer.set_card_visibility(&board[second]);
                self.renderer.update_move_count(session.engine.move_count());
                self.renderer.update_match_count(session.engine.match_count());
                None
            }
            Mismatched(_, second) => {
                self.renderer.set_card_visibility(&board[second]);
                self.renderer.update_move_count(session.engine.move_count());
                Some(Deferred {
                    generation: session.generation,
                    action: DeferredAction::Unflip,
                })
            }
            Won(first, second) => {
                self.renderer.set_card_visibility(&board[first]);
                self.renderer.set_card_visibility(&board[second]);
                self.renderer.update_move_count(session.engine.move_count());
                self.renderer.update_match_count(session.engine.match_count());

                session.timer.stop();
                let moves = session.engine.move_count();
                log::debug!(
                    "generation {} won in {} moves, {}s",
                    session.generation.value(),
                    moves,
                    session.timer.elapsed_secs()
                );
                if record_if_better(&mut self.store, session.difficulty, moves) {
                    self.renderer.show_best_score(session.difficulty, Some(moves));
                }

                Some(Deferred {
                    generation: session.generation,
                    action: DeferredAction::AnnounceWin,
                })
            }
        }
    }

    /// Advances the clock of the session tagged `generation`, if it is still running.
    pub fn on_tick(&mut self, generation: Generation) -> bool {
        match self.session.as_mut() {
            Some(session) if session.is_current(generation) => {
                if !session.timer.tick() {
                    return false;
                }
                self.renderer.set_timer_display(&session.timer.display());
                true
            }
            _ => false,
        }
    }

    /// Runs a deferred action unless the session it was scheduled for has been replaced.
    pub fn fire(&mut self, deferred: Deferred) -> bool {
        let Some(session) = self
            .session
            .as_mut()
            .filter(|session| session.is_current(deferred.generation))
        else {
            log::debug!("dropping stale {:?}", deferred);
            return false;
        };

        match deferred.action {
            DeferredAction::Unflip => match session.engine.resolve_mismatch() {
                Some((first, second)) => {
                    let board = session.engine.board();
                    self.renderer.set_card_visibility(&board[first]);
                    self.renderer.set_card_visibility(&board[second]);
                    true
                }
                None => false,
            },
            DeferredAction::AnnounceWin if session.engine.is_won() && !session.announced => {
                session.announced = true;
                self.renderer.show_win_message(&session.win_message());
                true
            }
            DeferredAction::AnnounceWin => false,
        }
    }
}
