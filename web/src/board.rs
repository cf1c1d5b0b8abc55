use pairflip_core::{
    Alphabet, Board, BoardRenderer, Card, CardCount, Coord, Coord2, Difficulty, Visibility,
    format_clock,
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CardView {
    pub pos: Coord2,
    pub glyph: &'static str,
    pub visibility: Visibility,
}

/// Everything the page shows, kept up to date by the engine through [`BoardRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BoardView {
    alphabet: Alphabet,
    pub columns: Coord,
    /// Row-major, same order as the dealt deck.
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub matches: CardCount,
    pub timer: String,
    pub win_message: Option<String>,
    best_easy: Option<u32>,
    best_hard: Option<u32>,
}

impl BoardView {
    pub(crate) fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            columns: 0,
            cards: Vec::new(),
            moves: 0,
            matches: 0,
            timer: format_clock(0),
            win_message: None,
            best_easy: None,
            best_hard: None,
        }
    }

    pub(crate) fn best(&self, difficulty: Difficulty) -> Option<u32> {
        match difficulty {
            Difficulty::Easy => self.best_easy,
            Difficulty::Hard => self.best_hard,
        }
    }

    /// Best score as shown on the page, `-` when nothing is recorded yet.
    pub(crate) fn best_label(&self, difficulty: Difficulty) -> String {
        self.best(difficulty)
            .map_or_else(|| "-".to_string(), |moves| moves.to_string())
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[CardView]> {
        self.cards.chunks(usize::from(self.columns.max(1)))
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl BoardRenderer for BoardView {
    fn render_board(&mut self, board: &Board) {
        self.columns = board.columns();
        self.cards = board
            .cards()
            .map(|card| CardView {
                pos: card.pos(),
                glyph: self.alphabet.glyph(card.symbol()),
                visibility: card.visibility(),
            })
            .collect();
    }

    fn set_card_visibility(&mut self, card: &Card) {
        let (x, y) = card.pos();
        let index = usize::from(y) * usize::from(self.columns) + usize::from(x);
        match self.cards.get_mut(index) {
            Some(view) => view.visibility = card.visibility(),
            None => log::warn!("no rendered card at {:?}", card.pos()),
        }
    }

    fn update_move_count(&mut self, moves: u32) {
        self.moves = moves;
    }

    fn update_match_count(&mut self, matches: CardCount) {
        self.matches = matches;
    }

    fn show_win_message(&mut self, text: &str) {
        self.win_message = Some(text.to_string());
    }

    fn clear_win_message(&mut self) {
        self.win_message = None;
    }

    fn set_timer_display(&mut self, text: &str) {
        self.timer = text.to_string();
    }

    fn show_best_score(&mut self, difficulty: Difficulty, best: Option<u32>) {
        match difficulty {
            Difficulty::Easy => self.best_easy = best,
            Difficulty::Hard => self.best_hard = best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairflip_core::{GameController, MemoryScoreStore};

    #[test]
    fn view_follows_a_mismatch_and_unflip() {
        let mut controller = GameController::new(BoardView::default(), MemoryScoreStore::new());
        controller.start_game(5);
        let view = controller.renderer();
        assert_eq!(view.columns, 4);
        assert_eq!(view.rows().count(), 3);
        assert!(view.cards.iter().all(|card| card.visibility == Visibility::Hidden));

        let first = view.cards[0];
        let other = *view
            .cards
            .iter()
            .find(|card| card.glyph != first.glyph)
            .unwrap();

        controller.on_card_selected(first.pos);
        let deferred = controller.on_card_selected(other.pos).deferred.unwrap();
        let view = controller.renderer();
        assert_eq!(view.moves, 1);
        assert_eq!(view.cards[0].visibility, Visibility::Revealed);

        controller.fire(deferred);
        assert!(
            controller
                .renderer()
                .cards
                .iter()
                .all(|card| card.visibility == Visibility::Hidden)
        );
    }

    #[test]
    fn best_labels_default_to_dash() {
        let mut view = BoardView::default();
        assert_eq!(view.best_label(Difficulty::Easy), "-");

        view.show_best_score(Difficulty::Hard, Some(14));
        assert_eq!(view.best_label(Difficulty::Hard), "14");
        assert_eq!(view.best(Difficulty::Easy), None);
    }

    #[test]
    fn new_game_clears_previous_win_message() {
        let mut controller = GameController::new(BoardView::default(), MemoryScoreStore::new());
        controller.start_game(1);

        let cards = controller.renderer().cards.clone();
        let mut deferred = None;
        for (index, card) in cards.iter().enumerate() {
            let Some(partner) = cards[index + 1..].iter().find(|other| other.glyph == card.glyph)
            else {
                continue;
            };
            controller.on_card_selected(card.pos);
            deferred = controller.on_card_selected(partner.pos).deferred;
        }
        assert!(controller.fire(deferred.unwrap()));
        let view = controller.renderer();
        assert_eq!(view.matches, 6);
        assert!(view.win_message.as_deref().unwrap().contains("Moves: 6"));
        assert_eq!(view.best_label(Difficulty::Easy), "6");

        controller.start_game(2);
        assert_eq!(controller.renderer().win_message, None);
        assert_eq!(controller.renderer().timer, "00:00");
    }
}
