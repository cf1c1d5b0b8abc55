use crate::*;

/// What the engine needs from a UI to show a game.
pub trait BoardRenderer {
    /// Materialize every card of a freshly dealt board, all hidden.
    fn render_board(&mut self, board: &Board);
    fn set_card_visibility(&mut self, card: &Card);
    fn update_move_count(&mut self, moves: u32);
    fn update_match_count(&mut self, matches: CardCount);
    fn show_win_message(&mut self, text: &str);
    fn clear_win_message(&mut self);
    fn set_timer_display(&mut self, text: &str);
    fn show_best_score(&mut self, difficulty: Difficulty, best: Option<u32>);
}

/// Headless renderer that discards every update.
impl BoardRenderer for () {
    fn render_board(&mut self, _board: &Board) {}
    fn set_card_visibility(&mut self, _card: &Card) {}
    fn update_move_count(&mut self, _moves: u32) {}
    fn update_match_count(&mut self, _matches: CardCount) {}
    fn show_win_message(&mut self, _text: &str) {}
    fn clear_win_message(&mut self) {}
    fn set_timer_display(&mut self, _text: &str) {}
    fn show_best_score(&mut self, _difficulty: Difficulty, _best: Option<u32>) {}
}
