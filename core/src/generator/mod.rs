use crate::*;
use alloc::vec::Vec;
use rand::Rng;

pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, config: GameConfig) -> Board;
}

/// Glyphs drawn for symbols. A symbol past the end wraps around.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Alphabet(&'static [&'static str]);

impl Alphabet {
    pub const DEFAULT: Alphabet = Alphabet(&[
        "🎨", "🌟", "🍇", "🍓", "🍊", "🥝", "🍒", "🍋", "🍉", "🍍", "🥥", "🫐",
    ]);

    /// Returns `None` for an empty glyph list.
    pub const fn new(glyphs: &'static [&'static str]) -> Option<Self> {
        if glyphs.is_empty() {
            None
        } else {
            Some(Self(glyphs))
        }
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn glyph(&self, symbol: Symbol) -> &'static str {
        self.0[usize::from(symbol.0) % self.0.len()]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Every symbol in `0..pair_count` twice, adjacent, in ascending order.
pub fn build_pairs(pair_count: CardCount) -> Vec<Symbol> {
    (0..pair_count)
        .flat_map(|index| [Symbol(index), Symbol(index)])
        .collect()
}

/// Fisher-Yates over a copy of `items`, walking from the last index down.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sorted(mut symbols: Vec<Symbol>) -> Vec<Symbol> {
        symbols.sort();
        symbols
    }

    #[test]
    fn build_pairs_duplicates_each_symbol() {
        let pairs = build_pairs(3);
        assert_eq!(
            pairs,
            [
                Symbol(0),
                Symbol(0),
                Symbol(1),
                Symbol(1),
                Symbol(2),
                Symbol(2)
            ]
        );
    }

    #[test]
    fn shuffle_preserves_multiset_and_input() {
        let deck = build_pairs(6);
        let mut rng = SmallRng::seed_from_u64(7);

        let shuffled = shuffle(&deck, &mut rng);

        assert_eq!(deck, build_pairs(6));
        assert_eq!(sorted(shuffled), deck);
    }

    #[test]
    fn shuffle_handles_trivial_inputs() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(shuffle::<Symbol, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&[Symbol(4)], &mut rng), [Symbol(4)]);
    }

    #[test]
    fn alphabet_wraps_past_its_end() {
        let alphabet = Alphabet::new(&["a", "b"]).unwrap();
        assert_eq!(alphabet.glyph(Symbol(0)), "a");
        assert_eq!(alphabet.glyph(Symbol(3)), "b");
        assert!(Alphabet::new(&[]).is_none());
    }

    #[test]
    fn default_alphabet_covers_hard_preset_without_wrapping() {
        assert!(Alphabet::DEFAULT.len() >= usize::from(Difficulty::Hard.config().pair_count()));
    }
}
