use super::*;

/// Uniformly shuffled deck, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let deck = shuffle(&build_pairs(config.pair_count()), &mut rng);
        log::trace!("seed {} produced deck {:?}", self.seed, deck);

        // a validated config always fits its own deck
        Board::from_deck(config, &deck).unwrap_or_else(|err| {
            unreachable!("deck of {} cards rejected: {}", deck.len(), err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(board: &Board) -> Vec<Symbol> {
        board.cards().map(|card| card.symbol()).collect()
    }

    #[test]
    fn same_seed_same_deck() {
        let config = Difficulty::Hard.config();
        let a = RandomDeckGenerator::new(42).generate(config);
        let b = RandomDeckGenerator::new(42).generate(config);
        assert_eq!(symbols(&a), symbols(&b));
    }

    #[test]
    fn generated_board_starts_hidden_with_every_pair() {
        let config = Difficulty::Easy.config();
        let board = RandomDeckGenerator::new(3).generate(config);

        assert!(board.cards().all(|card| card.visibility() == Visibility::Hidden));
        for index in 0..config.pair_count() {
            let copies = board
                .cards()
                .filter(|card| card.symbol() == Symbol(index))
                .count();
            assert_eq!(copies, 2);
        }
    }
}
