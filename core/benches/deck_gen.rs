use criterion::{Criterion, criterion_group, criterion_main};
use pairflip_core::{DeckGenerator, Difficulty, RandomDeckGenerator};
use std::hint::black_box;

fn deck_gen(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_gen");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        group.bench_function(difficulty.key(), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomDeckGenerator::new(seed).generate(black_box(config)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, deck_gen);
criterion_main!(benches);
