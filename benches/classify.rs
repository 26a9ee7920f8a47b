use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use dealscore::deck::Deck;
use dealscore::hand::refhand5::RefHand5;
use dealscore::hand::{Hand, Hand5};
use dealscore::rng_from_seed;

fn do_hand5<E: Hand5>(engine: &E, hands: &[Hand]) -> u32 {
    hands.iter().map(|&hand| engine.hand5(hand).score()).sum()
}

fn bench_hand5<E: Hand5>(c: &mut Criterion, name: &str, engine: &E) {
    let mut group = c.benchmark_group(name);
    let mut rng = rng_from_seed(Some("seed1234"));
    for num in [1, 5, 10] {
        // a fresh deck each time, so every hand in the batch is distinct
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let hands = deck.deal_hands(num).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(num), &hands, |b, hands| {
            b.iter(|| do_hand5(engine, hands));
        });
    }
    group.finish();
}

fn from_elem(c: &mut Criterion) {
    bench_hand5(c, "refhand5", &RefHand5::new());
}

criterion_group!(benches, from_elem);
criterion_main!(benches);
