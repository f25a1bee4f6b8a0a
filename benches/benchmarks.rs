criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        shuffling_full_deck,
        dealing_fresh_session,
        guessing_with_memory,
        playing_full_game,
}

fn shuffling_full_deck(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("shuffle a 52-card Deck", |b| b.iter(|| Deck::shuffled(rng)));
}

fn dealing_fresh_session(c: &mut criterion::Criterion) {
    let mut seed = 0;
    c.bench_function("deal a fresh GameSession", |b| {
        b.iter(|| {
            seed += 1;
            GameSession::seeded(seed)
        })
    });
}

fn guessing_with_memory(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let ref hand = Hand::try_from(Deck::shuffled(rng).deal(8).expect("full deck")).expect("8 cards");
    let mut robot = Robot::default();
    c.bench_function("guess a Rank from an 8-card Hand", |b| {
        b.iter(|| {
            let rank = robot.guess(hand, rng).expect("non empty hand");
            robot.notify(rank, false);
            rank
        })
    });
}

fn playing_full_game(c: &mut criterion::Criterion) {
    let mut seed = 0;
    c.bench_function("play a full game, Fish against Robot", |b| {
        b.iter(|| {
            seed += 1;
            let mut session = GameSession::seeded(seed);
            let ref mut fish = Fish;
            while !session.phase().is_over() {
                session.advance(fish).expect("autoplay stays within contract");
            }
            session.snapshot()
        })
    });
}

use gofish::cards::*;
use gofish::gameplay::*;
use gofish::players::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
