use gofish::DECK_SIZE;
use gofish::QUAD_SIZE;
use gofish::cards::*;
use gofish::gameplay::*;
use gofish::players::*;

const MAX_STEPS: usize = 10_000;

fn conserved(snapshot: &Snapshot) -> bool {
    snapshot.remaining
        + snapshot.human.len()
        + snapshot.computer
        + QUAD_SIZE * (snapshot.human_score + snapshot.computer_score)
        == DECK_SIZE
}

/// Plays a whole game, checking every observable step along the way.
fn play<S: GuessStrategy>(seed: u64, strategy: &mut S) -> GameSession {
    let mut session = GameSession::seeded(seed);
    let mut steps = 0;
    while !session.phase().is_over() {
        let phase = session.advance(strategy).unwrap();
        let snapshot = session.snapshot();
        assert!(conserved(&snapshot), "seed {} step {}", seed, steps);
        assert_ne!(phase, Phase::ComputerTurn);
        assert_eq!(phase, snapshot.phase);
        steps += 1;
        assert!(steps < MAX_STEPS, "seed {} never ended", seed);
    }
    session
}

#[test]
fn fish_games_end() {
    for seed in 0..128 {
        let session = play(seed, &mut Fish);
        let snapshot = session.snapshot();
        assert!(snapshot.empty);
        assert!(snapshot.human.is_empty() || snapshot.computer == 0);
    }
}

#[test]
fn robot_mirror_games_end() {
    for seed in 0..128 {
        play(seed, &mut Robot::default());
    }
}

#[test]
fn winner_matches_scores() {
    for seed in 0..64 {
        let session = play(seed, &mut Fish);
        let outcome = Outcome::from((session.human().score(), session.computer().score()));
        assert_eq!(session.status(), &Status::GameOver(outcome));
    }
}

#[test]
fn every_quad_is_scored() {
    for seed in 0..64 {
        let session = play(seed, &mut Fish);
        let snapshot = session.snapshot();
        let held = snapshot.human.len() + snapshot.computer;
        assert_eq!(held % QUAD_SIZE, 0);
        assert!(snapshot.human_score + snapshot.computer_score <= DECK_SIZE / QUAD_SIZE);
        for rank in Rank::all() {
            assert!(session.human().hand().count(*rank) < QUAD_SIZE);
            assert!(session.computer().hand().count(*rank) < QUAD_SIZE);
        }
    }
}

#[test]
fn same_seed_same_game() {
    let a = play(99, &mut Fish);
    let b = play(99, &mut Fish);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn new_game_after_autoplay() {
    let mut session = play(3, &mut Fish);
    let mut renders = 0;
    let phase = session
        .apply(Input::NewGame, &mut |_: &Snapshot| renders += 1)
        .unwrap();
    assert_eq!(phase, Phase::HumanTurn);
    assert_eq!(renders, 1);
    assert_eq!(session.snapshot().remaining, DECK_SIZE - 10);
}
