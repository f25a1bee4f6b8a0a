use super::*;
use crate::GameError;
use crate::HAND_SIZE;
use crate::QUAD_SIZE;
use crate::cards::*;
use crate::players::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One game of Go Fish, human against computer.
///
/// `GameSession` owns every piece of mutable state: the deck, both sides, the
/// computer's memory, the phase, and the random source used for both the
/// shuffle and the computer's guesses. It is driven by discrete [`Input`]s;
/// each runs to completion, including the computer's entire turn, before the
/// call returns.
///
/// # Transitions
///
/// - `HumanTurn` + ask hit → `HumanTurn` (go again)
/// - `HumanTurn` + ask miss → `GoFish`
/// - `GoFish` + draw → computer turn → `HumanTurn`
/// - any of the above → `GameOver` once the deck is empty and a hand is empty
/// - `GameOver` + new game → fresh deal, `HumanTurn`
///
/// Inputs that do not match the phase are ignored.
#[derive(Debug, Clone)]
pub struct GameSession<R = SmallRng> {
    deck: Deck,
    human: Side,
    computer: Side,
    robot: Robot,
    phase: Phase,
    status: Status,
    cards: usize,
    rng: R,
}

impl GameSession<SmallRng> {
    /// A freshly dealt game seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }
    /// A freshly dealt game that replays identically for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for GameSession<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction.
impl<R: Rng> GameSession<R> {
    /// A freshly dealt game drawing all randomness from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self::from_deck(deck, rng).expect("a full deck deals both hands")
    }
    /// Deals from a prepared deck without shuffling it.
    ///
    /// The computer is dealt the top five cards, then the human the next
    /// five. Fails if the deck cannot cover both hands.
    pub fn from_deck(mut deck: Deck, rng: R) -> Result<Self, GameError> {
        let cards = deck.remaining();
        let computer = Side::try_from(deck.deal(HAND_SIZE)?)?;
        let human = Side::try_from(deck.deal(HAND_SIZE)?)?;
        log::info!("new game, {} cards in the deck", deck.remaining());
        Ok(Self {
            deck,
            human,
            computer,
            robot: Robot::default(),
            phase: Phase::HumanTurn,
            status: Status::Start,
            cards,
            rng,
        })
    }
}

/// Public state accessors.
impl<R> GameSession<R> {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn status(&self) -> &Status {
        &self.status
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn human(&self) -> &Side {
        &self.human
    }
    /// The computer's side, face up. Displays should use [`Self::snapshot`].
    pub fn computer(&self) -> &Side {
        &self.computer
    }
    pub fn robot(&self) -> &Robot {
        &self.robot
    }
    /// What a display is allowed to see.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            remaining: self.deck.remaining(),
            empty: self.deck.empty(),
            human: self.human.hand().cards(),
            human_score: self.human.score(),
            computer: self.computer.hand().size(),
            computer_score: self.computer.score(),
            phase: self.phase,
            status: self.status.to_string(),
        }
    }
}

/// Inputs.
impl<R: Rng> GameSession<R> {
    /// Applies one input, then hands the display a fresh snapshot.
    pub fn apply<D: Renderer>(&mut self, input: Input, display: &mut D) -> Result<Phase, GameError> {
        let phase = match input {
            Input::Ask(rank) => self.ask(rank)?,
            Input::Draw => self.draw()?,
            Input::NewGame => self.reset(),
        };
        display.render(&self.snapshot());
        Ok(phase)
    }
    /// Human asks the computer for every card of `rank`.
    pub fn ask(&mut self, rank: Rank) -> Result<Phase, GameError> {
        if self.phase != Phase::HumanTurn {
            log::debug!("ignoring ask {} during {}", rank, self.phase);
            return Ok(self.phase);
        }
        match self.computer.take_all(rank) {
            None => {
                log::debug!("human asks {}, go fish", rank);
                self.phase = Phase::GoFish;
                self.status = Status::GoFish;
            }
            Some(cards) => {
                log::debug!("human asks {}, takes {}", rank, cards.len());
                self.human.extend(cards);
                self.score_human();
                self.status = Status::GoAgain;
                self.settle();
            }
        }
        self.check();
        Ok(self.phase)
    }
    /// Human draws after a miss, then the computer takes its whole turn.
    ///
    /// With nothing left to draw the human simply passes.
    pub fn draw(&mut self) -> Result<Phase, GameError> {
        if self.phase != Phase::GoFish {
            log::debug!("ignoring draw during {}", self.phase);
            return Ok(self.phase);
        }
        if self.deck.empty() {
            log::debug!("human has nothing to fish");
        } else {
            let card = self.deck.draw()?;
            log::debug!("human draws {}", card);
            self.human.add(card);
            self.score_human();
        }
        self.computer_turn()?;
        self.phase = Phase::HumanTurn;
        self.settle();
        self.check();
        Ok(self.phase)
    }
    /// Deals a new game, only once the current one is over.
    pub fn reset(&mut self) -> Phase {
        if self.phase != Phase::GameOver {
            log::debug!("ignoring new game during {}", self.phase);
            return self.phase;
        }
        let mut deck = Deck::shuffled(&mut self.rng);
        self.cards = deck.remaining();
        self.computer = Self::deal(&mut deck);
        self.human = Self::deal(&mut deck);
        self.deck = deck;
        self.robot = Robot::default();
        self.phase = Phase::HumanTurn;
        self.status = Status::Start;
        log::info!("new game, {} cards in the deck", self.deck.remaining());
        self.check();
        self.phase
    }
    /// Plays one step of the human side with `strategy` in place of the UI.
    ///
    /// Asks in `HumanTurn`, draws in `GoFish`, does nothing once over.
    pub fn advance<S: GuessStrategy>(&mut self, strategy: &mut S) -> Result<Phase, GameError> {
        match self.phase {
            Phase::HumanTurn => {
                let rank = strategy.guess(self.human.hand(), &mut self.rng)?;
                let found = self.computer.hand().contains(rank);
                strategy.notify(rank, found);
                self.ask(rank)
            }
            Phase::GoFish => self.draw(),
            Phase::ComputerTurn | Phase::GameOver => Ok(self.phase),
        }
    }
}

/// Transition internals.
impl<R: Rng> GameSession<R> {
    /// Computer asks until it misses, then fishes if it can.
    fn computer_turn(&mut self) -> Result<(), GameError> {
        self.phase = Phase::ComputerTurn;
        if self.computer.empty() {
            log::debug!("computer hand empty, skipping guesses");
            self.status = Status::ComputerEmpty;
        } else {
            let mut asked = Vec::new();
            loop {
                let rank = self.robot.guess(self.computer.hand(), &mut self.rng)?;
                asked.push(rank);
                match self.human.take_all(rank) {
                    Some(cards) => {
                        log::debug!("computer asks {}, takes {}", rank, cards.len());
                        self.robot.notify(rank, true);
                        self.computer.extend(cards);
                    }
                    None => {
                        log::debug!("computer asks {}, go fish", rank);
                        self.robot.notify(rank, false);
                        break;
                    }
                }
            }
            self.status = Status::ComputerAsked(asked);
        }
        if !self.deck.empty() {
            let card = self.deck.draw()?;
            self.computer.add(card);
        }
        let quads = self.computer.score_quads();
        if quads > 0 {
            log::debug!("computer lays down {} quad(s)", quads);
        }
        Ok(())
    }
    fn score_human(&mut self) {
        let quads = self.human.score_quads();
        if quads > 0 {
            log::debug!("human lays down {} quad(s)", quads);
        }
    }
    /// Ends the game when the deck and either hand have run out. Otherwise
    /// a human left without cards on their turn is sent straight to the deck.
    fn settle(&mut self) {
        if self.deck.empty() && (self.computer.empty() || self.human.empty()) {
            let outcome = Outcome::from((self.human.score(), self.computer.score()));
            log::info!(
                "game over, {:?} ({} to {})",
                outcome,
                self.human.score(),
                self.computer.score()
            );
            self.phase = Phase::GameOver;
            self.status = Status::GameOver(outcome);
        } else if self.phase == Phase::HumanTurn && self.human.empty() {
            log::debug!("human hand empty, go fish");
            let asked = match std::mem::take(&mut self.status) {
                Status::ComputerAsked(ranks) => ranks,
                _ => Vec::new(),
            };
            self.phase = Phase::GoFish;
            self.status = Status::HumanEmpty(asked);
        }
    }
    fn deal(deck: &mut Deck) -> Side {
        deck.deal(HAND_SIZE)
            .and_then(Side::try_from)
            .expect("a full deck deals both hands")
    }
    /// Cards are only ever moved, or laid down four at a time.
    fn check(&self) {
        debug_assert_eq!(
            self.cards,
            self.deck.remaining()
                + self.human.hand().size()
                + self.computer.hand().size()
                + QUAD_SIZE * (self.human.score() + self.computer.score())
        );
    }
}
