//! Go Fish between a human and a computer opponent.
//!
//! The crate is the turn-based game-state engine: deck and hand bookkeeping,
//! the computer's memory-augmented guessing rule, and the state machine that
//! runs play until game over. Presentation is left to a [`gameplay::Renderer`],
//! either the terminal front end (`server` feature) or the browser through
//! [`wasm`].
pub mod cards;
pub mod error;
pub mod gameplay;
pub mod players;
pub mod wasm;

pub use error::*;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Cards in a full deck, one per (rank, suit).
pub const DECK_SIZE: usize = N_RANKS * N_SUITS;
/// Distinct ranks, Ace through King.
pub const N_RANKS: usize = 13;
/// Distinct suits.
pub const N_SUITS: usize = 4;
/// Cards dealt to each side at the start of a game.
pub const HAND_SIZE: usize = 5;
/// Cards of one rank that make a quad. Exactly this many, never more.
pub const QUAD_SIZE: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, optionally mirrored to a timestamped file.
/// Writes DEBUG level to file; terminal level is chosen by the caller.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter, file: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if file {
        std::fs::create_dir_all("logs")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(format!("logs/{}.log", time))?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
