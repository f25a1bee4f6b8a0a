//! Terminal Go Fish
//!
//! Plays one session against the computer, prompting for each move.
//! Options: --seed, --verbose, --logs

use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use gofish::cards::*;
use gofish::gameplay::*;

#[derive(Parser)]
#[command(author, version, about = "Play Go Fish against the computer", long_about = None)]
struct Args {
    /// Replay a specific shuffle
    #[arg(long)]
    seed: Option<u64>,
    /// Log every transition to the terminal
    #[arg(short, long)]
    verbose: bool,
    /// Also write a debug log under logs/
    #[arg(long)]
    logs: bool,
}

struct Terminal;

impl Renderer for Terminal {
    fn render(&mut self, snapshot: &Snapshot) {
        let cards = snapshot
            .human
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!();
        println!("{} {}", "deck    ".dimmed(), snapshot.remaining);
        println!(
            "{} {} cards, {} quads",
            "computer".dimmed(),
            snapshot.computer,
            snapshot.computer_score
        );
        println!(
            "{} {} cards, {} quads",
            "you     ".dimmed(),
            snapshot.human.len(),
            snapshot.human_score
        );
        println!("         {}", cards.bold());
        match snapshot.phase {
            Phase::GameOver => println!("{}", snapshot.status.yellow().bold()),
            Phase::GoFish => println!("{}", snapshot.status.cyan()),
            _ => println!("{}", snapshot.status.green()),
        }
    }
}

impl Terminal {
    /// Next input, or None to quit.
    fn prompt(session: &GameSession) -> anyhow::Result<Option<Input>> {
        match session.phase() {
            Phase::HumanTurn => {
                let ranks = session.human().hand().ranks().collect::<Vec<_>>();
                let mut items = ranks.iter().map(Rank::to_string).collect::<Vec<_>>();
                items.push(String::from("quit"));
                let choice = Select::new()
                    .with_prompt("Ask the computer for")
                    .report(false)
                    .items(&items)
                    .default(0)
                    .interact()?;
                Ok(ranks.get(choice).copied().map(Input::Ask))
            }
            Phase::GoFish => Self::confirm("Draw from the deck", Input::Draw),
            Phase::GameOver => Self::confirm("Deal a new game", Input::NewGame),
            Phase::ComputerTurn => anyhow::bail!("computer turn leaked between inputs"),
        }
    }
    fn confirm(prompt: &str, input: Input) -> anyhow::Result<Option<Input>> {
        let choice = Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(&["yes", "quit"])
            .default(0)
            .interact()?;
        Ok((choice == 0).then_some(input))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    gofish::log(level, args.logs)?;
    let mut session = match args.seed {
        Some(seed) => GameSession::seeded(seed),
        None => GameSession::new(),
    };
    let ref mut terminal = Terminal;
    terminal.render(&session.snapshot());
    while let Some(input) = Terminal::prompt(&session)? {
        log::debug!("input {}", input);
        session.apply(input, terminal)?;
    }
    Ok(())
}
