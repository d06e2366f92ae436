//! Terminal front end.
//!
//! - `fox-geese observe`: computer against computer, board printed after
//!   every move
//! - `fox-geese play`: you play the Fox against computer Geese, entering
//!   moves as `x,y x,y`

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use fox_geese::{
    render_labelled, Board, GameConfig, GameDriver, GameError, GameObserver, GameRng,
    NullObserver, Outcome, PieceKind, Position, RandomStrategy, TurnEngineBuilder,
};

/// Fox and Geese on a 9x9 board
#[derive(Parser, Debug)]
#[command(name = "fox-geese")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    game: GameArgs,
}

/// Settings shared by both modes. Override the environment.
#[derive(Args, Debug)]
struct GameArgs {
    /// Seed for the computer players
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Moves without a capture before the game is drawn
    #[arg(long, global = true)]
    max_moves: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Watch the computer play both sides
    Observe {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1")]
        games: u32,

        /// Print only the result of each game
        #[arg(short, long)]
        quiet: bool,
    },

    /// Play the Fox against the computer Geese
    Play,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fox_geese=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.game)?;

    match cli.command {
        Command::Observe { games, quiet } => observe(config, games, quiet).await,
        Command::Play => play(config).await,
    }
}

fn load_config(args: &GameArgs) -> Result<GameConfig> {
    let mut config = GameConfig::from_env().context("reading configuration from the environment")?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = args.delay_ms {
        config = config.with_ai_delay(Duration::from_millis(ms));
    }
    if let Some(moves) = args.max_moves {
        config = config.with_max_moves_without_capture(moves);
    }
    config.validate()?;
    Ok(config)
}

// === Observer mode ===

async fn observe(config: GameConfig, games: u32, quiet: bool) -> Result<()> {
    let mut root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let mut tally = Tally::default();

    for game in 1..=games {
        let seed = if game == 1 { root.seed() } else { root.fork().seed() };
        info!(game, seed, "starting observed game");

        let builder = TurnEngineBuilder::new()
            .config(config.clone().with_seed(seed))
            .fox(Arc::new(RandomStrategy::seeded(PieceKind::Fox, seed)))
            .geese(Arc::new(RandomStrategy::seeded(PieceKind::Goose, seed)));
        let engine = if quiet {
            builder.observer(NullObserver).build()?
        } else {
            builder.observer(ConsoleObserver::new(None)).build()?
        };

        let driver = GameDriver::new(engine);
        driver.start().await?;

        let state = driver.snapshot().await;
        let outcome = state
            .status()
            .outcome()
            .context("automated game stopped before reaching a result")?;
        tally.record(outcome);
        if quiet || games > 1 {
            println!("Game {game} (seed {seed}): {outcome} after {} turns", state.turn());
        }
    }

    if games > 1 {
        println!();
        println!("{tally}");
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Tally {
    fox: u32,
    geese: u32,
    draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(PieceKind::Fox) => self.fox += 1,
            Some(PieceKind::Goose) => self.geese += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fox wins: {}, Geese wins: {}, Draws: {}", self.fox, self.geese, self.draws)
    }
}

// === Player mode ===

const HELP: &str = "Enter a move as `x,y x,y` (origin then destination), `reset` or `quit`.";

enum Input {
    Move(Position, Position),
    Reset,
    Quit,
    Help,
}

fn parse_input(line: &str) -> Result<Option<Input>> {
    let line = line.trim();
    match line {
        "" => return Ok(None),
        "q" | "quit" | "exit" => return Ok(Some(Input::Quit)),
        "reset" | "new" => return Ok(Some(Input::Reset)),
        "?" | "help" => return Ok(Some(Input::Help)),
        _ => {}
    }

    let cells: Vec<&str> = line.split_whitespace().filter(|token| *token != "->").collect();
    let [from, to] = cells.as_slice() else {
        bail!("expected two cells, got {line:?}");
    };
    let from = from.parse::<Position>().with_context(|| format!("bad origin {from:?}"))?;
    let to = to.parse::<Position>().with_context(|| format!("bad destination {to:?}"))?;
    Ok(Some(Input::Move(from, to)))
}

async fn play(config: GameConfig) -> Result<()> {
    let engine = TurnEngineBuilder::new()
        .config(config)
        .observer(ConsoleObserver::new(Some(PieceKind::Fox)))
        .build()?;
    let driver = GameDriver::new(engine);

    println!("You are the Fox (F). {HELP}");
    driver.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = match parse_input(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(err) => {
                println!("{err:#}. {HELP}");
                continue;
            }
        };

        match input {
            Input::Quit => break,
            Input::Help => println!("{HELP}"),
            Input::Reset => driver.reset().await?,
            Input::Move(from, to) => match driver.submit_human_move(from, to).await {
                Ok(_) => {}
                // Already reported through the observer
                Err(err) if err.is_illegal_move() => {}
                Err(GameError::GameOver(_)) => println!("The game is over. Type `reset` or `quit`."),
                Err(err) => return Err(err.into()),
            },
        }
    }

    Ok(())
}

/// Prints notifications to stdout. `human` is the side typed in at the
/// terminal, if any.
struct ConsoleObserver {
    human: Option<PieceKind>,
}

impl ConsoleObserver {
    fn new(human: Option<PieceKind>) -> Self {
        Self { human }
    }

    fn turn_text(&self, side: PieceKind) -> String {
        if self.human == Some(side) {
            format!("{side} to move.\nYour move:")
        } else {
            format!("{side} to move.")
        }
    }
}

impl GameObserver for ConsoleObserver {
    fn on_board_changed(&mut self, board: &Board) {
        println!();
        print!("{}", render_labelled(board));
    }

    fn on_turn_announced(&mut self, side: PieceKind) {
        println!("{}", self.turn_text(side));
    }

    fn on_message(&mut self, message: &str) {
        println!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_only_for_human_side() {
        let observed = ConsoleObserver::new(None);
        assert_eq!(observed.turn_text(PieceKind::Fox), "Fox to move.");
        assert_eq!(observed.turn_text(PieceKind::Goose), "Geese to move.");

        let playing = ConsoleObserver::new(Some(PieceKind::Fox));
        assert_eq!(playing.turn_text(PieceKind::Fox), "Fox to move.\nYour move:");
        assert_eq!(playing.turn_text(PieceKind::Goose), "Geese to move.");
    }

    #[test]
    fn test_parse_input() {
        assert!(matches!(parse_input("  "), Ok(None)));
        assert!(matches!(parse_input("quit"), Ok(Some(Input::Quit))));
        assert!(matches!(
            parse_input("4,8 -> 3,7"),
            Ok(Some(Input::Move(from, to))) if from == Position::new(4, 8) && to == Position::new(3, 7)
        ));
        assert!(parse_input("4,8").is_err());
        assert!(parse_input("a,b 1,1").is_err());
    }
}
