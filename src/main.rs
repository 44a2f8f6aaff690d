use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_ab::ai::{Agent, AlphaBetaAgent};
use connect_four_ab::config::AppConfig;
use connect_four_ab::game::{Board, Outcome, Player};
use connect_four_ab::logging;

/// Play Connect Four against the alpha-beta AI in the terminal.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect Four against an alpha-beta AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the search depth limit (0 = unlimited)
    #[arg(long)]
    depth: Option<u32>,

    /// Override the per-move time limit in milliseconds (0 = unlimited)
    #[arg(long)]
    time_ms: Option<u64>,

    /// Let the AI play first (as X)
    #[arg(long)]
    ai_first: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

/// What the human typed at the prompt.
enum Command {
    Play(usize),
    Reset,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let logger = logging::init().context("starting logger")?;
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.max_depth = depth;
    }
    if let Some(time_ms) = cli.time_ms {
        config.search.time_limit_ms = time_ms;
    }
    config.validate().context("validating configuration")?;

    logging::apply_level(&logger, &config.log_level).context("setting log level")?;

    let mut ai = AlphaBetaAgent::from_config(&config.search).context("creating AI player")?;
    let ai_player = if cli.ai_first { Player::One } else { Player::Two };
    let mut board = Board::new(config.board.rows, config.board.cols);

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        println!("\n{board}");

        let outcome = board.outcome();
        if outcome.is_terminal() {
            match outcome {
                Outcome::Winner(player) if player == ai_player => println!("The AI wins."),
                Outcome::Winner(_) => println!("You win!"),
                _ => println!("It's a draw."),
            }
            match prompt(&mut input, "Press r to play again or q to quit: ")? {
                Some(Command::Reset) => {
                    board.reset();
                    continue;
                }
                Some(Command::Quit) | None => return Ok(()),
                Some(Command::Play(_)) => continue,
            }
        }

        if board.to_move() == ai_player {
            println!("{} (AI, {}) is thinking...", ai_player.name(), ai_player.symbol());
            let column = ai.get_move(&board).context("AI failed to choose a move")?;
            board
                .apply(column)
                .with_context(|| format!("AI chose illegal column {column}"))?;
            match ai.last_report() {
                Some(report) => println!(
                    "AI plays column {column} (depth {}, {} nodes, {} ms)",
                    report
                        .completed_depth
                        .map_or_else(|| "-".to_string(), |d| d.to_string()),
                    report.stats.nodes,
                    report.elapsed.as_millis()
                ),
                None => println!("AI plays column {column}"),
            }
            continue;
        }

        let human = board.to_move();
        let message = format!(
            "{} ({}), choose a column [0-{}], r = restart, q = quit: ",
            human.name(),
            human.symbol(),
            board.cols() - 1
        );
        match prompt(&mut input, &message)? {
            Some(Command::Play(column)) => {
                if let Err(err) = board.apply(column) {
                    println!("Illegal move: {err}");
                }
            }
            Some(Command::Reset) => board.reset(),
            Some(Command::Quit) | None => return Ok(()),
        }
    }
}

/// Read commands until one parses; `None` at end of input.
fn prompt<I>(input: &mut I, message: &str) -> Result<Option<Command>>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("{message}");
        io::stdout().flush().context("flushing stdout")?;

        let Some(line) = input.next() else {
            return Ok(None);
        };
        let line = line.context("reading stdin")?;
        match line.trim() {
            "q" | "Q" => return Ok(Some(Command::Quit)),
            "r" | "R" => return Ok(Some(Command::Reset)),
            text => match text.parse::<usize>() {
                Ok(column) => return Ok(Some(Command::Play(column))),
                Err(_) => println!("'{text}' is not a column number"),
            },
        }
    }
}
