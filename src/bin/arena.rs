use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use connect_four_ab::ai::{Agent, AlphaBetaAgent, RandomAgent, SearchConfig};
use connect_four_ab::arena::play_match;
use connect_four_ab::config::AppConfig;
use connect_four_ab::logging;

/// Pit the alpha-beta AI against another agent for a series of games.
#[derive(Parser)]
#[command(name = "arena", about = "Play a match between Connect Four agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Opponent: random or alphabeta
    #[arg(long, default_value = "random")]
    opponent: String,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Depth limit for an alpha-beta opponent (0 = unlimited)
    #[arg(long, default_value_t = 4)]
    opponent_depth: u32,

    /// Time limit in milliseconds for an alpha-beta opponent (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    opponent_time_ms: u64,

    /// Seed for the opponent's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Write the match summary as JSON to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = logging::init().context("starting logger")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    config.validate().context("validating configuration")?;
    logging::apply_level(&logger, &config.log_level).context("setting log level")?;

    let mut ai = AlphaBetaAgent::from_config(&config.search).context("creating AI player")?;
    let mut opponent: Box<dyn Agent> = match cli.opponent.as_str() {
        "random" => Box::new(match cli.seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        }),
        "alphabeta" => {
            let search = SearchConfig {
                max_depth: cli.opponent_depth,
                time_limit_ms: cli.opponent_time_ms,
                iterative_deepening: cli.opponent_time_ms > 0,
                seed: cli.seed,
            };
            Box::new(AlphaBetaAgent::from_config(&search).context("creating opponent")?)
        }
        other => bail!("unknown opponent '{}' (expected 'random' or 'alphabeta')", other),
    };

    info!(
        "playing {} games on a {}x{} board: {} vs {}",
        config.arena.games,
        config.board.rows,
        config.board.cols,
        ai.name(),
        opponent.name()
    );
    let summary = play_match(
        &mut ai,
        opponent.as_mut(),
        &config.arena,
        config.board.rows,
        config.board.cols,
    )
    .context("playing match")?;

    println!("-------------------------------------------");
    println!(
        "{} vs {}: {} games",
        summary.agent_a, summary.agent_b, summary.games
    );
    println!(
        "  {} wins: {} ({:.1}%)",
        summary.agent_a,
        summary.a_wins,
        summary.a_win_rate() * 100.0
    );
    println!("  {} wins: {}", summary.agent_b, summary.b_wins);
    println!("  draws: {}", summary.draws);
    println!("  average game length: {:.1} moves", summary.average_length());

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
