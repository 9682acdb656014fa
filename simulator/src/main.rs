mod config;
mod report;
mod runner;

use std::path::Path;

use clap::Parser;
use tictactoe_engine::{log, logger, BotType, SessionRng};

use config::{load_config, Validate, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "tictactoe_simulator")]
struct Args {
    /// Path to the YAML config file; defaults apply when it is absent.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long, value_enum)]
    x_bot: Option<BotType>,

    #[arg(long, value_enum)]
    o_bot: Option<BotType>,

    /// X's first move is random, the configured bots play from there.
    #[arg(long)]
    random_opening: bool,

    /// Log every game's final board, not just the run summary.
    #[arg(long)]
    show_boards: bool,

    /// Seed for the whole run; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Simulator".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = load_config(&args.config)?;
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(x_bot) = args.x_bot {
        config.x_bot = x_bot;
    }
    if let Some(o_bot) = args.o_bot {
        config.o_bot = o_bot;
    }
    if args.random_opening {
        config.random_opening = true;
    }
    if args.show_boards {
        config.show_boards = true;
    }
    config.validate()?;

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Simulating {} games: {:?} as X vs {:?} as O, seed {}",
        config.games,
        config.x_bot,
        config.o_bot,
        rng.seed()
    );

    let run_report = runner::run_trials(&config, &mut rng)?;

    if config.reports.save {
        let path = report::save_report(Path::new(&config.reports.location), &run_report)?;
        log!("Report saved to: {}", path.display());
    }

    Ok(())
}
