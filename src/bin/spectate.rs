//! Spectate Binary
//!
//! Plays one seeded game and narrates it to stdout. The first player gets
//! a randomly weighted linear strategy, every other player a mutated child of
//! it.
//!
//! Options: --seed, --players, --variability, --config, --verbose

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use incan_gold::agent::{LinearStrategy, DEFAULT_VARIABILITY};
use incan_gold::core::{GameConfig, GameRng};
use incan_gold::events::Spectator;
use incan_gold::rules::{GameBuilder, Player};

#[derive(Parser)]
#[command(author, version, about = "Watch linear strategies play a game of Incan Gold", long_about = None)]
struct Args {
    /// Seed for the shared random stream
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of players
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Mutation scale for the children of the first player
    #[arg(long, default_value_t = DEFAULT_VARIABILITY)]
    variability: f64,

    /// JSON game config; the standard game if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every turn
    #[arg(long)]
    verbose: bool,
}

fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

fn main() -> ExitCode {
    let args = Args::parse();
    log(args.verbose);

    let config = match &args.config {
        Some(path) => match GameConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let mut rng = GameRng::new(args.seed);
    let mut builder = GameBuilder::new().config(config);
    if args.players > 0 {
        let parent = Player::new("Player 1", LinearStrategy::random(&mut rng));
        let children: Vec<_> = (2..=args.players)
            .map(|i| parent.child(format!("Player {i}"), args.variability, &mut rng))
            .collect();
        builder = builder.seat(parent);
        for child in children {
            builder = builder.seat(child);
        }
    }

    let mut game = match builder.build_with_rng(rng) {
        Ok(game) => game,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut spectator = Spectator::new(std::io::stdout().lock());
    let result = game.play(&mut spectator);
    let winners: Vec<_> = result
        .winners()
        .into_iter()
        .map(|p| game.players()[p].name().to_string())
        .collect();
    log::info!("seed {} won by {}", args.seed, winners.join(", "));
    ExitCode::SUCCESS
}
