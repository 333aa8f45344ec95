//! CLI frontend for the Monte Carlo dice engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use commands::GameArgs;

#[derive(Parser)]
#[command(
    name = "mc",
    about = "Monte Carlo dice: roll weighted dice and analyze the results",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a single die and print each outcome
    Roll {
        #[command(flatten)]
        game: GameArgs,

        /// Which die of the configured game to roll
        #[arg(long, default_value = "0")]
        die: usize,
    },

    /// Play a game and print the results table
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Results shape: wide or narrow
        #[arg(long, default_value = "wide")]
        form: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Play a game and print jackpots, face counts, combinations, and permutations
    Analyze {
        #[command(flatten)]
        game: GameArgs,

        /// Maximum rows shown per table
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show the weights and probabilities of a die
    Weights {
        #[command(flatten)]
        game: GameArgs,

        /// Which die of the configured game to show
        #[arg(long, default_value = "0")]
        die: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll { game, die } => commands::roll::run(&game, die),
        Commands::Play { game, form, json } => commands::play::run(&game, &form, json),
        Commands::Analyze { game, top, json } => commands::analyze::run(&game, top, json),
        Commands::Weights { game, die } => commands::weights::run(&game, die),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
