pub mod analyze;
pub mod play;
pub mod roll;
pub mod weights;

use std::path::PathBuf;

use clap::Args;
use comfy_table::{ContentArrangement, Table};
use log::debug;

use mc_core::{GameConfig, OutcomeCounts, WeightOverride, parse_faces};

/// Options shared by every command that builds a game.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// JSON game config; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Faces as a comma-separated list ("1,2,3", "H,T") or die shorthand ("d6")
    #[arg(short, long)]
    pub faces: Option<String>,

    /// Number of dice
    #[arg(short, long)]
    pub dice: Option<usize>,

    /// Number of rolls
    #[arg(short = 'n', long)]
    pub rolls: Option<usize>,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Weight for a face on every die, as FACE=WEIGHT (repeatable)
    #[arg(short, long = "weight", value_name = "FACE=WEIGHT")]
    pub weights: Vec<String>,
}

impl GameArgs {
    /// Merge the config file (if any) with command-line overrides.
    pub fn to_config(&self) -> Result<GameConfig, String> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
                GameConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(faces) = &self.faces {
            config = config.with_faces(parse_faces(faces));
        }
        if let Some(dice) = self.dice {
            config = config.with_dice(dice);
        }
        if let Some(rolls) = self.rolls {
            config = config.with_rolls(rolls);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        for raw in &self.weights {
            let weight = raw
                .parse::<WeightOverride>()
                .map_err(|e| e.to_string())?;
            config = config.with_weight(weight);
        }

        debug!("resolved config: {config:?}");
        Ok(config)
    }
}

/// A table with the house style applied.
fn new_table<T: ToString>(header: Vec<T>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.into_iter().map(|h| h.to_string()).collect::<Vec<_>>());
    table
}

/// Render combination or permutation counts, at most `top` rows.
fn outcome_table(counts: &OutcomeCounts, top: usize) -> Table {
    let mut header: Vec<String> = counts.key_names().to_vec();
    header.push("Count".to_string());
    let mut table = new_table(header);
    for row in counts.iter().take(top) {
        let mut cells: Vec<String> = row.outcome.iter().map(|f| f.to_string()).collect();
        cells.push(row.count.to_string());
        table.add_row(cells);
    }
    table
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
