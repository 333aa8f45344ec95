use colored::Colorize;

use super::{GameArgs, new_table};

pub fn run(args: &GameArgs, die_index: usize) -> Result<(), String> {
    let config = args.to_config()?;
    let game = config.build_game().map_err(|e| e.to_string())?;
    let die = game.dice().get(die_index).ok_or_else(|| {
        format!(
            "die {die_index} does not exist (game has {} dice)",
            game.die_count()
        )
    })?;

    println!(
        "  {} die {die_index} {}",
        "Weights".bold(),
        format!("({} faces, total weight {})", die.sides(), die.total_weight()).dimmed()
    );
    println!();

    let weights = die.snapshot();
    let probabilities = die.probabilities();

    let mut table = new_table(vec!["Face", "Weight", "Probability"]);
    for entry in weights.iter() {
        let probability = probabilities
            .as_ref()
            .ok()
            .and_then(|p| p.get(&entry.face))
            .map_or_else(|| "--".to_string(), |p| format!("{p:.4}"));
        table.add_row(vec![
            entry.face.to_string(),
            entry.weight.to_string(),
            probability,
        ]);
    }
    println!("{table}");

    if let Err(e) = &probabilities {
        println!();
        println!("  {}", format!("This die cannot be rolled: {e}.").yellow());
    }

    Ok(())
}
