use colored::Colorize;

use super::{GameArgs, new_table, plural};

pub fn run(args: &GameArgs, die_index: usize) -> Result<(), String> {
    let config = args.to_config()?;
    let game = config.build_game().map_err(|e| e.to_string())?;
    let die = game.dice().get(die_index).ok_or_else(|| {
        format!(
            "die {die_index} does not exist (game has {} dice)",
            game.die_count()
        )
    })?;

    let outcomes = die
        .roll(config.rolls, &mut config.rng())
        .map_err(|e| e.to_string())?;

    println!(
        "  {} die {die_index} {} time{} {}",
        "Rolled".bold(),
        outcomes.len(),
        plural(outcomes.len()),
        format!("(seed={})", config.seed).dimmed()
    );
    let listed: Vec<String> = outcomes.iter().map(ToString::to_string).collect();
    println!("  [{}]", listed.join(", "));
    println!();

    let mut table = new_table(vec!["Face", "Count", "Share"]);
    for face in die.faces() {
        let count = outcomes.iter().filter(|f| *f == face).count();
        let share = count as f64 / outcomes.len() as f64 * 100.0;
        table.add_row(vec![
            face.to_string(),
            count.to_string(),
            format!("{share:.1}%"),
        ]);
    }
    println!("{table}");

    Ok(())
}
