use colored::Colorize;

use mc_core::Analyzer;

use super::{GameArgs, new_table, outcome_table, plural};

pub fn run(args: &GameArgs, top: usize, json: bool) -> Result<(), String> {
    let config = args.to_config()?;
    let game = config.play().map_err(|e| e.to_string())?;
    let analyzer = Analyzer::new(&game);

    let jackpots = analyzer.jackpot_rolls().map_err(|e| e.to_string())?;
    let face_counts = analyzer.face_counts_per_roll().map_err(|e| e.to_string())?;
    let combos = analyzer.combo_count().map_err(|e| e.to_string())?;
    let perms = analyzer.permutation_count().map_err(|e| e.to_string())?;

    if json {
        let report = serde_json::json!({
            "rolls": config.rolls,
            "dice": game.die_count(),
            "seed": config.seed,
            "jackpots": jackpots.len(),
            "jackpot_rolls": jackpots,
            "face_counts": face_counts,
            "combinations": combos,
            "permutations": perms,
        });
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Analysis".bold(),
        format!(
            "({} dice, {} rolls, seed={})",
            game.die_count(),
            config.rolls,
            config.seed
        )
        .dimmed()
    );
    println!(
        "  {} jackpot{} in {} roll{}",
        jackpots.len(),
        plural(jackpots.len()),
        config.rolls,
        plural(config.rolls)
    );
    println!();

    // Face totals across all rolls, then the first rolls in detail
    println!("  {}", "Face Counts".bold().underline());
    println!();
    let mut header = vec!["Roll".to_string()];
    header.extend(face_counts.faces().iter().map(ToString::to_string));
    let mut table = new_table(header);
    for (roll, row) in face_counts.rows().enumerate().take(top) {
        let mut cells = vec![roll.to_string()];
        cells.extend(row.iter().map(ToString::to_string));
        table.add_row(cells);
    }
    let mut totals = vec!["Total".to_string()];
    totals.extend(
        face_counts
            .faces()
            .iter()
            .map(|f| face_counts.total(f).unwrap_or(0).to_string()),
    );
    table.add_row(totals);
    println!("{table}");
    println!();

    println!(
        "  {} {}",
        "Combinations".bold().underline(),
        format!("({} distinct)", combos.len()).dimmed()
    );
    println!();
    println!("{}", outcome_table(&combos, top));
    println!();

    println!(
        "  {} {}",
        "Permutations".bold().underline(),
        format!("({} distinct)", perms.len()).dimmed()
    );
    println!();
    println!("{}", outcome_table(&perms, top));

    Ok(())
}
