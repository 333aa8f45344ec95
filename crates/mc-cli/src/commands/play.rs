use colored::Colorize;

use mc_core::{ResultForm, Results};

use super::{GameArgs, new_table, plural};

pub fn run(args: &GameArgs, form: &str, json: bool) -> Result<(), String> {
    let form = form.parse::<ResultForm>().map_err(|e| e.to_string())?;
    let config = args.to_config()?;
    let game = config.play().map_err(|e| e.to_string())?;
    let results = game.show_results(form).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {} {}",
        "Game".bold(),
        format!(
            "{} di{}, {} roll{}",
            game.die_count(),
            if game.die_count() == 1 { "e" } else { "ce" },
            config.rolls,
            plural(config.rolls)
        ),
        format!("(seed={}, form={form})", config.seed).dimmed()
    );
    println!();

    let table = match &results {
        Results::Wide(wide) => {
            let mut header = vec!["Roll".to_string()];
            header.extend((1..=wide.dice()).map(|i| format!("Die {i}")));
            let mut table = new_table(header);
            for (roll, row) in wide.rows().enumerate() {
                let mut cells = vec![roll.to_string()];
                cells.extend(row.iter().map(ToString::to_string));
                table.add_row(cells);
            }
            table
        }
        Results::Narrow(narrow) => {
            let mut table = new_table(vec!["Roll", "Die", "Face"]);
            for row in narrow.iter() {
                table.add_row(vec![
                    row.roll.to_string(),
                    row.die.to_string(),
                    row.face.to_string(),
                ]);
            }
            table
        }
    };
    println!("{table}");

    Ok(())
}
