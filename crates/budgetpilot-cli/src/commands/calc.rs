//! Calculation command implementation

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use budgetpilot_core::BudgetInput;

pub fn cmd_calc(file: Option<&Path>, pretty: bool) -> Result<()> {
    let json = read_input(file)?;

    let input = BudgetInput::from_json(&json).context("Failed to parse budget input")?;
    let output = budgetpilot_core::calculate(&input)?;

    let rendered = if pretty {
        output.to_json_pretty()?
    } else {
        output.to_json()?
    };
    println!("{}", rendered);

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read budget input from stdin")?;
            Ok(buffer)
        }
    }
}
