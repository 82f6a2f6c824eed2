use anstream::println;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

use super::Result;
use crate::config::{Config, OutputFormat};

#[derive(Serialize)]
struct SumEntry {
    left: String,
    right: String,
    sum: String,
}

/// Adds two versions slot by slot. Slots absent on either side stay absent.
pub fn add(config: &Config, left: &str, right: &str) -> Result<()> {
    let left = config.parse(left)?;
    let right = config.parse(right)?;
    let sum = left.checked_add(&right)?;
    debug!("{left} + {right} = {sum}");

    let entry = SumEntry {
        left: config.render(&left)?,
        right: config.render(&right)?,
        sum: config.render(&sum)?,
    };

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&entry)?),
        OutputFormat::Text => println!(
            "{} + {} = {}",
            entry.left.cyan(),
            entry.right.cyan(),
            entry.sum.green()
        ),
    }

    Ok(())
}
