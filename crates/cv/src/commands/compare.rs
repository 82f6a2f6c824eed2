use anstream::println;
use cv_version::Comparison;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

use super::Result;
use crate::config::{Config, OutputFormat};

#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct ComparisonEntry {
    left: String,
    right: String,
    result: i8,
}

impl ComparisonEntry {
    fn new(config: &Config, comparison: &Comparison) -> Result<Self> {
        Ok(Self {
            left: config.render(&comparison.left)?,
            right: config.render(&comparison.right)?,
            result: comparison.sign(),
        })
    }
}

/// Parses both versions and prints how they relate.
pub fn compare(config: &Config, left: &str, right: &str) -> Result<()> {
    let comparison = config.comparator().comparison(left, right)?;
    debug!(
        "Compared {} and {}: {:?}",
        comparison.left, comparison.right, comparison.ordering
    );

    print_comparison(config, &comparison)
}

pub(crate) fn print_comparison(config: &Config, comparison: &Comparison) -> Result<()> {
    let entry = ComparisonEntry::new(config, comparison)?;

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&entry)?),
        OutputFormat::Text => println!(
            "{} {} {}: The result was {}",
            entry.left.cyan(),
            comparison.relation().bold(),
            entry.right.cyan(),
            entry.result
        ),
    }

    Ok(())
}
