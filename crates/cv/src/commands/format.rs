use anstream::println;
use serde::Serialize;
use tracing::debug;

use super::Result;
use crate::config::{Config, OutputFormat};

#[derive(Serialize)]
struct FormatEntry {
    version: String,
    fields: usize,
}

pub fn format(config: &Config, version: &str, fields: Option<usize>) -> Result<()> {
    let version = config.parse(version)?;
    let fields = fields.unwrap_or_else(|| version.field_count());
    debug!("Formatting {version} with {fields} fields");

    let rendered = version.format_with(fields, config.separator)?;
    match config.format {
        OutputFormat::Text => println!("{rendered}"),
        OutputFormat::Json => {
            let entry = FormatEntry {
                version: rendered,
                fields,
            };
            println!("{}", serde_json::to_string(&entry)?);
        }
    }

    Ok(())
}
