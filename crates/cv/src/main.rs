use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use miette::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod config;

use commands::{add, compare, format, random};
use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Character separating the segments of a version
    #[arg(
        short,
        long,
        global = true,
        env = "CV_SEPARATOR",
        default_value_t = cv_version::SEPARATOR
    )]
    separator: char,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "CV_FORMAT",
        default_value = "text"
    )]
    format: OutputFormat,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            separator: self.separator,
            format: self.format,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compare two version strings")]
    Compare {
        /// Left-hand version, e.g. 2.5.1
        left: String,

        /// Right-hand version, e.g. 2.4.1.6
        right: String,
    },

    #[command(about = "Print a version using a given number of fields")]
    Format {
        /// Version to print
        version: String,

        /// How many leading segments to print, defaults to all that were given
        #[arg(long)]
        fields: Option<usize>,
    },

    #[command(about = "Add two versions segment by segment")]
    Add {
        left: String,
        right: String,
    },

    #[command(about = "Generate two random versions and compare them")]
    Random {
        /// Use the same version on both sides
        #[arg(long)]
        equal: bool,

        /// Number of segments in each generated version
        #[arg(long, default_value_t = cv_version::MAX_SEGMENTS)]
        segments: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.verbose);

    let config = cli.config();
    debug!(separator = %config.separator, format = ?config.format, "Loaded config");

    match cli.command {
        Commands::Compare { left, right } => compare::compare(&config, &left, &right)?,
        Commands::Format { version, fields } => format::format(&config, &version, fields)?,
        Commands::Add { left, right } => add::add(&config, &left, &right)?,
        Commands::Random {
            equal,
            segments,
            seed,
        } => random::random(&config, equal, segments, seed)?,
    }

    Ok(())
}
