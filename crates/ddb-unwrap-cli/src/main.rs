//! `ddb-unwrap` CLI — flatten DynamoDB-style typed-attribute JSON into plain JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Convert ./input.json, print one JSON line to stdout
//! ddb-unwrap
//!
//! # Convert a specific file, or stdin with "-"
//! ddb-unwrap -i export.json
//! cat export.json | ddb-unwrap -i -
//!
//! # Write pretty-printed JSON to a file
//! ddb-unwrap -i export.json -o plain.json --pretty
//!
//! # Show which attributes were dropped
//! ddb-unwrap --log-level debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Input file read when `--input` is not given.
const DEFAULT_INPUT: &str = "input.json";

#[derive(Parser)]
#[command(
    name = "ddb-unwrap",
    version,
    about = "Convert DynamoDB-style typed-attribute JSON to plain JSON"
)]
struct Cli {
    /// Input file ("-" reads stdin)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: String,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the output instead of a single line
    #[arg(long)]
    pretty: bool,

    /// Log level filter (overrides RUST_LOG; defaults to "warn")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let json = read_input(&cli.input)?;
    debug!(input = cli.input.as_str(), bytes = json.len(), "read input");

    let line = ddb_unwrap_core::convert_str(&json)
        .with_context(|| format!("Failed to convert typed JSON from {}", cli.input))?;

    let mut rendered = if cli.pretty {
        let value: serde_json::Value = serde_json::from_str(&line)?;
        serde_json::to_string_pretty(&value)?
    } else {
        line
    };
    rendered.push('\n');

    write_output(cli.output.as_deref(), &rendered)
}

/// Install a stderr subscriber so stdout carries only the converted JSON.
///
/// Precedence: `--log-level`, then `RUST_LOG`, then `warn`.
fn init_tracing(level: Option<&str>) {
    let env_filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
