//! `sjson` CLI: parse, check, and re-render JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse JSON from stdin and print the pretty rendering
//! echo '{"name":"Alice","age":30}' | sjson render
//!
//! # Render from file to file
//! sjson render -i data.json -o pretty.json
//!
//! # Validate a document (exit status 1 and the error kind on failure)
//! sjson check -i data.json
//!
//! # Print one top-level member, or the list of top-level keys
//! sjson get name -i data.json
//! sjson keys -i data.json
//!
//! # Re-emit through serde_json (compact, or --pretty)
//! sjson to-json -i data.json
//!
//! # Debug logging of parse failures, and a tighter nesting limit
//! sjson -v --max-depth 16 check -i data.json
//! ```

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplejson_core::{parse_with_options, JsonObject, ParseOptions};
use std::io::{self, Write};
use std::process;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "sjson",
    version,
    about = "Minimal JSON parser and pretty-printer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum nesting depth of objects and arrays
    #[arg(long, global = true, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print its pretty rendering
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that a document parses; prints "ok" or the error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the rendering of one top-level member
    Get {
        /// Top-level key to look up
        key: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the top-level keys, one per line, in document order
    Keys {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Re-emit the document as standard JSON via serde_json
    ToJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Pretty-print instead of compact output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let options = ParseOptions::new().with_max_depth(cli.max_depth);
    debug!(max_depth = options.max_depth, "parser options");

    match cli.command {
        Commands::Render { input, output } => {
            let doc = load_document(input.as_deref(), &options)?;
            write_output(output.as_deref(), &format!("{}\n", doc.render()))?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            match parse_with_options(&text, &options) {
                Ok(doc) => {
                    info!(members = doc.len(), "document is valid");
                    println!("ok");
                }
                Err(err) => {
                    eprintln!("invalid ({:?}): {}", err.kind(), err);
                    process::exit(1);
                }
            }
        }
        Commands::Get { key, input } => {
            let doc = load_document(input.as_deref(), &options)?;
            let value = doc
                .get(&key)
                .with_context(|| format!("No top-level member named '{}'", key))?;
            println!("{}", value.render());
        }
        Commands::Keys { input } => {
            let doc = load_document(input.as_deref(), &options)?;
            for key in doc.keys() {
                println!("{}", key);
            }
        }
        Commands::ToJson { input, pretty } => {
            let doc = load_document(input.as_deref(), &options)?;
            let value = serde_json::Value::from(&doc);
            let json = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{}", json);
        }
    }

    Ok(())
}

fn load_document(path: Option<&str>, options: &ParseOptions) -> Result<JsonObject> {
    let text = read_input(path)?;
    parse_with_options(&text, options).context("Failed to parse JSON document")
}

/// Read the whole document from `path`, or from stdin when no path is given.
fn read_input(path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        return io::read_to_string(io::stdin()).context("Failed to read from stdin");
    };
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    if let Some(path) = path {
        return std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path));
    }
    io::stdout()
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")
}
