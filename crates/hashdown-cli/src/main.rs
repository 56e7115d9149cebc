//! `hashdown` CLI: convert between Hashdown and JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to Hashdown (stdin → stdout)
//! echo '{"name":"Ada","langs":["en","fr"]}' | hashdown encode
//!
//! # Encode from file to file, nesting every list with headers
//! hashdown encode -i data.json -o data.md --no-shorthand-lists
//!
//! # Decode Hashdown back to pretty-printed JSON
//! hashdown decode -i data.md
//!
//! # Rewrite a Hashdown file in canonical form
//! hashdown fmt -i notes.md -o notes.md
//!
//! # Validate nesting only
//! hashdown check -i notes.md
//! ```
//!
//! Set `RUST_LOG` (or pass `-v`) to see parser/serializer tracing on stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hashdown_core::{StringifyOptions, Value};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hashdown",
    version,
    about = "Hashdown (nested data as Markdown headers and lists) CLI"
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to Hashdown
    Encode {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Decode Hashdown to JSON
    Decode {
        /// Input Hashdown file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit minified JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Re-serialize a Hashdown document in canonical form
    Fmt {
        /// Input Hashdown file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Check that a Hashdown document parses
    Check {
        /// Input Hashdown file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Serializer switches shared by `encode` and `fmt`.
#[derive(Args)]
struct StyleArgs {
    /// Nest every list with headers instead of `- item` lines
    #[arg(long)]
    no_shorthand_lists: bool,
    /// Write bare `#` headers for sequentially numbered entries
    #[arg(long)]
    omit_numeric_keys: bool,
}

impl From<&StyleArgs> for StringifyOptions {
    fn from(args: &StyleArgs) -> Self {
        StringifyOptions {
            shorthand_lists: !args.no_shorthand_lists,
            omit_numeric_keys: args.omit_numeric_keys,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode {
            input,
            output,
            style,
        } => {
            let json = read_input(input.as_deref())?;
            let doc = hashdown_core::encode(&json, &StringifyOptions::from(&style))
                .context("Failed to encode JSON to Hashdown")?;
            write_output(output.as_deref(), &doc)?;
        }
        Commands::Decode {
            input,
            output,
            compact,
        } => {
            let value = read_document(input.as_deref())?;
            let json = serde_json::Value::from(&value);
            let text = if compact {
                serde_json::to_string(&json)?
            } else {
                let mut pretty = serde_json::to_string_pretty(&json)?;
                pretty.push('\n');
                pretty
            };
            write_output(output.as_deref(), &text)?;
        }
        Commands::Fmt {
            input,
            output,
            style,
        } => {
            let value = read_document(input.as_deref())?;
            let options = StringifyOptions::from(&style);
            match output.as_deref() {
                Some(path) => hashdown_core::write_file(&value, path, &options)
                    .context("Failed to write Hashdown")?,
                None => print!("{}", hashdown_core::stringify(&value, &options)),
            }
        }
        Commands::Check { input } => {
            read_document(input.as_deref())?;
            println!("ok");
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins; otherwise `-v` selects
/// debug output and the default is warnings only.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse a Hashdown document from a file or stdin.
fn read_document(path: Option<&str>) -> Result<Value> {
    match path {
        Some(path) => hashdown_core::read_file(Path::new(path))
            .with_context(|| format!("Failed to decode Hashdown file: {}", path)),
        None => {
            let text = read_input(None)?;
            hashdown_core::parse(&text).context("Failed to decode Hashdown")
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
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
