//! jcnet: parse JCNet cinema listings into structured showtimes
//!
//! Reads collaborator output as JSON and prints JSON on stdout. Logs go to
//! stderr.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jcnet_core::{EntryOrdering, ListingConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jcnet", version, about = "Parse JCNet cinema listings into structured showtimes")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a weekday phrase such as "quinta a domingo"
    Resolve {
        phrase: String,
    },
    /// Parse one schedule line into time groups
    ParseLine {
        line: String,
    },
    /// Parse a JSON listing (file or stdin) into flattened showtimes
    Listings {
        /// JSON file to read; stdin when omitted
        path: Option<PathBuf>,

        /// Input is raw text nodes per movie instead of structured movies
        #[arg(long)]
        nodes: bool,

        /// Order showtimes by clock time instead of text
        #[arg(long)]
        chronological: bool,

        /// Base URL for relative image paths
        #[arg(long, value_name = "URL")]
        image_base: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "jcnet=debug,jcnet_core=debug"
    } else {
        "jcnet=info,jcnet_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (output, pretty) = match cli.command {
        Command::Resolve { phrase } => (commands::resolve(&phrase)?, false),
        Command::ParseLine { line } => (commands::parse_line(&line)?, false),
        Command::Listings {
            path,
            nodes,
            chronological,
            image_base,
            pretty,
        } => {
            let mut config = ListingConfig::default();
            if chronological {
                config = config.with_ordering(EntryOrdering::Chronological);
            }
            if let Some(base) = image_base {
                config = config.with_image_base_url(base);
            }
            (commands::listings(path.as_deref(), nodes, &config)?, pretty)
        }
    };

    if pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }
    Ok(())
}
