//! Commands for the jcnet CLI
//!
//! Each command reads its input, runs the core parser and returns a JSON
//! value for `main` to print.
//!
//! Weekday phrases are case-insensitive in every command. `resolve` lowercases
//! its argument before calling the resolver, which only knows the lower-case
//! vocabulary. `parse-line` and `listings` pass text through unchanged because
//! the line parser lowercases each phrase itself.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use jcnet_core::parser::{parse_schedule_line, resolve_weekdays};
use jcnet_core::{parse_movie_nodes_json, parse_movies_json, ListingConfig, Weekday};
use serde_json::Value;
use tracing::info;

/// Resolve a weekday phrase.
///
/// # Returns
/// JSON array of weekday indices (0 = Sunday)
pub fn resolve(phrase: &str) -> Result<Value> {
    let days: Vec<u8> = resolve_weekdays(&phrase.to_lowercase())
        .into_iter()
        .map(Weekday::index)
        .collect();
    Ok(serde_json::to_value(days)?)
}

/// Parse a single schedule line.
///
/// # Returns
/// JSON array of time groups
pub fn parse_line(line: &str) -> Result<Value> {
    Ok(serde_json::to_value(parse_schedule_line(line))?)
}

/// Parse a whole listing read from `path`, or stdin when no path is given.
///
/// # Arguments
/// * `path` - JSON file with an array of movies
/// * `nodes` - Input holds raw text nodes instead of structured movies
/// * `config` - Listing configuration
///
/// # Returns
/// JSON array of parsed movies
pub fn listings(path: Option<&Path>, nodes: bool, config: &ListingConfig) -> Result<Value> {
    let input = read_input(path)?;
    let movies = if nodes {
        parse_movie_nodes_json(&input, config)
    } else {
        parse_movies_json(&input, config)
    }
    .context("failed to parse listing")?;

    info!(movies = movies.len(), "listing parsed");
    Ok(serde_json::to_value(movies)?)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}
