//! Listing assembly
//!
//! Combines extraction, schedule parsing and flattening into the per-movie
//! result handed back to callers.

use tracing::{debug, info};

use crate::config::ListingConfig;
use crate::error::Result;
use crate::extract::{extract_attributes, group_schedule_block};
use crate::parser::flatten_schedule;
use crate::types::{MovieNodes, MovieSource, ParsedMovie};

impl MovieSource {
    /// Build a movie source from the raw text nodes of its page section.
    ///
    /// The image path is resolved against `config.image_base_url`; empty
    /// schedule blocks are dropped.
    pub fn from_nodes(nodes: MovieNodes, config: &ListingConfig) -> Self {
        let raw_schedule = nodes
            .schedule_blocks
            .iter()
            .filter_map(|block| group_schedule_block(block))
            .collect();

        Self {
            title: nodes.title.trim().to_string(),
            description: nodes.description.trim().to_string(),
            image_url: config.image_url(&nodes.image_src),
            trailer_link: nodes.trailer_link,
            attributes: extract_attributes(&nodes.attribute_nodes),
            raw_schedule,
        }
    }
}

/// Parse one movie's schedule and attach it to the passthrough metadata.
pub fn parse_movie(source: MovieSource, config: &ListingConfig) -> ParsedMovie {
    let parsed_schedule = flatten_schedule(&source.raw_schedule, config.ordering);
    debug!(
        title = %source.title,
        showtimes = parsed_schedule.len(),
        "parsed movie"
    );

    ParsedMovie {
        title: source.title,
        description: source.description,
        image_url: source.image_url,
        trailer_link: source.trailer_link,
        attributes: source.attributes,
        raw_schedule: source.raw_schedule,
        parsed_schedule,
    }
}

/// Parse every movie of a listing.
pub fn parse_movies(sources: Vec<MovieSource>, config: &ListingConfig) -> Vec<ParsedMovie> {
    let movies: Vec<ParsedMovie> = sources
        .into_iter()
        .map(|source| parse_movie(source, config))
        .collect();
    info!(movies = movies.len(), "parsed listing");
    movies
}

/// Decode a JSON array of [`MovieSource`] and parse it.
///
/// # Errors
/// - `ListingError::InvalidConfig` - `config` fails validation
/// - `ListingError::Json` - `json` is not an array of movie sources
///
/// # Example
/// ```
/// use jcnet_core::{parse_movies_json, ListingConfig};
///
/// let json = r#"[{
///     "title": "Coringa",
///     "raw_schedule": [{
///         "movie_theater": "Cinépolis",
///         "lines": [{"text": "Sala 2: 21h (sábado)", "audio_subs": "Legendado", "is_3d": false}]
///     }]
/// }]"#;
/// let movies = parse_movies_json(json, &ListingConfig::default()).unwrap();
/// assert_eq!(movies[0].parsed_schedule.len(), 1);
/// assert_eq!(movies[0].attributes.genre, "not set");
/// ```
pub fn parse_movies_json(json: &str, config: &ListingConfig) -> Result<Vec<ParsedMovie>> {
    config.validate()?;
    let sources: Vec<MovieSource> = serde_json::from_str(json)?;
    Ok(parse_movies(sources, config))
}

/// Decode a JSON array of [`MovieNodes`], extract and parse it.
///
/// # Errors
/// - `ListingError::InvalidConfig` - `config` fails validation
/// - `ListingError::Json` - `json` is not an array of movie nodes
pub fn parse_movie_nodes_json(json: &str, config: &ListingConfig) -> Result<Vec<ParsedMovie>> {
    config.validate()?;
    let nodes: Vec<MovieNodes> = serde_json::from_str(json)?;
    let sources = nodes
        .into_iter()
        .map(|movie| MovieSource::from_nodes(movie, config))
        .collect();
    Ok(parse_movies(sources, config))
}
