//! JCNet Listings Core Library
//!
//! This crate turns the movie listings of the JCNet cinema page into
//! structured showtimes.
//!
//! # Features
//! - Resolve Portuguese weekday phrases ("quinta a segunda", "exceto terça")
//! - Split free-text screen lines into weekday-qualified time groups
//! - Flatten and sort showtimes per movie
//! - Interpret the text nodes of attribute and theater paragraphs

pub mod config;
pub mod error;
pub mod extract;
pub mod listing;
pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use config::{EntryOrdering, ListingConfig};
pub use error::{ListingError, Result};
pub use listing::{parse_movie, parse_movie_nodes_json, parse_movies, parse_movies_json};
pub use types::{
    FlatScheduleEntry, MovieAttributes, MovieNodes, MovieSource, ParsedMovie, ScheduleLine,
    TheaterSchedule, TimeGroup, Weekday,
};
