//! Error types for JCNet Listings
//!
//! Parsing schedule text never fails; these errors only come from decoding
//! collaborator input and from validating configuration.
//! ListingError implements Serialize so it can be reported over JSON.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for JCNet Listings operations
#[derive(Error, Debug)]
pub enum ListingError {
    /// Collaborator input was not valid listing JSON
    #[error("Failed to decode listing JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Serialize ListingError as its display string
impl Serialize for ListingError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for JCNet Listings operations
pub type Result<T> = std::result::Result<T, ListingError>;
