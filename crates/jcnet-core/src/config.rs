//! Listing configuration
//!
//! Settings that shape listing assembly: where relative poster paths are
//! resolved and how flattened showtimes are ordered.

use serde::{Deserialize, Serialize};

use crate::error::{ListingError, Result};

/// Base URL poster paths on the listings page are relative to
const DEFAULT_IMAGE_BASE_URL: &str = "https://www.jcnet.com.br/";

/// Ordering applied to a movie's flattened showtimes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrdering {
    /// Compare `"<weekday>_<time>"` as text; "9h" sorts after "19h".
    #[default]
    Lexicographic,
    /// Compare weekday, then the time as minutes since midnight.
    Chronological,
}

/// Configuration for listing assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Base URL for relative image paths (default: https://www.jcnet.com.br/)
    pub image_base_url: String,
    /// Showtime ordering (default: lexicographic)
    pub ordering: EntryOrdering,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            ordering: EntryOrdering::default(),
        }
    }
}

impl ListingConfig {
    /// Replace the image base URL
    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    /// Replace the showtime ordering
    pub fn with_ordering(mut self, ordering: EntryOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Check that the configuration is usable
    ///
    /// # Errors
    /// Returns `ListingError::InvalidConfig` if the image base URL is not an
    /// http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let base = self.image_base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ListingError::InvalidConfig(format!(
                "image base URL must start with http:// or https://, got {:?}",
                self.image_base_url
            )));
        }
        Ok(())
    }

    /// Absolute URL for an image path found in the page.
    ///
    /// # Examples
    /// ```
    /// use jcnet_core::ListingConfig;
    ///
    /// let config = ListingConfig::default();
    /// assert_eq!(
    ///     config.image_url("/imagens/cartaz.jpg"),
    ///     "https://www.jcnet.com.br/imagens/cartaz.jpg"
    /// );
    /// ```
    pub fn image_url(&self, src: &str) -> String {
        let src = src.trim();
        if src.starts_with("http://") || src.starts_with("https://") {
            return src.to_string();
        }
        format!(
            "{}/{}",
            self.image_base_url.trim().trim_end_matches('/'),
            src.trim_start_matches('/')
        )
    }
}
