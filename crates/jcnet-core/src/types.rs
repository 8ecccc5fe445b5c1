//! Data types for JCNet Listings
//!
//! This module contains the data structures shared by the parser, the
//! extraction helpers and the listing assembly.
//! All types implement Serialize and Deserialize for JSON interchange.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Placeholder stored for movie attributes the listing page did not provide
pub const NOT_SET: &str = "not set";

/// Day of the week, Sunday first
///
/// Serialized as its index (0 = Sunday, 6 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Every weekday in index order
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Index of the day, 0 = Sunday
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Day for an index, `None` outside 0..=6
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The whole week as a set
    pub fn all() -> BTreeSet<Weekday> {
        Self::ALL.into_iter().collect()
    }

    /// Day reached after walking `steps` days forward, wrapping after Saturday
    pub fn forward(self, steps: u8) -> Self {
        Self::ALL[(usize::from(self.index()) + usize::from(steps)) % Self::ALL.len()]
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.index()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
        Weekday::from_index(index).ok_or_else(|| format!("weekday index out of range: {}", index))
    }
}

/// Showtimes that share one weekday qualifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGroup {
    /// Days these times run on
    pub weekdays: BTreeSet<Weekday>,
    /// Time tokens as written (e.g. "14h30", "20:30"), in line order
    pub times: Vec<String>,
}

impl TimeGroup {
    /// Create a new time group
    pub fn new(weekdays: BTreeSet<Weekday>, times: Vec<String>) -> Self {
        Self { weekdays, times }
    }
}

/// One "Sala ..." line with the band it was listed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleLine {
    /// Raw schedule text, e.g. "Sala 4: 14h30 – 16h40 terça"
    pub text: String,
    /// Audio/subtitle band ("Dublado", "Legendado" or "Voz original")
    pub audio_subs: String,
    /// Whether the line advertises a 3D screening
    pub is_3d: bool,
}

/// All schedule lines listed for one movie theater
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheaterSchedule {
    /// Theater name (e.g. "Cinépolis")
    pub movie_theater: String,
    /// Lines in page order
    #[serde(default)]
    pub lines: Vec<ScheduleLine>,
}

/// A single screening: one theater, one weekday, one time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatScheduleEntry {
    pub theater: String,
    pub audio_subs: String,
    pub is_3d: bool,
    pub time: String,
    pub week_day: Weekday,
}

fn not_set() -> String {
    NOT_SET.to_string()
}

/// Labelled attributes from the movie info paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieAttributes {
    #[serde(default = "not_set")]
    pub genre: String,
    #[serde(default = "not_set")]
    pub pg_rate: String,
    #[serde(default = "not_set")]
    pub director: String,
    #[serde(default = "not_set")]
    pub cast: String,
    #[serde(default = "not_set")]
    pub duration: String,
}

impl Default for MovieAttributes {
    fn default() -> Self {
        Self {
            genre: not_set(),
            pg_rate: not_set(),
            director: not_set(),
            cast: not_set(),
            duration: not_set(),
        }
    }
}

/// A movie as handed over by the page extraction collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSource {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "imageURL", alias = "image_url")]
    pub image_url: String,
    #[serde(default, rename = "trailerLink", alias = "trailer_link")]
    pub trailer_link: Option<String>,
    #[serde(default)]
    pub attributes: MovieAttributes,
    #[serde(default)]
    pub raw_schedule: Vec<TheaterSchedule>,
}

/// A movie as plain text nodes, before labels and bands are interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieNodes {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Relative image path as found in the page (e.g. "imagens/cinema/x.jpg")
    #[serde(default)]
    pub image_src: String,
    #[serde(default, rename = "trailerLink", alias = "trailer_link")]
    pub trailer_link: Option<String>,
    /// Text nodes of the attribute paragraph, labels and values interleaved
    #[serde(default)]
    pub attribute_nodes: Vec<String>,
    /// Text nodes of each theater paragraph, theater name first
    #[serde(default)]
    pub schedule_blocks: Vec<Vec<String>>,
}

/// A movie with its schedule parsed into flat entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMovie {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL", alias = "image_url")]
    pub image_url: String,
    #[serde(rename = "trailerLink", alias = "trailer_link")]
    pub trailer_link: Option<String>,
    #[serde(flatten)]
    pub attributes: MovieAttributes,
    pub raw_schedule: Vec<TheaterSchedule>,
    pub parsed_schedule: Vec<FlatScheduleEntry>,
}
