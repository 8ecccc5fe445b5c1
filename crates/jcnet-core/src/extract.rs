//! Text-node extraction for the listings page
//!
//! The page collaborator hands over the text nodes of each movie's paragraphs.
//! This module turns them into typed values: the labelled attribute table and
//! the per-theater schedule lines grouped under their audio/subtitle band.

use tracing::warn;

use crate::types::{MovieAttributes, ScheduleLine, TheaterSchedule};

/// Band used for lines that appear before any "Dublado"/"Legendado" header
pub const ORIGINAL_AUDIO: &str = "Voz original";

/// Band headers recognised in a theater paragraph (compared lower-case)
const BAND_HEADERS: [&str; 2] = ["legendado", "dublado"];

/// Prefix of a screen line ("Sala 4: ...")
const SCREEN_PREFIX: &str = "Sala";

/// Attribute slot of [`MovieAttributes`] a label fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttributeSlot {
    Genre,
    PgRate,
    Director,
    Cast,
    Duration,
}

const KNOWN_ATTRIBUTES: [(&str, AttributeSlot); 5] = [
    ("Gênero:", AttributeSlot::Genre),
    ("Classificação:", AttributeSlot::PgRate),
    ("Direção:", AttributeSlot::Director),
    ("Elenco:", AttributeSlot::Cast),
    ("Duração:", AttributeSlot::Duration),
];

/// Drop non-breaking spaces (raw or escaped) and trim.
///
/// # Examples
/// ```
/// use jcnet_core::extract::clean_text;
///
/// assert_eq!(clean_text("\u{a0}Gênero:\u{a0} "), "Gênero:");
/// assert_eq!(clean_text("Drama\\u00a0"), "Drama");
/// ```
pub fn clean_text(text: &str) -> String {
    text.replace("\\u00a0", "")
        .replace('\u{a0}', "")
        .trim()
        .to_string()
}

fn attribute_slot(label: &str) -> Option<AttributeSlot> {
    KNOWN_ATTRIBUTES
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, slot)| *slot)
}

/// Read the labelled attribute paragraph.
///
/// Nodes alternate between labels ("Gênero:") and values; a known label takes
/// the following node as its value. Attributes the paragraph lacks stay
/// "not set".
pub fn extract_attributes<S: AsRef<str>>(nodes: &[S]) -> MovieAttributes {
    let mut attrs = MovieAttributes::default();

    for (i, node) in nodes.iter().enumerate() {
        let Some(slot) = attribute_slot(&clean_text(node.as_ref())) else {
            continue;
        };
        let Some(value) = nodes.get(i + 1) else {
            continue;
        };

        let value = clean_text(value.as_ref());
        match slot {
            AttributeSlot::Genre => attrs.genre = value,
            AttributeSlot::PgRate => attrs.pg_rate = value,
            AttributeSlot::Director => attrs.director = value,
            AttributeSlot::Cast => attrs.cast = value,
            AttributeSlot::Duration => attrs.duration = value,
        }
    }

    attrs
}

/// Group one theater paragraph into schedule lines.
///
/// The first node names the theater. "Dublado"/"Legendado" nodes open a new
/// band; "Sala ..." nodes become lines of the current band, or of a
/// "Voz original" band when no header came first. Other nodes are ignored.
/// Returns `None` for an empty paragraph.
pub fn group_schedule_block<S: AsRef<str>>(nodes: &[S]) -> Option<TheaterSchedule> {
    let Some((theater, rest)) = nodes.split_first() else {
        warn!("empty schedule block");
        return None;
    };

    let mut band: Option<String> = None;
    let mut lines = Vec::new();

    for node in rest {
        let content = clean_text(node.as_ref());
        if content.is_empty() {
            continue;
        }

        if BAND_HEADERS.contains(&content.to_lowercase().as_str()) {
            band = Some(content);
            continue;
        }

        if content.starts_with(SCREEN_PREFIX) {
            let audio_subs = band.get_or_insert_with(|| ORIGINAL_AUDIO.to_string()).clone();
            lines.push(ScheduleLine {
                is_3d: content.contains("3D"),
                text: content,
                audio_subs,
            });
        }
    }

    Some(TheaterSchedule {
        movie_theater: clean_text(theater.as_ref()),
        lines,
    })
}
