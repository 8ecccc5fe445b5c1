//! Weekday phrase resolver
//!
//! Turns Portuguese weekday qualifiers such as "quinta a segunda, quarta" or
//! "exceto segunda" into sets of [`Weekday`].

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::types::Weekday;

/// Accepted spellings per weekday, indexed like [`Weekday::ALL`]
const WEEKDAY_ALIASES: [&[&str]; 7] = [
    &["domingo"],
    &["segunda", "segunda-feira", "segundafeira"],
    &["terça", "terça-feira", "terçafeira"],
    &["quarta", "quarta-feira", "quartafeira"],
    &["quinta", "quinta-feira", "quintafeira"],
    &["sexta", "sexta-feira", "sextafeira"],
    &["sábado"],
];

static EXCEPT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bexceto\b").expect("invalid regex: except marker"));

static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" e |,").expect("invalid regex: list separator"));

impl Weekday {
    /// Spellings of this day accepted in schedule text
    pub fn aliases(self) -> &'static [&'static str] {
        WEEKDAY_ALIASES[usize::from(self.index())]
    }

    /// Whether `word` is one of this day's spellings
    pub fn matches(self, word: &str) -> bool {
        self.aliases().contains(&word)
    }

    /// Look up a day by one of its spellings
    ///
    /// # Examples
    /// ```
    /// use jcnet_core::Weekday;
    ///
    /// assert_eq!(Weekday::from_alias("terça-feira"), Some(Weekday::Tuesday));
    /// assert_eq!(Weekday::from_alias("Terça"), None);
    /// ```
    pub fn from_alias(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.matches(word))
    }
}

fn trim_phrase(phrase: &str) -> &str {
    phrase.trim_matches(|c: char| c.is_whitespace() || c == '(' || c == ')')
}

/// Resolve a weekday phrase into the set of days it names.
///
/// An empty phrase means every day. Phrases may list days ("domingo, segunda
/// e terça"), name ranges that can wrap past Saturday ("quinta a domingo"),
/// and end in an exception clause ("domingo a sexta exceto terça").
/// Words outside the vocabulary are ignored, so the result may be empty.
///
/// # Examples
/// ```
/// use jcnet_core::Weekday;
/// use jcnet_core::parser::resolve_weekdays;
///
/// let days = resolve_weekdays("quinta a domingo");
/// assert_eq!(
///     days.into_iter().map(Weekday::index).collect::<Vec<_>>(),
///     vec![0, 4, 5, 6]
/// );
/// assert_eq!(resolve_weekdays("").len(), 7);
/// ```
pub fn resolve_weekdays(phrase: &str) -> BTreeSet<Weekday> {
    let phrase = trim_phrase(phrase);
    if phrase.is_empty() {
        return Weekday::all();
    }

    if let Some(marker) = EXCEPT_MARKER.find(phrase) {
        let excluded_phrase = trim_phrase(&phrase[marker.end()..]);
        let excluded = if excluded_phrase.is_empty() {
            BTreeSet::new()
        } else {
            resolve_weekdays(excluded_phrase)
        };
        let base = resolve_weekdays(&phrase[..marker.start()]);
        return base.difference(&excluded).copied().collect();
    }

    let mut days = BTreeSet::new();
    for token in LIST_SEPARATOR.split(phrase) {
        let token = trim_phrase(token);
        if token.is_empty() {
            continue;
        }

        match token.split_once(" a ") {
            Some((start, end)) => days.extend(resolve_range(trim_phrase(start), trim_phrase(end))),
            None => days.extend(Weekday::from_alias(token)),
        }
    }
    days
}

/// Expand "<start> a <end>", walking forward from `start` for at most one week.
fn resolve_range(start: &str, end: &str) -> BTreeSet<Weekday> {
    let mut days = BTreeSet::new();
    let Some(first) = Weekday::from_alias(start) else {
        return days;
    };

    for step in 0..7 {
        let day = first.forward(step);
        days.insert(day);
        if step > 0 && day.matches(end) {
            break;
        }
    }
    days
}
