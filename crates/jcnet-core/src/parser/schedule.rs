//! Schedule line parser
//!
//! Splits one free-text screen line such as
//! "Sala 1: 13h10 (quinta a segunda, quarta); 14h50 (terça)" into
//! [`TimeGroup`]s. Times without a weekday qualifier of their own end up in a
//! trailing group that runs every day.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::{debug, warn};

use crate::types::TimeGroup;

use super::weekdays::resolve_weekdays;

/// "14h30", "19h" or "20:30"
static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,2}(?:h[0-9]{0,2}|:[0-9]{2})").expect("invalid regex: time token")
});

/// Day-of-month exceptions such as "24-12"
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,2}-[0-9]{1,2}").expect("invalid regex: date token"));

/// Times and separators, a space, an optional "(", a weekday phrase, then ";", ")" or the end.
///
/// The phrase class takes both cases so "(Sábado)" still qualifies its times.
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^;()]*?) \(?([\sa-zA-ZçáÇÁ,-]*)(?:;|\)|$)")
        .expect("invalid regex: schedule segment")
});

/// Remove day-of-month tokens, keeping anything glued to a time.
///
/// "terça, 25-12; quarta" becomes "terça, ; quarta" while "14h30-16h40"
/// is left untouched.
pub fn strip_dates(line: &str) -> String {
    let mut stripped = String::with_capacity(line.len());
    let mut last = 0;

    for date in DATE_TOKEN.find_iter(line) {
        let before = line[..date.start()].chars().next_back();
        let after = line[date.end()..].chars().next();
        if before.is_some_and(is_time_char) || after.is_some_and(is_time_char) {
            continue;
        }
        stripped.push_str(&line[last..date.start()]);
        last = date.end();
    }

    stripped.push_str(&line[last..]);
    stripped
}

fn is_time_char(c: char) -> bool {
    c.is_ascii_digit() || c == 'h' || c == ':'
}

/// Every time token in `text`, left to right, duplicates included.
pub fn extract_times(text: &str) -> Vec<String> {
    TIME_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse one schedule line into weekday-qualified time groups.
///
/// Groups come out in line order; times no segment claimed are appended as a
/// final group covering the whole week. A line without times yields no
/// groups.
///
/// The line may be in any case. Weekday phrases are lower-cased before they
/// are resolved, so "Sala 2: 21h (Sábado)" and "Sala 2: 21h (sábado)" give the
/// same groups. Time tokens are kept as written.
///
/// # Examples
/// ```
/// use jcnet_core::parser::parse_schedule_line;
///
/// let groups = parse_schedule_line("Sala 1: 13h10 (quinta a segunda, quarta); 14h50 (terça)");
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].times, vec!["13h10"]);
/// assert_eq!(groups[1].times, vec!["14h50"]);
/// ```
pub fn parse_schedule_line(line: &str) -> Vec<TimeGroup> {
    let line = strip_dates(line);
    let all_times = extract_times(&line);
    if all_times.is_empty() {
        return Vec::new();
    }

    let mut groups = Vec::new();
    for caps in SEGMENT.captures_iter(&line) {
        let body = caps.get(1).map_or("", |m| m.as_str());
        let phrase = caps.get(2).map_or("", |m| m.as_str());

        let times = extract_times(body);
        if times.is_empty() {
            continue;
        }

        let weekdays = resolve_weekdays(&phrase.to_lowercase());
        if weekdays.is_empty() {
            warn!(phrase, line = %line, "weekday phrase matched no days");
        }
        groups.push(TimeGroup::new(weekdays, times));
    }

    let daily = unclaimed_times(&all_times, &groups);
    debug!(
        line = %line,
        segments = groups.len(),
        daily = daily.len(),
        "parsed schedule line"
    );
    if !daily.is_empty() {
        groups.push(TimeGroup::new(resolve_weekdays(""), daily));
    }

    groups
}

/// Times left over once each group has claimed its own occurrences.
fn unclaimed_times(all_times: &[String], groups: &[TimeGroup]) -> Vec<String> {
    let mut claimed: HashMap<&str, usize> = HashMap::new();
    for time in groups.iter().flat_map(|group| &group.times) {
        *claimed.entry(time.as_str()).or_default() += 1;
    }

    all_times
        .iter()
        .filter(|time| match claimed.get_mut(time.as_str()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}
