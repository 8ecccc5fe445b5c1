//! Schedule flattener
//!
//! Expands parsed time groups into one [`FlatScheduleEntry`] per weekday and
//! time, then sorts a movie's entries into a stable, deterministic order.

use tracing::debug;

use crate::config::EntryOrdering;
use crate::types::{FlatScheduleEntry, TheaterSchedule, TimeGroup};

use super::schedule::parse_schedule_line;

/// Expand time groups into flat entries sharing one theater/band context.
///
/// Entries come out group by group, weekdays ascending, times in line order.
pub fn flatten_groups(
    theater: &str,
    audio_subs: &str,
    is_3d: bool,
    groups: &[TimeGroup],
) -> Vec<FlatScheduleEntry> {
    let mut entries = Vec::new();
    for group in groups {
        for &week_day in &group.weekdays {
            for time in &group.times {
                entries.push(FlatScheduleEntry {
                    theater: theater.to_string(),
                    audio_subs: audio_subs.to_string(),
                    is_3d,
                    time: time.clone(),
                    week_day,
                });
            }
        }
    }
    entries
}

/// Sort key used by [`EntryOrdering::Lexicographic`]: `"<weekday>_<time>"`.
///
/// Compared as text, so "2_9h" sorts after "2_19h".
pub fn lexicographic_key(entry: &FlatScheduleEntry) -> String {
    format!("{}_{}", entry.week_day.index(), entry.time)
}

/// Minutes since midnight for a time token ("14h30", "19h", "20:30").
pub fn minutes_of_day(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(['h', ':'])?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = if minutes.is_empty() { 0 } else { minutes.parse().ok()? };
    Some(hours * 60 + minutes)
}

/// Stable sort of flat entries.
pub fn sort_entries(entries: &mut [FlatScheduleEntry], ordering: EntryOrdering) {
    match ordering {
        EntryOrdering::Lexicographic => entries.sort_by_cached_key(lexicographic_key),
        EntryOrdering::Chronological => entries.sort_by(|a, b| {
            let key = |e: &FlatScheduleEntry| {
                // Unparseable times go last within their day
                (e.week_day, minutes_of_day(&e.time).unwrap_or(u32::MAX))
            };
            key(a).cmp(&key(b)).then_with(|| a.time.cmp(&b.time))
        }),
    }
}

/// Parse and flatten every line of a movie's schedule, then sort the result.
///
/// Line text is taken as scraped; weekday phrases match in any case (see
/// [`parse_schedule_line`]).
///
/// # Examples
/// ```
/// use jcnet_core::{EntryOrdering, ScheduleLine, TheaterSchedule};
/// use jcnet_core::parser::flatten_schedule;
///
/// let schedule = vec![TheaterSchedule {
///     movie_theater: "Cinépolis".to_string(),
///     lines: vec![ScheduleLine {
///         text: "Sala 2: 21h (sábado)".to_string(),
///         audio_subs: "Legendado".to_string(),
///         is_3d: false,
///     }],
/// }];
///
/// let entries = flatten_schedule(&schedule, EntryOrdering::default());
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].week_day.index(), 6);
/// ```
pub fn flatten_schedule(
    raw_schedule: &[TheaterSchedule],
    ordering: EntryOrdering,
) -> Vec<FlatScheduleEntry> {
    let mut entries = Vec::new();
    for theater in raw_schedule {
        for line in &theater.lines {
            let groups = parse_schedule_line(&line.text);
            entries.extend(flatten_groups(
                &theater.movie_theater,
                &line.audio_subs,
                line.is_3d,
                &groups,
            ));
        }
    }

    sort_entries(&mut entries, ordering);
    debug!(
        theaters = raw_schedule.len(),
        entries = entries.len(),
        ?ordering,
        "flattened schedule"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScheduleLine, Weekday};
    use proptest::prelude::*;

    fn days(indices: &[u8]) -> std::collections::BTreeSet<Weekday> {
        indices.iter().filter_map(|&i| Weekday::from_index(i)).collect()
    }

    fn line(text: &str, audio_subs: &str, is_3d: bool) -> ScheduleLine {
        ScheduleLine {
            text: text.to_string(),
            audio_subs: audio_subs.to_string(),
            is_3d,
        }
    }

    fn pairs(entries: &[FlatScheduleEntry]) -> Vec<(u8, &str)> {
        entries
            .iter()
            .map(|e| (e.week_day.index(), e.time.as_str()))
            .collect()
    }

    #[test]
    fn test_flatten_groups_cross_joins_days_and_times() {
        let groups = vec![
            TimeGroup::new(days(&[4, 0]), vec!["13h".to_string(), "15h".to_string()]),
            TimeGroup::new(days(&[2]), vec!["14h50".to_string()]),
        ];
        let entries = flatten_groups("Cinépolis", "Dublado", true, &groups);

        assert_eq!(
            pairs(&entries),
            vec![(0, "13h"), (0, "15h"), (4, "13h"), (4, "15h"), (2, "14h50")]
        );
        assert!(entries.iter().all(|e| e.theater == "Cinépolis"));
        assert!(entries.iter().all(|e| e.audio_subs == "Dublado"));
        assert!(entries.iter().all(|e| e.is_3d));
    }

    #[test]
    fn test_flatten_groups_with_empty_weekdays_emits_nothing() {
        let groups = vec![TimeGroup::new(days(&[]), vec!["15h".to_string()])];
        assert!(flatten_groups("Cinemark", "Legendado", false, &groups).is_empty());
    }

    #[test]
    fn test_lexicographic_order_keeps_text_comparison() {
        let groups = vec![TimeGroup::new(
            days(&[1]),
            vec!["9h".to_string(), "19h".to_string(), "13h30".to_string()],
        )];
        let mut entries = flatten_groups("Cinemark", "Dublado", false, &groups);
        sort_entries(&mut entries, EntryOrdering::Lexicographic);

        assert_eq!(pairs(&entries), vec![(1, "13h30"), (1, "19h"), (1, "9h")]);
    }

    #[test]
    fn test_chronological_order_compares_clock_values() {
        let groups = vec![TimeGroup::new(
            days(&[1]),
            vec!["9h".to_string(), "19h".to_string(), "13:30".to_string()],
        )];
        let mut entries = flatten_groups("Cinemark", "Dublado", false, &groups);
        sort_entries(&mut entries, EntryOrdering::Chronological);

        assert_eq!(pairs(&entries), vec![(1, "9h"), (1, "13:30"), (1, "19h")]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let schedule = vec![
            TheaterSchedule {
                movie_theater: "Cinépolis".to_string(),
                lines: vec![line("Sala 2: 21h (sábado)", "Dublado", false)],
            },
            TheaterSchedule {
                movie_theater: "Cinemark".to_string(),
                lines: vec![line("Sala 5: 21h (sábado)", "Legendado", true)],
            },
        ];
        let entries = flatten_schedule(&schedule, EntryOrdering::Lexicographic);

        let theaters: Vec<&str> = entries.iter().map(|e| e.theater.as_str()).collect();
        assert_eq!(theaters, vec!["Cinépolis", "Cinemark"]);
        assert!(!entries[0].is_3d);
        assert!(entries[1].is_3d);
    }

    #[test]
    fn test_flatten_schedule_sorts_across_theaters() {
        let schedule = vec![
            TheaterSchedule {
                movie_theater: "Cinépolis".to_string(),
                lines: vec![line(
                    "Sala 1: 13h10 (quinta a segunda, quarta); 14h50 (terça)",
                    "Dublado",
                    false,
                )],
            },
            TheaterSchedule {
                movie_theater: "Cinemark".to_string(),
                lines: vec![line("Sala 5: 21h15 (quinta, sexta, sábado e domingo)", "Legendado", false)],
            },
        ];
        let entries = flatten_schedule(&schedule, EntryOrdering::default());

        assert_eq!(entries.len(), 11);
        assert_eq!(
            pairs(&entries),
            vec![
                (0, "13h10"),
                (0, "21h15"),
                (1, "13h10"),
                (2, "14h50"),
                (3, "13h10"),
                (4, "13h10"),
                (4, "21h15"),
                (5, "13h10"),
                (5, "21h15"),
                (6, "13h10"),
                (6, "21h15"),
            ]
        );
        assert_eq!(entries[1].theater, "Cinemark");
    }

    #[test]
    fn test_flatten_schedule_ignores_phrase_case() {
        let schedule = vec![TheaterSchedule {
            movie_theater: "Cinépolis".to_string(),
            lines: vec![line("Sala 2: 21h (Sábado)", "Legendado", false)],
        }];
        let entries = flatten_schedule(&schedule, EntryOrdering::default());

        assert_eq!(pairs(&entries), vec![(6, "21h")]);
        assert_eq!(schedule[0].lines[0].text, "Sala 2: 21h (Sábado)");
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(minutes_of_day("14h30"), Some(870));
        assert_eq!(minutes_of_day("19h"), Some(1140));
        assert_eq!(minutes_of_day("20:30"), Some(1230));
        assert_eq!(minutes_of_day("agora"), None);
    }

    #[test]
    fn test_lexicographic_key() {
        let entry = FlatScheduleEntry {
            theater: "Cinemark".to_string(),
            audio_subs: "Dublado".to_string(),
            is_3d: false,
            time: "22h50".to_string(),
            week_day: Weekday::Wednesday,
        };
        assert_eq!(lexicographic_key(&entry), "3_22h50");
    }

    proptest! {
        #[test]
        fn prop_flatten_schedule_is_deterministic(
            times in prop::collection::vec((0u8..24, 0u8..60), 1..6),
            qualifier in prop_oneof![
                Just(""),
                Just(" (quinta a segunda, quarta)"),
                Just(" (exceto domingo)"),
                Just(" terça"),
            ],
            chronological in any::<bool>(),
        ) {
            let text = format!(
                "Sala 1: {}{}",
                times.iter().map(|(h, m)| format!("{}h{:02}", h, m)).collect::<Vec<_>>().join(", "),
                qualifier
            );
            let schedule = vec![TheaterSchedule {
                movie_theater: "Cinépolis".to_string(),
                lines: vec![line(&text, "Dublado", false)],
            }];
            let ordering = if chronological {
                EntryOrdering::Chronological
            } else {
                EntryOrdering::Lexicographic
            };

            let first = flatten_schedule(&schedule, ordering);
            let second = flatten_schedule(&schedule, ordering);
            prop_assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
            prop_assert!(first.iter().all(|e| e.week_day.index() <= 6));
        }
    }
}
