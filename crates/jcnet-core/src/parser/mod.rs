//! Schedule text parsers
//!
//! This module turns the free-text showtime lines of the listings page into
//! structured data:
//! - `weekdays`: resolve weekday phrases into sets of days
//! - `schedule`: split a screen line into weekday-qualified time groups
//! - `flatten`: expand time groups into sorted per-showtime entries

pub mod flatten;
pub mod schedule;
pub mod weekdays;

// Re-export main parsing functions
pub use flatten::{flatten_groups, flatten_schedule, sort_entries};
pub use schedule::{extract_times, parse_schedule_line, strip_dates};
pub use weekdays::resolve_weekdays;
