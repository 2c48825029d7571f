//! Human-readable "time ago" labels.

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

pub const NOT_AVAILABLE: &str = "N/A";
pub const JUST_NOW: &str = "Just now";

const MINUTE_MS: i128 = 60_000;
const HOUR_MS: i128 = 3_600_000;
const DAY_MS: i128 = 86_400_000;
const WEEK_MS: i128 = 7 * DAY_MS;

/// Formats `timestamp` relative to `now`.
///
/// Future timestamps read as "Just now". Anything a week or older falls back
/// to a short date ("Oct 9") in `now`'s offset.
pub fn format_relative(timestamp: Option<OffsetDateTime>, now: OffsetDateTime) -> String {
    let Some(timestamp) = timestamp else {
        return NOT_AVAILABLE.to_string();
    };

    let delta = (now - timestamp).whole_milliseconds();
    if delta < MINUTE_MS {
        JUST_NOW.to_string()
    } else if delta < HOUR_MS {
        format!("{}m ago", delta / MINUTE_MS)
    } else if delta < DAY_MS {
        format!("{}h ago", delta / HOUR_MS)
    } else if delta < WEEK_MS {
        format!("{}d ago", delta / DAY_MS)
    } else {
        short_date(timestamp.to_offset(now.offset()).date())
    }
}

/// Parses a wire timestamp and formats it. Unparseable input reads as "N/A".
pub fn format_timestamp(raw: Option<&str>, now: OffsetDateTime) -> String {
    let parsed = raw.and_then(|raw| parse_timestamp(raw, now.offset()));
    format_relative(parsed, now)
}

/// Accepts RFC 3339, ISO 8601 with or without an offset, and bare dates.
/// Date-times without an offset are taken to be in `local_offset`; bare dates
/// are UTC midnight.
pub fn parse_timestamp(raw: &str, local_offset: UtcOffset) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(at);
    }

    let iso = raw.replacen(' ', "T", 1);
    if let Ok(at) = OffsetDateTime::parse(&iso, &Iso8601::DEFAULT) {
        return Some(at);
    }
    // The date parser stops after the date, so it only sees bare dates.
    if !iso.contains('T') {
        return Date::parse(raw, &Iso8601::DEFAULT)
            .ok()
            .map(|date| date.midnight().assume_utc());
    }

    PrimitiveDateTime::parse(&iso, &Iso8601::DEFAULT)
        .ok()
        .map(|at| at.assume_offset(local_offset))
}

fn short_date(date: Date) -> String {
    format!("{} {}", month_abbreviation(date.month()), date.day())
}

fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
