//! Timestamp display helpers.
//!
//! The backend emits ISO-8601 strings, sometimes with an offset and sometimes
//! naive with a fractional second. Values are shown as written, without
//! converting between zones. Anything unparseable is shown verbatim.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

fn parse_datetime(raw: &str) -> Option<PrimitiveDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(dt.date(), dt.time()));
    }
    PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
    )
    .ok()
}

fn parse_date(raw: &str) -> Option<Date> {
    parse_datetime(raw)
        .map(PrimitiveDateTime::date)
        .or_else(|| Date::parse(raw, format_description!("[year]-[month]-[day]")).ok())
}

/// `YYYY-MM-DD HH:MM`, or the input when it is not a timestamp.
#[must_use]
pub fn display_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    parse_datetime(trimmed)
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day] [hour]:[minute]")).ok())
        .unwrap_or_else(|| trimmed.to_owned())
}

/// `YYYY-MM-DD`, or the input when it is not a date.
#[must_use]
pub fn display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    parse_date(trimmed)
        .and_then(|d| d.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| trimmed.to_owned())
}

/// Free text as entered, or `-` when missing or blank.
#[must_use]
pub fn display_text(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.to_owned(),
        _ => "-".to_owned(),
    }
}
