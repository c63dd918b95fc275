//! Date parsing and display helpers for form inputs and trip timing.
//!
//! HTML date inputs speak `YYYY-MM-DD` and `datetime-local` inputs speak
//! `YYYY-MM-DDTHH:MM[:SS]` without an offset; trips carry full RFC 3339
//! timestamps.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

const DATE_INPUT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const DATETIME_LOCAL: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]T[hour]:[minute]");
const DATETIME_LOCAL_SECONDS: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DAY_LABEL: &[BorrowedFormatItem<'_>] =
    format_description!("[weekday repr:short], [day padding:none] [month repr:short] [year]");
const CLOCK_LABEL: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

/// Parse a date input value. Empty or malformed input yields `None`.
#[must_use]
pub fn parse_input_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), DATE_INPUT).ok()
}

/// Render a date the way a date input and the list endpoint expect it.
#[must_use]
pub fn format_input_date(date: Date) -> String {
    date.format(DATE_INPUT).unwrap_or_default()
}

/// Value for a `datetime-local` input, in the timestamp's own offset.
#[must_use]
pub fn datetime_local_value(at: OffsetDateTime) -> String {
    at.format(DATETIME_LOCAL).unwrap_or_default()
}

/// Parse a `datetime-local` value and pin it to `offset`.
#[must_use]
pub fn parse_datetime_local(raw: &str, offset: UtcOffset) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    PrimitiveDateTime::parse(raw, DATETIME_LOCAL)
        .or_else(|_| PrimitiveDateTime::parse(raw, DATETIME_LOCAL_SECONDS))
        .ok()
        .map(|local| local.assume_offset(offset))
}

/// e.g. `Tue, 20 Oct 2026`.
#[must_use]
pub fn day_label(at: OffsetDateTime) -> String {
    at.format(DAY_LABEL).unwrap_or_default()
}

/// e.g. `09:30`.
#[must_use]
pub fn clock_label(at: OffsetDateTime) -> String {
    at.format(CLOCK_LABEL).unwrap_or_default()
}

/// Current calendar day in the browser's local time zone.
///
/// Server rendering has no browser clock and falls back to the UTC day.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        if let (Some(year), Some(month), Some(day)) = (year, month, day)
            && let Ok(date) = Date::from_calendar_date(year, month, day)
        {
            return date;
        }
    }
    OffsetDateTime::now_utc().date()
}
