use super::*;
use time::macros::{date, datetime, offset};

#[test]
fn parse_input_date_reads_iso_days() {
    assert_eq!(parse_input_date("2026-10-20"), Some(date!(2026 - 10 - 20)));
    assert_eq!(parse_input_date(" 2026-10-20 "), Some(date!(2026 - 10 - 20)));
    assert_eq!(parse_input_date(""), None);
    assert_eq!(parse_input_date("2026-13-01"), None);
}

#[test]
fn format_input_date_pads_components() {
    assert_eq!(format_input_date(date!(2026 - 01 - 05)), "2026-01-05");
}

#[test]
fn datetime_local_round_trips_in_trip_offset() {
    let at = datetime!(2026-10-20 09:30 +05:30);
    let value = datetime_local_value(at);
    assert_eq!(value, "2026-10-20T09:30");
    assert_eq!(parse_datetime_local(&value, offset!(+05:30)), Some(at));
}

#[test]
fn parse_datetime_local_accepts_seconds() {
    assert_eq!(
        parse_datetime_local("2026-10-20T09:30:15", offset!(UTC)),
        Some(datetime!(2026-10-20 09:30:15 UTC))
    );
    assert_eq!(parse_datetime_local("tomorrow", offset!(UTC)), None);
}

#[test]
fn labels_render_day_and_clock() {
    let at = datetime!(2026-10-20 09:05 +05:30);
    assert_eq!(day_label(at), "Tue, 20 Oct 2026");
    assert_eq!(clock_label(at), "09:05");
}

#[test]
fn today_outside_browser_is_a_real_date() {
    assert!(today().year() >= 2024);
}
