use super::*;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 18);

fn fields(from: &str, to: &str) -> SearchFields {
    SearchFields { from: from.to_owned(), to: to.to_owned(), ..SearchFields::default() }
}

#[test]
fn validate_accepts_distinct_places_and_trims_them() {
    let criteria = fields("  Mumbai ", "Pune").validate(TODAY).unwrap();
    assert_eq!(criteria.from, "Mumbai");
    assert_eq!(criteria.to, "Pune");
    assert_eq!(criteria.departure_date, None);
}

#[test]
fn validate_requires_both_places() {
    let errors = fields("", "   ").validate(TODAY).unwrap_err();
    assert_eq!(errors.get(&SearchField::From), Some(&SearchFieldError::MissingFrom));
    assert_eq!(errors.get(&SearchField::To), Some(&SearchFieldError::MissingTo));

    let errors = fields("Mumbai", "").validate(TODAY).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&SearchField::To), Some(&SearchFieldError::MissingTo));
}

#[test]
fn validate_rejects_places_that_normalize_equal() {
    for (from, to) in [("Mumbai", "mumbai,"), ("Mumbai", "Mumbai."), ("  MUMBAI", "mumbai"), ("St. Louis", "st louis")] {
        let errors = fields(from, to).validate(TODAY).unwrap_err();
        assert_eq!(
            errors.get(&SearchField::To),
            Some(&SearchFieldError::SameAsOrigin),
            "{from:?} vs {to:?}"
        );
    }
}

#[test]
fn validate_rejects_past_dates_but_allows_today() {
    let mut form = fields("Mumbai", "Pune");
    form.departure_date = "2026-10-17".to_owned();
    let errors = form.validate(TODAY).unwrap_err();
    assert_eq!(errors.get(&SearchField::DepartureDate), Some(&SearchFieldError::PastDate));

    form.departure_date = "2026-10-18".to_owned();
    let criteria = form.validate(TODAY).unwrap();
    assert_eq!(criteria.departure_date, Some(TODAY));
}

#[test]
fn validate_flags_unparsable_dates() {
    let mut form = fields("Mumbai", "Pune");
    form.departure_date = "18/10/2026".to_owned();
    let errors = form.validate(TODAY).unwrap_err();
    assert_eq!(errors.get(&SearchField::DepartureDate), Some(&SearchFieldError::InvalidDate));
}

#[test]
fn validate_substitutes_fallback_for_zero_max_price() {
    let criteria = fields("Mumbai", "Pune").validate(TODAY).unwrap();
    assert_eq!(criteria.max_price, MAX_PRICE_FALLBACK);

    let mut form = fields("Mumbai", "Pune");
    form.max_price = 700;
    assert_eq!(form.validate(TODAY).unwrap().max_price, 700);
}

#[test]
fn snapshot_keeps_raw_values() {
    let mut form = fields(" De", "");
    form.departure_date = "2026-10-19".to_owned();
    let snapshot = form.snapshot();
    assert_eq!(snapshot.from, " De");
    assert_eq!(snapshot.departure_date, Some(date!(2026 - 10 - 19)));
    assert_eq!(snapshot.max_price, 0);
}

#[test]
fn normalize_place_strips_punctuation_and_case() {
    assert_eq!(normalize_place(" New Delhi, "), "new delhi");
    assert_eq!(normalize_place("Mumbai."), "mumbai");
}

#[test]
fn parse_max_price_clamps_to_non_negative_integer() {
    assert_eq!(parse_max_price(""), 0);
    assert_eq!(parse_max_price("abc"), 0);
    assert_eq!(parse_max_price("-50"), 0);
    assert_eq!(parse_max_price("499.9"), 499);
    assert_eq!(parse_max_price(" 1200 "), 1200);
}

#[test]
fn live_search_needs_two_characters() {
    assert!(!triggers_live_search(""));
    assert!(!triggers_live_search("D"));
    assert!(triggers_live_search("De"));
}

#[test]
fn intent_exposes_criteria_for_both_flows() {
    let criteria = fields("Mumbai", "Pune").snapshot();
    assert_eq!(SearchIntent::Live(criteria.clone()).criteria(), &criteria);
    assert_eq!(SearchIntent::Submit(criteria.clone()).criteria(), &criteria);
}
