use super::*;

#[test]
fn ten_digits_get_default_country_code() {
    assert_eq!(format_phone("9876543210"), "+91 98765 43210");
    assert_eq!(format_phone("98765-43210"), "+91 98765 43210");
}

#[test]
fn longer_numbers_keep_their_own_country_code() {
    assert_eq!(format_phone("919876543210"), "+91 98765 43210");
    assert_eq!(format_phone("+1 (415) 555-0100 99"), "+141 55550 10099");
    assert_eq!(format_phone("+44 7911 123456"), "+44 79111 23456");
}

#[test]
fn short_input_passes_through() {
    assert_eq!(format_phone("12345"), "12345");
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("call me"), "call me");
}

#[test]
fn dial_string_keeps_leading_plus() {
    assert_eq!(dial_string("+91 98765 43210"), "+919876543210");
    assert_eq!(dial_string("(987) 654-3210"), "9876543210");
    assert_eq!(dial_string("+"), "");
}
