use super::*;

#[test]
fn test_zero_days() {
    assert_eq!(format_date(0), "0 days");
}

#[test]
fn test_components() {
    assert_eq!(format_date(1), "1 day");
    assert_eq!(format_date(30), "1 month");
    assert_eq!(format_date(365), "1 year");
    assert_eq!(format_date(365 * 2 + 30 * 3 + 4), "2 years, 3 months, 4 days");
}

#[test]
fn test_negative() {
    assert_eq!(format_date(-400), "-1 year, 1 month, 5 days");
}
