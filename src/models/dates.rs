//! Display helpers for calendar dates

use chrono::{Datelike, Local, NaiveDate};

/// English ordinal suffix for a day of month (1st, 2nd, 3rd, 4th, 11th, 22nd...)
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `2024-03-07`
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `March 7th, 2024`
pub fn long(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%Y")
    )
}

/// `Mar 7th, 2024`
pub fn short(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%b"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%Y")
    )
}

/// ISO form of an optional date, or `""` when absent
pub fn iso_or_empty(date: Option<NaiveDate>) -> String {
    date.map(iso).unwrap_or_default()
}

/// ISO form of an optional date with no absent-guard.
///
/// An absent date resolves to the current local day, which is what edit forms
/// have always been pre-populated with.
pub fn iso_or_today(date: Option<NaiveDate>) -> String {
    iso(date.unwrap_or_else(today))
}

/// Current date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_ordinal_suffix() {
        let expected = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_long_and_short() {
        assert_eq!(long(d(1775, 12, 16)), "December 16th, 1775");
        assert_eq!(long(d(1817, 7, 18)), "July 18th, 1817");
        assert_eq!(short(d(2020, 6, 1)), "Jun 1st, 2020");
        assert_eq!(short(d(2020, 6, 22)), "Jun 22nd, 2020");
    }

    #[test]
    fn test_iso() {
        assert_eq!(iso(d(1775, 12, 16)), "1775-12-16");
        assert_eq!(iso_or_empty(Some(d(812, 1, 3))), "0812-01-03");
        assert_eq!(iso_or_empty(None), "");
    }

    #[test]
    fn test_today_is_local() {
        let before = Local::now().date_naive();
        let value = today();
        let after = Local::now().date_naive();
        assert!(value == before || value == after);
    }

    #[test]
    fn test_iso_or_today() {
        assert_eq!(iso_or_today(Some(d(1775, 12, 16))), "1775-12-16");

        let before = iso(today());
        let value = iso_or_today(None);
        let after = iso(today());
        assert!(value == before || value == after);
    }
}
