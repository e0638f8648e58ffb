//! Date and time-of-day formats.
//!
//! Range checks are lexical only: the date grammar bounds day and month but
//! does not model month lengths or leap years, so `29/02/2023` is accepted.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(0[1-9]|[12]\d|3[01])", // day 01-31
        r"/(0[1-9]|1[0-2])",       // month 01-12
        r"/\d{4}$",                // four-digit year
    ))
});

static TIME_24H: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^([01]\d|2[0-3])", // hours 00-23
        r":[0-5]\d",         // minutes 00-59
        r":[0-5]\d$",        // seconds 00-59
    ))
});

static TIME_12H: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(0[1-9]|1[0-2])", // hours 01-12
        r":[0-5]\d",         // minutes 00-59
        r":[0-5]\d",         // seconds 00-59
        r" (AM|PM)$",        // meridiem, single separating space
    ))
});

/// Date in `dd/mm/yyyy` shape with day 01–31 and month 01–12.
#[must_use]
pub fn is_date(input: &str) -> bool {
    DATE.is_match(input)
}

/// 24-hour clock time `HH:MM:SS`.
#[must_use]
pub fn is_time_24h(input: &str) -> bool {
    TIME_24H.is_match(input)
}

/// 12-hour clock time `hh:MM:SS AM|PM` (uppercase meridiem).
#[must_use]
pub fn is_time_12h(input: &str) -> bool {
    TIME_12H.is_match(input)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_date_shape_only_no_calendar_logic() {
        // February 30th and the 29th of any year pass: ranges are lexical.
        assert!(is_date("29/02/2023"));
        assert!(is_date("30/02/2023"));
        assert!(is_date("01/01/2020"));
        assert!(is_date("31/12/1999"));
    }

    #[test]
    fn test_date_rejects_out_of_range_fields() {
        assert!(!is_date("32/01/2020"));
        assert!(!is_date("00/01/2020"));
        assert!(!is_date("01/13/2020"));
        assert!(!is_date("01/00/2020"));
        assert!(!is_date("1/1/2020"));
        assert!(!is_date("01-01-2020"));
    }

    #[test]
    fn test_time_24h_bounds() {
        assert!(is_time_24h("00:00:00"));
        assert!(is_time_24h("23:59:59"));
        assert!(!is_time_24h("24:00:00"));
        assert!(!is_time_24h("12:60:00"));
        assert!(!is_time_24h("12:00:60"));
        assert!(!is_time_24h("9:00:00"));
    }

    #[test]
    fn test_time_12h_bounds_and_meridiem() {
        assert!(is_time_12h("01:00:00 AM"));
        assert!(is_time_12h("12:59:59 PM"));
        assert!(!is_time_12h("00:00:00 AM"));
        assert!(!is_time_12h("13:00:00 PM"));
        assert!(!is_time_12h("12:00:00"));
        assert!(!is_time_12h("12:00:00 am"));
        assert!(!is_time_12h("12:00:00  PM"));
    }
}
