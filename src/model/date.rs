// Date parsing and formatting for deadlines and events
use chrono::{NaiveDateTime, ParseError};
use std::ops::RangeInclusive;

/// The one accepted input format, e.g. `2/12/2019 1800`.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H%M";

/// How dates are rendered back to the user.
pub const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

/// Parse a user-supplied date. No timezone, no relative dates.
///
/// chrono accepts short numeric fields and inner whitespace, so the shape
/// `d/M/yyyy HHmm` is checked first: day and month take 1-2 digits, the year
/// and the time exactly 4, separated by one `/` or one space.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, DateError> {
    let text = text.trim();
    if !has_expected_shape(text) {
        return Err(DateError::Shape);
    }
    Ok(NaiveDateTime::parse_from_str(text, DATE_FORMAT)?)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("date does not match d/M/yyyy HHmm")]
    Shape,
    #[error(transparent)]
    Chrono(#[from] ParseError),
}

fn has_expected_shape(text: &str) -> bool {
    let Some((date, time)) = text.split_once(' ') else {
        return false;
    };
    let mut parts = date.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    digits(day, 1..=2) && digits(month, 1..=2) && digits(year, 4..=4) && digits(time, 4..=4)
}

fn digits(field: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    #[test]
    fn parses_unpadded_day_and_month() {
        assert_eq!(parse_date_time("2/12/2019 1800").unwrap(), at(2019, 12, 2, 18, 0));
    }

    #[test]
    fn parses_padded_fields_and_surrounding_whitespace() {
        assert_eq!(parse_date_time("  05/01/2024 0930 ").unwrap(), at(2024, 1, 5, 9, 30));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "",
            "notadate",
            "2019-12-02 1800",
            "2/12/2019",
            "32/12/2019 1800",
            "2/13/2019 1800",
            "2/12/2019 2500",
            "2/12/2019 18:00",
            "2/12/2019 1800 extra",
            "tomorrow",
            "2/12/2019 180",
            "2/12/19 1800",
            "2/ 12/2019 1800",
            "2/12/2019  1800",
            "2/12/2019 18000",
            "+2/12/2019 1800",
            "2/12/+2019 1800",
            "2/12/2019/1 1800",
            "002/12/2019 1800",
            "1/1/10000 0000",
        ] {
            assert!(parse_date_time(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn shape_errors_are_distinct_from_out_of_range_fields() {
        assert_eq!(parse_date_time("2/12/2019 180"), Err(DateError::Shape));
        assert!(matches!(
            parse_date_time("31/2/2019 1800"),
            Err(DateError::Chrono(_))
        ));
    }

    #[test]
    fn formats_for_display() {
        assert_eq!(format_date_time(&at(2019, 12, 2, 18, 0)), "Dec 02 2019 18:00");
    }
}
