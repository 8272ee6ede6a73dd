//! Strict `DD.MM.YYYY` date parsing.

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` date. Anything else, including impossible
/// calendar dates and unpadded components, yields `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_fixed_format() {
        assert_eq!(parse_date("05.03.2020"), NaiveDate::from_ymd_opt(2020, 3, 5));
        assert_eq!(parse_date("29.02.2024"), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_rejects_other_shapes() {
        for raw in ["2020-03-05", "32.01.2020", "", "5.3.20", "5.3.2020", "05.3.2020", "29.02.2023", "ab.cd.efgh", " 05.03.2020"] {
            assert_eq!(parse_date(raw), None, "{:?} should not parse", raw);
        }
    }

    #[test]
    fn test_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2019, 11, 1).unwrap();
        assert_eq!(format_date(date), "01.11.2019");
    }
}
