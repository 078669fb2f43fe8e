//! Date extraction rules.
//!
//! Three date notations are recognized; the first valid calendar date in
//! document order wins regardless of which notation produced it.
//! Candidates that fail calendar validation (month 13, February 30th) are
//! rejected locally and scanning continues.

use super::patterns::{ISO_DATE_REGEX, MONTH_NAME_DATE_REGEX, NUMERIC_DATE_REGEX};
use crate::models::{Detected, ExtractionRule};
use chrono::NaiveDate;

/// A date candidate found in the text, ordered by byte offset.
struct DateCandidate {
    offset: usize,
    date: Option<NaiveDate>,
    rule: ExtractionRule,
}

/// Extracts the first valid date in document order.
pub fn extract_date(text: &str) -> Option<Detected<NaiveDate>> {
    let mut candidates: Vec<DateCandidate> = Vec::new();

    for caps in NUMERIC_DATE_REGEX.captures_iter(text) {
        let offset = caps.get(0).map_or(0, |m| m.start());
        candidates.push(DateCandidate {
            offset,
            date: numeric_date(&caps[1], &caps[2], &caps[3]),
            rule: ExtractionRule::NumericDate,
        });
    }

    for caps in ISO_DATE_REGEX.captures_iter(text) {
        let offset = caps.get(0).map_or(0, |m| m.start());
        candidates.push(DateCandidate {
            offset,
            date: ymd(&caps[1], &caps[2], &caps[3]),
            rule: ExtractionRule::IsoDate,
        });
    }

    for caps in MONTH_NAME_DATE_REGEX.captures_iter(text) {
        let offset = caps.get(0).map_or(0, |m| m.start());
        candidates.push(DateCandidate {
            offset,
            date: month_name_date(&caps[1], &caps[2], &caps[3]),
            rule: ExtractionRule::MonthNameDate,
        });
    }

    candidates.sort_by_key(|c| c.offset);
    candidates
        .into_iter()
        .find_map(|c| c.date.map(|date| Detected::new(date, c.rule)))
}

/// `MM/DD/YYYY` order, as written on US school papers.
fn numeric_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    ymd(year, month, day)
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_name_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month = month_number(month)?;
    let year: i32 = year.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let n = match name.to_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case("Date: 01/15/2024", 2024, 1, 15; "numeric slash")]
    #[test_case("Due 1-15-2024", 2024, 1, 15; "numeric dash")]
    #[test_case("2024-01-15", 2024, 1, 15; "iso")]
    #[test_case("January 15, 2024", 2024, 1, 15; "spelled month")]
    #[test_case("Jan. 15 2024", 2024, 1, 15; "abbreviated month")]
    #[test_case("March 3rd, 2024", 2024, 3, 3; "ordinal day")]
    fn test_date_forms(text: &str, y: i32, m: u32, d: u32) {
        assert_eq!(extract_date(text).unwrap().value, date(y, m, d));
    }

    #[test]
    fn test_first_in_document_order_wins() {
        let text = "Handed back 01/20/2024\nTest date: January 15, 2024";
        assert_eq!(extract_date(text).unwrap().value, date(2024, 1, 20));
    }

    #[test]
    fn test_invalid_date_skipped_scanning_continues() {
        // Month 13 is rejected; the later valid date is used.
        let text = "13/40/2024 ... taken 01/15/2024";
        assert_eq!(extract_date(text).unwrap().value, date(2024, 1, 15));
    }

    #[test]
    fn test_february_30_rejected() {
        assert!(extract_date("02/30/2024").is_none());
    }

    #[test]
    fn test_no_date() {
        assert!(extract_date("Chapter 5 review").is_none());
    }

    #[test]
    fn test_rule_provenance() {
        assert_eq!(
            extract_date("2024-01-15").unwrap().rule,
            ExtractionRule::IsoDate
        );
        assert_eq!(
            extract_date("Jan 15, 2024").unwrap().rule,
            ExtractionRule::MonthNameDate
        );
    }
}
