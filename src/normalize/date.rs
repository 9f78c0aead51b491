use chrono::{
    Datelike, NaiveDate,
    format::{Parsed, StrftimeItems, parse},
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Publication year of an item, or `Unknown` when none could be recovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Year {
    Known(i32),
    Unknown,
}

type RuleFn = fn(&str) -> Option<i32>;

/// Year extraction rules.
///
/// NOTE: Ordering is important here, as it signifies priority. The first rule to find a year
/// wins, so a standalone four-digit run beats any structured parse of the same text.
static RULES: &[RuleFn] = &[standalone_year, formatted_year, numeric_year];

enum DateFormat {
    /// Day, month and year: must name a real calendar day.
    Full(&'static str),
    /// Only the year is read back.
    Partial(&'static str),
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Full(fmt) | DateFormat::Partial(fmt) => *fmt,
        }
    }
}

static FORMATS: &[DateFormat] = &[
    DateFormat::Full("%Y-%m-%d"),
    DateFormat::Full("%d-%m-%Y"),
    DateFormat::Partial("%Y"),
    DateFormat::Partial("%m/%Y"),
    DateFormat::Partial("%b %Y"),
    DateFormat::Partial("%B %Y"),
];

pub fn normalize(raw: &str) -> Year {
    let raw = raw.trim();
    RULES
        .iter()
        .find_map(|rule| rule(raw))
        .map_or(Year::Unknown, Year::Known)
}

/// The first run of exactly four digits delimited by word boundaries.
fn standalone_year(raw: &str) -> Option<i32> {
    static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]{4}\b").unwrap());
    YEAR_RE.find(raw).and_then(|m| m.as_str().parse().ok())
}

/// The year of the first format in [`FORMATS`] that parses the whole text.
fn formatted_year(raw: &str) -> Option<i32> {
    let words = raw.split_whitespace().count();
    FORMATS.iter().find_map(|format| {
        // chrono lets a format space match no whitespace at all; "Mar2019" is not "%b %Y".
        if format.pattern().split(' ').count() != words {
            return None;
        }
        let year = match format {
            DateFormat::Full(fmt) => NaiveDate::parse_from_str(raw, fmt).ok()?.year(),
            DateFormat::Partial(fmt) => {
                let mut parsed = Parsed::new();
                parse(&mut parsed, raw, StrftimeItems::new(fmt)).ok()?;
                parsed.year()?
            }
        };
        // chrono reads years of any width; the formats stand for four-digit years.
        (1000..=9999).contains(&year).then_some(year)
    })
}

fn numeric_year(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_digits_win() {
        assert_eq!(normalize("2019-05-01"), Year::Known(2019));
        assert_eq!(normalize("05/2019"), Year::Known(2019));
        assert_eq!(normalize("14-07-2019"), Year::Known(2019));
        assert_eq!(normalize("2020"), Year::Known(2020));
        assert_eq!(normalize("  março de 2018 "), Year::Known(2018));
    }

    #[test]
    fn first_year_in_text_wins() {
        assert_eq!(normalize("1999 edition, reprinted 2020"), Year::Known(1999));
    }

    #[test]
    fn unrecoverable_dates_are_unknown() {
        assert_eq!(normalize("unknown-date"), Year::Unknown);
        assert_eq!(normalize(""), Year::Unknown);
        assert_eq!(normalize("s.d."), Year::Unknown);
        assert_eq!(normalize("05/219"), Year::Unknown);
        assert_eq!(normalize("Mar2019"), Year::Unknown);
        assert_eq!(normalize("March2019"), Year::Unknown);
    }

    #[test]
    fn bare_digit_strings_are_years() {
        assert_eq!(normalize("20190501"), Year::Known(20190501));
        assert_eq!(normalize("987"), Year::Known(987));
        assert_eq!(normalize("99999999999"), Year::Unknown);
    }

    #[test]
    fn formats_are_tried_in_order() {
        assert_eq!(formatted_year("2019-05-01"), Some(2019));
        assert_eq!(formatted_year("31-12-1999"), Some(1999));
        assert_eq!(formatted_year("2020"), Some(2020));
        assert_eq!(formatted_year("07/2015"), Some(2015));
        assert_eq!(formatted_year("Mar 2019"), Some(2019));
        assert_eq!(formatted_year("March 2019"), Some(2019));
        assert_eq!(formatted_year("March   2019"), Some(2019));
        assert_eq!(formatted_year("March2019"), None);
        assert_eq!(formatted_year("2019-02-30"), None);
        assert_eq!(formatted_year("no date"), None);
    }

    #[test]
    fn unknown_sorts_after_years() {
        assert!(Year::Known(9999) < Year::Unknown);
    }

    #[test]
    fn embedded_year_is_found() {
        proptest::proptest!(|(year in 1000..=9999i32, pre in "[a-z]{0,6} ", post in " [a-z]{0,6}")| {
            let raw = format!("{pre}{year}{post}");
            proptest::prop_assert_eq!(normalize(&raw), Year::Known(year));
        })
    }
}
