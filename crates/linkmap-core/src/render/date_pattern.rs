//! Date patterns built from `YYYY`, `MM`, `DD` and literal characters.

use chrono::{Datelike, NaiveDate};

use crate::catalog::DEFAULT_DATE_FORMAT;
use crate::error::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year,
    Month,
    Day,
    Literal(char),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let pattern = if pattern.is_empty() {
        DEFAULT_DATE_FORMAT
    } else {
        pattern
    };
    let mut tokens = Vec::new();
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        let (token, len) = if rest.starts_with("YYYY") {
            (Token::Year, 4)
        } else if rest.starts_with("MM") {
            (Token::Month, 2)
        } else if rest.starts_with("DD") {
            (Token::Day, 2)
        } else {
            (Token::Literal(c), c.len_utf8())
        };
        tokens.push(token);
        rest = &rest[len..];
    }
    tokens
}

/// Formats `date` with `pattern`; an empty pattern means `YYYY-MM-DD`.
pub(crate) fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    for token in tokenize(pattern) {
        match token {
            Token::Year => out.push_str(&format!("{:04}", date.year())),
            Token::Month => out.push_str(&format!("{:02}", date.month())),
            Token::Day => out.push_str(&format!("{:02}", date.day())),
            Token::Literal(c) => out.push(c),
        }
    }
    out
}

/// Date components read from one value; a pattern may carry only some of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DateParts {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl DateParts {
    /// Fills components missing in `self` from `other`.
    pub fn merge(self, other: DateParts) -> DateParts {
        DateParts {
            year: self.year.or(other.year),
            month: self.month.or(other.month),
            day: self.day.or(other.day),
        }
    }

    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }
}

/// Reads date components from `value` according to `pattern`.
pub(crate) fn parse_date_parts(value: &str, pattern: &str) -> Result<DateParts, TemplateError> {
    let invalid = || TemplateError::InvalidDate {
        pattern: pattern.to_string(),
        value: value.to_string(),
    };
    let mut parts = DateParts::default();
    let mut rest = value;
    for token in tokenize(pattern) {
        match token {
            Token::Year => parts.year = Some(take_digits(&mut rest, 4).ok_or_else(invalid)? as i32),
            Token::Month => parts.month = Some(take_digits(&mut rest, 2).ok_or_else(invalid)?),
            Token::Day => parts.day = Some(take_digits(&mut rest, 2).ok_or_else(invalid)?),
            Token::Literal(c) => rest = rest.strip_prefix(c).ok_or_else(invalid)?,
        }
    }
    if rest.is_empty() {
        Ok(parts)
    } else {
        Err(invalid())
    }
}

fn take_digits<'a>(rest: &mut &'a str, width: usize) -> Option<u32> {
    let text: &'a str = rest;
    let head = text.get(..width)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    *rest = &text[width..];
    head.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_common_patterns() {
        let d = date(2024, 3, 7);
        assert_eq!(format_date(d, "YYYY-MM-DD"), "2024-03-07");
        assert_eq!(format_date(d, "DDMMYYYY"), "07032024");
        assert_eq!(format_date(d, "DD/MM/YYYY"), "07/03/2024");
        assert_eq!(format_date(d, "MM"), "03");
        assert_eq!(format_date(d, ""), "2024-03-07");
    }

    #[test]
    fn parses_full_dates() {
        let p = parse_date_parts("07032024", "DDMMYYYY").unwrap();
        assert_eq!(p.to_date(), Some(date(2024, 3, 7)));
        let p = parse_date_parts("2024-03-07", "").unwrap();
        assert_eq!(p.to_date(), Some(date(2024, 3, 7)));
    }

    #[test]
    fn partial_patterns_merge() {
        let m = parse_date_parts("03", "MM").unwrap();
        let d = parse_date_parts("07", "DD").unwrap();
        let y = parse_date_parts("2024", "YYYY").unwrap();
        assert_eq!(m.to_date(), None);
        assert_eq!(m.merge(d).merge(y).to_date(), Some(date(2024, 3, 7)));
    }

    #[test]
    fn mismatches_rejected() {
        assert!(parse_date_parts("2024/03/07", "YYYY-MM-DD").is_err());
        assert!(parse_date_parts("2024-03-0", "YYYY-MM-DD").is_err());
        assert!(parse_date_parts("2024-03-07x", "YYYY-MM-DD").is_err());
        assert!(parse_date_parts("20é4-03-07", "YYYY-MM-DD").is_err());
    }
}
