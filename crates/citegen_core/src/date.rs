/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! ISO 8601 calendar dates at year, month or day precision.

use std::fmt;
use winnow::combinator::{opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take;

/// Long month names, January first.
pub const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A parsed date. `day` is only ever set together with `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl IsoDate {
    /// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Option<IsoDate> {
        let mut input = raw.trim();
        let date = parse_date(&mut input).ok()?;
        input.is_empty().then_some(date)
    }

    /// The long month name, if the date has month precision.
    pub fn month_name(&self) -> Option<&'static str> {
        self.month
            .and_then(|m| MONTHS_LONG.get(m.checked_sub(1)? as usize).copied())
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(m) = self.month {
            write!(f, "-{:02}", m)?;
            if let Some(d) = self.day {
                write!(f, "-{:02}", d)?;
            }
        }
        Ok(())
    }
}

fn two_digits(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    let s = take::<_, _, ErrMode<ContextError>>(2_usize).parse_next(input)?;
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(ErrMode::Backtrack(ContextError::default()));
    }
    s.parse()
        .map_err(|_| ErrMode::Backtrack(ContextError::default()))
}

fn parse_year(input: &mut &str) -> Result<i32, ErrMode<ContextError>> {
    let s = take::<_, _, ErrMode<ContextError>>(4_usize).parse_next(input)?;
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(ErrMode::Backtrack(ContextError::default()));
    }
    s.parse()
        .map_err(|_| ErrMode::Backtrack(ContextError::default()))
}

fn parse_month(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    match two_digits(input)? {
        m @ 1..=12 => Ok(m),
        _ => Err(ErrMode::Backtrack(ContextError::default())),
    }
}

fn parse_day(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    match two_digits(input)? {
        d @ 1..=31 => Ok(d),
        _ => Err(ErrMode::Backtrack(ContextError::default())),
    }
}

/// Parses a date prefix of `input`, leaving any remainder unconsumed.
pub fn parse_date(input: &mut &str) -> Result<IsoDate, ErrMode<ContextError>> {
    let year = parse_year.parse_next(input)?;
    let month = opt(preceded('-', parse_month)).parse_next(input)?;
    let day = if month.is_some() {
        opt(preceded('-', parse_day)).parse_next(input)?
    } else {
        None
    };

    Ok(IsoDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_date() {
        let date = IsoDate::parse("2024-01-15").unwrap();
        assert_eq!(date.year, 2024);
        assert_eq!(date.month, Some(1));
        assert_eq!(date.day, Some(15));
        assert_eq!(date.month_name(), Some("January"));
    }

    #[test]
    fn test_parse_reduced_precision() {
        assert_eq!(
            IsoDate::parse("2023-05"),
            Some(IsoDate {
                year: 2023,
                month: Some(5),
                day: None
            })
        );
        assert_eq!(
            IsoDate::parse(" 1999 "),
            Some(IsoDate {
                year: 1999,
                month: None,
                day: None
            })
        );
    }

    #[test]
    fn test_rejects_non_dates() {
        for raw in ["", "Spring 2020", "2024-13-01", "2024-02-32", "2024/01/15", "20245", "2024-1-5"] {
            assert_eq!(IsoDate::parse(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["2024-01-15", "2023-05", "1999"] {
            assert_eq!(IsoDate::parse(raw).unwrap().to_string(), raw);
        }
    }
}
