// Dweve GEDLEX - GEDCOM line and date lexer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Plain date-text parser.
//!
//! Handles the free-form part of a GEDCOM date: qualifiers, `BET`/`FROM`
//! compounds, and the date values themselves. Quality prefixes and calendar
//! escapes are stripped by the [`DateExtractor`](super::DateExtractor) before
//! text reaches this parser; the calendar arrives as an argument and selects
//! the month table.
//!
//! Accepted value forms (case-insensitive):
//!
//! ```text
//! 12 JAN 1900      day month year
//! JAN 1900         month year
//! 1900             year
//! 1900-01-12       ISO year-month-day
//! 1900-01          ISO year-month
//! 1750/51          dual year, first year kept
//! 44 B.C.          negative year
//! ```

use super::{Calendar, Date, DateValue, Modifier};
use crate::error::DateError;
use std::collections::HashMap;

const ENGLISH_MONTHS: &[(&str, u32)] = &[
    ("JANUARY", 1),
    ("FEBRUARY", 2),
    ("MARCH", 3),
    ("APRIL", 4),
    ("JUNE", 6),
    ("JULY", 7),
    ("AUGUST", 8),
    ("SEPTEMBER", 9),
    ("SEPT", 9),
    ("OCTOBER", 10),
    ("NOVEMBER", 11),
    ("DECEMBER", 12),
];

/// Plain date-text parser.
///
/// Month names are matched against the calendar's GEDCOM abbreviations; for
/// Gregorian and Julian dates full English month names and any aliases added
/// with [`with_month_alias`](Self::with_month_alias) are accepted as well.
///
/// # Examples
///
/// ```rust
/// use gedcom_lex::{DateParser, Calendar, Modifier, DateValue};
///
/// let parser = DateParser::new();
/// let date = parser.parse("abt 12 January 1900", Calendar::Gregorian).unwrap();
/// assert_eq!(date.modifier, Modifier::About);
/// assert_eq!(date.start, DateValue::new(12, 1, 1900));
///
/// let dutch = DateParser::new().with_month_alias("MEI", 5);
/// assert_eq!(dutch.parse("3 mei 1890", Calendar::Gregorian).unwrap().start.month, 5);
///
/// assert!(parser.parse("sometime last spring", Calendar::Gregorian).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParser {
    aliases: HashMap<String, u32>,
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DateParser {
    pub fn new() -> Self {
        let aliases = ENGLISH_MONTHS
            .iter()
            .map(|(name, month)| (name.to_string(), *month))
            .collect();
        Self { aliases }
    }

    /// Accept an extra Gregorian/Julian month name.
    pub fn with_month_alias(mut self, name: &str, month: u32) -> Self {
        self.aliases.insert(name.to_uppercase(), month);
        self
    }

    /// Parse date text into a structured date in `calendar`.
    pub fn parse(&self, text: &str, calendar: Calendar) -> Result<Date, DateError> {
        let upper = text.trim().to_uppercase();
        let tokens: Vec<&str> = upper.split_whitespace().collect();
        let Some((first, rest)) = tokens.split_first() else {
            return Err(DateError::Empty);
        };

        match *first {
            "BET" | "BETWEEN" => {
                let (start, stop) = split_compound(rest, &["AND"])
                    .ok_or_else(|| DateError::syntax(text.trim()))?;
                Ok(Date::range(
                    calendar,
                    self.parse_value(start, calendar)?,
                    self.parse_value(stop, calendar)?,
                ))
            }
            "FROM" => match split_compound(rest, &["TO"]) {
                Some((start, stop)) => Ok(Date::span(
                    calendar,
                    self.parse_value(start, calendar)?,
                    self.parse_value(stop, calendar)?,
                )),
                None => self.single(Modifier::After, rest, calendar),
            },
            "TO" => self.single(Modifier::Before, rest, calendar),
            _ => match qualifier(first) {
                Some(modifier) => self.single(modifier, rest, calendar),
                None => self.single(Modifier::None, &tokens, calendar),
            },
        }
    }

    fn single(&self, modifier: Modifier, tokens: &[&str], calendar: Calendar) -> Result<Date, DateError> {
        Ok(Date::new(modifier, calendar, self.parse_value(tokens, calendar)?))
    }

    fn parse_value(&self, tokens: &[&str], calendar: Calendar) -> Result<DateValue, DateError> {
        let (tokens, bc) = match tokens.split_last() {
            Some((last, head)) if matches!(*last, "B.C." | "BC" | "BCE" | "B.C") => (head, true),
            _ => (tokens, false),
        };

        let mut value = match *tokens {
            [] => return Err(DateError::Empty),
            [single] if single.contains('-') => parse_iso(single)?,
            [year] => DateValue::year(parse_year(year)?),
            [month, year] => DateValue::new(0, self.month(month, calendar)?, parse_year(year)?),
            [day, month, year] => {
                let day = parse_day(day)?;
                DateValue::new(day, self.month(month, calendar)?, parse_year(year)?)
            }
            _ => return Err(DateError::syntax(tokens.join(" "))),
        };

        if bc {
            value.year = -value.year;
        }
        validate(&value, calendar)?;
        Ok(value)
    }

    fn month(&self, token: &str, calendar: Calendar) -> Result<u32, DateError> {
        let name = token.trim_end_matches('.');
        if let Some(index) = calendar.month_names().iter().position(|m| *m == name) {
            return Ok(index as u32 + 1);
        }
        match calendar {
            Calendar::Gregorian | Calendar::Julian => self
                .aliases
                .get(name)
                .copied()
                .ok_or_else(|| DateError::UnknownMonth(name.to_string())),
            Calendar::Hebrew | Calendar::French => Err(DateError::UnknownMonth(name.to_string())),
        }
    }
}

fn qualifier(token: &str) -> Option<Modifier> {
    match token.trim_end_matches('.') {
        "ABT" | "ABOUT" | "CIR" | "CIRCA" | "C" | "CA" => Some(Modifier::About),
        "BEF" | "BEFORE" => Some(Modifier::Before),
        "AFT" | "AFTER" => Some(Modifier::After),
        _ => None,
    }
}

/// Split `tokens` at the first keyword, requiring text on both sides.
fn split_compound<'a, 'b>(
    tokens: &'a [&'b str],
    keywords: &[&str],
) -> Option<(&'a [&'b str], &'a [&'b str])> {
    let pos = tokens.iter().position(|t| keywords.contains(t))?;
    let (start, stop) = (&tokens[..pos], &tokens[pos + 1..]);
    if start.is_empty() || stop.is_empty() {
        None
    } else {
        Some((start, stop))
    }
}

fn parse_year(token: &str) -> Result<i32, DateError> {
    // Dual dating (1750/51) keeps the first year.
    let year = token.split('/').next().unwrap_or(token);
    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidYear(token.to_string()));
    }
    year.parse::<i32>()
        .map_err(|_| DateError::InvalidYear(token.to_string()))
}

/// Explicit day numbers start at 1; 0 is reserved for "no day".
fn parse_day(token: &str) -> Result<u32, DateError> {
    let day = token.parse::<u32>().map_err(|_| DateError::syntax(token))?;
    if day == 0 {
        return Err(DateError::DayOutOfRange {
            day,
            month: 0,
            max: 31,
        });
    }
    Ok(day)
}

fn parse_iso(token: &str) -> Result<DateValue, DateError> {
    let parts: Vec<&str> = token.split('-').collect();
    let month = |s: &str| match s.parse::<u32>() {
        Ok(0) => Err(DateError::MonthOutOfRange { month: 0, max: 12 }),
        Ok(m) => Ok(m),
        Err(_) => Err(DateError::syntax(token)),
    };
    match *parts.as_slice() {
        [year, m] if year.len() >= 3 => Ok(DateValue::new(0, month(m)?, parse_year(year)?)),
        [year, m, day] if year.len() >= 3 => {
            Ok(DateValue::new(parse_day(day)?, month(m)?, parse_year(year)?))
        }
        _ => Err(DateError::syntax(token)),
    }
}

fn validate(value: &DateValue, calendar: Calendar) -> Result<(), DateError> {
    let max_month = calendar.months_in_year();
    if value.month > max_month {
        return Err(DateError::MonthOutOfRange {
            month: value.month,
            max: max_month,
        });
    }
    if value.month == 0 {
        if value.day != 0 {
            return Err(DateError::MonthOutOfRange {
                month: 0,
                max: max_month,
            });
        }
        return Ok(());
    }
    let max_day = calendar.days_in_month(value.month, value.year);
    if value.day > max_day {
        return Err(DateError::DayOutOfRange {
            day: value.day,
            month: value.month,
            max: max_day,
        });
    }
    Ok(())
}
