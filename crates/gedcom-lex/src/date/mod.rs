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

//! Structured GEDCOM dates.
//!
//! A [`Date`] is either a single date value with an optional modifier
//! (`ABT 1850`, `BEF 3 MAR 1901`), a compound range or span with two
//! endpoints (`BET 1900 AND 1905`, `FROM 1900 TO 1905`), or a text-only date
//! that keeps the original text when nothing in the grammar matched.
//!
//! Independently of its shape a date carries a [`Quality`] (estimated,
//! calculated) and a [`Calendar`].
//!
//! # Parsing
//!
//! - [`extract_date`] / [`DateExtractor`]: the full GEDCOM grammar, including
//!   `EST`/`CAL`/`INT` quality prefixes and `@#DJULIAN@` calendar escapes.
//!   Never fails; unparseable text becomes a text-only date.
//! - [`DateParser`]: the plain date-text parser used for everything without a
//!   calendar escape. Returns a [`DateError`](crate::DateError) on failure.
//!
//! # Canonical Form
//!
//! `Display` renders GEDCOM date text, and feeding that text back through
//! [`extract_date`] yields an equal date:
//!
//! ```rust
//! use gedcom_lex::{extract_date, Calendar, Modifier, Quality};
//!
//! let date = extract_date("EST ABT @#DJULIAN@ 12 JAN 1700");
//! assert_eq!(date.quality, Quality::Estimated);
//! assert_eq!(date.modifier, Modifier::About);
//! assert_eq!(date.calendar, Calendar::Julian);
//! assert_eq!(date.to_string(), "EST ABT @#DJULIAN@ 12 JAN 1700");
//! assert_eq!(extract_date(&date.to_string()), date);
//! ```

mod extract;
mod parser;

pub use extract::{extract_date, DateExtractor};
pub use parser::DateParser;

use std::fmt;

/// How a date value was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    #[default]
    None,
    /// `EST`
    Estimated,
    /// `CAL` or `INT`
    Calculated,
}

impl Quality {
    /// Map a GEDCOM quality keyword.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "EST" => Quality::Estimated,
            "CAL" | "INT" => Quality::Calculated,
            _ => Quality::None,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Quality::None => "",
            Quality::Estimated => "EST ",
            Quality::Calculated => "CAL ",
        }
    }
}

/// Shape of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    #[default]
    None,
    Before,
    After,
    About,
    /// `BET x AND y`
    Range,
    /// `FROM x TO y`
    Span,
    /// Unparsed; only [`Date::text`] is meaningful.
    TextOnly,
}

impl Modifier {
    /// `true` for the two-endpoint modifiers.
    #[inline]
    pub fn is_compound(self) -> bool {
        matches!(self, Modifier::Range | Modifier::Span)
    }
}

/// Calendar a date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Calendar {
    #[default]
    Gregorian,
    Julian,
    Hebrew,
    /// French Republican.
    French,
}

impl Calendar {
    /// Resolve the name inside a `@#D...@` escape.
    ///
    /// Unrecognized names fall back to Gregorian.
    ///
    /// ```rust
    /// use gedcom_lex::Calendar;
    ///
    /// assert_eq!(Calendar::from_escape("JULIAN"), Calendar::Julian);
    /// assert_eq!(Calendar::from_escape("FRENCH R"), Calendar::French);
    /// assert_eq!(Calendar::from_escape("ROMAN"), Calendar::Gregorian);
    /// ```
    pub fn from_escape(name: &str) -> Self {
        match name.trim() {
            "JULIAN" => Calendar::Julian,
            "HEBREW" => Calendar::Hebrew,
            "FRENCH R" => Calendar::French,
            _ => Calendar::Gregorian,
        }
    }

    /// Name used inside a `@#D...@` escape.
    pub fn escape_name(self) -> &'static str {
        match self {
            Calendar::Gregorian => "GREGORIAN",
            Calendar::Julian => "JULIAN",
            Calendar::Hebrew => "HEBREW",
            Calendar::French => "FRENCH R",
        }
    }

    /// GEDCOM month abbreviations, index 0 is month 1.
    pub fn month_names(self) -> &'static [&'static str] {
        match self {
            Calendar::Gregorian | Calendar::Julian => &[
                "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
            ],
            Calendar::Hebrew => &[
                "TSH", "CSH", "KSL", "TVT", "SHV", "ADR", "ADS", "NSN", "IYR", "SVN", "TMZ", "AAV",
                "ELL",
            ],
            Calendar::French => &[
                "VEND", "BRUM", "FRIM", "NIVO", "PLUV", "VENT", "GERM", "FLOR", "PRAI", "MESS",
                "THER", "FRUC", "COMP",
            ],
        }
    }

    /// Number of months in a year of this calendar.
    #[inline]
    pub fn months_in_year(self) -> u32 {
        self.month_names().len() as u32
    }

    /// Largest valid day number for a month.
    ///
    /// Hebrew month lengths vary by year type; every Hebrew month accepts up
    /// to 30 days.
    pub fn days_in_month(self, month: u32, year: i32) -> u32 {
        match self {
            Calendar::Gregorian | Calendar::Julian => match month {
                2 if self.is_leap_year(year) => 29,
                2 => 28,
                4 | 6 | 9 | 11 => 30,
                _ => 31,
            },
            Calendar::Hebrew => 30,
            Calendar::French => {
                if month == 13 {
                    6
                } else {
                    30
                }
            }
        }
    }

    fn is_leap_year(self, year: i32) -> bool {
        let y = year.rem_euclid(400);
        match self {
            Calendar::Julian => y % 4 == 0,
            _ => y % 4 == 0 && (y % 100 != 0 || y == 0),
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calendar::Gregorian => f.write_str("Gregorian"),
            Calendar::Julian => f.write_str("Julian"),
            Calendar::Hebrew => f.write_str("Hebrew"),
            Calendar::French => f.write_str("French Republican"),
        }
    }
}

/// Day, month and year of one date point. `0` means "not given" for day and
/// month; negative years are B.C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateValue {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DateValue {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Year-only value.
    pub fn year(year: i32) -> Self {
        Self::new(0, 0, year)
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, calendar: Calendar) -> fmt::Result {
        if self.month > 0 {
            if self.day > 0 {
                write!(f, "{} ", self.day)?;
            }
            let name = calendar
                .month_names()
                .get(self.month as usize - 1)
                .copied()
                .unwrap_or("???");
            write!(f, "{} ", name)?;
        }
        if self.year < 0 {
            write!(f, "{} B.C.", -(self.year as i64))
        } else {
            write!(f, "{}", self.year)
        }
    }
}

/// A structured GEDCOM date.
///
/// Invariants, upheld by every constructor:
///
/// - `modifier` is `Range` or `Span` exactly when `stop` is `Some`.
/// - `modifier` is `TextOnly` exactly when `text` is `Some`; the structured
///   parts of a text-only date are left at their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    pub quality: Quality,
    pub modifier: Modifier,
    pub calendar: Calendar,
    pub start: DateValue,
    pub stop: Option<DateValue>,
    pub text: Option<String>,
}

impl Date {
    /// Single-point date. Compound and text-only modifiers are demoted to
    /// [`Modifier::None`]; use [`Date::range`], [`Date::span`] or
    /// [`Date::text_only`] for those.
    pub fn new(modifier: Modifier, calendar: Calendar, value: DateValue) -> Self {
        let modifier = match modifier {
            Modifier::Range | Modifier::Span | Modifier::TextOnly => Modifier::None,
            other => other,
        };
        Self {
            quality: Quality::None,
            modifier,
            calendar,
            start: value,
            stop: None,
            text: None,
        }
    }

    /// `BET start AND stop`.
    pub fn range(calendar: Calendar, start: DateValue, stop: DateValue) -> Self {
        Self::compound(Modifier::Range, calendar, start, stop)
    }

    /// `FROM start TO stop`.
    pub fn span(calendar: Calendar, start: DateValue, stop: DateValue) -> Self {
        Self::compound(Modifier::Span, calendar, start, stop)
    }

    fn compound(modifier: Modifier, calendar: Calendar, start: DateValue, stop: DateValue) -> Self {
        Self {
            quality: Quality::None,
            modifier,
            calendar,
            start,
            stop: Some(stop),
            text: None,
        }
    }

    /// A date that could not be parsed; keeps `text` verbatim.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            modifier: Modifier::TextOnly,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn set_quality(&mut self, quality: Quality) {
        if !self.is_text_only() {
            self.quality = quality;
        }
    }

    pub fn set_calendar(&mut self, calendar: Calendar) {
        if !self.is_text_only() {
            self.calendar = calendar;
        }
    }

    #[inline]
    pub fn is_text_only(&self) -> bool {
        self.modifier == Modifier::TextOnly
    }

    #[inline]
    pub fn is_compound(&self) -> bool {
        self.modifier.is_compound()
    }

    /// Original text of a text-only date.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Year of the (start) date, `None` for text-only dates.
    pub fn year(&self) -> Option<i32> {
        if self.is_text_only() {
            None
        } else {
            Some(self.start.year)
        }
    }

    fn write_escape(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.calendar != Calendar::Gregorian {
            write!(f, "@#D{}@ ", self.calendar.escape_name())?;
        }
        Ok(())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            return f.write_str(text);
        }
        f.write_str(self.quality.prefix())?;
        let (open, middle) = match self.modifier {
            Modifier::Range => ("BET ", " AND "),
            Modifier::Span => ("FROM ", " TO "),
            Modifier::Before => ("BEF ", ""),
            Modifier::After => ("AFT ", ""),
            Modifier::About => ("ABT ", ""),
            Modifier::None | Modifier::TextOnly => ("", ""),
        };
        f.write_str(open)?;
        self.write_escape(f)?;
        self.start.write(f, self.calendar)?;
        if let Some(stop) = &self.stop {
            f.write_str(middle)?;
            self.write_escape(f)?;
            stop.write(f, self.calendar)?;
        }
        Ok(())
    }
}
