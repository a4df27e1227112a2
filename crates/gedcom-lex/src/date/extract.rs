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

//! GEDCOM date extraction.
//!
//! Recognizers are tried in order, first match wins:
//!
//! 1. `BET ABT` is rewritten to `EST BET` (one exporter writes the former).
//! 2. An `INT`/`EST`/`CAL` prefix is stripped and becomes the date quality.
//! 3. `BET [@#Dcal@] x AND [@#Dcal@] y` → range.
//! 4. `FROM [@#Dcal@] x TO [@#Dcal@] y` → span.
//! 5. `[ABT|BEF|AFT] @#Dcal@ x` → single date in that calendar.
//! 6. Anything else goes to the plain [`DateParser`] as Gregorian.
//!
//! If the selected recognizer fails the result is a text-only date holding
//! the input exactly as given.

use super::{Calendar, Date, DateParser, Modifier, Quality};
use crate::error::DateError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

static QUALITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(INT|EST|CAL)\s+(.*)$").expect("valid quality regex"));

static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*BET\s+(?:@#D?([^@]+)@\s*)?(.*?)\s+AND\s+(?:@#D?([^@]+)@\s*)?(.*)$")
        .expect("valid range regex")
});

static SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*FROM\s+(?:@#D?([^@]+)@\s*)?(.*?)\s+TO\s+(?:@#D?([^@]+)@\s*)?(.*)$")
        .expect("valid span regex")
});

static ESCAPED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(ABT|BEF|AFT)?\s*@#D?([^@]+)@\s*(.*)$").expect("valid calendar regex")
});

static DEFAULT_EXTRACTOR: Lazy<DateExtractor> = Lazy::new(DateExtractor::new);

/// Extract a structured date from GEDCOM date text with the default parser.
///
/// Never fails: text that matches no date form comes back as a text-only
/// date whose [`text`](Date::text) is `text` unchanged.
///
/// ```rust
/// use gedcom_lex::{extract_date, Modifier, Quality, Calendar, DateValue};
///
/// let date = extract_date("@#DJULIAN@ 12 JAN 1900");
/// assert_eq!(date.calendar, Calendar::Julian);
/// assert_eq!(date.start, DateValue::new(12, 1, 1900));
///
/// let date = extract_date("BET ABT 1900 AND 1905");
/// assert_eq!(date.modifier, Modifier::Range);
/// assert_eq!(date.quality, Quality::Estimated);
///
/// let date = extract_date("not a date at all");
/// assert!(date.is_text_only());
/// assert_eq!(date.text(), Some("not a date at all"));
/// ```
pub fn extract_date(text: &str) -> Date {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Date extractor over a configurable [`DateParser`].
///
/// Holds no per-call state; one extractor can serve any number of lines.
#[derive(Debug, Clone, Default)]
pub struct DateExtractor {
    parser: DateParser,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a parser with extra month names.
    pub fn with_parser(parser: DateParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &DateParser {
        &self.parser
    }

    /// Extract a date, falling back to a text-only date on any failure.
    pub fn extract(&self, text: &str) -> Date {
        match self.try_extract(text) {
            Ok(date) => date,
            Err(err) => {
                debug!(text, error = %err, "date kept as text");
                Date::text_only(text)
            }
        }
    }

    /// Extract a date, reporting why the text did not parse.
    pub fn try_extract(&self, text: &str) -> Result<Date, DateError> {
        let text = text.replace("BET ABT", "EST BET");

        let (quality, body) = match QUALITY.captures(&text) {
            Some(caps) => (
                Quality::from_keyword(&caps[1]),
                caps.get(2).map_or("", |m| m.as_str()),
            ),
            None => (Quality::None, text.as_str()),
        };

        let mut date = if let Some(caps) = RANGE.captures(body) {
            self.compound(Modifier::Range, &caps)?
        } else if let Some(caps) = SPAN.captures(body) {
            self.compound(Modifier::Span, &caps)?
        } else if let Some(caps) = ESCAPED.captures(body) {
            let calendar = Calendar::from_escape(&caps[2]);
            let value = match caps.get(1) {
                Some(qualifier) => format!("{} {}", qualifier.as_str(), &caps[3]),
                None => caps[3].to_string(),
            };
            let mut date = self.parser.parse(&value, calendar)?;
            date.set_calendar(calendar);
            date
        } else {
            self.parser.parse(body, Calendar::Gregorian)?
        };

        date.set_quality(quality);
        Ok(date)
    }

    fn compound(&self, modifier: Modifier, caps: &Captures<'_>) -> Result<Date, DateError> {
        // The first side's escape governs both ends; a second escape is ignored.
        let first = caps
            .get(1)
            .map_or(Calendar::Gregorian, |m| Calendar::from_escape(m.as_str()));

        let start = self.parser.parse(&caps[2], first)?.start;
        let stop = self.parser.parse(&caps[4], first)?.start;
        Ok(match modifier {
            Modifier::Span => Date::span(first, start, stop),
            _ => Date::range(first, start, stop),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateValue;

    // ==================== Quality prefix tests ====================

    #[test]
    fn test_quality_prefixes() {
        assert_eq!(extract_date("EST 1900").quality, Quality::Estimated);
        assert_eq!(extract_date("CAL 1900").quality, Quality::Calculated);
        assert_eq!(extract_date("INT 1900").quality, Quality::Calculated);
        assert_eq!(extract_date("1900").quality, Quality::None);
    }

    #[test]
    fn test_quality_keyword_alone_is_text() {
        let date = extract_date("EST");
        assert!(date.is_text_only());
        assert_eq!(date.text(), Some("EST"));
    }

    // ==================== Range / span tests ====================

    #[test]
    fn test_range_without_escapes() {
        let date = extract_date("BET 1 JAN 1900 AND 31 DEC 1900");
        assert_eq!(date.modifier, Modifier::Range);
        assert_eq!(date.start, DateValue::new(1, 1, 1900));
        assert_eq!(date.stop, Some(DateValue::new(31, 12, 1900)));
        assert_eq!(date.calendar, Calendar::Gregorian);
    }

    #[test]
    fn test_range_with_matching_escapes() {
        let date = extract_date("BET @#DJULIAN@ 1700 AND @#DJULIAN@ 1710");
        assert_eq!(date.modifier, Modifier::Range);
        assert_eq!(date.calendar, Calendar::Julian);
        assert_eq!(date.stop, Some(DateValue::year(1710)));
    }

    #[test]
    fn test_range_takes_first_side_calendar() {
        let date = extract_date("BET @#DJULIAN@ 1700 AND 1710");
        assert_eq!(date.modifier, Modifier::Range);
        assert_eq!(date.calendar, Calendar::Julian);
        assert_eq!(date.start, DateValue::year(1700));
        assert_eq!(date.stop, Some(DateValue::year(1710)));

        let date = extract_date("BET 1700 AND @#DJULIAN@ 1710");
        assert_eq!(date.modifier, Modifier::Range);
        assert_eq!(date.calendar, Calendar::Gregorian);
        assert_eq!(date.stop, Some(DateValue::year(1710)));
    }

    #[test]
    fn test_span_takes_first_side_calendar() {
        let date = extract_date("FROM @#DJULIAN@ 1700 TO 1710");
        assert_eq!(date.modifier, Modifier::Span);
        assert_eq!(date.calendar, Calendar::Julian);
        assert_eq!(date.start, DateValue::year(1700));
        assert_eq!(date.stop, Some(DateValue::year(1710)));
    }

    #[test]
    fn test_span() {
        let date = extract_date("FROM 1900 TO 1905");
        assert_eq!(date.modifier, Modifier::Span);
        assert_eq!(date.start, DateValue::year(1900));
        assert_eq!(date.stop, Some(DateValue::year(1905)));
    }

    #[test]
    fn test_span_takes_start_of_each_side() {
        let date = extract_date("FROM ABT 1900 TO 1905");
        assert_eq!(date.modifier, Modifier::Span);
        assert_eq!(date.start, DateValue::year(1900));
    }

    #[test]
    fn test_estimated_range() {
        let date = extract_date("EST BET 1900 AND 1905");
        assert_eq!(date.modifier, Modifier::Range);
        assert_eq!(date.quality, Quality::Estimated);
    }

    // ==================== Vendor rewrite tests ====================

    #[test]
    fn test_bet_abt_rewrite() {
        let date = extract_date("BET ABT 1900 AND 1905");
        assert_eq!(date.modifier, Modifier::Range);
        assert_eq!(date.quality, Quality::Estimated);
        assert_eq!(date.start, DateValue::year(1900));
        assert_eq!(date.stop, Some(DateValue::year(1905)));
    }

    #[test]
    fn test_bet_abt_fallback_keeps_original_text() {
        let text = "BET ABT sometime AND later";
        assert_eq!(extract_date(text).text(), Some(text));
    }

    // ==================== Calendar escape tests ====================

    #[test]
    fn test_escaped_single_date() {
        let date = extract_date("@#DJULIAN@ 12 JAN 1900");
        assert_eq!(date.calendar, Calendar::Julian);
        assert_eq!(date.modifier, Modifier::None);
        assert_eq!(date.start, DateValue::new(12, 1, 1900));
    }

    #[test]
    fn test_escaped_with_qualifier() {
        let date = extract_date("AFT @#DHEBREW@ 1 TSH 5700");
        assert_eq!(date.modifier, Modifier::After);
        assert_eq!(date.calendar, Calendar::Hebrew);
        assert_eq!(date.start, DateValue::new(1, 1, 5700));
    }

    #[test]
    fn test_escaped_french_and_short_escape() {
        assert_eq!(extract_date("@#DFRENCH R@ 1 VEND 2").calendar, Calendar::French);
        assert_eq!(extract_date("@#JULIAN@ 1700").calendar, Calendar::Julian);
    }

    #[test]
    fn test_unknown_escape_defaults_to_gregorian() {
        let date = extract_date("@#DROMAN@ 12 JAN 1900");
        assert_eq!(date.calendar, Calendar::Gregorian);
        assert_eq!(date.start, DateValue::new(12, 1, 1900));
    }

    #[test]
    fn test_explicit_gregorian_escape() {
        let date = extract_date("@#DGREGORIAN@ 1900");
        assert_eq!(date, extract_date("1900"));
    }

    // ==================== Plain and fallback tests ====================

    #[test]
    fn test_plain_about() {
        let date = extract_date("ABT 1850");
        assert_eq!(date.modifier, Modifier::About);
        assert_eq!(date.year(), Some(1850));
    }

    #[test]
    fn test_garbage_is_text_only() {
        let text = "not a date at all";
        let date = extract_date(text);
        assert_eq!(date.modifier, Modifier::TextOnly);
        assert_eq!(date.text(), Some(text));
    }

    #[test]
    fn test_fallback_keeps_whitespace() {
        assert_eq!(extract_date("  (unknown)  ").text(), Some("  (unknown)  "));
    }

    #[test]
    fn test_empty_is_text_only() {
        let date = extract_date("");
        assert!(date.is_text_only());
        assert_eq!(date.text(), Some(""));
    }

    #[test]
    fn test_custom_parser_month_alias() {
        let extractor = DateExtractor::with_parser(DateParser::new().with_month_alias("MAART", 3));
        assert_eq!(extractor.extract("EST 4 MAART 1850").start.month, 3);
        assert!(extract_date("4 MAART 1850").is_text_only());
    }
}
