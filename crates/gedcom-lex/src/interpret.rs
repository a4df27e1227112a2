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

//! Secondary decoding of line values.
//!
//! Every function here is total: whatever the value text, the result is a
//! [`GedLine`], at worst carrying plain text.

use crate::date::DateExtractor;
use crate::line::{GedLine, LineData, RawLine};
use crate::model::{Attribute, AttributeType, Event, Sex};
use crate::tables::TagTables;
use crate::token::TokenKind;

/// Turns [`RawLine`]s into [`GedLine`]s.
///
/// # Examples
///
/// ```rust
/// use gedcom_lex::{LineInterpreter, RawLine, TagTables, TokenKind, EventType};
///
/// let interpreter = LineInterpreter::new(TagTables::standard());
/// let line = interpreter.interpret(RawLine {
///     level: 1,
///     token: TokenKind::Unknown,
///     tag: "OCCU".to_string(),
///     value: "Farmer".to_string(),
///     line_number: 7,
/// });
///
/// assert_eq!(line.token, TokenKind::GenericEvent);
/// let event = line.as_event().unwrap();
/// assert_eq!(event.event_type, EventType::Occupation);
/// assert_eq!(event.description, "Farmer");
/// ```
#[derive(Debug, Clone)]
pub struct LineInterpreter {
    tables: TagTables,
    dates: DateExtractor,
}

impl Default for LineInterpreter {
    fn default() -> Self {
        Self::standard()
    }
}

impl LineInterpreter {
    pub fn new(tables: TagTables) -> Self {
        Self {
            tables,
            dates: DateExtractor::new(),
        }
    }

    /// Interpreter with the standard GEDCOM 5.5 tables.
    pub fn standard() -> Self {
        Self::new(TagTables::standard())
    }

    /// Replace the date extractor (e.g. to add month names).
    pub fn with_extractor(mut self, dates: DateExtractor) -> Self {
        self.dates = dates;
        self
    }

    pub fn tables(&self) -> &TagTables {
        &self.tables
    }

    /// Decode a line's value according to its token kind.
    pub fn interpret(&self, raw: RawLine) -> GedLine {
        self.interpret_in(raw, "")
    }

    /// Decode a line that belongs to a record of type `record` (`INDI`,
    /// `SOUR`, ...). `TITL` directly under an individual is the nobility
    /// title attribute; anywhere else it stays a title.
    pub fn interpret_in(&self, raw: RawLine, record: &str) -> GedLine {
        let text = raw.value.trim();
        let (token, data) = match raw.token {
            TokenKind::Sex => (TokenKind::Sex, LineData::Sex(Sex::from_gedcom(text))),
            TokenKind::Date => (TokenKind::Date, LineData::Date(self.dates.extract(text))),
            TokenKind::Note => note(text),
            TokenKind::NumChildren => (
                TokenKind::NumChildren,
                LineData::Attribute(Attribute::new(AttributeType::NumChildren, text)),
            ),
            TokenKind::CustomAttr => (
                TokenKind::CustomAttr,
                LineData::Attribute(Attribute::new(AttributeType::Custom(raw.tag.clone()), text)),
            ),
            TokenKind::Titl if raw.level == 1 && record == "INDI" => self.title(&raw.tag, text),
            TokenKind::Unknown => self.unknown(&raw.tag, text),
            other => (other, LineData::Text(text.to_string())),
        };

        GedLine {
            level: raw.level,
            token,
            data,
            tag: raw.tag,
            value: raw.value,
            line_number: raw.line_number,
        }
    }

    fn title(&self, tag: &str, text: &str) -> (TokenKind, LineData) {
        match self.tables.attribute(tag) {
            Some(attr_type) => (
                TokenKind::Attribute,
                LineData::Attribute(Attribute::new(attr_type.clone(), text)),
            ),
            None => (TokenKind::Titl, LineData::Text(text.to_string())),
        }
    }

    fn unknown(&self, tag: &str, text: &str) -> (TokenKind, LineData) {
        if let Some(event_type) = self.tables.event(tag) {
            (
                TokenKind::GenericEvent,
                LineData::Event(Event::new(event_type.clone(), text)),
            )
        } else if let Some(attr_type) = self.tables.attribute(tag) {
            (
                TokenKind::Attribute,
                LineData::Attribute(Attribute::new(attr_type.clone(), text)),
            )
        } else {
            (TokenKind::Unknown, LineData::Text(text.to_string()))
        }
    }
}

fn note(text: &str) -> (TokenKind, LineData) {
    if text.len() > 2 && text.starts_with('@') && text.ends_with('@') {
        (
            TokenKind::NoteRef,
            LineData::NoteRef(text[1..text.len() - 1].to_string()),
        )
    } else {
        (TokenKind::Note, LineData::Text(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{Modifier, Quality};
    use crate::model::EventType;

    fn raw(token: TokenKind, tag: &str, value: &str) -> RawLine {
        RawLine {
            level: 1,
            token,
            tag: tag.to_string(),
            value: value.to_string(),
            line_number: 3,
        }
    }

    fn interpret(token: TokenKind, tag: &str, value: &str) -> GedLine {
        LineInterpreter::standard().interpret(raw(token, tag, value))
    }

    // ==================== Sex tests ====================

    #[test]
    fn test_sex_lines() {
        assert_eq!(interpret(TokenKind::Sex, "SEX", "M").as_sex(), Some(Sex::Male));
        assert_eq!(interpret(TokenKind::Sex, "SEX", " m ").as_sex(), Some(Sex::Male));
        assert_eq!(interpret(TokenKind::Sex, "SEX", "F").as_sex(), Some(Sex::Female));
        assert_eq!(interpret(TokenKind::Sex, "SEX", "").as_sex(), Some(Sex::Unknown));
    }

    // ==================== Date tests ====================

    #[test]
    fn test_date_line() {
        let line = interpret(TokenKind::Date, "DATE", "EST 1850 ");
        let date = line.as_date().unwrap();
        assert_eq!(date.quality, Quality::Estimated);
        assert_eq!(date.year(), Some(1850));
        assert_eq!(line.value, "EST 1850 ");
    }

    #[test]
    fn test_unparseable_date_line_is_text_only_date() {
        let line = interpret(TokenKind::Date, "DATE", " in the spring ");
        assert_eq!(line.token, TokenKind::Date);
        let date = line.as_date().unwrap();
        assert_eq!(date.modifier, Modifier::TextOnly);
        assert_eq!(date.text(), Some("in the spring"));
    }

    // ==================== Note tests ====================

    #[test]
    fn test_note_pointer() {
        let line = interpret(TokenKind::Note, "NOTE", " @N12@ ");
        assert_eq!(line.token, TokenKind::NoteRef);
        assert_eq!(line.as_note_ref(), Some("N12"));
    }

    #[test]
    fn test_inline_note() {
        let line = interpret(TokenKind::Note, "NOTE", "Emailed @home@ today");
        assert_eq!(line.token, TokenKind::Note);
        assert_eq!(line.as_text(), Some("Emailed @home@ today"));
    }

    #[test]
    fn test_short_at_values_are_not_pointers() {
        assert_eq!(interpret(TokenKind::Note, "NOTE", "@@").token, TokenKind::Note);
        assert_eq!(interpret(TokenKind::Note, "NOTE", "@").token, TokenKind::Note);
        assert_eq!(interpret(TokenKind::Note, "NOTE", "@X@").token, TokenKind::NoteRef);
    }

    // ==================== Attribute tests ====================

    #[test]
    fn test_num_children_is_not_validated() {
        let line = interpret(TokenKind::NumChildren, "NCHI", "about a dozen");
        let attr = line.as_attribute().unwrap();
        assert_eq!(attr.attr_type, AttributeType::NumChildren);
        assert_eq!(attr.value, "about a dozen");
    }

    #[test]
    fn test_custom_attributes_keep_tag() {
        for tag in ["_STAT", "_UID", "AFN"] {
            let line = interpret(TokenKind::CustomAttr, tag, " X1 ");
            let attr = line.as_attribute().unwrap();
            assert_eq!(attr.attr_type, AttributeType::Custom(tag.to_string()));
            assert_eq!(attr.value, "X1");
        }
    }

    // ==================== Unknown tag resolution tests ====================

    #[test]
    fn test_unknown_resolves_event() {
        let line = interpret(TokenKind::Unknown, "BIRT", "");
        assert_eq!(line.token, TokenKind::GenericEvent);
        assert_eq!(line.as_event(), Some(&Event::new(EventType::Birth, "")));
    }

    #[test]
    fn test_unknown_resolves_attribute() {
        let line = interpret(TokenKind::Unknown, "NATI", "Dutch");
        assert_eq!(line.token, TokenKind::Attribute);
        assert_eq!(
            line.as_attribute(),
            Some(&Attribute::new(AttributeType::Nationality, "Dutch"))
        );
    }

    #[test]
    fn test_unknown_stays_text() {
        let line = interpret(TokenKind::Unknown, "_MYTAG", " vendor stuff ");
        assert_eq!(line.token, TokenKind::Unknown);
        assert_eq!(line.as_text(), Some("vendor stuff"));
        assert_eq!(line.tag, "_MYTAG");
    }

    #[test]
    fn test_alternate_tables() {
        let interpreter = LineInterpreter::new(TagTables::empty());
        let line = interpreter.interpret(raw(TokenKind::Unknown, "BIRT", ""));
        assert_eq!(line.token, TokenKind::Unknown);
    }

    // ==================== Title tests ====================

    #[test]
    fn test_individual_title_is_attribute() {
        let line =
            LineInterpreter::standard().interpret_in(raw(TokenKind::Titl, "TITL", " Sir "), "INDI");
        assert_eq!(line.token, TokenKind::Attribute);
        assert_eq!(
            line.as_attribute(),
            Some(&Attribute::new(AttributeType::NobilityTitle, "Sir"))
        );
    }

    #[test]
    fn test_title_outside_individual_stays_text() {
        let interpreter = LineInterpreter::standard();
        for record in ["SOUR", "NOTE", ""] {
            let line =
                interpreter.interpret_in(raw(TokenKind::Titl, "TITL", "Parish Register"), record);
            assert_eq!(line.token, TokenKind::Titl);
            assert_eq!(line.as_text(), Some("Parish Register"));
        }
    }

    #[test]
    fn test_nested_title_stays_text() {
        let mut nested = raw(TokenKind::Titl, "TITL", "Photo");
        nested.level = 2;
        let line = LineInterpreter::standard().interpret_in(nested, "INDI");
        assert_eq!(line.token, TokenKind::Titl);
    }

    #[test]
    fn test_title_without_table_entry_stays_text() {
        let line = LineInterpreter::new(TagTables::empty())
            .interpret_in(raw(TokenKind::Titl, "TITL", "Sir"), "INDI");
        assert_eq!(line.token, TokenKind::Titl);
    }

    // ==================== Passthrough tests ====================

    #[test]
    fn test_other_tokens_are_trimmed_text() {
        let line = interpret(TokenKind::Name, "NAME", " John /Doe/ ");
        assert_eq!(line.token, TokenKind::Name);
        assert_eq!(line.as_text(), Some("John /Doe/"));
        assert_eq!(line.line_number, 3);
    }
}
