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

//! Line types.
//!
//! - [`RawLine`]: one split, classified physical line as held in the reader's
//!   read-ahead buffer. CONT/CONC lines are folded into the value of the
//!   `RawLine` before them and never appear on their own.
//! - [`GedLine`]: a logical line handed to the caller, with its value
//!   interpreted into [`LineData`].

use crate::date::Date;
use crate::model::{Attribute, Event, Sex};
use crate::token::TokenKind;

/// A split and classified line before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// GEDCOM nesting depth, 0 for records.
    pub level: u32,
    pub token: TokenKind,
    /// Tag text as written, or the bare id (`I1`) for [`TokenKind::Id`] lines.
    pub tag: String,
    /// Everything after the tag; grows as CONT/CONC lines are folded in.
    pub value: String,
    /// 1-based physical line the logical line starts on.
    pub line_number: usize,
}

impl RawLine {
    /// Text that CONC continues. For an id line (`0 @N1@ NOTE`) this is the
    /// part after the record type.
    pub(crate) fn payload(&self) -> &str {
        if self.token == TokenKind::Id {
            self.value.split_once(' ').map_or("", |(_, rest)| rest)
        } else {
            &self.value
        }
    }
}

/// Interpreted payload of a logical line. Its shape depends only on the
/// line's [`TokenKind`]:
///
/// | token                                   | data          |
/// |-----------------------------------------|---------------|
/// | `Date`                                  | `Date`        |
/// | `Sex`                                   | `Sex`         |
/// | `NoteRef`                               | `NoteRef`     |
/// | `GenericEvent`                          | `Event`       |
/// | `Attribute`, `NumChildren`, `CustomAttr` | `Attribute`  |
/// | everything else                         | `Text`        |
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum LineData {
    Text(String),
    Date(Date),
    Sex(Sex),
    /// Id of a shared note record, without the `@` delimiters.
    NoteRef(String),
    Event(Event),
    Attribute(Attribute),
}

/// A logical GEDCOM line.
///
/// # Examples
///
/// ```rust
/// use gedcom_lex::{LineReader, TokenKind, Sex};
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("0 @I1@ INDI\n1 SEX F\n"));
///
/// let id = reader.next_logical_line().unwrap().unwrap();
/// assert_eq!(id.token, TokenKind::Id);
/// assert_eq!(id.tag, "I1");
///
/// let sex = reader.next_logical_line().unwrap().unwrap();
/// assert_eq!(sex.as_sex(), Some(Sex::Female));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GedLine {
    pub level: u32,
    pub token: TokenKind,
    pub tag: String,
    /// Folded, untrimmed value text.
    pub value: String,
    pub data: LineData,
    pub line_number: usize,
}

impl GedLine {
    /// Text payload, for lines that were not interpreted into anything richer.
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            LineData::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&Date> {
        match &self.data {
            LineData::Date(date) => Some(date),
            _ => None,
        }
    }

    pub fn as_sex(&self) -> Option<Sex> {
        match self.data {
            LineData::Sex(sex) => Some(sex),
            _ => None,
        }
    }

    pub fn as_note_ref(&self) -> Option<&str> {
        match &self.data {
            LineData::NoteRef(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match &self.data {
            LineData::Event(event) => Some(event),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<&Attribute> {
        match &self.data {
            LineData::Attribute(attr) => Some(attr),
            _ => None,
        }
    }

    /// `true` for a level 0 record line (`0 @I1@ INDI`, `0 HEAD`, `0 TRLR`).
    #[inline]
    pub fn is_record_start(&self) -> bool {
        self.level == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeType, EventType};

    fn line(token: TokenKind, data: LineData) -> GedLine {
        GedLine {
            level: 1,
            token,
            tag: token.as_str().to_string(),
            value: String::new(),
            data,
            line_number: 1,
        }
    }

    fn raw(token: TokenKind, value: &str) -> RawLine {
        RawLine {
            level: 0,
            token,
            tag: "N1".to_string(),
            value: value.to_string(),
            line_number: 1,
        }
    }

    // ==================== Payload tests ====================

    #[test]
    fn test_payload_of_plain_line_is_value() {
        assert_eq!(raw(TokenKind::Note, "Hello").payload(), "Hello");
        assert_eq!(raw(TokenKind::Note, "").payload(), "");
    }

    #[test]
    fn test_payload_of_id_line_skips_record_type() {
        assert_eq!(raw(TokenKind::Id, "NOTE").payload(), "");
        assert_eq!(raw(TokenKind::Id, "NOTE Some text").payload(), "Some text");
    }

    // ==================== Accessor tests ====================

    #[test]
    fn test_accessors_match_data_shape() {
        let sex = line(TokenKind::Sex, LineData::Sex(Sex::Male));
        assert_eq!(sex.as_sex(), Some(Sex::Male));
        assert!(sex.as_text().is_none());
        assert!(sex.as_date().is_none());

        let note = line(TokenKind::NoteRef, LineData::NoteRef("N1".into()));
        assert_eq!(note.as_note_ref(), Some("N1"));

        let event = line(
            TokenKind::GenericEvent,
            LineData::Event(Event::new(EventType::Birth, "")),
        );
        assert_eq!(event.as_event().map(|e| &e.event_type), Some(&EventType::Birth));

        let attr = line(
            TokenKind::NumChildren,
            LineData::Attribute(Attribute::new(AttributeType::NumChildren, "3")),
        );
        assert_eq!(attr.as_attribute().map(|a| a.value.as_str()), Some("3"));
    }

    #[test]
    fn test_is_record_start() {
        let mut l = line(TokenKind::Head, LineData::Text(String::new()));
        assert!(!l.is_record_start());
        l.level = 0;
        assert!(l.is_record_start());
    }
}
