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

//! Event and attribute tag tables.
//!
//! A [`TagTables`] value is built once and handed to the reader; it is never
//! mutated afterwards, so two readers with different tables cannot interfere.
//!
//! # Examples
//!
//! ```rust
//! use gedcom_lex::{TagTables, EventType, AttributeType};
//!
//! let tables = TagTables::standard();
//! assert_eq!(tables.event("BIRT"), Some(&EventType::Birth));
//! assert_eq!(tables.attribute("NATI"), Some(&AttributeType::Nationality));
//!
//! let custom = TagTables::empty().with_event("_MILT", EventType::Custom("Military".into()));
//! assert!(custom.event("BIRT").is_none());
//! assert!(custom.event("_MILT").is_some());
//! ```

use crate::model::{AttributeType, EventType};
use std::collections::HashMap;

pub const STANDARD_EVENTS: &[(&str, EventType)] = &[
    ("ADOP", EventType::Adopted),
    ("ANUL", EventType::Annulment),
    ("BAPM", EventType::Baptism),
    ("BARM", EventType::BarMitzvah),
    ("BASM", EventType::BasMitzvah),
    ("BIRT", EventType::Birth),
    ("BLES", EventType::Blessing),
    ("BURI", EventType::Burial),
    ("CENS", EventType::Census),
    ("CHR", EventType::Christening),
    ("CHRA", EventType::AdultChristening),
    ("CONF", EventType::Confirmation),
    ("CREM", EventType::Cremation),
    ("DEAT", EventType::Death),
    ("DIV", EventType::Divorce),
    ("DIVF", EventType::DivorceFiling),
    ("EDUC", EventType::Education),
    ("EMIG", EventType::Emigration),
    ("ENGA", EventType::Engagement),
    ("FCOM", EventType::FirstCommunion),
    ("GRAD", EventType::Graduation),
    ("IMMI", EventType::Immigration),
    ("MARB", EventType::MarriageBanns),
    ("MARC", EventType::MarriageContract),
    ("MARL", EventType::MarriageLicense),
    ("MARR", EventType::Marriage),
    ("MARS", EventType::MarriageSettlement),
    ("NATU", EventType::Naturalization),
    ("OCCU", EventType::Occupation),
    ("ORDN", EventType::Ordination),
    ("PROB", EventType::Probate),
    ("PROP", EventType::Property),
    ("RELI", EventType::Religion),
    ("RESI", EventType::Residence),
    ("RETI", EventType::Retirement),
    ("WILL", EventType::Will),
];

pub const STANDARD_ATTRIBUTES: &[(&str, AttributeType)] = &[
    ("CAST", AttributeType::Caste),
    ("DSCR", AttributeType::Description),
    ("IDNO", AttributeType::IdNumber),
    ("NATI", AttributeType::Nationality),
    ("TITL", AttributeType::NobilityTitle),
    ("SSN", AttributeType::SocialSecurityNumber),
];

/// Immutable lookup tables from GEDCOM tag to event and attribute types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTables {
    events: HashMap<String, EventType>,
    attributes: HashMap<String, AttributeType>,
}

impl TagTables {
    /// Tables with no entries; every unknown tag stays plain text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The GEDCOM 5.5 individual and family events and attributes.
    pub fn standard() -> Self {
        let events = STANDARD_EVENTS
            .iter()
            .map(|(tag, ty)| (tag.to_string(), ty.clone()))
            .collect();
        let attributes = STANDARD_ATTRIBUTES
            .iter()
            .map(|(tag, ty)| (tag.to_string(), ty.clone()))
            .collect();
        Self { events, attributes }
    }

    /// Add or replace an event mapping.
    pub fn with_event(mut self, tag: impl Into<String>, event_type: EventType) -> Self {
        self.events.insert(tag.into(), event_type);
        self
    }

    /// Add or replace an attribute mapping.
    pub fn with_attribute(mut self, tag: impl Into<String>, attr_type: AttributeType) -> Self {
        self.attributes.insert(tag.into(), attr_type);
        self
    }

    /// Event type for an exact tag.
    #[inline]
    pub fn event(&self, tag: &str) -> Option<&EventType> {
        self.events.get(tag)
    }

    /// Attribute type for an exact tag.
    #[inline]
    pub fn attribute(&self, tag: &str) -> Option<&AttributeType> {
        self.attributes.get(tag)
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}
