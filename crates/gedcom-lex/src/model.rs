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

//! Genealogical value types produced by the line interpreter.
//!
//! These are the small, opaque values a record assembler consumes: sex codes,
//! events with a description, and typed attributes. They carry no links to
//! other records.

use std::fmt;

/// Sex of an individual, decoded from a `SEX` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// Decode a GEDCOM sex value.
    ///
    /// Only the first non-space character counts, case-insensitively:
    /// `M` is male, `F` is female, everything else (including the empty
    /// string) is unknown.
    ///
    /// ```rust
    /// use gedcom_lex::Sex;
    ///
    /// assert_eq!(Sex::from_gedcom("Male"), Sex::Male);
    /// assert_eq!(Sex::from_gedcom(" f "), Sex::Female);
    /// assert_eq!(Sex::from_gedcom("U"), Sex::Unknown);
    /// assert_eq!(Sex::from_gedcom(""), Sex::Unknown);
    /// ```
    pub fn from_gedcom(value: &str) -> Self {
        match value.trim().chars().next() {
            Some('M') | Some('m') => Sex::Male,
            Some('F') | Some('f') => Sex::Female,
            _ => Sex::Unknown,
        }
    }

    /// Single letter GEDCOM code.
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Unknown => "U",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
            Sex::Unknown => f.write_str("unknown"),
        }
    }
}

/// Kind of an individual or family event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventType {
    Birth,
    Death,
    Burial,
    Cremation,
    Christening,
    AdultChristening,
    Baptism,
    BarMitzvah,
    BasMitzvah,
    Blessing,
    Confirmation,
    FirstCommunion,
    Ordination,
    Naturalization,
    Emigration,
    Immigration,
    Census,
    Probate,
    Will,
    Graduation,
    Retirement,
    Adopted,
    Marriage,
    MarriageBanns,
    MarriageContract,
    MarriageLicense,
    MarriageSettlement,
    Engagement,
    Divorce,
    DivorceFiling,
    Annulment,
    Residence,
    Education,
    Occupation,
    Religion,
    Property,
    Custom(String),
}

impl EventType {
    /// Human readable name.
    pub fn name(&self) -> &str {
        match self {
            EventType::Birth => "Birth",
            EventType::Death => "Death",
            EventType::Burial => "Burial",
            EventType::Cremation => "Cremation",
            EventType::Christening => "Christening",
            EventType::AdultChristening => "Adult Christening",
            EventType::Baptism => "Baptism",
            EventType::BarMitzvah => "Bar Mitzvah",
            EventType::BasMitzvah => "Bas Mitzvah",
            EventType::Blessing => "Blessing",
            EventType::Confirmation => "Confirmation",
            EventType::FirstCommunion => "First Communion",
            EventType::Ordination => "Ordination",
            EventType::Naturalization => "Naturalization",
            EventType::Emigration => "Emigration",
            EventType::Immigration => "Immigration",
            EventType::Census => "Census",
            EventType::Probate => "Probate",
            EventType::Will => "Will",
            EventType::Graduation => "Graduation",
            EventType::Retirement => "Retirement",
            EventType::Adopted => "Adopted",
            EventType::Marriage => "Marriage",
            EventType::MarriageBanns => "Marriage Banns",
            EventType::MarriageContract => "Marriage Contract",
            EventType::MarriageLicense => "Marriage License",
            EventType::MarriageSettlement => "Marriage Settlement",
            EventType::Engagement => "Engagement",
            EventType::Divorce => "Divorce",
            EventType::DivorceFiling => "Divorce Filing",
            EventType::Annulment => "Annulment",
            EventType::Residence => "Residence",
            EventType::Education => "Education",
            EventType::Occupation => "Occupation",
            EventType::Religion => "Religion",
            EventType::Property => "Property",
            EventType::Custom(name) => name,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a personal attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeType {
    Caste,
    Description,
    IdNumber,
    Nationality,
    NumChildren,
    /// `TITL` inside an individual record.
    NobilityTitle,
    SocialSecurityNumber,
    /// Vendor or user defined attribute, named by its original tag.
    Custom(String),
}

impl AttributeType {
    /// Human readable name.
    pub fn name(&self) -> &str {
        match self {
            AttributeType::Caste => "Caste",
            AttributeType::Description => "Description",
            AttributeType::IdNumber => "Identification Number",
            AttributeType::Nationality => "Nationality",
            AttributeType::NumChildren => "Number of Children",
            AttributeType::NobilityTitle => "Nobility Title",
            AttributeType::SocialSecurityNumber => "Social Security Number",
            AttributeType::Custom(name) => name,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event decoded from an event tag line (`1 BIRT`, `1 OCCU Farmer`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub event_type: EventType,
    /// The line's trimmed value; empty for a bare event tag.
    pub description: String,
}

impl Event {
    pub fn new(event_type: EventType, description: impl Into<String>) -> Self {
        Self {
            event_type,
            description: description.into(),
        }
    }
}

/// A typed attribute value (`1 NATI Dutch`, `1 NCHI 4`, `1 _UID ...`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub attr_type: AttributeType,
    pub value: String,
}

impl Attribute {
    pub fn new(attr_type: AttributeType, value: impl Into<String>) -> Self {
        Self {
            attr_type,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Sex tests ====================

    #[test]
    fn test_sex_male_forms() {
        assert_eq!(Sex::from_gedcom("M"), Sex::Male);
        assert_eq!(Sex::from_gedcom("Male"), Sex::Male);
        assert_eq!(Sex::from_gedcom(" m "), Sex::Male);
    }

    #[test]
    fn test_sex_female_forms() {
        assert_eq!(Sex::from_gedcom("F"), Sex::Female);
        assert_eq!(Sex::from_gedcom("female"), Sex::Female);
    }

    #[test]
    fn test_sex_unknown_forms() {
        assert_eq!(Sex::from_gedcom(""), Sex::Unknown);
        assert_eq!(Sex::from_gedcom("   "), Sex::Unknown);
        assert_eq!(Sex::from_gedcom("U"), Sex::Unknown);
        assert_eq!(Sex::from_gedcom("X"), Sex::Unknown);
        assert_eq!(Sex::from_gedcom("?M"), Sex::Unknown);
    }

    #[test]
    fn test_sex_code_and_display() {
        assert_eq!(Sex::Male.code(), "M");
        assert_eq!(Sex::Unknown.code(), "U");
        assert_eq!(Sex::Female.to_string(), "female");
        assert_eq!(Sex::default(), Sex::Unknown);
    }

    // ==================== Type name tests ====================

    #[test]
    fn test_event_type_names() {
        assert_eq!(EventType::Birth.to_string(), "Birth");
        assert_eq!(EventType::MarriageBanns.name(), "Marriage Banns");
        assert_eq!(EventType::Custom("Feast".into()).name(), "Feast");
    }

    #[test]
    fn test_attribute_type_names() {
        assert_eq!(AttributeType::NumChildren.name(), "Number of Children");
        assert_eq!(AttributeType::Custom("_UID".into()).to_string(), "_UID");
    }

    #[test]
    fn test_constructors() {
        let event = Event::new(EventType::Occupation, "Farmer");
        assert_eq!(event.description, "Farmer");
        let attr = Attribute::new(AttributeType::Nationality, "Dutch");
        assert_eq!(attr.value, "Dutch");
    }
}
