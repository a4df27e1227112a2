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

//! GEDCOM tag classification.
//!
//! Maps the tag text of a GEDCOM line (`BIRT`, `CONT`, `DATE`, ...) to a
//! [`TokenKind`]. The mapping is exact: GEDCOM tags are fixed uppercase
//! mnemonics, so `date` or `DATE.` are [`TokenKind::Unknown`].
//!
//! Event and attribute tags such as `BIRT` or `NATI` are intentionally *not*
//! in the table. They classify as `Unknown` and are resolved later by the
//! interpreter against a [`TagTables`](crate::TagTables) value, which turns
//! them into [`TokenKind::GenericEvent`] or [`TokenKind::Attribute`].
//!
//! # Examples
//!
//! ```rust
//! use gedcom_lex::{classify, TokenKind};
//!
//! assert_eq!(classify("DATE"), TokenKind::Date);
//! assert_eq!(classify("CONC"), TokenKind::Conc);
//! assert_eq!(classify("_UID"), TokenKind::CustomAttr);
//! assert_eq!(classify("BIRT"), TokenKind::Unknown);
//! assert_eq!(classify("date"), TokenKind::Unknown);
//! ```

use std::fmt;

macro_rules! gedcom_tokens {
    ($($variant:ident => $tag:literal),* $(,)?) => {
        /// Symbolic kind of a GEDCOM line.
        ///
        /// Most variants correspond one-to-one to a standard GEDCOM tag. The
        /// remaining variants are produced by the reader and interpreter
        /// rather than by [`classify`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum TokenKind {
            $(
                #[doc = concat!("`", $tag, "`")]
                $variant,
            )*
            /// Level 0 cross-reference declaration (`0 @I1@ INDI`).
            Id,
            /// `_STAT`, `_UID` and `AFN` vendor fields.
            CustomAttr,
            /// `NOTE` whose value is a `@N1@` pointer to a shared note record.
            NoteRef,
            /// Tag resolved to a known event type.
            GenericEvent,
            /// Tag resolved to a known attribute type.
            Attribute,
            /// Any tag not in the table.
            Unknown,
        }

        /// Classify a tag string.
        ///
        /// Never fails; tags outside the table are [`TokenKind::Unknown`].
        pub fn classify(tag: &str) -> TokenKind {
            match tag {
                $($tag => TokenKind::$variant,)*
                "_STAT" | "_UID" | "AFN" => TokenKind::CustomAttr,
                _ => TokenKind::Unknown,
            }
        }

        impl TokenKind {
            /// Short display name: the GEDCOM tag for table tokens, an
            /// uppercase mnemonic for derived kinds.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $tag,)*
                    TokenKind::Id => "ID",
                    TokenKind::CustomAttr => "CUSTOM_ATTR",
                    TokenKind::NoteRef => "NOTE_REF",
                    TokenKind::GenericEvent => "GEVENT",
                    TokenKind::Attribute => "ATTR",
                    TokenKind::Unknown => "UNKNOWN",
                }
            }
        }
    };
}

gedcom_tokens! {
    Abbr => "ABBR",
    Addr => "ADDR",
    Adr1 => "ADR1",
    Adr2 => "ADR2",
    Age => "AGE",
    Agnc => "AGNC",
    Alia => "ALIA",
    Anci => "ANCI",
    Asso => "ASSO",
    Auth => "AUTH",
    Bapl => "BAPL",
    Blob => "BLOB",
    Caln => "CALN",
    Caus => "CAUS",
    Chan => "CHAN",
    Char => "CHAR",
    Chil => "CHIL",
    City => "CITY",
    Conc => "CONC",
    Conl => "CONL",
    Cont => "CONT",
    Copr => "COPR",
    Corp => "CORP",
    Ctry => "CTRY",
    Data => "DATA",
    Date => "DATE",
    Desi => "DESI",
    Dest => "DEST",
    Email => "EMAIL",
    Endl => "ENDL",
    Even => "EVEN",
    Fam => "FAM",
    Famc => "FAMC",
    Fams => "FAMS",
    Fax => "FAX",
    File => "FILE",
    Form => "FORM",
    Gedc => "GEDC",
    Givn => "GIVN",
    Head => "HEAD",
    Husb => "HUSB",
    Indi => "INDI",
    Lang => "LANG",
    Lati => "LATI",
    Long => "LONG",
    Map => "MAP",
    Medi => "MEDI",
    Name => "NAME",
    NumChildren => "NCHI",
    Nick => "NICK",
    Note => "NOTE",
    Npfx => "NPFX",
    Nsfx => "NSFX",
    Obje => "OBJE",
    Page => "PAGE",
    Pedi => "PEDI",
    Phon => "PHON",
    Plac => "PLAC",
    Post => "POST",
    Publ => "PUBL",
    Quay => "QUAY",
    Refn => "REFN",
    Rela => "RELA",
    Repo => "REPO",
    Resn => "RESN",
    Rfn => "RFN",
    Rin => "RIN",
    Romn => "ROMN",
    Sex => "SEX",
    Slgc => "SLGC",
    Slgs => "SLGS",
    Sour => "SOUR",
    Spfx => "SPFX",
    Stae => "STAE",
    Stat => "STAT",
    Subm => "SUBM",
    Subn => "SUBN",
    Surn => "SURN",
    Temp => "TEMP",
    Text => "TEXT",
    Time => "TIME",
    Titl => "TITL",
    Trlr => "TRLR",
    Type => "TYPE",
    Vers => "VERS",
    Wife => "WIFE",
    Www => "WWW",
}

impl TokenKind {
    /// `true` for the two line-folding tags.
    #[inline]
    pub fn is_continuation(self) -> bool {
        matches!(self, TokenKind::Cont | TokenKind::Conc)
    }

    /// `true` when the line's value gets a secondary interpretation
    /// (date parsing, sex mapping, note pointer detection, ...).
    #[inline]
    pub fn needs_interpretation(self) -> bool {
        matches!(
            self,
            TokenKind::Date
                | TokenKind::Sex
                | TokenKind::Note
                | TokenKind::NumChildren
                | TokenKind::CustomAttr
                | TokenKind::Unknown
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Table lookup tests ====================

    #[test]
    fn test_classify_structural_tags() {
        assert_eq!(classify("HEAD"), TokenKind::Head);
        assert_eq!(classify("TRLR"), TokenKind::Trlr);
        assert_eq!(classify("INDI"), TokenKind::Indi);
        assert_eq!(classify("FAM"), TokenKind::Fam);
    }

    #[test]
    fn test_classify_interpreted_tags() {
        assert_eq!(classify("DATE"), TokenKind::Date);
        assert_eq!(classify("SEX"), TokenKind::Sex);
        assert_eq!(classify("NOTE"), TokenKind::Note);
        assert_eq!(classify("NCHI"), TokenKind::NumChildren);
    }

    #[test]
    fn test_classify_continuations() {
        assert_eq!(classify("CONT"), TokenKind::Cont);
        assert_eq!(classify("CONC"), TokenKind::Conc);
        assert!(TokenKind::Cont.is_continuation());
        assert!(TokenKind::Conc.is_continuation());
        assert!(!TokenKind::Note.is_continuation());
    }

    #[test]
    fn test_classify_vendor_fields() {
        assert_eq!(classify("_STAT"), TokenKind::CustomAttr);
        assert_eq!(classify("_UID"), TokenKind::CustomAttr);
        assert_eq!(classify("AFN"), TokenKind::CustomAttr);
    }

    // ==================== Unknown tag tests ====================

    #[test]
    fn test_event_tags_are_unknown() {
        assert_eq!(classify("BIRT"), TokenKind::Unknown);
        assert_eq!(classify("MARR"), TokenKind::Unknown);
    }

    #[test]
    fn test_classify_is_case_exact() {
        assert_eq!(classify("date"), TokenKind::Unknown);
        assert_eq!(classify("Date"), TokenKind::Unknown);
        assert_eq!(classify(" DATE"), TokenKind::Unknown);
        assert_eq!(classify("DATE:"), TokenKind::Unknown);
    }

    #[test]
    fn test_classify_empty_and_pointer() {
        assert_eq!(classify(""), TokenKind::Unknown);
        assert_eq!(classify("@I1@"), TokenKind::Unknown);
    }

    // ==================== Display tests ====================

    #[test]
    fn test_as_str_round_trips_table_tags() {
        for tag in ["NAME", "PLAC", "SOUR", "NCHI", "WWW"] {
            assert_eq!(classify(tag).as_str(), tag);
        }
    }

    #[test]
    fn test_derived_kind_names() {
        assert_eq!(TokenKind::Id.to_string(), "ID");
        assert_eq!(TokenKind::GenericEvent.to_string(), "GEVENT");
        assert_eq!(TokenKind::NoteRef.to_string(), "NOTE_REF");
        assert_eq!(TokenKind::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_needs_interpretation() {
        assert!(TokenKind::Date.needs_interpretation());
        assert!(TokenKind::Unknown.needs_interpretation());
        assert!(!TokenKind::Name.needs_interpretation());
        assert!(!TokenKind::Id.needs_interpretation());
    }
}
