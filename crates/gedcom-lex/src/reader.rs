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

//! Read-ahead GEDCOM line reader.
//!
//! Physical lines are split into level, tag and value, classified, and kept
//! in a small look-ahead buffer. CONT and CONC lines never leave the reader:
//! they are folded into the newest buffered line, which is why that line must
//! still be in the buffer when its continuations arrive.
//!
//! Malformed physical lines (non-numeric level, missing tag, over-long) are
//! dropped. The only errors surfaced to the caller are I/O errors from the
//! underlying stream.

use crate::config::ReaderConfig;
use crate::error::LexResult;
use crate::interpret::LineInterpreter;
use crate::line::{GedLine, RawLine};
use crate::tables::TagTables;
use crate::token::{classify, TokenKind};
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read};
use tracing::{debug, trace};

const BOM: char = '\u{feff}';

/// Counters for one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderStats {
    /// Physical lines read, blank lines included.
    pub physical_lines: usize,
    /// Logical lines handed to the caller.
    pub logical_lines: usize,
    /// Physical lines dropped as malformed, over-long or orphaned.
    pub dropped_lines: usize,
    /// CONT/CONC lines folded into a predecessor.
    pub folded_lines: usize,
}

/// Pull-based GEDCOM reader producing one logical line per call.
///
/// # Examples
///
/// ```rust
/// use gedcom_lex::{LineReader, TokenKind};
/// use std::io::Cursor;
///
/// let input = "0 @N1@ NOTE\n1 CONC First words\n1 CONT second line\n0 TRLR\n";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// let note = reader.next_logical_line().unwrap().unwrap();
/// assert_eq!(note.token, TokenKind::Id);
/// assert_eq!(note.tag, "N1");
/// assert_eq!(note.value, "NOTE First words\nsecond line");
///
/// let trailer = reader.next_logical_line().unwrap().unwrap();
/// assert_eq!(trailer.token, TokenKind::Trlr);
/// assert!(reader.next_logical_line().unwrap().is_none());
///
/// assert_eq!(reader.stats().folded_lines, 2);
/// ```
///
/// The reader is also an iterator over `LexResult<GedLine>`:
///
/// ```rust
/// use gedcom_lex::LineReader;
/// use std::io::Cursor;
///
/// let reader = LineReader::new(Cursor::new("0 HEAD\n1 CHAR UTF-8\n0 TRLR\n"));
/// let levels: Vec<u32> = reader.map(|line| line.unwrap().level).collect();
/// assert_eq!(levels, vec![0, 1, 0]);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    config: ReaderConfig,
    interpreter: LineInterpreter,
    /// Newest line at the front, next line to hand out at the back.
    buffer: VecDeque<RawLine>,
    /// Bytes of the current physical line, capped just past `max_line_length`.
    chunk: Vec<u8>,
    /// The last line ended in CR; a LF right after it belongs to that line.
    skip_lf: bool,
    line_number: usize,
    /// Type of the record the lines being handed out belong to.
    record: String,
    eof: bool,
    stats: ReaderStats,
}

impl<R: Read> LineReader<R> {
    /// Reader with the default configuration and standard tag tables.
    pub fn new(reader: R) -> Self {
        Self::build(reader, ReaderConfig::default(), LineInterpreter::standard())
    }

    /// Reader with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidConfig`](crate::LexError::InvalidConfig)
    /// if the configuration does not validate.
    pub fn with_config(reader: R, config: ReaderConfig) -> LexResult<Self> {
        config.validate()?;
        Ok(Self::build(reader, config, LineInterpreter::standard()))
    }

    /// Reader resolving event and attribute tags through `tables`.
    pub fn with_tables(reader: R, tables: TagTables) -> Self {
        Self::build(reader, ReaderConfig::default(), LineInterpreter::new(tables))
    }

    /// Reader with both a custom configuration and a custom interpreter.
    pub fn with_interpreter(
        reader: R,
        config: ReaderConfig,
        interpreter: LineInterpreter,
    ) -> LexResult<Self> {
        config.validate()?;
        Ok(Self::build(reader, config, interpreter))
    }

    fn build(reader: R, config: ReaderConfig, interpreter: LineInterpreter) -> Self {
        Self {
            reader: BufReader::with_capacity(config.buffer_size, reader),
            buffer: VecDeque::with_capacity(config.lookahead + 1),
            config,
            interpreter,
            chunk: Vec::new(),
            skip_lf: false,
            line_number: 0,
            record: String::new(),
            eof: false,
            stats: ReaderStats::default(),
        }
    }

    /// Number of physical lines read so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    #[inline]
    pub fn stats(&self) -> ReaderStats {
        self.stats
    }

    #[inline]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Next fully folded and interpreted logical line, or `None` at end of
    /// input.
    pub fn next_logical_line(&mut self) -> LexResult<Option<GedLine>> {
        self.refill()?;
        match self.buffer.pop_back() {
            Some(raw) => {
                self.stats.logical_lines += 1;
                if raw.level == 0 {
                    self.record = record_type(&raw).to_string();
                }
                Ok(Some(self.interpreter.interpret_in(raw, &self.record)))
            }
            None => Ok(None),
        }
    }

    fn refill(&mut self) -> LexResult<()> {
        while self.buffer.len() < self.config.lookahead && !self.eof {
            match self.next_physical()? {
                Some((line_number, text, length)) => self.accept(line_number, &text, length),
                None => self.eof = true,
            }
        }
        Ok(())
    }

    /// Next physical line as (line number, text, length in bytes).
    ///
    /// LF, CRLF and bare CR all end a line. At most `max_line_length` bytes
    /// (plus a BOM and one byte of overflow) are kept; the rest of an
    /// over-long line is skipped without being buffered.
    fn next_physical(&mut self) -> LexResult<Option<(usize, String, usize)>> {
        if self.skip_lf {
            self.skip_lf = false;
            if self.reader.fill_buf()?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        let keep = self.config.max_line_length + BOM.len_utf8() + 1;
        self.chunk.clear();
        let mut length = 0;
        let mut terminated = false;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            let end = available.iter().position(|&b| b == b'\n' || b == b'\r');
            let used = end.unwrap_or(available.len());
            let room = keep.saturating_sub(self.chunk.len());
            self.chunk.extend_from_slice(&available[..used.min(room)]);
            length += used;
            match end {
                Some(at) => {
                    self.skip_lf = available[at] == b'\r';
                    self.reader.consume(used + 1);
                    terminated = true;
                    break;
                }
                None => self.reader.consume(used),
            }
        }
        if length == 0 && !terminated {
            return Ok(None);
        }

        self.line_number += 1;
        let decoded = String::from_utf8_lossy(&self.chunk);
        let mut text: &str = &decoded;
        if self.line_number == 1 {
            if let Some(rest) = text.strip_prefix(BOM) {
                text = rest;
                length -= BOM.len_utf8();
            }
        }
        Ok(Some((self.line_number, text.to_string(), length)))
    }

    fn accept(&mut self, line_number: usize, text: &str, length: usize) {
        self.stats.physical_lines += 1;

        if length > self.config.max_line_length {
            debug!(
                line = line_number,
                length,
                max = self.config.max_line_length,
                "over-long line dropped"
            );
            self.stats.dropped_lines += 1;
            return;
        }
        if text.trim().is_empty() {
            return;
        }

        let Some(raw) = split_line(line_number, text) else {
            debug!(line = line_number, text, "malformed line dropped");
            self.stats.dropped_lines += 1;
            return;
        };

        if !raw.token.is_continuation() {
            self.buffer.push_front(raw);
            return;
        }

        match self.buffer.front_mut() {
            Some(prev) => {
                trace!(line = line_number, into = prev.line_number, token = %raw.token, "fold");
                fold(prev, &raw);
                self.stats.folded_lines += 1;
            }
            None => {
                debug!(line = line_number, token = %raw.token, "continuation without predecessor dropped");
                self.stats.dropped_lines += 1;
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = LexResult<GedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_logical_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Split one physical line into a classified [`RawLine`].
///
/// Returns `None` for anything that is not `<level> <tag> [value]` with a
/// purely numeric level.
fn split_line(line_number: usize, text: &str) -> Option<RawLine> {
    let (level_text, rest) = text.trim_start().split_once(' ')?;
    if level_text.is_empty() || !level_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let level: u32 = level_text.parse().ok()?;

    let rest = rest.trim_start_matches(' ');
    let (tag, value) = rest.split_once(' ').unwrap_or((rest, ""));
    if tag.is_empty() {
        return None;
    }

    let line = match xref_id(level, tag) {
        Some(id) => RawLine {
            level,
            token: TokenKind::Id,
            tag: id.to_string(),
            value: value.trim().to_string(),
            line_number,
        },
        None => RawLine {
            level,
            token: classify(tag),
            tag: tag.to_string(),
            value: value.to_string(),
            line_number,
        },
    };
    Some(line)
}

/// `INDI` for `0 @I1@ INDI`, `HEAD` for `0 HEAD`.
fn record_type(raw: &RawLine) -> &str {
    if raw.token == TokenKind::Id {
        raw.value.split(' ').next().unwrap_or_default()
    } else {
        &raw.tag
    }
}

/// Record id of a level 0 `@X@` declaration.
fn xref_id(level: u32, tag: &str) -> Option<&str> {
    if level != 0 || tag.len() <= 2 {
        return None;
    }
    tag.strip_prefix('@')?.strip_suffix('@')
}

fn fold(prev: &mut RawLine, continuation: &RawLine) {
    match continuation.token {
        TokenKind::Cont => prev.value.push('\n'),
        _ => {
            if prev.payload().is_empty() {
                prev.value.push(' ');
            }
        }
    }
    prev.value.push_str(&continuation.value);
}
