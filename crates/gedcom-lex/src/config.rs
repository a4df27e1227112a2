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

//! Line reader configuration.

use crate::error::{LexError, LexResult};

/// Smallest look-ahead that still lets CONT/CONC fold into their predecessor
/// before the predecessor is handed out.
pub const MIN_LOOKAHEAD: usize = 2;

/// Configuration options for the [`LineReader`](crate::LineReader).
///
/// # Examples
///
/// ## Default Configuration
///
/// ```rust
/// use gedcom_lex::ReaderConfig;
///
/// let config = ReaderConfig::default();
/// assert_eq!(config.lookahead, 5);
/// assert_eq!(config.max_line_length, 1_000_000);
/// assert_eq!(config.buffer_size, 64 * 1024);
/// ```
///
/// ## Tight Limits for Untrusted Input
///
/// ```rust
/// use gedcom_lex::ReaderConfig;
///
/// let config = ReaderConfig {
///     max_line_length: 16 * 1024,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Minimum number of logical lines kept buffered ahead of the caller.
    ///
    /// Must be at least [`MIN_LOOKAHEAD`].
    ///
    /// Default: 5
    pub lookahead: usize,

    /// Maximum physical line length in bytes, excluding the line terminator.
    ///
    /// Longer lines are dropped like any other malformed line. The reader
    /// keeps at most this many bytes of a line in memory and skips the rest.
    ///
    /// Default: 1,000,000 bytes
    pub max_line_length: usize,

    /// Buffer size for reading input.
    ///
    /// Default: 64KB
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            lookahead: 5,
            max_line_length: 1_000_000,
            buffer_size: 64 * 1024,
        }
    }
}

impl ReaderConfig {
    /// Check the configuration for values the reader cannot work with.
    pub fn validate(&self) -> LexResult<()> {
        if self.lookahead < MIN_LOOKAHEAD {
            return Err(LexError::invalid_config(format!(
                "lookahead must be at least {}, got {}",
                MIN_LOOKAHEAD, self.lookahead
            )));
        }
        if self.buffer_size == 0 {
            return Err(LexError::invalid_config("buffer_size must be non-zero"));
        }
        if self.max_line_length == 0 {
            return Err(LexError::invalid_config("max_line_length must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default tests ====================

    #[test]
    fn test_default_lookahead() {
        assert_eq!(ReaderConfig::default().lookahead, 5);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ReaderConfig::default().validate().is_ok());
    }

    // ==================== Validation tests ====================

    #[test]
    fn test_lookahead_too_small() {
        let config = ReaderConfig {
            lookahead: 1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("lookahead"));
    }

    #[test]
    fn test_minimum_lookahead_accepted() {
        let config = ReaderConfig {
            lookahead: MIN_LOOKAHEAD,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let config = ReaderConfig {
            buffer_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LexError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_line_length_rejected() {
        let config = ReaderConfig {
            max_line_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
