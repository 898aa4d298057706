// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character indexed text storage.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

/// Text addressed by character offset.
///
/// Keeps the byte offset of every character so that character ranges can be
/// sliced in constant time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CharText {
    text: String,
    /// Byte offset of each character, followed by `text.len()`.
    boundaries: Vec<usize>,
}

impl Default for CharText {
    fn default() -> Self {
        Self::new("")
    }
}

impl CharText {
    pub(crate) fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self {
            text: text.into(),
            boundaries,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters.
    pub(crate) fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn char_at(&self, index: usize) -> Option<char> {
        let start = *self.boundaries.get(index)?;
        self.text.get(start..)?.chars().next()
    }

    /// Returns the characters in `range`, or an empty string when the range
    /// does not lie within the text.
    pub(crate) fn slice(&self, range: Range<usize>) -> &str {
        let (Some(&start), Some(&end)) = (
            self.boundaries.get(range.start),
            self.boundaries.get(range.end),
        ) else {
            return "";
        };
        self.text.get(start..end).unwrap_or_default()
    }

    pub(crate) fn chars(&self, range: Range<usize>) -> core::str::Chars<'_> {
        self.slice(range).chars()
    }
}

/// Characters that a wrapped line may break after.
pub(crate) fn is_break_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Whitespace that is left hanging at the end of a wrapped line.
///
/// Non-breaking spaces are excluded so that they travel with the word that
/// follows them.
pub(crate) fn is_trailing_space(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

/// The letter-or-digit class used for word movement.
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}
