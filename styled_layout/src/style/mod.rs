// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich styling support.

mod brush;
mod table;

pub use brush::Brush;

pub(crate) use table::StyleTable;

use crate::font::FontRef;

/// Fixed metrics that replace measurement for every character of a run.
///
/// Used to reserve space for embedded objects that are not text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphMetrics {
    /// Ascent of each placeholder character.
    pub ascent: i32,
    /// Descent of each placeholder character.
    pub descent: i32,
    /// Advance of each placeholder character.
    pub width: i32,
}

impl GlyphMetrics {
    /// Creates glyph metrics from an ascent, a descent and a width.
    pub const fn new(ascent: i32, descent: i32, width: i32) -> Self {
        Self {
            ascent,
            descent,
            width,
        }
    }
}

/// Style applied to a range of text.
///
/// Styles are compared by value: applying a style equal to the one already
/// covering a range does not disturb the layout.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TextStyle<B: Brush> {
    /// Font for the range. When `None` the layout font is used, and failing
    /// that the provider's default font.
    pub font: Option<FontRef>,
    /// Brush for the text. When `None` the drawing foreground is used.
    pub foreground: Option<B>,
    /// Brush filling the box behind the text.
    pub background: Option<B>,
    /// Underline decoration.
    pub underline: bool,
    /// Strikethrough decoration.
    pub strikeout: bool,
    /// Baseline shift; positive values raise the text.
    pub rise: i32,
    /// Placeholder metrics replacing measurement of the range.
    pub metrics: Option<GlyphMetrics>,
}

impl<B: Brush> TextStyle<B> {
    /// Creates a style with the given font and brushes.
    pub fn new(font: Option<FontRef>, foreground: Option<B>, background: Option<B>) -> Self {
        Self {
            font,
            foreground,
            background,
            ..Self::default()
        }
    }
}
