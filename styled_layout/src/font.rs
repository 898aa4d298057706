// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font handles and the measurement interface.

use hashbrown::HashMap;

/// Opaque handle to a font known to a [`MetricsProvider`].
///
/// The layout never interprets the value; it only hands it back to the
/// provider that issued it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontRef(u32);

impl FontRef {
    /// Creates a handle from a provider defined identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the provider defined identifier.
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Vertical metrics of a font at its resolved size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the top of the line box to the baseline.
    pub ascent: i32,
    /// Distance from the baseline to the bottom of the line box.
    pub descent: i32,
    /// Extra space added above the ascent.
    pub leading: i32,
}

impl FontMetrics {
    /// Total height, `ascent + descent + leading`.
    pub const fn height(&self) -> i32 {
        self.ascent + self.descent + self.leading
    }
}

/// Result of measuring a string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    /// Horizontal advance of the string.
    pub advance: i32,
    /// Ascent of the font including leading.
    pub ascent: i32,
    /// Descent of the font.
    pub descent: i32,
}

/// Source of font measurements.
///
/// The layout borrows a provider for the duration of a single query and never
/// retains it.
pub trait MetricsProvider {
    /// Font used for runs that carry no font of their own when the layout has
    /// no font either.
    fn default_font(&self) -> FontRef;

    /// Vertical metrics of `font`.
    fn font_metrics(&self, font: FontRef) -> FontMetrics;

    /// Horizontal advance of `text` set in `font`.
    fn advance(&self, font: FontRef, text: &str) -> i32;

    /// Measures `text` set in `font`.
    fn measure(&self, font: FontRef, text: &str) -> Extent {
        let metrics = self.font_metrics(font);
        Extent {
            advance: self.advance(font, text),
            ascent: metrics.ascent + metrics.leading,
            descent: metrics.descent,
        }
    }

    /// Vertical metrics of [`default_font`](Self::default_font).
    fn default_font_metrics(&self) -> FontMetrics {
        self.font_metrics(self.default_font())
    }
}

/// A provider wrapper that memoizes character advances and font metrics for
/// the duration of one layout pass or query.
pub(crate) struct Measurer<'a, M: ?Sized> {
    provider: &'a M,
    advances: HashMap<(FontRef, char), i32>,
    metrics: HashMap<FontRef, FontMetrics>,
}

impl<'a, M: MetricsProvider + ?Sized> Measurer<'a, M> {
    pub(crate) fn new(provider: &'a M) -> Self {
        Self {
            provider,
            advances: HashMap::new(),
            metrics: HashMap::new(),
        }
    }

    pub(crate) fn default_font(&self) -> FontRef {
        self.provider.default_font()
    }

    pub(crate) fn font_metrics(&mut self, font: FontRef) -> FontMetrics {
        let provider = self.provider;
        *self
            .metrics
            .entry(font)
            .or_insert_with(|| provider.font_metrics(font))
    }

    pub(crate) fn advance(&self, font: FontRef, text: &str) -> i32 {
        if text.is_empty() {
            return 0;
        }
        self.provider.advance(font, text)
    }

    pub(crate) fn char_advance(&mut self, font: FontRef, ch: char) -> i32 {
        let provider = self.provider;
        *self.advances.entry((font, ch)).or_insert_with(|| {
            let mut buf = [0_u8; 4];
            provider.advance(font, ch.encode_utf8(&mut buf))
        })
    }
}

impl<M: ?Sized> core::fmt::Debug for Measurer<'_, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Measurer")
            .field("advances", &self.advances.len())
            .field("metrics", &self.metrics.len())
            .finish_non_exhaustive()
    }
}
