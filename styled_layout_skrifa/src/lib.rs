// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`MetricsProvider`] backed by font files read with [Skrifa].
//!
//! Register each font face once with a pixel size; the returned
//! [`FontRef`]s can then be used in [`TextStyle`](styled_layout::TextStyle)s
//! or as the layout font. Advances are the sum of the nominal glyph advances
//! of each character, rounded to whole pixels. There is no shaping.
//!
//! [Skrifa]: https://docs.rs/skrifa

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::fmt;

use linebender_resource_handle::Blob;
use skrifa::instance::{LocationRef, Size};
use skrifa::raw::ReadError;
use skrifa::MetadataProvider;
use styled_layout::{FontMetrics, FontRef, MetricsProvider};

/// Errors raised while registering a font.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// Kinds of [`Error`].
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font data could not be parsed.
    Read(ReadError),
    /// The pixel size is not a positive finite number.
    InvalidSize,
}

impl Error {
    /// Returns the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Read(err) => write!(f, "failed to read font: {err}"),
            ErrorKind::InvalidSize => f.write_str("font size must be positive"),
        }
    }
}

impl core::error::Error for Error {}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        Self {
            kind: ErrorKind::Read(err),
        }
    }
}

#[derive(Clone, Debug)]
struct Face {
    blob: Blob<u8>,
    index: u32,
    size: f32,
}

impl Face {
    fn font(&self) -> Option<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(self.blob.data(), self.index).ok()
    }
}

/// Font metrics read from registered font faces.
///
/// Font handles are indices into the registration order. The first face
/// registered is the default font.
#[derive(Clone, Debug)]
pub struct SkrifaMetrics {
    faces: Vec<Face>,
}

impl SkrifaMetrics {
    /// Creates a provider whose default font is face `index` of `blob` at
    /// `size` pixels per em.
    pub fn new(blob: Blob<u8>, index: u32, size: f32) -> Result<Self, Error> {
        let mut metrics = Self { faces: Vec::new() };
        metrics.register(blob, index, size)?;
        Ok(metrics)
    }

    /// Registers face `index` of `blob` at `size` pixels per em.
    pub fn register(&mut self, blob: Blob<u8>, index: u32, size: f32) -> Result<FontRef, Error> {
        if !(size.is_finite() && size > 0.0) {
            return Err(Error {
                kind: ErrorKind::InvalidSize,
            });
        }
        skrifa::FontRef::from_index(blob.data(), index)?;
        let id = u32::try_from(self.faces.len()).unwrap_or(u32::MAX);
        self.faces.push(Face { blob, index, size });
        Ok(FontRef::new(id))
    }

    /// Returns the number of registered faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if no face is registered.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    fn face(&self, font: FontRef) -> Option<&Face> {
        let face = usize::try_from(font.id())
            .ok()
            .and_then(|id| self.faces.get(id));
        if face.is_none() {
            log::warn!("unknown font {font:?}, using the default font");
        }
        face.or_else(|| self.faces.first())
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "font units scaled to pixels fit in i32"
)]
fn to_pixels(value: f32) -> i32 {
    value.round() as i32
}

impl MetricsProvider for SkrifaMetrics {
    fn default_font(&self) -> FontRef {
        FontRef::new(0)
    }

    fn font_metrics(&self, font: FontRef) -> FontMetrics {
        let Some((face, font)) = self.face(font).and_then(|face| Some((face, face.font()?))) else {
            return FontMetrics::default();
        };
        let metrics = font.metrics(Size::new(face.size), LocationRef::default());
        FontMetrics {
            ascent: to_pixels(metrics.ascent),
            descent: to_pixels(-metrics.descent),
            leading: to_pixels(metrics.leading),
        }
    }

    fn advance(&self, font: FontRef, text: &str) -> i32 {
        let Some((face, font)) = self.face(font).and_then(|face| Some((face, face.font()?))) else {
            return 0;
        };
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(Size::new(face.size), LocationRef::default());
        let advance: f32 = text
            .chars()
            .map(|ch| {
                let glyph = charmap.map(ch).unwrap_or_default();
                glyph_metrics.advance_width(glyph).unwrap_or_default()
            })
            .sum();
        to_pixels(advance)
    }
}
