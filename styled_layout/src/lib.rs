// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text layout.
//!
//! A [`Layout`] holds a string, a table of per-range [`TextStyle`]s and a set
//! of layout constraints (wrap width, alignment, tab stops, indents, line
//! spacing). On demand it arranges the text into runs and lines using a
//! [`MetricsProvider`] for measurement, and answers cursor and selection
//! queries against that arrangement: offset to point, point to offset, range
//! bounds and word-wise movement. [`Layout::draw`] paints the result onto any
//! [`DrawSurface`].
//!
//! The arrangement is computed lazily and cached until an input changes.
//! Text is laid out left to right with per-character measurement; there is no
//! bidi reordering and no glyph shaping.
//!
//! ## Example
//!
//! ```
//! use styled_layout::{FontMetrics, FontRef, Layout, MetricsProvider};
//!
//! struct Monospace;
//!
//! impl MetricsProvider for Monospace {
//!     fn default_font(&self) -> FontRef {
//!         FontRef::new(0)
//!     }
//!     fn font_metrics(&self, _font: FontRef) -> FontMetrics {
//!         FontMetrics { ascent: 8, descent: 2, leading: 0 }
//!     }
//!     fn advance(&self, _font: FontRef, text: &str) -> i32 {
//!         10 * text.chars().count() as i32
//!     }
//! }
//!
//! let mut layout: Layout<()> = Layout::new();
//! layout.set_text("aaa bbb ccc").unwrap();
//! layout.set_width(Some(35)).unwrap();
//! assert_eq!(layout.line_count(&Monospace).unwrap(), 3);
//! assert_eq!(layout.line_offsets(&Monospace).unwrap(), [0, 4, 8, 11]);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards to `log/std`.

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
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod error;
mod font;
mod geometry;
mod render;
mod text;

pub mod layout;
pub mod style;

pub use crate::error::{Error, ErrorKind};
pub use crate::font::{Extent, FontMetrics, FontRef, MetricsProvider};
pub use crate::geometry::{Point, Rect};
pub use crate::layout::{
    Alignment, BreakReason, HitPosition, Layout, Line, Movement, Orientation, RunKind, StyleRun,
};
pub use crate::render::{DrawOptions, DrawSurface, LineSelection, Selection};
pub use crate::style::{Brush, GlyphMetrics, TextStyle};
