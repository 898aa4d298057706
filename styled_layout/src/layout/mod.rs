// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout types.

mod bounds;
mod cursor;
mod data;
mod itemize;
mod line_break;
mod place;

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use smallvec::SmallVec;

use crate::error::Error;
use crate::font::{FontRef, Measurer, MetricsProvider};
use crate::style::{Brush, StyleTable, TextStyle};
use crate::text::CharText;

pub(crate) use data::LayoutData;
pub use data::{BreakReason, Line, RunKind, StyleRun};

/// Horizontal alignment of lines within the wrap width.
///
/// Alignment has no effect when the layout does not wrap.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Alignment {
    /// Align lines to the left edge.
    #[default]
    Left,
    /// Center each line within the wrap width.
    Center,
    /// Align lines to the right edge.
    Right,
}

/// Base direction of the layout.
///
/// Text is always arranged left to right; the orientation is recorded for
/// callers that mirror the result.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// Left to right.
    #[default]
    LeftToRight,
    /// Right to left.
    RightToLeft,
}

/// Granularity of cursor movement.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Movement {
    /// One character.
    Char,
    /// One cluster. Every character forms its own cluster.
    Cluster,
    /// To the next or previous word start.
    Word,
    /// To the next or previous word start.
    WordStart,
    /// To the next or previous word end.
    WordEnd,
}

/// Result of mapping a point to a character offset.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
pub struct HitPosition {
    /// Offset of the character under the point.
    pub offset: usize,
    /// Whether the point lies over the trailing half of the character.
    pub trailing: bool,
}

impl HitPosition {
    /// Offset of the caret position nearest to the point.
    pub fn insertion_offset(&self) -> usize {
        self.offset + usize::from(self.trailing)
    }
}

/// Everything a layout pass depends on.
#[derive(Clone, Debug)]
pub(crate) struct Inputs<B: Brush> {
    pub(crate) text: CharText,
    pub(crate) styles: StyleTable<B>,
    pub(crate) font: Option<FontRef>,
    pub(crate) alignment: Alignment,
    pub(crate) wrap_width: Option<i32>,
    pub(crate) orientation: Orientation,
    pub(crate) indent: i32,
    pub(crate) wrap_indent: i32,
    pub(crate) spacing: i32,
    pub(crate) tabs: Option<SmallVec<[i32; 8]>>,
    pub(crate) justify: bool,
    pub(crate) ascent: Option<i32>,
    pub(crate) descent: Option<i32>,
    pub(crate) segments: Option<SmallVec<[usize; 4]>>,
    pub(crate) segment_chars: Option<SmallVec<[char; 4]>>,
}

impl<B: Brush> Default for Inputs<B> {
    fn default() -> Self {
        Self {
            text: CharText::default(),
            styles: StyleTable::new(0),
            font: None,
            alignment: Alignment::default(),
            wrap_width: None,
            orientation: Orientation::default(),
            indent: 0,
            wrap_indent: 0,
            spacing: 0,
            tabs: None,
            justify: false,
            ascent: None,
            descent: None,
            segments: None,
            segment_chars: None,
        }
    }
}

/// Styled text layout.
///
/// Setters record inputs and discard the cached arrangement when a value
/// actually changes. Queries that need the arrangement borrow a
/// [`MetricsProvider`] and compute it on first use.
///
/// Offsets are character offsets into the text. After [`dispose`](Self::dispose)
/// every operation fails with [`ErrorKind::Disposed`](crate::ErrorKind::Disposed).
#[derive(Clone, Debug)]
pub struct Layout<B: Brush> {
    inputs: Inputs<B>,
    data: Option<LayoutData>,
    disposed: bool,
}

impl<B: Brush> Default for Layout<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stores `value` in `slot`, returning whether it changed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

pub(crate) fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl<B: Brush> Layout<B> {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self {
            inputs: Inputs::default(),
            data: None,
            disposed: false,
        }
    }

    /// Releases the layout. Every later operation fails.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.inputs = Inputs::default();
        self.data = None;
        self.disposed = true;
    }

    /// Returns `true` if the layout has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns `true` if the arrangement is cached and queries will not
    /// measure text again.
    pub fn is_laid_out(&self) -> bool {
        self.data.is_some()
    }

    fn check(&self) -> Result<(), Error> {
        if self.disposed {
            Err(Error::disposed())
        } else {
            Ok(())
        }
    }

    fn invalidate(&mut self) {
        if self.data.take().is_some() {
            log::debug!("layout invalidated");
        }
    }

    /// Runs `update` on the inputs and drops the cache if it reports a change.
    fn update(&mut self, update: impl FnOnce(&mut Inputs<B>) -> bool) -> Result<(), Error> {
        self.check()?;
        if update(&mut self.inputs) {
            self.invalidate();
        }
        Ok(())
    }

    /// Computes the arrangement if needed.
    pub(crate) fn resolve<M: MetricsProvider + ?Sized>(
        &mut self,
        metrics: &M,
    ) -> Result<(&Inputs<B>, &LayoutData), Error> {
        self.check()?;
        let inputs = &self.inputs;
        let data = self.data.get_or_insert_with(|| {
            let mut measurer = Measurer::new(metrics);
            let mut runs =
                itemize::itemize(&inputs.text, &inputs.styles, inputs.segments.as_deref());
            let sentinel = runs.len() - 1;
            for run in &mut runs[..sentinel] {
                inputs.place(run, &mut measurer);
            }
            line_break::break_lines(inputs, runs, &mut measurer)
        });
        Ok((inputs, &*data))
    }

    /// Fails unless `offset` lies within `0..=len`.
    fn check_offset(&self, offset: usize) -> Result<(), Error> {
        let len = self.inputs.text.len();
        if offset > len {
            return Err(Error::out_of_range("offset", offset, len));
        }
        Ok(())
    }

    /// Sets the text, clearing all styles.
    pub fn set_text(&mut self, text: &str) -> Result<(), Error> {
        self.update(|inputs| {
            if inputs.text.as_str() == text {
                return false;
            }
            inputs.text = CharText::new(text);
            inputs.styles = StyleTable::new(inputs.text.len());
            true
        })
    }

    /// Returns the text.
    pub fn text(&self) -> Result<&str, Error> {
        self.check()?;
        Ok(self.inputs.text.as_str())
    }

    /// Sets the font used by runs without a style font.
    ///
    /// When `None`, the provider's default font is used.
    pub fn set_font(&mut self, font: Option<FontRef>) -> Result<(), Error> {
        self.update(|inputs| replace(&mut inputs.font, font))
    }

    /// Returns the layout font.
    pub fn font(&self) -> Result<Option<FontRef>, Error> {
        self.check()?;
        Ok(self.inputs.font)
    }

    /// Sets the alignment of lines within the wrap width.
    pub fn set_alignment(&mut self, alignment: Alignment) -> Result<(), Error> {
        self.update(|inputs| replace(&mut inputs.alignment, alignment))
    }

    /// Returns the alignment.
    pub fn alignment(&self) -> Result<Alignment, Error> {
        self.check()?;
        Ok(self.inputs.alignment)
    }

    /// Sets the wrap width, or disables wrapping with `None`.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// for a width that is not positive.
    pub fn set_width(&mut self, width: Option<i32>) -> Result<(), Error> {
        if let Some(width) = width.filter(|&width| width <= 0) {
            self.check()?;
            return Err(Error::invalid_argument("width", width.into()));
        }
        self.update(|inputs| replace(&mut inputs.wrap_width, width))
    }

    /// Returns the wrap width.
    pub fn width(&self) -> Result<Option<i32>, Error> {
        self.check()?;
        Ok(self.inputs.wrap_width)
    }

    /// Sets the orientation. This does not change the arrangement.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error> {
        self.check()?;
        self.inputs.orientation = orientation;
        Ok(())
    }

    /// Returns the orientation.
    pub fn orientation(&self) -> Result<Orientation, Error> {
        self.check()?;
        Ok(self.inputs.orientation)
    }

    /// Sets the indent of the first line of each paragraph.
    ///
    /// Negative values are ignored.
    pub fn set_indent(&mut self, indent: i32) -> Result<(), Error> {
        self.update(|inputs| indent >= 0 && replace(&mut inputs.indent, indent))
    }

    /// Returns the paragraph indent.
    pub fn indent(&self) -> Result<i32, Error> {
        self.check()?;
        Ok(self.inputs.indent)
    }

    /// Sets the indent of wrapped continuation lines.
    ///
    /// Negative values are ignored.
    pub fn set_wrap_indent(&mut self, wrap_indent: i32) -> Result<(), Error> {
        self.update(|inputs| wrap_indent >= 0 && replace(&mut inputs.wrap_indent, wrap_indent))
    }

    /// Returns the wrap indent.
    pub fn wrap_indent(&self) -> Result<i32, Error> {
        self.check()?;
        Ok(self.inputs.wrap_indent)
    }

    /// Sets the vertical space added after every line.
    pub fn set_spacing(&mut self, spacing: i32) -> Result<(), Error> {
        self.check()?;
        if spacing < 0 {
            return Err(Error::invalid_argument("spacing", spacing.into()));
        }
        self.update(|inputs| replace(&mut inputs.spacing, spacing))
    }

    /// Returns the line spacing.
    pub fn spacing(&self) -> Result<i32, Error> {
        self.check()?;
        Ok(self.inputs.spacing)
    }

    /// Sets the tab stops, in increasing order.
    ///
    /// Past the last stop, the gap between the last two stops repeats (or
    /// the single stop, if there is only one). Without stops, a tab takes
    /// the advance of the tab character.
    pub fn set_tabs(&mut self, tabs: Option<&[i32]>) -> Result<(), Error> {
        if tabs.is_some_and(|tabs| tabs.windows(2).any(|pair| pair[0] >= pair[1])) {
            log::warn!("tab stops are not increasing: {:?}", tabs);
        }
        self.update(|inputs| {
            if inputs.tabs.as_deref() == tabs {
                return false;
            }
            inputs.tabs = tabs.map(SmallVec::from_slice);
            true
        })
    }

    /// Returns the tab stops.
    pub fn tabs(&self) -> Result<Option<&[i32]>, Error> {
        self.check()?;
        Ok(self.inputs.tabs.as_deref())
    }

    /// Sets whether lines are justified.
    ///
    /// The flag is recorded but lines are not stretched.
    pub fn set_justify(&mut self, justify: bool) -> Result<(), Error> {
        self.update(|inputs| replace(&mut inputs.justify, justify))
    }

    /// Returns the justification flag.
    pub fn justify(&self) -> Result<bool, Error> {
        self.check()?;
        Ok(self.inputs.justify)
    }

    /// Sets the minimum ascent of every line, or clears it with `None`.
    pub fn set_ascent(&mut self, ascent: Option<i32>) -> Result<(), Error> {
        self.check()?;
        if let Some(ascent) = ascent.filter(|&ascent| ascent < 0) {
            return Err(Error::invalid_argument("ascent", ascent.into()));
        }
        self.update(|inputs| replace(&mut inputs.ascent, ascent))
    }

    /// Returns the minimum line ascent.
    pub fn ascent(&self) -> Result<Option<i32>, Error> {
        self.check()?;
        Ok(self.inputs.ascent)
    }

    /// Sets the minimum descent of every line, or clears it with `None`.
    pub fn set_descent(&mut self, descent: Option<i32>) -> Result<(), Error> {
        self.check()?;
        if let Some(descent) = descent.filter(|&descent| descent < 0) {
            return Err(Error::invalid_argument("descent", descent.into()));
        }
        self.update(|inputs| replace(&mut inputs.descent, descent))
    }

    /// Returns the minimum line descent.
    pub fn descent(&self) -> Result<Option<i32>, Error> {
        self.check()?;
        Ok(self.inputs.descent)
    }

    /// Sets the segment offsets. Every offset starts a new run.
    pub fn set_segments(&mut self, segments: Option<&[usize]>) -> Result<(), Error> {
        self.update(|inputs| {
            if inputs.segments.as_deref() == segments {
                return false;
            }
            inputs.segments = segments.map(SmallVec::from_slice);
            true
        })
    }

    /// Returns the segment offsets.
    pub fn segments(&self) -> Result<Option<&[usize]>, Error> {
        self.check()?;
        Ok(self.inputs.segments.as_deref())
    }

    /// Sets the characters associated with the segment offsets.
    pub fn set_segment_chars(&mut self, chars: Option<&[char]>) -> Result<(), Error> {
        self.update(|inputs| {
            if inputs.segment_chars.as_deref() == chars {
                return false;
            }
            inputs.segment_chars = chars.map(SmallVec::from_slice);
            true
        })
    }

    /// Returns the segment characters.
    pub fn segment_chars(&self) -> Result<Option<&[char]>, Error> {
        self.check()?;
        Ok(self.inputs.segment_chars.as_deref())
    }

    /// Applies `style` to the characters `start..=end`, or removes styling
    /// with `None`.
    ///
    /// The range is clamped to the text. Nothing happens when `start > end`,
    /// when the text is empty, or when the range already has an equal style.
    pub fn set_style(
        &mut self,
        style: Option<TextStyle<B>>,
        start: usize,
        end: usize,
    ) -> Result<(), Error> {
        self.update(|inputs| {
            let len = inputs.text.len();
            if len == 0 || start > end {
                return false;
            }
            let range = start.min(len - 1)..=end.min(len - 1);
            inputs.styles.set(style, range)
        })
    }

    /// Returns the style of the character at `offset`.
    pub fn style_at(&self, offset: usize) -> Result<Option<&TextStyle<B>>, Error> {
        self.check()?;
        let len = self.inputs.text.len();
        if offset >= len {
            return Err(Error::out_of_range("offset", offset, len.saturating_sub(1)));
        }
        Ok(self.inputs.styles.style_at(offset))
    }

    /// Returns every styled range, inclusive, in text order.
    ///
    /// Parallel to [`styles`](Self::styles).
    pub fn ranges(&self) -> Result<Vec<RangeInclusive<usize>>, Error> {
        self.check()?;
        Ok(self
            .inputs
            .styles
            .styled()
            .map(|(range, _)| range)
            .collect())
    }

    /// Returns the style of every styled range, in text order.
    pub fn styles(&self) -> Result<Vec<&TextStyle<B>>, Error> {
        self.check()?;
        Ok(self
            .inputs
            .styles
            .styled()
            .map(|(_, style)| style)
            .collect())
    }

    /// Returns the runs of the arrangement, followed by an empty run at the
    /// end of the text.
    pub fn runs<M: MetricsProvider + ?Sized>(&mut self, metrics: &M) -> Result<&[StyleRun], Error> {
        let (_, data) = self.resolve(metrics)?;
        Ok(&data.runs)
    }

    /// Returns the lines of the arrangement.
    pub fn lines<M: MetricsProvider + ?Sized>(&mut self, metrics: &M) -> Result<&[Line], Error> {
        let (_, data) = self.resolve(metrics)?;
        Ok(&data.lines)
    }

    /// Returns the number of lines. Empty text has one line.
    pub fn line_count<M: MetricsProvider + ?Sized>(&mut self, metrics: &M) -> Result<usize, Error> {
        Ok(self.lines(metrics)?.len())
    }

    /// Returns the start offset of every line followed by the end of the
    /// last line.
    pub fn line_offsets<M: MetricsProvider + ?Sized>(
        &mut self,
        metrics: &M,
    ) -> Result<Vec<usize>, Error> {
        let lines = self.lines(metrics)?;
        let end = lines.last().map_or(0, |line| line.text_range.end);
        Ok(lines
            .iter()
            .map(|line| line.text_range.start)
            .chain(core::iter::once(end))
            .collect())
    }

    /// Returns the index of the line containing `offset`.
    ///
    /// The end of the text belongs to the last line.
    pub fn line_index<M: MetricsProvider + ?Sized>(
        &mut self,
        offset: usize,
        metrics: &M,
    ) -> Result<usize, Error> {
        self.check()?;
        self.check_offset(offset)?;
        let (_, data) = self.resolve(metrics)?;
        Ok(data.line_for_offset(offset))
    }

    /// Returns the bidi embedding level at `offset`, which is always 0.
    pub fn level(&self, offset: usize) -> Result<u8, Error> {
        self.check()?;
        self.check_offset(offset)?;
        Ok(0)
    }
}
