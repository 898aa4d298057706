// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

/// Classification of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// Ordinary text.
    Text,
    /// A single tab character, sized by the tab stops.
    Tab,
    /// A `\n`, `\r` or `\r\n` sequence that ends its line.
    HardBreak,
    /// Text after which the line was wrapped.
    SoftBreak,
}

/// Reason that a line was terminated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BreakReason {
    /// The line ends with the text.
    #[default]
    None,
    /// The line was wrapped to fit the wrap width.
    Wrap,
    /// The line ends with a hard line break.
    Explicit,
}

/// A contiguous range of text with a single style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRun {
    pub(crate) text_range: Range<usize>,
    /// Index of the style span that covers the run.
    pub(crate) span: Option<usize>,
    pub(crate) kind: RunKind,
    pub(crate) width: i32,
    pub(crate) ascent: i32,
    pub(crate) descent: i32,
}

impl StyleRun {
    pub(crate) fn new(text_range: Range<usize>, span: Option<usize>, kind: RunKind) -> Self {
        Self {
            text_range,
            span,
            kind,
            width: 0,
            ascent: 0,
            descent: 0,
        }
    }

    /// Character range of the run.
    pub fn text_range(&self) -> Range<usize> {
        self.text_range.clone()
    }

    /// Kind of the run.
    pub fn kind(&self) -> RunKind {
        self.kind
    }

    /// Advance of the run.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Ascent of the run, including leading and rise.
    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    /// Descent of the run, after rise.
    pub fn descent(&self) -> i32 {
        self.descent
    }

    pub(crate) fn len(&self) -> usize {
        self.text_range.len()
    }
}

/// A line of laid out text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub(crate) text_range: Range<usize>,
    pub(crate) run_range: Range<usize>,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) ascent: i32,
    pub(crate) descent: i32,
    pub(crate) height: i32,
    pub(crate) indent: i32,
    pub(crate) break_reason: BreakReason,
}

impl Line {
    /// Character range of the line, including any line break characters.
    pub fn text_range(&self) -> Range<usize> {
        self.text_range.clone()
    }

    /// Range of the line's runs within [`Layout::runs`](crate::Layout::runs).
    pub fn run_range(&self) -> Range<usize> {
        self.run_range.clone()
    }

    /// Top of the line.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Sum of the advances of the line's runs.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Largest ascent on the line.
    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    /// Largest descent on the line.
    pub fn descent(&self) -> i32 {
        self.descent
    }

    /// Distance to the top of the next line, `ascent + descent + spacing`.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Horizontal offset of the line, combining indent and alignment.
    pub fn indent(&self) -> i32 {
        self.indent
    }

    /// Why the line ended.
    pub fn break_reason(&self) -> BreakReason {
        self.break_reason
    }
}

/// Cached result of a layout pass.
#[derive(Clone, Debug, Default)]
pub(crate) struct LayoutData {
    pub(crate) runs: Vec<StyleRun>,
    pub(crate) lines: Vec<Line>,
    /// Bottom of the last line.
    pub(crate) height: i32,
}

impl LayoutData {
    pub(crate) fn line_runs(&self, line: &Line) -> &[StyleRun] {
        &self.runs[line.run_range.clone()]
    }

    /// Index of the line containing `offset`, or the last line.
    pub(crate) fn line_for_offset(&self, offset: usize) -> usize {
        let index = self
            .lines
            .partition_point(|line| line.text_range.end <= offset);
        index.min(self.lines.len().saturating_sub(1))
    }

    /// Index of the first line whose bottom lies below `y`, or the last line.
    pub(crate) fn line_for_y(&self, y: i32) -> usize {
        let index = self
            .lines
            .partition_point(|line| line.y + line.height <= y);
        index.min(self.lines.len().saturating_sub(1))
    }
}
