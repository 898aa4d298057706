// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Range, RangeInclusive};

use super::{Brush, TextStyle};

#[derive(Clone, Debug, PartialEq)]
struct StyleSpan<B: Brush> {
    start: usize,
    style: Option<TextStyle<B>>,
}

/// Ordered style spans covering `[0, len)` without gaps.
///
/// Each span extends to the start of the next one, the last to `len`.
/// Unstyled text is covered by spans whose style is `None`. Adjacent spans
/// never carry equal styles.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StyleTable<B: Brush> {
    spans: Vec<StyleSpan<B>>,
    len: usize,
}

impl<B: Brush> StyleTable<B> {
    /// Creates an unstyled table over `len` characters.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            spans: vec![StyleSpan {
                start: 0,
                style: None,
            }],
            len,
        }
    }

    pub(crate) fn span_count(&self) -> usize {
        self.spans.len()
    }

    pub(crate) fn span_range(&self, index: usize) -> Range<usize> {
        self.spans[index].start..self.span_end(index)
    }

    pub(crate) fn span_style(&self, index: usize) -> Option<&TextStyle<B>> {
        self.spans.get(index)?.style.as_ref()
    }

    fn span_end(&self, index: usize) -> usize {
        self.spans
            .get(index + 1)
            .map_or(self.len, |span| span.start)
    }

    /// Index of the span containing `offset`.
    pub(crate) fn index_at(&self, offset: usize) -> usize {
        self.spans
            .partition_point(|span| span.start <= offset)
            .saturating_sub(1)
    }

    pub(crate) fn style_at(&self, offset: usize) -> Option<&TextStyle<B>> {
        self.span_style(self.index_at(offset))
    }

    /// Applies `style` to the inclusive character range, which must lie
    /// within the text.
    ///
    /// Returns `false` without touching the table when the range already
    /// carries an equal style.
    pub(crate) fn set(
        &mut self,
        style: Option<TextStyle<B>>,
        range: RangeInclusive<usize>,
    ) -> bool {
        let start = *range.start();
        let end = *range.end() + 1;
        let first = self.index_at(start);
        if self.spans[first].style == style && self.span_end(first) >= end {
            return false;
        }
        let last = self.index_at(end - 1);
        let tail = (end < self.span_end(last)).then(|| StyleSpan {
            start: end,
            style: self.spans[last].style.clone(),
        });
        let from = if self.spans[first].start < start {
            first + 1
        } else {
            first
        };
        let head = StyleSpan { start, style };
        self.spans
            .splice(from..last + 1, core::iter::once(head).chain(tail));
        self.spans.dedup_by(|next, prev| next.style == prev.style);
        true
    }

    /// Every styled range with its style, in text order.
    pub(crate) fn styled(
        &self,
    ) -> impl Iterator<Item = (RangeInclusive<usize>, &TextStyle<B>)> + '_ {
        self.spans.iter().enumerate().filter_map(|(index, span)| {
            let style = span.style.as_ref()?;
            let end = self.span_end(index);
            (end > span.start).then(|| (span.start..=end - 1, style))
        })
    }
}
