// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run measurement.

use core::ops::Range;

use super::data::{RunKind, StyleRun};
use super::{to_i32, Inputs};
use crate::font::{FontRef, Measurer, MetricsProvider};
use crate::style::{Brush, TextStyle};

impl<B: Brush> Inputs<B> {
    pub(crate) fn run_style(&self, run: &StyleRun) -> Option<&TextStyle<B>> {
        self.styles.span_style(run.span?)
    }

    /// Font used for `run`: the style's font, the layout font, then the
    /// provider default.
    pub(crate) fn run_font<M: MetricsProvider + ?Sized>(
        &self,
        run: &StyleRun,
        measurer: &Measurer<'_, M>,
    ) -> FontRef {
        self.run_style(run)
            .and_then(|style| style.font)
            .or(self.font)
            .unwrap_or_else(|| measurer.default_font())
    }

    /// Advance of the characters in `range`, which must lie within `run`.
    pub(crate) fn advance_of<M: MetricsProvider + ?Sized>(
        &self,
        run: &StyleRun,
        range: Range<usize>,
        measurer: &mut Measurer<'_, M>,
    ) -> i32 {
        if let Some(metrics) = self.run_style(run).and_then(|style| style.metrics) {
            return metrics.width.saturating_mul(to_i32(range.len()));
        }
        let font = self.run_font(run, measurer);
        measurer.advance(font, self.text.slice(range))
    }

    /// Advance of the single character at `offset` within `run`.
    pub(crate) fn char_advance<M: MetricsProvider + ?Sized>(
        &self,
        run: &StyleRun,
        offset: usize,
        measurer: &mut Measurer<'_, M>,
    ) -> i32 {
        if let Some(metrics) = self.run_style(run).and_then(|style| style.metrics) {
            return metrics.width;
        }
        let font = self.run_font(run, measurer);
        match self.text.char_at(offset) {
            Some(ch) => measurer.char_advance(font, ch),
            None => 0,
        }
    }

    /// Measures `run`, setting its width, ascent and descent.
    ///
    /// Tabs and hard breaks receive zero width; tab widths are assigned while
    /// breaking lines.
    pub(crate) fn place<M: MetricsProvider + ?Sized>(
        &self,
        run: &mut StyleRun,
        measurer: &mut Measurer<'_, M>,
    ) {
        let measured = !matches!(run.kind, RunKind::Tab | RunKind::HardBreak);
        let style = self.run_style(run);
        if let Some(metrics) = style.and_then(|style| style.metrics) {
            run.ascent = metrics.ascent;
            run.descent = metrics.descent;
        } else {
            let font = self.run_font(run, measurer);
            let metrics = measurer.font_metrics(font);
            run.ascent = metrics.ascent + metrics.leading;
            run.descent = metrics.descent;
        }
        run.width = if measured {
            self.advance_of(run, run.text_range.clone(), measurer)
        } else {
            0
        };
        if let Some(style) = style {
            run.ascent += style.rise;
            run.descent -= style.rise;
        }
    }
}
