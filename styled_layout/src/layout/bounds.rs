// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::Layout;
use crate::error::Error;
use crate::font::{FontMetrics, Measurer, MetricsProvider};
use crate::geometry::Rect;
use crate::style::Brush;

impl<B: Brush> Layout<B> {
    /// Returns the extent of the whole layout.
    ///
    /// The width is the wrap width when wrapping, otherwise the widest line
    /// including its indent. The height includes the spacing after the last
    /// line.
    pub fn bounds<M: MetricsProvider + ?Sized>(&mut self, metrics: &M) -> Result<Rect, Error> {
        let (inputs, data) = self.resolve(metrics)?;
        let width = match inputs.wrap_width {
            Some(width) => width,
            None => data
                .lines
                .iter()
                .map(|line| line.width + line.indent)
                .max()
                .unwrap_or(0),
        };
        Ok(Rect::new(0, 0, width, data.height))
    }

    /// Returns the smallest rectangle covering the characters `start..=end`.
    ///
    /// Offsets are clamped to the text. A range spanning several lines
    /// covers the widest of them from `x = 0`. Empty text or `start > end`
    /// yields an empty rectangle.
    pub fn range_bounds<M: MetricsProvider + ?Sized>(
        &mut self,
        start: usize,
        end: usize,
        metrics: &M,
    ) -> Result<Rect, Error> {
        self.check()?;
        let len = self.inputs.text.len();
        if len == 0 || start > end {
            return Ok(Rect::default());
        }
        let start = start.min(len - 1);
        let end = end.min(len - 1);
        let (inputs, data) = self.resolve(metrics)?;
        let first = data.line_for_offset(start);
        let last = data.line_for_offset(end);
        let y = data.lines[first].y;
        let bottom = data.lines[last].y + data.lines[last].height;
        let height = bottom - y - inputs.spacing;
        if first == last {
            let mut measurer = Measurer::new(metrics);
            let x = inputs.location(data, start, false, &mut measurer).x;
            let right = inputs.location(data, end, true, &mut measurer).x;
            Ok(Rect::new(x, y, right - x, height))
        } else {
            let width = data.lines[first..=last]
                .iter()
                .map(|line| line.width)
                .max()
                .unwrap_or(0);
            Ok(Rect::new(0, y, width, height))
        }
    }

    /// Returns the extent of line `index`, excluding line spacing.
    pub fn line_bounds<M: MetricsProvider + ?Sized>(
        &mut self,
        index: usize,
        metrics: &M,
    ) -> Result<Rect, Error> {
        let (inputs, data) = self.resolve(metrics)?;
        let count = data.lines.len();
        let line = data
            .lines
            .get(index)
            .ok_or_else(|| Error::out_of_range("line", index, count - 1))?;
        Ok(Rect::new(
            line.indent,
            line.y,
            line.width,
            line.height - inputs.spacing,
        ))
    }

    /// Returns the font metrics of line `index`.
    ///
    /// Combines the layout font, the ascent and descent minimums, and the
    /// font or glyph metrics of every styled run on the line. Leading is
    /// not included.
    pub fn line_metrics<M: MetricsProvider + ?Sized>(
        &mut self,
        index: usize,
        metrics: &M,
    ) -> Result<FontMetrics, Error> {
        let (inputs, data) = self.resolve(metrics)?;
        let count = data.lines.len();
        let line = data
            .lines
            .get(index)
            .ok_or_else(|| Error::out_of_range("line", index, count - 1))?;
        let mut measurer = Measurer::new(metrics);
        let font = inputs.font.unwrap_or_else(|| measurer.default_font());
        let base = measurer.font_metrics(font);
        let mut ascent = base.ascent.max(inputs.ascent.unwrap_or(0));
        let mut descent = base.descent.max(inputs.descent.unwrap_or(0));
        if !inputs.text.is_empty() {
            for run in data.line_runs(line) {
                let Some(style) = inputs.run_style(run) else {
                    continue;
                };
                let (run_ascent, run_descent) = if let Some(glyph) = style.metrics {
                    (glyph.ascent, glyph.descent)
                } else if let Some(font) = style.font {
                    let metrics = measurer.font_metrics(font);
                    (metrics.ascent, metrics.descent)
                } else {
                    (0, 0)
                };
                ascent = ascent.max(run_ascent + style.rise);
                descent = descent.max(run_descent - style.rise);
            }
        }
        Ok(FontMetrics {
            ascent,
            descent,
            leading: 0,
        })
    }
}
