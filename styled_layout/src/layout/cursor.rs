// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between offsets and points, and cursor movement.

use super::data::{LayoutData, RunKind};
use super::{HitPosition, Inputs, Layout, Movement};
use crate::error::Error;
use crate::font::{Measurer, MetricsProvider};
use crate::geometry::Point;
use crate::style::Brush;
use crate::text::is_word_char;

impl<B: Brush> Layout<B> {
    /// Returns the top left corner of the character at `offset`, or its top
    /// right corner when `trailing` is set.
    ///
    /// The end of the text maps to the end of the last line.
    pub fn location<M: MetricsProvider + ?Sized>(
        &mut self,
        offset: usize,
        trailing: bool,
        metrics: &M,
    ) -> Result<Point, Error> {
        self.check()?;
        self.check_offset(offset)?;
        let (inputs, data) = self.resolve(metrics)?;
        Ok(inputs.location(data, offset, trailing, &mut Measurer::new(metrics)))
    }

    /// Returns the character under the point `(x, y)`.
    ///
    /// Points above, below or beside the text resolve to the nearest line and
    /// the nearest character on it.
    pub fn offset_at<M: MetricsProvider + ?Sized>(
        &mut self,
        x: i32,
        y: i32,
        metrics: &M,
    ) -> Result<HitPosition, Error> {
        let (inputs, data) = self.resolve(metrics)?;
        Ok(inputs.hit_test(data, x, y, &mut Measurer::new(metrics)))
    }

    /// Returns the offset after moving forwards from `offset` by `movement`.
    ///
    /// Word movement stops at the end of the current line.
    pub fn next_offset<M: MetricsProvider + ?Sized>(
        &mut self,
        offset: usize,
        movement: Movement,
        metrics: &M,
    ) -> Result<usize, Error> {
        self.check()?;
        self.check_offset(offset)?;
        let (inputs, data) = self.resolve(metrics)?;
        Ok(inputs.next_offset(data, offset, movement))
    }

    /// Returns the offset after moving backwards from `offset` by `movement`.
    ///
    /// Word movement stops at the start of the current line.
    pub fn previous_offset<M: MetricsProvider + ?Sized>(
        &mut self,
        offset: usize,
        movement: Movement,
        metrics: &M,
    ) -> Result<usize, Error> {
        self.check()?;
        self.check_offset(offset)?;
        let (inputs, data) = self.resolve(metrics)?;
        Ok(inputs.previous_offset(data, offset, movement))
    }
}

impl<B: Brush> Inputs<B> {
    pub(crate) fn location<M: MetricsProvider + ?Sized>(
        &self,
        data: &LayoutData,
        offset: usize,
        trailing: bool,
        measurer: &mut Measurer<'_, M>,
    ) -> Point {
        let line = &data.lines[data.line_for_offset(offset)];
        let mut x = 0;
        if offset == self.text.len() {
            x = line.width;
        } else {
            for run in data.line_runs(line) {
                if run.text_range.contains(&offset) {
                    if run.kind == RunKind::Tab {
                        if trailing {
                            x += run.width;
                        }
                    } else {
                        let end = offset + usize::from(trailing);
                        x += self.advance_of(run, run.text_range.start..end, measurer);
                    }
                    break;
                }
                x += run.width;
            }
        }
        Point::new(x + line.indent, line.y)
    }

    pub(crate) fn hit_test<M: MetricsProvider + ?Sized>(
        &self,
        data: &LayoutData,
        x: i32,
        y: i32,
        measurer: &mut Measurer<'_, M>,
    ) -> HitPosition {
        let line = &data.lines[data.line_for_y(y)];
        let x = (x - line.indent).min(line.width - 1).max(0);
        let mut width = 0;
        for run in data.line_runs(line) {
            let start = run.text_range.start;
            if run.kind == RunKind::HardBreak {
                return HitPosition {
                    offset: start,
                    trailing: false,
                };
            }
            if width + run.width > x {
                let fixed = self
                    .run_style(run)
                    .and_then(|style| style.metrics)
                    .filter(|metrics| metrics.width > 0);
                if let Some(metrics) = fixed {
                    let x = x - width;
                    let index = usize::try_from(x / metrics.width).unwrap_or_default();
                    return HitPosition {
                        offset: (start + index).min(run.text_range.end - 1),
                        trailing: x % metrics.width >= metrics.width / 2,
                    };
                }
                if run.kind == RunKind::Tab {
                    return HitPosition {
                        offset: start,
                        trailing: x >= width + run.width / 2,
                    };
                }
                for offset in run.text_range.clone() {
                    let advance = self.char_advance(run, offset, measurer);
                    if width + advance > x {
                        return HitPosition {
                            offset,
                            trailing: x >= width + advance / 2,
                        };
                    }
                    width += advance;
                }
                return HitPosition {
                    offset: run.text_range.end,
                    trailing: false,
                };
            }
            width += run.width;
        }
        HitPosition {
            offset: line.text_range.end,
            trailing: false,
        }
    }

    fn is_word(&self, offset: usize) -> bool {
        self.text.char_at(offset).is_some_and(is_word_char)
    }

    pub(crate) fn next_offset(
        &self,
        data: &LayoutData,
        offset: usize,
        movement: Movement,
    ) -> usize {
        let len = self.text.len();
        if offset == len {
            return len;
        }
        if matches!(movement, Movement::Char | Movement::Cluster) {
            return offset + 1;
        }
        // Word movement does not pass the last character of the line,
        // except on the last line.
        let line_index = data.line_for_offset(offset);
        let line = &data.lines[line_index];
        let mut line_end = line.text_range.start.max(line.text_range.end - 1);
        if line_index + 1 == data.lines.len() {
            line_end += 1;
        }

        let mut offset = offset;
        if movement == Movement::WordEnd {
            let mut previous = self.is_word(offset);
            offset += 1;
            while offset < line_end {
                let current = self.is_word(offset);
                if previous && !current {
                    break;
                }
                previous = current;
                offset += 1;
            }
        } else {
            let mut previous = self.is_word(offset);
            offset += 1;
            while offset < line_end {
                let current = self.is_word(offset);
                if !previous && current {
                    break;
                }
                previous = current;
                offset += 1;
            }
        }
        offset
    }

    pub(crate) fn previous_offset(
        &self,
        data: &LayoutData,
        offset: usize,
        movement: Movement,
    ) -> usize {
        if offset == 0 {
            return 0;
        }
        if matches!(movement, Movement::Char | Movement::Cluster) {
            return offset - 1;
        }
        let last = data.lines.len() - 1;
        let line_start = data
            .lines
            .iter()
            .enumerate()
            .find(|(index, line)| line.text_range.end + usize::from(*index == last) > offset)
            .map_or(0, |(_, line)| line.text_range.start);

        let mut offset = offset - 1;
        if movement == Movement::WordEnd {
            while line_start < offset {
                if self.is_word(offset - 1) && !self.is_word(offset) {
                    break;
                }
                offset -= 1;
            }
        } else {
            let mut previous = self.is_word(offset);
            while line_start < offset {
                let current = self.is_word(offset - 1);
                if !current && previous {
                    break;
                }
                previous = current;
                offset -= 1;
            }
        }
        offset
    }
}
