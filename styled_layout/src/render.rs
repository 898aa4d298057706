// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting a layout onto a drawing surface.

use crate::error::Error;
use crate::font::{FontRef, Measurer, MetricsProvider};
use crate::geometry::{Point, Rect};
use crate::layout::{BreakReason, Inputs, Layout, Line, RunKind, StyleRun};
use crate::style::{Brush, TextStyle};

/// Receiver of the primitives issued by [`Layout::draw`].
///
/// Coordinates are in the surface's space with `y` growing downwards.
pub trait DrawSurface<B: Brush> {
    /// Visible area of the surface. Lines and runs outside it are skipped.
    fn clip(&self) -> Rect;

    /// Fills `rect` with `brush`.
    fn fill_rect(&mut self, rect: Rect, brush: &B);

    /// Draws `text` set in `font` with the top left corner of its line box
    /// at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: FontRef, brush: &B);

    /// Draws a one unit wide line from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, brush: &B);
}

/// A selected range of characters and the brushes to paint it with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection<B: Brush> {
    /// First selected character.
    pub start: usize,
    /// Last selected character, inclusive.
    pub end: usize,
    /// Brush for selected text.
    pub foreground: B,
    /// Brush filling the selection.
    pub background: B,
}

/// How a selection continues past the end of a line that it runs through.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
pub enum LineSelection {
    /// The selection stops at the last character.
    #[default]
    None,
    /// A selected line break is shown as a block a third of the line height wide.
    Delimiter,
    /// A selected line break extends the selection to the right edge of the clip.
    Full,
}

/// Options for [`Layout::draw`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawOptions<B: Brush> {
    /// Brush for text whose style has no foreground.
    pub foreground: B,
    /// Selection to paint, if any.
    pub selection: Option<Selection<B>>,
    /// Selection behaviour at line breaks.
    pub line_selection: LineSelection,
    /// Applies [`line_selection`](Self::line_selection) to the last line as
    /// well when the selection reaches the end of the text.
    pub last_line: bool,
}

/// A selection clamped to the text.
struct Selected<'a, B: Brush> {
    start: usize,
    end: usize,
    brushes: &'a Selection<B>,
}

impl<B: Brush> Layout<B> {
    /// Paints the layout with its top left corner at `(x, y)`.
    ///
    /// Each run paints its style background, then its text and decorations.
    /// Selected characters are painted over with the selection brushes.
    /// Tabs and placeholder runs with glyph metrics draw no text.
    pub fn draw<S: DrawSurface<B> + ?Sized, M: MetricsProvider + ?Sized>(
        &mut self,
        surface: &mut S,
        x: i32,
        y: i32,
        options: &DrawOptions<B>,
        metrics: &M,
    ) -> Result<(), Error> {
        let (inputs, data) = self.resolve(metrics)?;
        let len = inputs.text.len();
        if len == 0 {
            return Ok(());
        }
        let selected = options
            .selection
            .as_ref()
            .filter(|selection| selection.start <= selection.end)
            .map(|selection| Selected {
                start: selection.start.min(len - 1),
                end: selection.end.min(len - 1),
                brushes: selection,
            });
        let mut painter = Painter {
            inputs,
            surface,
            measurer: Measurer::new(metrics),
            options,
            selected,
        };
        let clip = painter.surface.clip();
        let last = data.lines.len() - 1;
        for (index, line) in data.lines.iter().enumerate() {
            let line_x = x + line.indent;
            let line_y = y + line.y;
            if line_y > clip.bottom() || line_y + line.height < clip.y {
                continue;
            }
            if line_x > clip.right() || line_x + line.width < clip.x {
                continue;
            }
            let mut draw_x = line_x;
            for run in data.line_runs(line) {
                if run.len() == 0 {
                    continue;
                }
                if draw_x > clip.right() {
                    break;
                }
                if draw_x + run.width >= clip.x && run.kind != RunKind::HardBreak {
                    painter.paint_run(line, run, draw_x, line_y);
                }
                draw_x += run.width;
            }
            painter.extend_selection(line, index == last, draw_x, line_y, clip);
        }
        Ok(())
    }
}

struct Painter<'a, B: Brush, S: ?Sized, M: ?Sized> {
    inputs: &'a Inputs<B>,
    surface: &'a mut S,
    measurer: Measurer<'a, M>,
    options: &'a DrawOptions<B>,
    selected: Option<Selected<'a, B>>,
}

impl<B: Brush, S: DrawSurface<B> + ?Sized, M: MetricsProvider + ?Sized> Painter<'_, B, S, M> {
    fn paint_run(&mut self, line: &Line, run: &StyleRun, x: i32, line_y: i32) {
        let inputs = self.inputs;
        let style = inputs.run_style(run);
        let font = inputs.run_font(run, &self.measurer);
        let placeholder = style.is_some_and(|style| style.metrics.is_some());
        let run_y = line_y + line.ascent - run.ascent;
        let start = run.text_range.start;
        let end = run.text_range.end - 1;
        let text = inputs.text.slice(run.text_range.clone());

        if let Some(selected) = self
            .selected
            .as_ref()
            .filter(|selected| selected.start <= start && selected.end >= end)
        {
            let brushes = selected.brushes;
            self.surface.fill_rect(
                Rect::new(x, line_y, run.width, line.height),
                &brushes.background,
            );
            if run.kind != RunKind::Tab && !placeholder {
                self.surface
                    .draw_text(text, Point::new(x, run_y), font, &brushes.foreground);
                self.decorate(style, run, x, run.width, run_y, &brushes.foreground);
            }
            return;
        }

        if let Some(background) = style.and_then(|style| style.background.as_ref()) {
            self.surface.fill_rect(
                Rect::new(x, run_y, run.width, run.ascent + run.descent),
                background,
            );
        }
        if run.kind == RunKind::Tab {
            return;
        }
        let options = self.options;
        let foreground = style
            .and_then(|style| style.foreground.as_ref())
            .unwrap_or(&options.foreground);
        if !placeholder {
            self.surface
                .draw_text(text, Point::new(x, run_y), font, foreground);
            self.decorate(style, run, x, run.width, run_y, foreground);
        }

        let Some((sel_start, sel_end, brushes)) = self
            .selected
            .as_ref()
            .filter(|selected| selected.start <= end && start <= selected.end)
            .map(|selected| {
                (
                    selected.start.max(start),
                    selected.end.min(end),
                    selected.brushes,
                )
            })
        else {
            return;
        };
        let sel_x = x + inputs.advance_of(run, start..sel_start, &mut self.measurer);
        let sel_width = inputs.advance_of(run, sel_start..sel_end + 1, &mut self.measurer);
        self.surface.fill_rect(
            Rect::new(sel_x, line_y, sel_width, line.height),
            &brushes.background,
        );
        if !placeholder {
            self.surface.draw_text(
                inputs.text.slice(sel_start..sel_end + 1),
                Point::new(sel_x, run_y),
                font,
                &brushes.foreground,
            );
            self.decorate(style, run, sel_x, sel_width, run_y, &brushes.foreground);
        }
    }

    fn decorate(
        &mut self,
        style: Option<&TextStyle<B>>,
        run: &StyleRun,
        x: i32,
        width: i32,
        run_y: i32,
        brush: &B,
    ) {
        let Some(style) = style else {
            return;
        };
        if style.underline {
            let y = run_y + run.ascent + 1 - style.rise;
            self.surface
                .draw_line(Point::new(x, y), Point::new(x + width, y), brush);
        }
        if style.strikeout {
            let height = run.ascent + run.descent;
            let y = run_y + height - height / 2 - 1;
            self.surface
                .draw_line(Point::new(x, y), Point::new(x + width, y), brush);
        }
    }

    /// Paints the selection past the end of `line` when it covers the line
    /// break, or the end of the text on the last line.
    fn extend_selection(
        &mut self,
        line: &Line,
        is_last: bool,
        line_end: i32,
        line_y: i32,
        clip: Rect,
    ) {
        let options = self.options;
        let Some(selected) = self.selected.as_ref() else {
            return;
        };
        let covered = match line.break_reason {
            BreakReason::Explicit => {
                let delimiter = line.text_range.end - 1;
                selected.start <= delimiter && delimiter <= selected.end
            }
            // The selection end is clamped to the last character.
            BreakReason::None if is_last && options.last_line => {
                selected.end + 1 == self.inputs.text.len() && selected.start < line.text_range.end
            }
            _ => false,
        };
        if !covered {
            return;
        }
        let width = match options.line_selection {
            LineSelection::None => return,
            LineSelection::Delimiter => line.height / 3,
            LineSelection::Full => clip.right() - line_end,
        };
        if width > 0 {
            self.surface.fill_rect(
                Rect::new(line_end, line_y, width, line.height),
                &selected.brushes.background,
            );
        }
    }
}
