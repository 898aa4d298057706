// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::Rgba8;
use styled_layout::{DrawSurface, FontRef, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ColorBrush {
    pub(crate) color: Rgba8,
}

impl ColorBrush {
    pub(crate) fn new(color: peniko::Color) -> Self {
        Self {
            color: color.to_rgba8(),
        }
    }
}

impl Default for ColorBrush {
    fn default() -> Self {
        Self::new(peniko::color::palette::css::BLACK)
    }
}

/// A primitive issued to a [`Recorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Fill(Rect, ColorBrush),
    Text(String, Point, FontRef, ColorBrush),
    Line(Point, Point, ColorBrush),
}

/// A surface that records what is drawn on it.
#[derive(Debug)]
pub(crate) struct Recorder {
    clip: Rect,
    pub(crate) calls: Vec<Call>,
}

impl Recorder {
    pub(crate) fn new(clip: Rect) -> Self {
        Self {
            clip,
            calls: Vec::new(),
        }
    }

    /// Text drawn, in order.
    pub(crate) fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface<ColorBrush> for Recorder {
    fn clip(&self) -> Rect {
        self.clip
    }

    fn fill_rect(&mut self, rect: Rect, brush: &ColorBrush) {
        self.calls.push(Call::Fill(rect, *brush));
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: FontRef, brush: &ColorBrush) {
        self.calls
            .push(Call::Text(text.to_owned(), origin, font, *brush));
    }

    fn draw_line(&mut self, from: Point, to: Point, brush: &ColorBrush) {
        self.calls.push(Call::Line(from, to, *brush));
    }
}
