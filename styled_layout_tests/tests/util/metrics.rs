// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::collections::HashMap;

use styled_layout::{FontMetrics, FontRef, MetricsProvider};

/// Fixed pitch metrics.
///
/// Every character advances 10 units except `\n` and `\r`, which have no
/// advance. Fonts registered with [`Monospace::with_font`] use their own
/// advance and metrics. Every call to `advance` is counted.
#[derive(Debug)]
pub(crate) struct Monospace {
    fonts: HashMap<u32, (i32, FontMetrics)>,
    calls: Cell<usize>,
}

const ADVANCE: i32 = 10;
const METRICS: FontMetrics = FontMetrics {
    ascent: 8,
    descent: 2,
    leading: 0,
};

impl Default for Monospace {
    fn default() -> Self {
        Self {
            fonts: HashMap::new(),
            calls: Cell::new(0),
        }
    }
}

impl Monospace {
    pub(crate) fn with_font(mut self, id: u32, advance: i32, metrics: FontMetrics) -> Self {
        self.fonts.insert(id, (advance, metrics));
        self
    }

    /// Number of `advance` calls so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl MetricsProvider for Monospace {
    fn default_font(&self) -> FontRef {
        FontRef::new(0)
    }

    fn font_metrics(&self, font: FontRef) -> FontMetrics {
        self.fonts
            .get(&font.id())
            .map_or(METRICS, |&(_, metrics)| metrics)
    }

    fn advance(&self, font: FontRef, text: &str) -> i32 {
        self.calls.set(self.calls.get() + 1);
        let advance = self
            .fonts
            .get(&font.id())
            .map_or(ADVANCE, |&(advance, _)| advance);
        text.chars()
            .filter(|ch| !matches!(ch, '\n' | '\r'))
            .count() as i32
            * advance
    }
}
