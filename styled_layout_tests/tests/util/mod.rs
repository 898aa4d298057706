// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod metrics;
mod recorder;

pub(crate) use metrics::Monospace;
pub(crate) use recorder::{Call, ColorBrush, Recorder};

use styled_layout::{Layout, MetricsProvider};

/// Returns the current function name (for use in test naming).
#[macro_export]
macro_rules! test_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        let name = &name[name.rfind(':').map(|x| x + 1).unwrap_or(0)..];

        name
    }};
}

/// A layout under test together with the metrics it is measured with.
pub(crate) struct TestEnv {
    pub(crate) name: &'static str,
    pub(crate) metrics: Monospace,
    pub(crate) layout: Layout<ColorBrush>,
}

impl TestEnv {
    pub(crate) fn new(name: &'static str, text: &str) -> Self {
        let mut layout = Layout::new();
        layout.set_text(text).unwrap();
        Self {
            name,
            metrics: Monospace::default(),
            layout,
        }
    }

    pub(crate) fn wrapped(name: &'static str, text: &str, width: i32) -> Self {
        let mut env = Self::new(name, text);
        env.layout.set_width(Some(width)).unwrap();
        env
    }

    pub(crate) fn line_offsets(&mut self) -> Vec<usize> {
        self.layout.line_offsets(&self.metrics).unwrap()
    }

    pub(crate) fn assert_line_offsets(&mut self, expected: &[usize]) {
        let offsets = self.line_offsets();
        assert_eq!(offsets, expected, "{}: line offsets", self.name);
    }

    /// `(x, y)` of the leading edge of every offset in `0..=len`.
    pub(crate) fn locations(&mut self) -> Vec<(i32, i32)> {
        let len = self.layout.text().unwrap().chars().count();
        (0..=len)
            .map(|offset| {
                let point = self.layout.location(offset, false, &self.metrics).unwrap();
                (point.x, point.y)
            })
            .collect()
    }
}

/// Lays out `text` unwrapped with `metrics` and returns its line count.
pub(crate) fn line_count(text: &str, metrics: &impl MetricsProvider) -> usize {
    let mut layout = Layout::<ColorBrush>::new();
    layout.set_text(text).unwrap();
    layout.line_count(metrics).unwrap()
}
