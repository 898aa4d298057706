// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styles and their effect on measurement.

use crate::test_name;
use crate::util::{ColorBrush, Monospace, TestEnv};
use peniko::color::palette::css;
use styled_layout::{FontMetrics, FontRef, GlyphMetrics, TextStyle};

fn red() -> ColorBrush {
    ColorBrush::new(css::RED)
}

fn large() -> Monospace {
    Monospace::default().with_font(
        1,
        20,
        FontMetrics {
            ascent: 16,
            descent: 4,
            leading: 2,
        },
    )
}

#[test]
fn styles_ranges_and_lookup() {
    let mut env = TestEnv::new(test_name!(), "aabbcc");
    let style = TextStyle::new(None, Some(red()), None);
    env.layout.set_style(Some(style.clone()), 2, 3).unwrap();
    assert_eq!(env.layout.ranges().unwrap(), [2..=3]);
    assert_eq!(env.layout.styles().unwrap(), [&style]);
    assert_eq!(env.layout.style_at(1).unwrap(), None);
    assert_eq!(env.layout.style_at(3).unwrap(), Some(&style));

    env.layout.set_style(None, 3, 3).unwrap();
    assert_eq!(env.layout.ranges().unwrap(), [2..=2]);
}

#[test]
fn styles_equal_neighbours_merge() {
    let mut env = TestEnv::new(test_name!(), "aabbcc");
    let style = TextStyle::new(None, Some(red()), None);
    env.layout.set_style(Some(style.clone()), 0, 1).unwrap();
    env.layout.set_style(Some(style), 2, 3).unwrap();
    assert_eq!(env.layout.ranges().unwrap(), [0..=3]);
}

#[test]
fn styles_font_changes_advance_and_height() {
    let mut env = TestEnv::new(test_name!(), "aabbcc");
    env.metrics = large();
    env.layout
        .set_style(Some(TextStyle::new(Some(FontRef::new(1)), None, None)), 2, 3)
        .unwrap();
    let line = env.layout.lines(&env.metrics).unwrap()[0].clone();
    assert_eq!(line.width(), 80);
    assert_eq!(line.ascent(), 18, "ascent includes leading");
    assert_eq!(line.height(), 22);
    assert_eq!(
        env.layout.line_metrics(0, &env.metrics).unwrap(),
        FontMetrics {
            ascent: 16,
            descent: 4,
            leading: 0
        }
    );
}

#[test]
fn styles_layout_font_applies_to_unstyled_text() {
    let mut env = TestEnv::new(test_name!(), "aabbcc");
    env.metrics = large();
    env.layout.set_font(Some(FontRef::new(1))).unwrap();
    assert_eq!(env.layout.bounds(&env.metrics).unwrap().width, 120);
}

#[test]
fn styles_glyph_metrics_replace_measurement() {
    let mut env = TestEnv::new(test_name!(), "xay");
    let style = TextStyle {
        metrics: Some(GlyphMetrics::new(20, 4, 25)),
        ..TextStyle::default()
    };
    env.layout.set_style(Some(style), 1, 1).unwrap();
    let line = env.layout.lines(&env.metrics).unwrap()[0].clone();
    assert_eq!(line.width(), 45);
    assert_eq!(line.height(), 24);
    assert_eq!(env.layout.location(2, false, &env.metrics).unwrap().x, 35);
    assert_eq!(
        env.layout.line_metrics(0, &env.metrics).unwrap(),
        FontMetrics {
            ascent: 20,
            descent: 4,
            leading: 0
        }
    );
}

#[test]
fn styles_rise_shifts_the_baseline() {
    let mut env = TestEnv::new(test_name!(), "xay");
    let style = TextStyle {
        rise: 3,
        ..TextStyle::default()
    };
    env.layout.set_style(Some(style), 1, 1).unwrap();
    let line = env.layout.lines(&env.metrics).unwrap()[0].clone();
    assert_eq!(line.ascent(), 11);
    assert_eq!(line.descent(), 2);
    assert_eq!(line.height(), 13);
}
