// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests over arbitrary text and wrap widths.

use crate::util::{ColorBrush, Monospace};
use proptest::prelude::*;
use styled_layout::{FontMetrics, FontRef, GlyphMetrics, HitPosition, Layout, Movement, TextStyle};

fn layout(text: &str, width: Option<i32>) -> Layout<ColorBrush> {
    let mut layout = Layout::new();
    layout.set_text(text).unwrap();
    layout.set_width(width).unwrap();
    layout
}

/// Metrics with a second, wider font registered as font 1.
fn two_fonts() -> Monospace {
    Monospace::default().with_font(
        1,
        20,
        FontMetrics {
            ascent: 12,
            descent: 4,
            leading: 1,
        },
    )
}

fn style(variant: u8) -> Option<TextStyle<ColorBrush>> {
    let style = match variant {
        0 => return None,
        1 => TextStyle {
            font: Some(FontRef::new(1)),
            ..TextStyle::default()
        },
        2 => TextStyle {
            metrics: Some(GlyphMetrics::new(12, 3, 7)),
            ..TextStyle::default()
        },
        3 => TextStyle {
            rise: 3,
            ..TextStyle::default()
        },
        _ => TextStyle {
            underline: true,
            ..TextStyle::default()
        },
    };
    Some(style)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_lines_partition_text(text in "[ab \t\r\n]{0,40}", width in proptest::option::of(1..120_i32)) {
        let metrics = Monospace::default();
        let mut layout = layout(&text, width);
        let len = text.chars().count();
        let lines = layout.lines(&metrics).unwrap().to_vec();
        prop_assert!(!lines.is_empty());
        prop_assert_eq!(lines[0].text_range().start, 0);
        prop_assert_eq!(lines[lines.len() - 1].text_range().end, len);
        for pair in lines.windows(2) {
            prop_assert_eq!(pair[0].text_range().end, pair[1].text_range().start);
            prop_assert_eq!(pair[0].y() + pair[0].height(), pair[1].y());
            prop_assert!(!pair[0].text_range().is_empty(), "only the last line may be empty");
        }
        let height: i32 = lines.iter().map(|line| line.height()).sum();
        prop_assert_eq!(layout.bounds(&metrics).unwrap().height, height);
    }

    #[test]
    fn prop_runs_tile_lines(text in "[ab \t\n]{0,40}", width in proptest::option::of(1..120_i32)) {
        let metrics = Monospace::default();
        let mut layout = layout(&text, width);
        let lines = layout.lines(&metrics).unwrap().to_vec();
        let runs = layout.runs(&metrics).unwrap().to_vec();
        for line in &lines {
            let line_runs = &runs[line.run_range()];
            prop_assert_eq!(line_runs[0].text_range().start, line.text_range().start);
            prop_assert_eq!(line_runs[line_runs.len() - 1].text_range().end, line.text_range().end);
            let width: i32 = line_runs.iter().map(|run| run.width()).sum();
            prop_assert_eq!(width, line.width());
        }
    }

    #[test]
    fn prop_line_index_contains_offset(text in "[ab \n]{0,40}", width in proptest::option::of(1..120_i32)) {
        let metrics = Monospace::default();
        let mut layout = layout(&text, width);
        let len = text.chars().count();
        let lines = layout.lines(&metrics).unwrap().to_vec();
        for offset in 0..len {
            let index = layout.line_index(offset, &metrics).unwrap();
            prop_assert!(lines[index].text_range().contains(&offset));
        }
        prop_assert_eq!(layout.line_index(len, &metrics).unwrap(), lines.len() - 1);
    }

    #[test]
    fn prop_hit_test_inverts_location(text in "[ab ]{1,40}", width in proptest::option::of(1..120_i32)) {
        let metrics = Monospace::default();
        let mut layout = layout(&text, width);
        for offset in 0..text.chars().count() {
            let point = layout.location(offset, false, &metrics).unwrap();
            let position = layout.offset_at(point.x, point.y, &metrics).unwrap();
            prop_assert_eq!(position, HitPosition { offset, trailing: false });
        }
    }

    #[test]
    fn prop_word_movement_advances(text in "[ab ,\n]{0,30}") {
        let metrics = Monospace::default();
        let mut layout = layout(&text, None);
        let len = text.chars().count();
        for offset in 0..len {
            let next = layout.next_offset(offset, Movement::Word, &metrics).unwrap();
            prop_assert!(next > offset && next <= len);
            let previous = layout
                .previous_offset(offset + 1, Movement::WordEnd, &metrics)
                .unwrap();
            prop_assert!(previous <= offset);
        }
    }

    #[test]
    fn prop_styled_runs_tile_text(
        text in "[ab \t\n]{0,40}",
        width in proptest::option::of(1..120_i32),
        styles in prop::collection::vec((0..40_usize, 0..40_usize, 0..5_u8), 0..8),
    ) {
        let metrics = two_fonts();
        let mut layout = layout(&text, width);
        for &(start, end, variant) in &styles {
            layout.set_style(style(variant), start, end).unwrap();
        }
        let len = text.chars().count();
        let runs = layout.runs(&metrics).unwrap().to_vec();
        prop_assert_eq!(runs[0].text_range().start, 0);
        prop_assert_eq!(runs[runs.len() - 1].text_range().end, len);
        for pair in runs.windows(2) {
            prop_assert_eq!(pair[0].text_range().end, pair[1].text_range().start);
        }
        let lines = layout.lines(&metrics).unwrap().to_vec();
        prop_assert_eq!(lines[0].run_range().start, 0);
        prop_assert_eq!(lines[lines.len() - 1].run_range().end, runs.len());
        for pair in lines.windows(2) {
            prop_assert_eq!(pair[0].run_range().end, pair[1].run_range().start);
        }
        for line in &lines {
            let line_runs = &runs[line.run_range()];
            prop_assert_eq!(line_runs[0].text_range().start, line.text_range().start);
            prop_assert_eq!(line_runs[line_runs.len() - 1].text_range().end, line.text_range().end);
        }
    }

    #[test]
    fn prop_decorations_do_not_move_breaks(
        text in "[ab \n]{0,40}",
        width in 1..120_i32,
        styles in prop::collection::vec((0..40_usize, 0..40_usize), 0..6),
    ) {
        let metrics = Monospace::default();
        let mut plain = layout(&text, Some(width));
        let mut styled = layout(&text, Some(width));
        for &(start, end) in &styles {
            styled.set_style(style(4), start, end).unwrap();
        }
        prop_assert_eq!(
            plain.line_offsets(&metrics).unwrap(),
            styled.line_offsets(&metrics).unwrap()
        );
    }
}
