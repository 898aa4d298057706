// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting text into runs.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use super::data::{RunKind, StyleRun};
use crate::style::{Brush, StyleTable};
use crate::text::CharText;

/// Splits text into runs at break characters, segment offsets and style
/// boundaries.
///
/// The returned runs tile the text and are followed by an empty sentinel run
/// at the end of the text. Empty text yields an empty run plus the sentinel.
pub(crate) fn itemize<B: Brush>(
    text: &CharText,
    styles: &StyleTable<B>,
    segments: Option<&[usize]>,
) -> Vec<StyleRun> {
    let len = text.len();
    if len == 0 {
        return vec![
            StyleRun::new(0..0, styled_span(styles, 0), RunKind::Text),
            StyleRun::new(0..0, None, RunKind::Text),
        ];
    }
    let items = item_boundaries(text, segments);
    let mut runs = Vec::with_capacity(items.len() + styles.span_count() + 1);
    let mut items = items.into_iter().peekable();
    let mut span = 0;
    let mut start = 0;
    while start < len {
        let item_limit = items.peek().copied().unwrap_or(len);
        let style_limit = styles.span_range(span).end;
        let mut end = item_limit.min(style_limit);
        // A style boundary must not separate the two halves of `\r\n`.
        if is_crlf_interior(text, end) {
            end += 1;
        }
        runs.push(StyleRun::new(
            start..end,
            styled_span(styles, span),
            classify(text, start..end),
        ));
        while items.next_if(|&cut| cut <= end).is_some() {}
        while span + 1 < styles.span_count() && styles.span_range(span).end <= end {
            span += 1;
        }
        start = end;
    }
    runs.push(StyleRun::new(len..len, None, RunKind::Text));
    runs
}

/// Sorted offsets strictly inside the text where an item begins.
fn item_boundaries(text: &CharText, segments: Option<&[usize]>) -> Vec<usize> {
    let len = text.len();
    let mut cuts = Vec::new();
    let mut after_cr = false;
    for (index, ch) in text.chars(0..len).enumerate() {
        if matches!(ch, '\t' | '\r' | '\n') {
            if ch == '\n' && after_cr {
                // Join with the preceding `\r`.
                cuts.pop();
            } else {
                cuts.push(index);
            }
            cuts.push(index + 1);
        }
        after_cr = ch == '\r';
    }
    if let Some(segments) = segments {
        cuts.extend(
            segments
                .iter()
                .copied()
                .filter(|&offset| !is_crlf_interior(text, offset)),
        );
        cuts.sort_unstable();
    }
    cuts.retain(|&cut| 0 < cut && cut < len);
    cuts.dedup();
    cuts
}

fn is_crlf_interior(text: &CharText, offset: usize) -> bool {
    offset > 0 && text.char_at(offset - 1) == Some('\r') && text.char_at(offset) == Some('\n')
}

fn styled_span<B: Brush>(styles: &StyleTable<B>, span: usize) -> Option<usize> {
    styles.span_style(span).map(|_| span)
}

fn classify(text: &CharText, range: Range<usize>) -> RunKind {
    match text.slice(range) {
        "\t" => RunKind::Tab,
        "\n" | "\r" | "\r\n" => RunKind::HardBreak,
        _ => RunKind::Text,
    }
}
