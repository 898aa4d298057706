// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking.

use alloc::vec::Vec;

use super::data::{BreakReason, LayoutData, Line, RunKind, StyleRun};
use super::{Alignment, Inputs};
use crate::font::{Measurer, MetricsProvider};
use crate::style::Brush;
use crate::text::{is_break_space, is_trailing_space};

/// Breaks placed `runs`, which end with the sentinel run, into lines.
pub(crate) fn break_lines<B: Brush, M: MetricsProvider + ?Sized>(
    inputs: &Inputs<B>,
    mut runs: Vec<StyleRun>,
    measurer: &mut Measurer<'_, M>,
) -> LayoutData {
    let mut line_ends: Vec<(usize, BreakReason)> = Vec::new();
    let mut line_start = 0;
    let mut line_width = 0;
    let mut index = 0;
    while index + 1 < runs.len() {
        if runs[index].kind == RunKind::Tab {
            runs[index].width = inputs.tab_width(&runs[index], line_width, measurer);
        }
        let run = &runs[index];
        if let Some(wrap) = inputs
            .wrap_width
            .filter(|&wrap| run.kind == RunKind::Text && line_width + run.width > wrap)
        {
            let end = wrap_point(
                inputs,
                &mut runs,
                index,
                line_start,
                wrap - line_width,
                measurer,
            );
            // The last run before the sentinel never ends a line early.
            if end + 2 < runs.len() {
                let reason = match runs[end].kind {
                    RunKind::HardBreak => BreakReason::Explicit,
                    RunKind::Text => {
                        runs[end].kind = RunKind::SoftBreak;
                        BreakReason::Wrap
                    }
                    RunKind::Tab | RunKind::SoftBreak => BreakReason::Wrap,
                };
                log::trace!(
                    "wrapped line at offset {} (width {})",
                    runs[end].text_range.end,
                    wrap
                );
                line_ends.push((end, reason));
                line_start = end + 1;
                line_width = 0;
                index = end + 1;
                continue;
            }
        }
        line_width += runs[index].width;
        if runs[index].kind == RunKind::HardBreak {
            line_ends.push((index, BreakReason::Explicit));
            line_start = index + 1;
            line_width = 0;
        }
        index += 1;
    }
    group_lines(inputs, runs, &line_ends, measurer)
}

/// Finds where to break the line containing runs `line_start..=index` when
/// run `index` overflows `room`, splitting a run if needed.
///
/// Returns the index of the run that ends the line.
fn wrap_point<B: Brush, M: MetricsProvider + ?Sized>(
    inputs: &Inputs<B>,
    runs: &mut Vec<StyleRun>,
    index: usize,
    line_start: usize,
    room: i32,
    measurer: &mut Measurer<'_, M>,
) -> usize {
    let run = &runs[index];
    let run_start = run.text_range.start;

    // Number of characters of the overflowing run that fit.
    let mut fit = 0;
    let mut width = 0;
    while fit + 1 < run.len() {
        let advance = inputs.char_advance(run, run_start + fit, measurer);
        if width + advance > room {
            break;
        }
        width += advance;
        fit += 1;
    }

    // Nearest break space at or before the first character that does not fit.
    let mut candidate = None;
    'scan: for j in (line_start..=index).rev() {
        let range = runs[j].text_range.clone();
        let limit = if j == index {
            range.start + fit + 1
        } else {
            range.end
        };
        for offset in (range.start..limit).rev() {
            if inputs.text.char_at(offset).is_some_and(is_break_space) {
                candidate = Some((j, offset - range.start));
                break 'scan;
            }
        }
    }

    let (mut j, mut at) = match candidate {
        Some((j, at)) if j != line_start || at != 0 => (j, at),
        // No usable space; break inside the word, taking at least one
        // character when the word starts the line.
        _ if index == line_start => (index, fit.max(1)),
        _ => (index, fit),
    };

    // Trailing spaces stay on the ending line, even across style runs.
    let mut range = runs[j].text_range.clone();
    loop {
        while at < range.len()
            && inputs
                .text
                .char_at(range.start + at)
                .is_some_and(is_trailing_space)
        {
            at += 1;
        }
        let next = j + 1;
        if at < range.len() || next + 1 >= runs.len() {
            break;
        }
        match runs[next].kind {
            RunKind::Text => {
                j = next;
                at = 0;
                range = runs[j].text_range.clone();
            }
            // A hard break right after the spaces ends the same line.
            RunKind::HardBreak => return next,
            RunKind::Tab | RunKind::SoftBreak => break,
        }
    }
    if at == 0 && j > line_start {
        return j - 1;
    }
    let at = at.max(1);
    if at < range.len() {
        let mut tail = runs[j].clone();
        tail.text_range.start = range.start + at;
        runs[j].text_range.end = range.start + at;
        inputs.place(&mut runs[j], measurer);
        inputs.place(&mut tail, measurer);
        runs.insert(j + 1, tail);
    }
    j
}

/// Groups runs into lines, computing vertical positions and indents.
fn group_lines<B: Brush, M: MetricsProvider + ?Sized>(
    inputs: &Inputs<B>,
    mut runs: Vec<StyleRun>,
    line_ends: &[(usize, BreakReason)],
    measurer: &mut Measurer<'_, M>,
) -> LayoutData {
    let last = runs.len() - 1;
    let mut lines = Vec::with_capacity(line_ends.len() + 1);
    let mut run_start = 0;
    let mut y = 0;
    let mut previous = BreakReason::Explicit;
    for &(end, break_reason) in line_ends
        .iter()
        .chain(core::iter::once(&(last, BreakReason::None)))
    {
        if run_start == last && end == last {
            // An empty final line takes the height of its font.
            let font = inputs.run_font(&runs[last], measurer);
            let metrics = measurer.font_metrics(font);
            runs[last].ascent = metrics.ascent + metrics.leading;
            runs[last].descent = metrics.descent;
        }
        let line_runs = &runs[run_start..=end];
        let ascent = line_runs
            .iter()
            .map(|run| run.ascent)
            .fold(inputs.ascent.unwrap_or(0).max(0), i32::max);
        let descent = line_runs
            .iter()
            .map(|run| run.descent)
            .fold(inputs.descent.unwrap_or(0).max(0), i32::max);
        let width = line_runs.iter().map(|run| run.width).sum();
        let height = ascent + descent + inputs.spacing;
        let indent = if previous == BreakReason::Explicit {
            inputs.indent
        } else {
            inputs.wrap_indent
        };
        lines.push(Line {
            text_range: runs[run_start].text_range.start..runs[end].text_range.end,
            run_range: run_start..end + 1,
            y,
            width,
            ascent,
            descent,
            height,
            indent: inputs.aligned_indent(indent, width),
            break_reason,
        });
        y += height;
        run_start = end + 1;
        previous = break_reason;
    }
    log::debug!("laid out {} runs in {} lines", runs.len(), lines.len());
    LayoutData {
        runs,
        lines,
        height: y,
    }
}

impl<B: Brush> Inputs<B> {
    fn tab_width<M: MetricsProvider + ?Sized>(
        &self,
        run: &StyleRun,
        line_width: i32,
        measurer: &mut Measurer<'_, M>,
    ) -> i32 {
        match self
            .tabs
            .as_deref()
            .and_then(|tabs| next_tab_stop(tabs, line_width))
        {
            Some(stop) => stop - line_width,
            None => self.advance_of(run, run.text_range.clone(), measurer),
        }
    }

    /// Offsets a line's indent according to the alignment when wrapping.
    fn aligned_indent(&self, indent: i32, width: i32) -> i32 {
        let Some(wrap) = self.wrap_width else {
            return indent;
        };
        let slack = wrap - (width + indent);
        match self.alignment {
            Alignment::Left => indent,
            Alignment::Center => indent + slack / 2,
            Alignment::Right => indent + slack,
        }
    }
}

/// First tab stop strictly after `line_width`. Past the last stop the final
/// gap repeats.
fn next_tab_stop(tabs: &[i32], line_width: i32) -> Option<i32> {
    if let Some(&stop) = tabs.iter().find(|&&stop| stop > line_width) {
        return Some(stop);
    }
    let &last = tabs.last()?;
    let gap = match tabs {
        [.., before, last] => last - before,
        _ => last,
    };
    if gap <= 0 {
        return None;
    }
    let steps = (line_width - last) / gap + 1;
    Some(last + steps * gap)
}
