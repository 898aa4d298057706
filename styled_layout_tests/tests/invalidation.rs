// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caching of the arrangement across queries and setters.

use crate::test_name;
use crate::util::{ColorBrush, TestEnv};
use styled_layout::{Alignment, ErrorKind, Orientation, TextStyle};

#[test]
fn invalidation_queries_reuse_the_arrangement() {
    let mut env = TestEnv::wrapped(test_name!(), "aaa bbb ccc", 35);
    assert!(!env.layout.is_laid_out());
    env.layout.line_count(&env.metrics).unwrap();
    assert!(env.layout.is_laid_out());
    let calls = env.metrics.calls();
    env.layout.line_offsets(&env.metrics).unwrap();
    env.layout.bounds(&env.metrics).unwrap();
    env.layout.lines(&env.metrics).unwrap();
    assert_eq!(env.metrics.calls(), calls, "{}", env.name);
}

#[test]
fn invalidation_setting_equal_values_keeps_the_arrangement() {
    let mut env = TestEnv::wrapped(test_name!(), "aaa bbb ccc", 35);
    let style = TextStyle::<ColorBrush> {
        underline: true,
        ..TextStyle::default()
    };
    env.layout.set_style(Some(style.clone()), 0, 2).unwrap();
    env.layout.set_tabs(Some(&[40])).unwrap();
    env.layout.set_alignment(Alignment::Center).unwrap();
    env.layout.line_count(&env.metrics).unwrap();

    env.layout.set_text("aaa bbb ccc").unwrap();
    env.layout.set_width(Some(35)).unwrap();
    env.layout.set_style(Some(style.clone()), 0, 2).unwrap();
    env.layout.set_style(Some(style), 1, 1).unwrap();
    env.layout.set_tabs(Some(&[40])).unwrap();
    env.layout.set_alignment(Alignment::Center).unwrap();
    env.layout.set_font(None).unwrap();
    env.layout.set_indent(-3).unwrap();
    env.layout.set_spacing(0).unwrap();
    env.layout.set_orientation(Orientation::RightToLeft).unwrap();
    assert!(env.layout.is_laid_out(), "{}", env.name);
}

#[test]
fn invalidation_changed_values_drop_the_arrangement() {
    let mut env = TestEnv::wrapped(test_name!(), "aaa bbb ccc", 35);
    env.layout.line_count(&env.metrics).unwrap();
    env.layout.set_width(Some(80)).unwrap();
    assert!(!env.layout.is_laid_out());
    env.assert_line_offsets(&[0, 8, 11]);

    env.layout.set_spacing(2).unwrap();
    assert!(!env.layout.is_laid_out());
    env.layout.line_count(&env.metrics).unwrap();
    env.layout.set_text("aaa").unwrap();
    assert!(!env.layout.is_laid_out());
    env.assert_line_offsets(&[0, 3]);
}

#[test]
fn invalidation_rejected_values_keep_the_arrangement() {
    let mut env = TestEnv::new(test_name!(), "ab");
    env.layout.line_count(&env.metrics).unwrap();
    let err = env.layout.set_spacing(-1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.value(), -1);
    assert!(env.layout.is_laid_out());
}

#[test]
fn invalidation_disposed_layout_rejects_queries() {
    let mut env = TestEnv::new(test_name!(), "ab");
    env.layout.dispose();
    let err = env.layout.line_count(&env.metrics).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Disposed);
    assert!(!env.layout.is_laid_out());
}
