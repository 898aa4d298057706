// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `styled_layout`.
//!
//! - The `util` module contains the fixed pitch metrics and the recording
//!   surface shared by all tests.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests.
//! - For test naming, put the "topic" of the test at the start of the name, for example
//!   `cursor_word_next` rather than `next_word_cursor`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod invalidation;
mod properties;
mod styles;
#[macro_use]
mod util;
