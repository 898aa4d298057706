// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Trait for types that represent the color of glyphs, backgrounds or decorations.
///
/// The layout treats brushes as opaque values: it compares, clones and hands
/// them to a [`DrawSurface`](crate::DrawSurface).
pub trait Brush: Clone + PartialEq + Default + core::fmt::Debug {}

impl<T: Clone + PartialEq + Default + core::fmt::Debug> Brush for T {}
