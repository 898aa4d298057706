// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rich error type for layout operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the rejected value and, for
/// range errors, the bound it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Name of the rejected argument.
    argument: &'static str,

    /// The rejected value.
    value: i64,

    /// The inclusive upper bound the value was checked against, when there is one.
    limit: Option<i64>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the argument that was rejected, such as `"offset"` or `"spacing"`.
    pub fn argument(&self) -> &'static str {
        self.argument
    }

    /// The value that was rejected.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The inclusive upper bound for range errors.
    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub(crate) fn invalid_argument(argument: &'static str, value: i64) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            argument,
            value,
            limit: None,
        }
    }

    pub(crate) fn out_of_range(argument: &'static str, value: usize, limit: usize) -> Self {
        Self {
            kind: ErrorKind::OutOfRange,
            argument,
            value: to_i64(value),
            limit: Some(to_i64(limit)),
        }
    }

    pub(crate) fn disposed() -> Self {
        Self {
            kind: ErrorKind::Disposed,
            argument: "self",
            value: 0,
            limit: None,
        }
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidArgument => {
                write!(f, "invalid {}: {}", self.argument, self.value)
            }
            ErrorKind::OutOfRange => match self.limit {
                Some(limit) => write!(
                    f,
                    "{} {} out of range 0..={}",
                    self.argument, self.value, limit
                ),
                None => write!(f, "{} {} out of range", self.argument, self.value),
            },
            ErrorKind::Disposed => f.write_str("layout has been disposed"),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A setter was given a value outside its domain, for example a
    /// non-positive wrap width or a negative line spacing.
    InvalidArgument,

    /// A character offset or line index was outside the current text or line count.
    OutOfRange,

    /// The layout was used after [`Layout::dispose`](crate::Layout::dispose).
    Disposed,
}
