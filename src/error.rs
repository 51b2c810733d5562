// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `ByteString`.
//!
//! These errors represent allocation and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`ByteString`](crate::ByteString).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The allocator could not provide the requested capacity.
    ///
    /// The string is left unchanged.
    AllocFailed,
    /// The requested capacity, rounded up to a power of two, does not fit in `usize`.
    CapacityOverflow,
    /// An index was outside the current logical length.
    OutOfBounds,
    /// A comparison was given exactly one absent operand.
    ///
    /// Used by [`ByteString::compare_optional`](crate::ByteString::compare_optional).
    MissingOperand,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed => f.write_str("memory allocation failed"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::MissingOperand => f.write_str("missing comparison operand"),
        }
    }
}

impl CoreError for Error {}

impl From<alloc::collections::TryReserveError> for Error {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Self::AllocFailed
    }
}
