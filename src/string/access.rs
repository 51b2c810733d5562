// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, string::ByteString};

impl ByteString {
    /// Returns the byte at `idx`, or [`Error::OutOfBounds`] if `idx >= len`.
    ///
    /// The sentinel is never reachable through this method.
    #[inline]
    pub fn at(&self, idx: usize) -> Result<u8, Error> {
        self.as_bytes().get(idx).copied().ok_or(Error::OutOfBounds)
    }

    /// Returns the first byte, or `None` if empty.
    #[doc(alias = "at_front")]
    #[inline]
    pub fn front(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Returns the last byte, or `None` if empty.
    #[doc(alias = "at_back")]
    #[inline]
    pub fn back(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }
}
