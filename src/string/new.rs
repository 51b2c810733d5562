// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, string::ByteString};

// Alloc imports
use alloc::{vec, vec::Vec};

impl ByteString {
    /// Constructs an empty string with [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY).
    ///
    /// Aborts on allocation failure like `Vec`; see [`try_new`](Self::try_new)
    /// for the fallible variant.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: vec![0; Self::INITIAL_CAPACITY],
            len: 0,
        }
    }

    /// Constructs an empty string, returning [`Error::AllocFailed`] if the
    /// initial buffer cannot be allocated.
    #[inline]
    pub fn try_new() -> Result<Self, Error> {
        Self::try_from_bytes(&[])
    }

    /// Constructs a string holding a copy of `src`.
    ///
    /// The capacity is exactly `src.len() + 1`.
    pub fn try_from_bytes(src: &[u8]) -> Result<Self, Error> {
        let cap = src.len().checked_add(1).ok_or(Error::CapacityOverflow)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(cap)?;
        buf.extend_from_slice(src);
        buf.push(0);
        Ok(Self {
            buf,
            len: src.len(),
        })
    }
}
