// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, string::ByteString};

// Core imports
use core::cmp::Ordering;

impl ByteString {
    /// Three-way byte-wise comparison, in the manner of `strcmp`.
    ///
    /// Returns the difference of the first differing bytes, or `-1` / `1` when
    /// one string is a proper prefix of the other, or `0` when both hold the
    /// same bytes. Interior zero bytes are compared like any other byte.
    pub fn compare(&self, other: &Self) -> i32 {
        let (lhs, rhs) = (self.as_bytes(), other.as_bytes());
        if let Some((l, r)) = lhs.iter().zip(rhs).find(|(l, r)| l != r) {
            return i32::from(*l) - i32::from(*r);
        }
        match lhs.len().cmp(&rhs.len()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Like [`compare`](Self::compare), for operands that may be absent.
    ///
    /// Two absent operands compare equal. Exactly one absent operand is
    /// reported as [`Error::MissingOperand`].
    pub fn compare_optional(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<i32, Error> {
        match (lhs, rhs) {
            (Some(l), Some(r)) => Ok(l.compare(r)),
            (None, None) => Ok(0),
            _ => Err(Error::MissingOperand),
        }
    }
}
