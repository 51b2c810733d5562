// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, string::ByteString};

// Core imports
use core::cmp::Ordering;

impl ByteString {
    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// The capacity is kept.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
            self.write_sentinel();
        }
    }

    /// Resizes to `new_len`.
    ///
    /// - Shrinking truncates in place and keeps the capacity.
    /// - Growing reserves `new_len + 1` bytes and zero-fills every new byte,
    ///   even if the spare capacity held older content.
    ///
    /// On error the string is unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error> {
        match new_len.cmp(&self.len) {
            Ordering::Less => self.truncate(new_len),
            Ordering::Greater => {
                self.reserve_for(new_len - self.len)?;
                // Zeroes the new bytes and the sentinel slot in one pass.
                self.buf[self.len..=new_len].fill(0);
                self.len = new_len;
            }
            Ordering::Equal => {}
        }
        Ok(())
    }
}
