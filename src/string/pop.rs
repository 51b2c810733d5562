// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::string::ByteString;

impl ByteString {
    /// Removes and returns the last byte, or `None` if empty.
    ///
    /// The capacity is kept.
    #[doc(alias = "remove_last")]
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let out = self.buf[self.len];
        self.write_sentinel();
        Some(out)
    }
}
