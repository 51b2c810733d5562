// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::string::{ByteString, NPOS};

impl ByteString {
    /// Returns the offset of the first `byte`, or [`NPOS`] if absent.
    #[inline]
    pub fn find_char(&self, byte: u8) -> usize {
        self.as_bytes()
            .iter()
            .position(|&b| b == byte)
            .unwrap_or(NPOS)
    }

    /// Returns the offset of the first occurrence of `needle`, or [`NPOS`].
    ///
    /// `needle` may be another `ByteString`, a byte slice or a `str`. An empty
    /// needle matches at offset `0`. The scan is naive, `O(len * needle.len())`.
    pub fn find_bytes<B: AsRef<[u8]> + ?Sized>(&self, needle: &B) -> usize {
        let hay = self.as_bytes();
        let needle = needle.as_ref();
        if needle.is_empty() {
            return 0;
        }
        if needle.len() > hay.len() {
            return NPOS;
        }
        hay.windows(needle.len())
            .position(|w| w == needle)
            .unwrap_or(NPOS)
    }

    /// Returns `true` if `needle` occurs anywhere in the content.
    #[inline]
    pub fn contains_bytes<B: AsRef<[u8]> + ?Sized>(&self, needle: &B) -> bool {
        self.find_bytes(needle) != NPOS
    }
}
