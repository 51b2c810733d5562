// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::string::ByteString;

impl ByteString {
    /// Returns a raw pointer to the first byte of the buffer.
    ///
    /// The pointer addresses `capacity()` initialized bytes. The first `len`
    /// are the content and byte `len` is the zero sentinel, so the pointer can
    /// be passed to consumers expecting a NUL-terminated sequence.
    ///
    /// The pointer is invalidated by any call that may grow the string.
    #[doc(alias = "cbegin")]
    #[inline]
    pub fn begin(&self) -> *const u8 {
        self.buf.as_ptr()
    }

    /// Returns a raw pointer one past the last content byte (at the sentinel).
    ///
    /// `[begin(), end())` is the forward range.
    #[doc(alias = "cend")]
    #[inline]
    pub fn end(&self) -> *const u8 {
        self.begin().wrapping_add(self.len)
    }

    /// Returns a raw pointer to the last content byte.
    ///
    /// `[rbegin(), rend())` walked backwards is the reverse range. For an
    /// empty string `rbegin() == rend()`.
    #[doc(alias = "crbegin")]
    #[inline]
    pub fn rbegin(&self) -> *const u8 {
        self.end().wrapping_sub(1)
    }

    /// Returns a raw pointer one before the first byte.
    ///
    /// This position is outside the buffer and must never be dereferenced.
    #[doc(alias = "crend")]
    #[inline]
    pub fn rend(&self) -> *const u8 {
        self.begin().wrapping_sub(1)
    }

    /// Mutable counterpart of [`begin`](Self::begin).
    ///
    /// Writing at or past `len` through this pointer does **not** update
    /// `len`, and overwriting the sentinel breaks consumers that rely on it.
    #[inline]
    pub fn begin_mut(&mut self) -> *mut u8 {
        self.buf.as_mut_ptr()
    }

    /// Mutable counterpart of [`end`](Self::end).
    #[inline]
    pub fn end_mut(&mut self) -> *mut u8 {
        let len = self.len;
        self.begin_mut().wrapping_add(len)
    }

    /// Mutable counterpart of [`rbegin`](Self::rbegin).
    #[inline]
    pub fn rbegin_mut(&mut self) -> *mut u8 {
        self.end_mut().wrapping_sub(1)
    }

    /// Mutable counterpart of [`rend`](Self::rend).
    #[inline]
    pub fn rend_mut(&mut self) -> *mut u8 {
        self.begin_mut().wrapping_sub(1)
    }
}
