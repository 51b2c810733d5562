// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::string::ByteString;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::ffi::CStr;

impl ByteString {
    /// Returns the logical content as a shared slice (`&buf[..len]`).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the logical content as a mutable slice (`&mut buf[..len]`).
    ///
    /// The sentinel is outside the returned slice and cannot be overwritten.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut self.buf[..len]
    }

    /// Returns the content followed by the zero sentinel (`&buf[..=len]`).
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Returns the content as a C string.
    ///
    /// The C string ends at the first zero byte, so content with interior
    /// zeros is cut short there.
    #[inline]
    pub fn as_c_str(&self) -> &CStr {
        // The sentinel guarantees a terminator, so this never falls back.
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// Consumes the string and returns its content as a `Vec<u8>`.
    ///
    /// The allocation is reused; the sentinel and spare bytes are dropped.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        let mut buf = self.buf;
        buf.truncate(self.len);
        buf
    }
}
