// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::string::ByteString;

// Alloc imports
use alloc::vec::Vec;

impl From<&[u8]> for ByteString {
    /// Copies `src`; the capacity is `src.len() + 1`.
    ///
    /// Aborts on allocation failure; see [`ByteString::try_from_bytes`].
    fn from(src: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(src.len() + 1);
        buf.extend_from_slice(src);
        buf.push(0);
        Self {
            buf,
            len: src.len(),
        }
    }
}

impl<const M: usize> From<&[u8; M]> for ByteString {
    fn from(src: &[u8; M]) -> Self {
        Self::from(&src[..])
    }
}

impl From<&str> for ByteString {
    fn from(src: &str) -> Self {
        Self::from(src.as_bytes())
    }
}

impl From<Vec<u8>> for ByteString {
    /// Takes over the vector's allocation and appends the sentinel.
    fn from(mut buf: Vec<u8>) -> Self {
        let len = buf.len();
        buf.push(0);
        Self { buf, len }
    }
}

impl From<ByteString> for Vec<u8> {
    fn from(s: ByteString) -> Self {
        s.into_vec()
    }
}
