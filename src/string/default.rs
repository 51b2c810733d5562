// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::string::ByteString;

impl Default for ByteString {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
