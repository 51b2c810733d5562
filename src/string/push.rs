// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, string::ByteString};

impl ByteString {
    /// Appends `byte`, growing if needed.
    ///
    /// On error the string is unchanged.
    #[doc(alias = "append_char")]
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        self.reserve_for(1)?;
        self.buf[self.len] = byte;
        self.len += 1;
        self.write_sentinel();
        Ok(())
    }

    /// Appends a copy of `src`, growing if needed.
    ///
    /// On error the string is unchanged.
    #[doc(alias = "append_bytes")]
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[u8]) -> Result<(), Error> {
        self.reserve_for(src.len())?;
        let len = self.len;
        self.buf[len..len + src.len()].copy_from_slice(src);
        self.len = len + src.len();
        self.write_sentinel();
        Ok(())
    }
}
