// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, string::ByteString};

impl ByteString {
    /// Replaces the whole content with a copy of `src`.
    ///
    /// On error the old content is kept.
    pub fn assign(&mut self, src: &[u8]) -> Result<(), Error> {
        let needed = src.len().checked_add(1).ok_or(Error::CapacityOverflow)?;
        self.reserve(needed)?;
        self.buf[..src.len()].copy_from_slice(src);
        self.len = src.len();
        self.write_sentinel();
        Ok(())
    }
}
