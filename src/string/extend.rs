// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, string::ByteString};

impl ByteString {
    /// Appends every byte yielded by `iter`, all-or-nothing.
    ///
    /// Room is reserved up front for the iterator's lower size bound, and
    /// again from the remaining bound whenever the buffer fills up. If growing
    /// fails part-way, the bytes appended so far are removed again and the
    /// error is returned. The capacity gained before the failure is kept. The
    /// source iterator may be partially consumed on error.
    pub fn try_extend_from_iter<I: IntoIterator<Item = u8>>(
        &mut self,
        iter: I,
    ) -> Result<(), Error> {
        let mut iter = iter.into_iter();
        let start = self.len;

        let (lower, _) = iter.size_hint();
        self.reserve_for(lower)?;
        while let Some(byte) = iter.next() {
            if self.len + 1 == self.capacity() {
                let (lower, _) = iter.size_hint();
                if let Err(e) = self.reserve_for(lower.saturating_add(1)) {
                    self.truncate(start);
                    return Err(e);
                }
            }
            self.buf[self.len] = byte;
            self.len += 1;
            self.write_sentinel();
        }
        Ok(())
    }
}
