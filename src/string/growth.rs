// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, string::ByteString};

/// Rounds a capacity request up to the next power of two.
///
/// Requests of `0` and `1` both yield `1`.
#[inline]
pub(crate) fn grown_capacity(requested: usize) -> Result<usize, Error> {
    if requested <= 1 {
        return Ok(1);
    }
    requested
        .checked_next_power_of_two()
        .ok_or(Error::CapacityOverflow)
}

impl ByteString {
    /// Ensures `capacity() >= n`.
    ///
    /// If the buffer is too small it is reallocated to the next power of two
    /// `>= n`; existing content is kept. Never shrinks.
    ///
    /// Every byte of the new capacity is zeroed when it is allocated, so a
    /// growing call costs `O(capacity)` writes, not just a reallocation.
    ///
    /// On error (`AllocFailed` or `CapacityOverflow`) the string is unchanged.
    pub fn reserve(&mut self, n: usize) -> Result<(), Error> {
        let old = self.capacity();
        if n <= old {
            return Ok(());
        }
        let new_cap = grown_capacity(n)?;

        if let Err(e) = self.buf.try_reserve_exact(new_cap - old) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                requested = n,
                old_capacity = old,
                new_capacity = new_cap,
                "byte string growth failed"
            );
            return Err(e.into());
        }
        // Already reserved; this only zeroes the new tail.
        self.buf.resize(new_cap, 0);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            requested = n,
            old_capacity = old,
            new_capacity = new_cap,
            "byte string grown"
        );
        Ok(())
    }

    /// Makes room for `additional` more bytes plus the sentinel.
    #[inline]
    pub(crate) fn reserve_for(&mut self, additional: usize) -> Result<(), Error> {
        let needed = self
            .len
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(Error::CapacityOverflow)?;
        self.reserve(needed)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::grown_capacity;
    use crate::{ByteString, Error};

    #[test]
    fn test_grown_capacity_rounding() {
        assert_eq!(grown_capacity(0), Ok(1));
        assert_eq!(grown_capacity(1), Ok(1));
        assert_eq!(grown_capacity(2), Ok(2));
        assert_eq!(grown_capacity(3), Ok(4));
        assert_eq!(grown_capacity(5), Ok(8));
        assert_eq!(grown_capacity(8), Ok(8));
        assert_eq!(grown_capacity(9), Ok(16));
        assert_eq!(grown_capacity(1 << 20), Ok(1 << 20));
    }

    #[test]
    fn test_grown_capacity_overflow() {
        let top = 1usize << (usize::BITS - 1);
        assert_eq!(grown_capacity(top), Ok(top));
        assert_eq!(grown_capacity(top + 1), Err(Error::CapacityOverflow));
        assert_eq!(grown_capacity(usize::MAX), Err(Error::CapacityOverflow));
    }

    #[test]
    fn test_reserve_rounds_to_power_of_two() {
        let mut s = ByteString::new();
        s.reserve(5).unwrap();
        assert_eq!(s.capacity(), 8);
        s.reserve(8).unwrap();
        assert_eq!(s.capacity(), 8);
        s.reserve(9).unwrap();
        assert_eq!(s.capacity(), 16);
    }

    #[test]
    fn test_reserve_never_shrinks() {
        let mut s = ByteString::new();
        s.reserve(64).unwrap();
        s.reserve(0).unwrap();
        s.reserve(1).unwrap();
        s.reserve(10).unwrap();
        assert_eq!(s.capacity(), 64);
    }

    #[test]
    fn test_reserve_zero_on_fresh_string() {
        let mut s = ByteString::new();
        s.reserve(0).unwrap();
        assert_eq!(s.capacity(), 1);
    }

    #[test]
    fn test_reserve_keeps_content() {
        let mut s = ByteString::from("abc");
        s.reserve(100).unwrap();
        assert_eq!(s.capacity(), 128);
        assert_eq!(s.as_bytes_with_nul(), b"abc\0");
    }

    #[test]
    fn test_reserve_overflow_leaves_string_unchanged() {
        let mut s = ByteString::from("keep");
        assert_eq!(s.reserve(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(s, "keep");
        assert_eq!(s.capacity(), 5);
    }

    #[test]
    fn test_reserve_alloc_failure_leaves_string_unchanged() {
        // A power of two above `isize::MAX` is rejected by the allocator API.
        let huge = 1usize << (usize::BITS - 1);
        let mut s = ByteString::from("keep");
        assert_eq!(s.reserve(huge), Err(Error::AllocFailed));
        assert_eq!(s, "keep");
        assert_eq!(s.capacity(), 5);

        // Still usable afterwards.
        s.push(b'!').unwrap();
        assert_eq!(s, "keep!");
    }

    #[test]
    fn test_reserve_for_overflow() {
        let mut s = ByteString::from("x");
        assert_eq!(s.reserve_for(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(s, "x");
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn test_growth_is_traced() {
        let mut s = ByteString::new();
        s.reserve(5).unwrap();
        assert!(logs_contain("byte string grown"));
        assert!(logs_contain("new_capacity=8"));

        let _ = s.reserve(1usize << (usize::BITS - 1));
        assert!(logs_contain("byte string growth failed"));
    }
}
