// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`ByteString`](crate::ByteString).
//!
//! - `IntoIter` hands out the content bytes by value. It reuses the string's
//!   allocation; the sentinel and spare capacity are never yielded.
//! - `&ByteString` and `&mut ByteString` iterate as slices; `.rev()` walks
//!   the reverse range.

// Crate imports
use crate::string::ByteString;

// Alloc imports
use alloc::vec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `ByteString::into_iter()`.
#[derive(Debug, Clone)]
pub struct IntoIter {
    inner: vec::IntoIter<u8>,
}

impl IntoIter {
    /// Returns the bytes not yet yielded.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_slice()
    }
}

impl Iterator for IntoIter {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<u8> {
        self.inner.nth(n)
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        self.inner.next_back()
    }
}

impl FusedIterator for IntoIter {}
impl ExactSizeIterator for IntoIter {}

impl IntoIterator for ByteString {
    type Item = u8;
    type IntoIter = IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a ByteString {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes().iter()
    }
}

impl<'a> IntoIterator for &'a mut ByteString {
    type Item = &'a mut u8;
    type IntoIter = core::slice::IterMut<'a, u8>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_bytes().iter_mut()
    }
}
