// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`ByteString`](crate::ByteString).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics on out-of-bounds;
//! - supports `usize` and every standard range form;
//! - views are restricted to the content `[0..len)`, never the sentinel.
//!
//! Use [`ByteString::at`](crate::ByteString::at) for a checked lookup.

// Crate imports
use crate::string::ByteString;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<I: SliceIndex<[u8]>> Index<I> for ByteString {
    type Output = I::Output;
    fn index(&self, i: I) -> &Self::Output {
        &self.as_bytes()[i]
    }
}

impl<I: SliceIndex<[u8]>> IndexMut<I> for ByteString {
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_bytes()[i]
    }
}
