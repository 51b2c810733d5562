// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `ByteString` type and its inherent API.
//!
//! `ByteString` is a growable byte string backed by a single heap buffer.
//! It tracks a logical length and keeps a zero sentinel right after the last
//! logical byte. Methods generally mirror slice/`Vec` semantics, with explicit
//! `Result`s wherever memory may be allocated.

mod access;
mod as_ptr;
mod assign;
mod compare;
mod default;
mod extend;
mod find;
mod from;
mod growth;
mod new;
mod pop;
mod push;
mod resize;
mod slice;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// Returned by the search methods when nothing matches.
pub const NPOS: usize = usize::MAX;

/// A growable, heap-allocated byte string with a zero sentinel.
///
/// `ByteString` owns a buffer of `capacity` bytes and tracks a logical length
/// `len`. Conceptually it is a `Vec<u8>` that always keeps one spare byte
/// holding `0` right after the content:
///
/// - `buf[..len]` is the content and is what slices, indexing, iteration and
///   comparisons see;
/// - `buf[len]` is always `0` and is not counted in `len`;
/// - `buf[len + 1..capacity]` is spare room.
///
/// # Growth policy
///
/// When an operation needs `n` bytes of capacity and the buffer is smaller,
/// the new capacity is the next power of two `>= n` (with requests of `0` and
/// `1` both mapping to `1`). Capacity never shrinks; [`clear`], [`truncate`],
/// [`pop`] and shrinking [`resize`] calls keep the allocation.
///
/// Freshly constructed strings are an exception: [`new`] allocates exactly
/// [`INITIAL_CAPACITY`] byte and [`try_from_bytes`] allocates exactly
/// `src.len() + 1`.
///
/// # Failure semantics
///
/// Every method that may allocate returns `Result<_, Error>`. A failed call
/// leaves the string untouched: the old buffer stays valid and the old
/// contents are still there.
///
/// # Ownership
///
/// The buffer is released when the `ByteString` is dropped. Two strings can
/// trade their buffers with [`swap_with`] without copying any bytes.
///
/// # Examples
///
/// ```rust
/// use heap_bytestring::ByteString;
///
/// let mut s = ByteString::from("abc");
/// assert_eq!(s.capacity(), 4);
///
/// s.resize(0).unwrap();
/// s.resize(3).unwrap();
/// assert_eq!(s.as_bytes(), b"\0\0\0");
///
/// s.assign(b"hello").unwrap();
/// assert_eq!(s.capacity(), 8);
/// assert_eq!(s.back(), Some(b'o'));
/// ```
///
/// [`clear`]: ByteString::clear
/// [`truncate`]: ByteString::truncate
/// [`pop`]: ByteString::pop
/// [`resize`]: ByteString::resize
/// [`new`]: ByteString::new
/// [`try_from_bytes`]: ByteString::try_from_bytes
/// [`swap_with`]: ByteString::swap_with
/// [`INITIAL_CAPACITY`]: ByteString::INITIAL_CAPACITY
#[derive(Clone)]
pub struct ByteString {
    // `buf.len()` is the capacity; every byte of it is initialized.
    pub(crate) buf: Vec<u8>,
    pub(crate) len: usize,
}

impl ByteString {
    /// Capacity of a string built with [`ByteString::new`].
    pub const INITIAL_CAPACITY: usize = 1;

    /// Returns the number of allocated bytes, sentinel included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the logical length in bytes.
    #[doc(alias = "size")]
    #[doc(alias = "length")]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets `len = 0`. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.write_sentinel();
    }

    /// Exchanges the buffers, lengths and capacities of `self` and `other`.
    ///
    /// No bytes are copied.
    #[doc(alias = "swap")]
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    #[inline]
    pub(crate) fn write_sentinel(&mut self) {
        self.buf[self.len] = 0;
    }
}

// Shows the content as an escaped byte-string literal.
struct Escaped<'a>(&'a [u8]);

impl fmt::Debug for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.0.escape_ascii())
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteString")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("bytes", &Escaped(self.as_bytes()))
            .finish()
    }
}

impl fmt::Write for ByteString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.extend_from_slice(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl Eq for ByteString {}
impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}
impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}
impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}
impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Deref for ByteString {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}
impl DerefMut for ByteString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_bytes()
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
impl AsMut<[u8]> for ByteString {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_mut_bytes()
    }
}

// Borrow ergonomics (treat as a slice)
impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}
impl BorrowMut<[u8]> for ByteString {
    fn borrow_mut(&mut self) -> &mut [u8] {
        self.as_mut_bytes()
    }
}
