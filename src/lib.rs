// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `heap-bytestring`
//!
//! A `no_std` + `alloc`, heap-backed, growable byte string **with no `unsafe`**.
//!
//! The core type, [`ByteString`], owns a contiguous heap buffer of `capacity`
//! bytes and tracks a logical length `len`. The byte just past the logical end
//! is always a zero sentinel, so the buffer can be handed to consumers that
//! expect a NUL-terminated sequence (see [`ByteString::as_c_str`]).
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You work with raw byte strings rather than decoded text.
//! - You need a terminated view of the contents at all times.
//! - You want growth failures reported as errors instead of aborting.
//!
//! It may not be the best fit if:
//!
//! - You need Unicode awareness. All indices and lengths are byte offsets.
//! - You want `Vec`'s amortized growth without the sentinel byte.
//!
//! ## High-level semantics
//!
//! - `capacity() >= len() + 1` always holds; the extra byte holds the sentinel.
//! - Growth rounds the requested capacity up to the next power of two and
//!   never shrinks.
//! - Every operation that may allocate returns `Result<_, Error>`:
//!   - [`Error::AllocFailed`] when the allocator refuses the request;
//!   - [`Error::CapacityOverflow`] when the rounded capacity does not fit in `usize`.
//!
//!   On error the string is left exactly as it was.
//! - Searches return [`NPOS`] (`usize::MAX`) when nothing matches.
//! - [`ByteString::front`] / [`ByteString::back`] return `None` when empty.
//! - [`ByteString::at`] is checked and returns [`Error::OutOfBounds`];
//!   indexing with `s[i]` panics, exactly like slices.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `ByteString`.
//!   - Serialized as a byte string; deserialized from bytes, strings or
//!     sequences of `u8`.
//!
//! - `tracing`
//!   - Emits `debug` events when the buffer grows and `warn` events when
//!     growth fails.
//!
//! ## Example
//!
//! ```rust
//! use heap_bytestring::{ByteString, NPOS};
//!
//! let mut s = ByteString::new();
//! s.push(b'a').unwrap();
//! s.extend_from_slice(b"bc").unwrap();
//! assert_eq!(s.as_bytes(), b"abc");
//! assert_eq!(s.as_bytes_with_nul(), b"abc\0");
//! assert_eq!(s.capacity(), 4);
//!
//! assert_eq!(s.find_bytes("bc"), 1);
//! assert_eq!(s.find_char(b'x'), NPOS);
//! ```
//!
//! See [`ByteString`] for detailed behavior, including the growth policy and
//! the raw boundary accessors.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod string;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use string::{ByteString, NPOS};
