// This file is part of heap-bytestring.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`ByteString`](crate::ByteString).
//!
//! - **Serialize**: as a byte string (`serialize_bytes`); the sentinel is
//!   not part of the output.
//! - **Deserialize**: from bytes, byte buffers, strings, or any sequence of
//!   `u8`. Growth failures are reported through the deserializer's error.

// Crate imports
use crate::string::ByteString;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for ByteString {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bytes(self.as_bytes())
    }
}

// Upper bound on the bytes reserved up front from a sequence's size hint.
// Larger sequences still grow as elements arrive.
const MAX_PREALLOC: usize = 4096;

struct ByteStringVisitor;

impl<'de> de::Visitor<'de> for ByteStringVisitor {
    type Value = ByteString;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a byte string or sequence of bytes")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        ByteString::try_from_bytes(v).map_err(E::custom)
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(ByteString::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        ByteString::try_from_bytes(v.as_bytes()).map_err(E::custom)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = ByteString::try_new().map_err(de::Error::custom)?;
        if let Some(hint) = a.size_hint() {
            out.reserve_for(hint.min(MAX_PREALLOC))
                .map_err(de::Error::custom)?;
        }
        while let Some(byte) = a.next_element::<u8>()? {
            out.push(byte).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for ByteString {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_byte_buf(ByteStringVisitor)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{ByteStringVisitor, MAX_PREALLOC};
    use crate::ByteString;
    use serde::de::{self, Visitor};

    // Claims a huge length but yields no elements.
    struct OversizedHint;

    impl<'de> de::SeqAccess<'de> for OversizedHint {
        type Error = de::value::Error;

        fn next_element_seed<T: de::DeserializeSeed<'de>>(
            &mut self,
            _seed: T,
        ) -> Result<Option<T::Value>, Self::Error> {
            Ok(None)
        }

        fn size_hint(&self) -> Option<usize> {
            Some(1 << 28)
        }
    }

    #[test]
    fn test_serde_roundtrip_json() {
        let s = ByteString::from("hi");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[104,105]");
        let back: ByteString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "hi");
        assert_eq!(back.as_bytes_with_nul(), b"hi\0");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let s = ByteString::new();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[]");
        let back: ByteString = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_seq_size_hint_is_capped() {
        let s = ByteStringVisitor.visit_seq(OversizedHint).unwrap();
        assert!(s.is_empty());
        assert!(s.capacity() <= (MAX_PREALLOC + 1).next_power_of_two());
    }

    #[test]
    fn test_deserialize_long_sequence_past_prealloc() {
        let bytes: std::vec::Vec<u8> = (0..MAX_PREALLOC + 10).map(|i| i as u8).collect();
        let json = serde_json::to_string(&bytes).unwrap();
        let s: ByteString = serde_json::from_str(&json).unwrap();
        assert_eq!(s.as_bytes(), &bytes[..]);
    }

    #[test]
    fn test_deserialize_from_json_string() {
        let s: ByteString = serde_json::from_str(r#""text""#).unwrap();
        assert_eq!(s, "text");
    }

    #[test]
    fn test_serialize_ignores_spare_capacity() {
        let mut s = ByteString::from("abcdef");
        s.truncate(1);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[97]");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_element() {
        assert!(serde_json::from_str::<ByteString>("[1,256]").is_err());
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<ByteString>(r#"{"not":"bytes"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("a byte string or sequence of bytes"),
            "unexpected error message: {msg}"
        );
    }
}
