// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::escape::{InvertingReader, InvertingWriter};
use crate::terminate::{decode_element, encode_element};
use crate::{Codec, Result};
use std::io::{Read, Write};

/// Reverses the order of the wrapped codec.
///
/// The inner encoding goes through the terminator discipline first, then
/// every byte is complemented, the trailing terminator included. Flipping
/// bits alone is wrong whenever one encoding is a proper prefix of
/// another: the longer one would still sort after the shorter one. The
/// frame ends both encodings at the split point, and complementing the
/// framed bytes then reverses the comparison everywhere. A codec that is
/// already unambiguous needs no frame, so only its payload bytes flip.
#[derive(Clone, Copy, Debug, Default)]
pub struct Negate<C> {
    inner: C,
}

impl<C: Codec> Negate<C> {
    /// Wraps an inner codec.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Codec> Codec for Negate<C> {
    type Value = C::Value;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Self::Value) -> Result<()> {
        let mut writer = InvertingWriter::new(writer);
        encode_element(&self.inner, &mut writer, value)
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Self::Value> {
        let mut reader = InvertingReader::new(reader);
        decode_element(&self.inner, &mut reader)
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::I32Codec;
    use crate::text::TextCodec;

    #[test]
    fn test_reverses_integer_order() {
        let codec = Negate::new(I32Codec);
        let values = [i32::MAX, 100, 1, 0, -1, -100, i32::MIN];
        let mut previous: Option<Vec<u8>> = None;
        for value in values {
            let bytes = codec.encode(&value).unwrap();
            assert_eq!(codec.decode(&bytes).unwrap(), value);
            if let Some(previous) = previous {
                assert!(previous < bytes, "{value} did not sort after its predecessor");
            }
            previous = Some(bytes);
        }
    }

    #[test]
    fn test_reverses_prefix_related_texts() {
        // "ab" extends "a"; negated, the longer value must sort first.
        let codec = Negate::new(TextCodec);
        let longer = codec.encode(&"ab".to_string()).unwrap();
        let shorter = codec.encode(&"a".to_string()).unwrap();
        assert!(longer < shorter);
        assert_eq!(codec.decode(&longer).unwrap(), "ab");
    }

    #[test]
    fn test_framed_terminator_is_complemented() {
        let codec = Negate::new(TextCodec);
        assert_eq!(codec.encode(&"ab".to_string()).unwrap(), [!b'a', !b'b', 0xff]);
    }

    #[test]
    fn test_double_negation_restores_order() {
        let codec = Negate::new(Negate::new(I32Codec));
        let small = codec.encode(&-5).unwrap();
        let large = codec.encode(&5).unwrap();
        assert!(small < large);
        assert_eq!(codec.decode(&small).unwrap(), -5);
    }

    #[test]
    fn test_round_trip_leaves_suffix() {
        let codec = Negate::new(TextCodec);
        let mut bytes = codec.encode(&"key".to_string()).unwrap();
        bytes.extend([0x12, 0x34]);
        let mut reader = bytes.as_slice();
        assert_eq!(codec.decode_from(&mut reader).unwrap(), "key");
        assert_eq!(reader, [0x12, 0x34]);
    }
}
