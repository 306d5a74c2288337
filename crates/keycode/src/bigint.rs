// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::codec::read_exact;
use crate::escape::{InvertingReader, InvertingWriter};
use crate::int::I64Codec;
use crate::{Codec, Result, invalid_value};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::io::{Read, Write};

/// Arbitrary-precision integers.
///
/// A signed byte-count header comes first: the magnitude's byte length,
/// negated for negative values, through the 8-byte signed encoding. The
/// magnitude bytes follow big-endian with no leading zero, complemented for
/// negative values so that among negatives of equal length the larger
/// magnitude sorts first. Zero is the bare zero header.
///
/// The header makes the encoding self-delimiting: large negatives sort
/// before small negatives, which sort before zero and then non-negatives of
/// growing magnitude.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigIntCodec;

impl Codec for BigIntCodec {
    type Value = BigInt;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &BigInt) -> Result<()> {
        if value.is_zero() {
            return I64Codec.encode_into(writer, &0);
        }
        let (sign, magnitude) = value.to_bytes_be();
        let count = magnitude.len() as i64;
        if sign == Sign::Minus {
            I64Codec.encode_into(writer, &-count)?;
            InvertingWriter::new(writer).write_all(&magnitude)?;
        } else {
            I64Codec.encode_into(writer, &count)?;
            writer.write_all(&magnitude)?;
        }
        Ok(())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<BigInt> {
        let count = I64Codec.decode_from(reader)?;
        if count == 0 {
            return Ok(BigInt::zero());
        }
        let negative = count < 0;
        let Ok(count) = usize::try_from(count.unsigned_abs()) else {
            return invalid_value!("big integer of {count} bytes exceeds the platform width");
        };
        let mut magnitude = vec![0u8; count];
        if negative {
            read_exact(&mut InvertingReader::new(reader), &mut magnitude)?;
        } else {
            read_exact(reader, &mut magnitude)?;
        }
        if magnitude[0] == 0 {
            return invalid_value!("big integer magnitude has a leading zero byte");
        }
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_bytes_be(sign, &magnitude))
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: i64) -> Vec<u8> {
        BigIntCodec.encode(&BigInt::from(value)).unwrap()
    }

    #[test]
    fn test_zero_is_bare_header() {
        assert_eq!(encode(0), I64Codec.encode(&0).unwrap());
    }

    #[test]
    fn test_negative_vector() {
        // -256: two magnitude bytes {0x01, 0x00}, complemented, after a -2 header.
        let mut expected = I64Codec.encode(&-2).unwrap();
        expected.extend([0xfe, 0xff]);
        assert_eq!(encode(-256), expected);
    }

    #[test]
    fn test_positive_vector() {
        let mut expected = I64Codec.encode(&2).unwrap();
        expected.extend([0x01, 0x00]);
        assert_eq!(encode(256), expected);
    }

    #[test]
    fn test_round_trip() {
        for value in [
            BigInt::zero(),
            BigInt::from(1),
            BigInt::from(-1),
            BigInt::from(i64::MAX) * BigInt::from(i64::MAX),
            -(BigInt::from(u64::MAX) * BigInt::from(u64::MAX) * BigInt::from(3)),
        ] {
            let bytes = BigIntCodec.encode(&value).unwrap();
            assert_eq!(BigIntCodec.decode(&bytes).unwrap(), value);
        }
    }

    #[test]
    fn test_order() {
        let values = [-65536i64, -65535, -256, -255, -2, -1, 0, 1, 2, 255, 256, 65535, 65536];
        let mut previous: Option<Vec<u8>> = None;
        for value in values {
            let bytes = encode(value);
            if let Some(previous) = previous {
                assert!(previous < bytes, "{value} did not sort after its predecessor");
            }
            previous = Some(bytes);
        }
    }

    #[test]
    fn test_rejects_leading_zero_magnitude() {
        let mut bytes = I64Codec.encode(&2).unwrap();
        bytes.extend([0x00, 0x01]);
        assert!(BigIntCodec.decode(&bytes).is_err());
    }

    #[test]
    fn test_decode_leaves_suffix() {
        let mut bytes = encode(-256);
        bytes.extend([0xaa]);
        let mut reader = bytes.as_slice();
        assert_eq!(BigIntCodec.decode_from(&mut reader).unwrap(), BigInt::from(-256));
        assert_eq!(reader, [0xaa]);
    }
}
