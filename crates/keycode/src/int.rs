// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

// This file includes portions of code from https://github.com/erikgrinaker/toydb (Apache 2 License).
// Original Apache 2 License Copyright (c) erikgrinaker 2024.

use crate::codec::read_exact;
use crate::{Codec, Result, invalid_value};
use std::io::{Read, Write};

/// Booleans as a single byte, 0 for false and 1 for true. Any other byte
/// fails to decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolCodec;

impl Codec for BoolCodec {
    type Value = bool;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &bool) -> Result<()> {
        writer.write_all(&[u8::from(*value)])?;
        Ok(())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<bool> {
        let mut buf = [0u8; 1];
        read_exact(reader, &mut buf)?;
        match buf[0] {
            0x00 => Ok(false),
            0x01 => Ok(true),
            byte => invalid_value!("invalid boolean byte {byte:#04x}"),
        }
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

/// Unsigned integers use the big-endian encoding, which already compares
/// correctly byte-wise.
macro_rules! unsigned_codec {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Codec for $name {
            type Value = $ty;

            fn encode_into<W: Write>(&self, writer: &mut W, value: &$ty) -> Result<()> {
                writer.write_all(&value.to_be_bytes())?;
                Ok(())
            }

            fn decode_from<R: Read>(&self, reader: &mut R) -> Result<$ty> {
                let mut buf = [0u8; size_of::<$ty>()];
                read_exact(reader, &mut buf)?;
                Ok(<$ty>::from_be_bytes(buf))
            }

            fn requires_terminator(&self) -> bool {
                false
            }
        }
    };
}

/// Signed integers use the big-endian two's complement encoding with the
/// left-most sign bit flipped, ordering negative numbers before positive
/// numbers.
///
/// The relative ordering of the remaining bits is already correct: -1, the
/// largest negative integer, is encoded as 01111111...11111111, ordered
/// after all other negative integers but before positive integers.
macro_rules! signed_codec {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Codec for $name {
            type Value = $ty;

            fn encode_into<W: Write>(&self, writer: &mut W, value: &$ty) -> Result<()> {
                let mut bytes = value.to_be_bytes();
                bytes[0] ^= 1 << 7; // flip sign bit
                writer.write_all(&bytes)?;
                Ok(())
            }

            fn decode_from<R: Read>(&self, reader: &mut R) -> Result<$ty> {
                let mut buf = [0u8; size_of::<$ty>()];
                read_exact(reader, &mut buf)?;
                buf[0] ^= 1 << 7; // flip sign bit
                Ok(<$ty>::from_be_bytes(buf))
            }

            fn requires_terminator(&self) -> bool {
                false
            }
        }
    };
}

unsigned_codec!(
    /// 1-byte unsigned integers.
    U8Codec,
    u8
);
unsigned_codec!(
    /// 2-byte unsigned integers, big-endian.
    U16Codec,
    u16
);
unsigned_codec!(
    /// 4-byte unsigned integers, big-endian.
    U32Codec,
    u32
);
unsigned_codec!(
    /// 8-byte unsigned integers, big-endian.
    U64Codec,
    u64
);

signed_codec!(
    /// 1-byte signed integers, sign bit flipped.
    I8Codec,
    i8
);
signed_codec!(
    /// 2-byte signed integers, big-endian with the sign bit flipped.
    I16Codec,
    i16
);
signed_codec!(
    /// 4-byte signed integers, big-endian with the sign bit flipped.
    I32Codec,
    i32
);
signed_codec!(
    /// 8-byte signed integers, big-endian with the sign bit flipped.
    I64Codec,
    i64
);

/// Platform-width unsigned integers, widened through the 8-byte encoding.
/// Decoding fails when the value does not fit the platform width.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsizeCodec;

impl Codec for UsizeCodec {
    type Value = usize;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &usize) -> Result<()> {
        U64Codec.encode_into(writer, &(*value as u64))
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<usize> {
        let value = U64Codec.decode_from(reader)?;
        match usize::try_from(value) {
            Ok(value) => Ok(value),
            Err(_) => invalid_value!("value {value} overflows the platform width"),
        }
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

/// Platform-width signed integers, widened through the 8-byte encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsizeCodec;

impl Codec for IsizeCodec {
    type Value = isize;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &isize) -> Result<()> {
        I64Codec.encode_into(writer, &(*value as i64))
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<isize> {
        let value = I64Codec.decode_from(reader)?;
        match isize::try_from(value) {
            Ok(value) => Ok(value),
            Err(_) => invalid_value!("value {value} overflows the platform width"),
        }
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paste::paste;

    #[test]
    fn test_bool() {
        assert_eq!(BoolCodec.encode(&false).unwrap(), [0x00]);
        assert_eq!(BoolCodec.encode(&true).unwrap(), [0x01]);
        assert!(!BoolCodec.decode(&[0x00]).unwrap());
        assert!(BoolCodec.decode(&[0x01]).unwrap());
        assert!(BoolCodec.decode(&[0x02]).is_err());
    }

    #[test]
    fn test_i32_vectors() {
        assert_eq!(I32Codec.encode(&-1).unwrap(), [0x7f, 0xff, 0xff, 0xff]);
        assert_eq!(I32Codec.encode(&0).unwrap(), [0x80, 0x00, 0x00, 0x00]);
        assert_eq!(I32Codec.encode(&1).unwrap(), [0x80, 0x00, 0x00, 0x01]);
        assert_eq!(I32Codec.encode(&i32::MIN).unwrap(), [0x00, 0x00, 0x00, 0x00]);
        assert_eq!(I32Codec.encode(&i32::MAX).unwrap(), [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_u16_big_endian() {
        assert_eq!(U16Codec.encode(&0x1234).unwrap(), [0x12, 0x34]);
    }

    macro_rules! test_int_codec {
        ($codec:ident, $ty:ident, $values:expr) => {
            paste! {
                #[test]
                fn [<test_ $ty _round_trip_and_order>]() {
                    let values: &[$ty] = &$values;
                    let mut previous: Option<Vec<u8>> = None;
                    for value in values {
                        let bytes = $codec.encode(value).unwrap();
                        assert_eq!($codec.decode(&bytes).unwrap(), *value);
                        if let Some(previous) = previous {
                            assert!(previous < bytes, "{value} did not sort after its predecessor");
                        }
                        previous = Some(bytes);
                    }
                }
            }
        };
    }

    test_int_codec!(U8Codec, u8, [0, 1, 7, 200, u8::MAX]);
    test_int_codec!(U16Codec, u16, [0, 1, 256, u16::MAX]);
    test_int_codec!(U32Codec, u32, [0, 1, 1 << 20, u32::MAX]);
    test_int_codec!(U64Codec, u64, [0, 1, 1 << 40, u64::MAX]);
    test_int_codec!(I8Codec, i8, [i8::MIN, -1, 0, 1, i8::MAX]);
    test_int_codec!(I16Codec, i16, [i16::MIN, -256, -1, 0, 1, 256, i16::MAX]);
    test_int_codec!(I32Codec, i32, [i32::MIN, -100, -1, 0, 1, 100, i32::MAX]);
    test_int_codec!(I64Codec, i64, [i64::MIN, -(1 << 40), -1, 0, 1, 1 << 40, i64::MAX]);
    test_int_codec!(UsizeCodec, usize, [0, 1, usize::MAX]);
    test_int_codec!(IsizeCodec, isize, [isize::MIN, -1, 0, 1, isize::MAX]);

    #[test]
    fn test_truncated_input_is_unexpected_eof() {
        assert!(matches!(I32Codec.decode(&[0x80, 0x00]), Err(crate::Error::UnexpectedEof)));
        assert!(matches!(U64Codec.decode(&[]), Err(crate::Error::UnexpectedEof)));
    }

    #[test]
    fn test_decode_leaves_suffix() {
        let mut reader: &[u8] = &[0x80, 0x00, 0x00, 0x01, 0xab, 0xcd];
        assert_eq!(I32Codec.decode_from(&mut reader).unwrap(), 1);
        assert_eq!(reader, [0xab, 0xcd]);
    }
}
