// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

// This file includes portions of code from https://github.com/erikgrinaker/toydb (Apache 2 License).
// Original Apache 2 License Copyright (c) erikgrinaker 2024.

use crate::codec::read_exact;
use crate::{Codec, Result};
use num_complex::{Complex32, Complex64};
use std::io::{Read, Write};

/// Floats are encoded in big-endian IEEE 754 form with the sign bit flipped
/// to order positive numbers after negative numbers, and all other bits
/// flipped for negative numbers to order them from smallest to largest.
///
/// The resulting byte order is the IEEE 754 total order: negative NaNs
/// first, then negative infinity, finite negatives, -0, +0, finite
/// positives, positive infinity, positive NaNs. Every NaN bit pattern keeps
/// a distinct encoding, and -0 and +0 are distinguishable even though IEEE
/// equality says they are equal.
macro_rules! float_codec {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Codec for $name {
            type Value = $ty;

            fn encode_into<W: Write>(&self, writer: &mut W, value: &$ty) -> Result<()> {
                let mut bytes = value.to_be_bytes();
                match value.is_sign_negative() {
                    false => bytes[0] ^= 1 << 7, // positive, flip sign bit
                    true => bytes.iter_mut().for_each(|b| *b = !*b), // negative, flip all bits
                }
                writer.write_all(&bytes)?;
                Ok(())
            }

            fn decode_from<R: Read>(&self, reader: &mut R) -> Result<$ty> {
                let mut buf = [0u8; size_of::<$ty>()];
                read_exact(reader, &mut buf)?;
                match buf[0] >> 7 {
                    0 => buf.iter_mut().for_each(|b| *b = !*b), // negative, flip all bits
                    _ => buf[0] ^= 1 << 7,                      // positive, flip sign bit
                }
                Ok(<$ty>::from_be_bytes(buf))
            }

            fn requires_terminator(&self) -> bool {
                false
            }
        }
    };
}

float_codec!(
    /// 4-byte floats in the total-order encoding.
    F32Codec,
    f32
);
float_codec!(
    /// 8-byte floats in the total-order encoding.
    F64Codec,
    f64
);

/// Complex numbers as the real part then the imaginary part, each in the
/// float encoding of matching width. This defines a byte order for keys,
/// not a numeric order on complex numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Complex32Codec;

impl Codec for Complex32Codec {
    type Value = Complex32;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Complex32) -> Result<()> {
        F32Codec.encode_into(writer, &value.re)?;
        F32Codec.encode_into(writer, &value.im)
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Complex32> {
        let re = F32Codec.decode_from(reader)?;
        let im = F32Codec.decode_from(reader)?;
        Ok(Complex32::new(re, im))
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

/// 16-byte complex numbers, see [`Complex32Codec`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Complex64Codec;

impl Codec for Complex64Codec {
    type Value = Complex64;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Complex64) -> Result<()> {
        F64Codec.encode_into(writer, &value.re)?;
        F64Codec.encode_into(writer, &value.im)
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Complex64> {
        let re = F64Codec.decode_from(reader)?;
        let im = F64Codec.decode_from(reader)?;
        Ok(Complex64::new(re, im))
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_total_order() {
        let values = [
            f64::NEG_INFINITY,
            f64::MIN,
            -1.5,
            -f64::MIN_POSITIVE,      // largest negative normal magnitude-wise smallest
            -f64::from_bits(1),      // negative subnormal closest to zero
            -0.0,
            0.0,
            f64::from_bits(1),       // positive subnormal
            f64::MIN_POSITIVE,
            1.5,
            f64::MAX,
            f64::INFINITY,
            f64::NAN,
        ];
        let mut previous: Option<Vec<u8>> = None;
        for value in values {
            let bytes = F64Codec.encode(&value).unwrap();
            if let Some(previous) = previous {
                assert!(previous < bytes, "{value} did not sort after its predecessor");
            }
            previous = Some(bytes);
        }
    }

    #[test]
    fn test_f64_round_trips_bit_patterns() {
        for value in [0.0, -0.0, 1.0, -1.0, f64::NAN, -f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let bytes = F64Codec.encode(&value).unwrap();
            let decoded = F64Codec.decode(&bytes).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_zeroes_are_distinct_encodings() {
        let positive = F64Codec.encode(&0.0).unwrap();
        let negative = F64Codec.encode(&-0.0).unwrap();
        assert!(negative < positive);
    }

    #[test]
    fn test_f32_round_trip_and_order() {
        let values = [f32::NEG_INFINITY, -2.5f32, -0.0, 0.0, 3.25, f32::INFINITY];
        let mut previous: Option<Vec<u8>> = None;
        for value in values {
            let bytes = F32Codec.encode(&value).unwrap();
            assert_eq!(F32Codec.decode(&bytes).unwrap().to_bits(), value.to_bits());
            if let Some(previous) = previous {
                assert!(previous < bytes);
            }
            previous = Some(bytes);
        }
    }

    #[test]
    fn test_complex_round_trip() {
        let value = Complex64::new(-1.25, 7.5);
        let bytes = Complex64Codec.encode(&value).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(Complex64Codec.decode(&bytes).unwrap(), value);

        let value = Complex32::new(0.5, -0.5);
        assert_eq!(Complex32Codec.decode(&Complex32Codec.encode(&value).unwrap()).unwrap(), value);
    }
}
