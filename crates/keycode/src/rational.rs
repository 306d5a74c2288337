// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::bigint::BigIntCodec;
use crate::{Codec, Result, invalid_value};
use num_rational::BigRational;
use num_traits::Signed;
use std::io::{Read, Write};

/// Arbitrary-precision rationals as the numerator followed by the
/// denominator, each in the arbitrary-precision integer form. The
/// denominator of a normalized rational is always positive and the pair is
/// reduced, so equal rationals share one encoding; decoding rejects a
/// non-positive denominator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RationalCodec;

impl Codec for RationalCodec {
    type Value = BigRational;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &BigRational) -> Result<()> {
        BigIntCodec.encode_into(writer, value.numer())?;
        BigIntCodec.encode_into(writer, value.denom())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<BigRational> {
        let numer = BigIntCodec.decode_from(reader)?;
        let denom = BigIntCodec.decode_from(reader)?;
        if !denom.is_positive() {
            return invalid_value!("denominator {denom} is not positive");
        }
        Ok(BigRational::new(numer, denom))
    }

    fn requires_terminator(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn rational(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn test_round_trip() {
        for value in [rational(0, 1), rational(1, 2), rational(-22, 7), rational(355, 113)] {
            let bytes = RationalCodec.encode(&value).unwrap();
            assert_eq!(RationalCodec.decode(&bytes).unwrap(), value);
        }
    }

    #[test]
    fn test_numerator_sorts_first() {
        let negative = RationalCodec.encode(&rational(-1, 3)).unwrap();
        let zero = RationalCodec.encode(&rational(0, 1)).unwrap();
        let positive = RationalCodec.encode(&rational(2, 3)).unwrap();
        assert!(negative < zero);
        assert!(zero < positive);
    }

    #[test]
    fn test_rejects_bad_denominator() {
        let mut bytes = BigIntCodec.encode(&BigInt::from(1)).unwrap();
        bytes.extend(BigIntCodec.encode(&BigInt::from(-2)).unwrap());
        assert!(RationalCodec.decode(&bytes).is_err());

        let mut bytes = BigIntCodec.encode(&BigInt::from(1)).unwrap();
        bytes.extend(BigIntCodec.encode(&BigInt::from(0)).unwrap());
        assert!(RationalCodec.decode(&bytes).is_err());
    }
}
