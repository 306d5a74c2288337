// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::codec::require_byte;
use crate::escape::{InvertingReader, InvertingWriter, read_escaped, write_escaped};
use crate::int::{I8Codec, I32Codec};
use crate::{Codec, Error, Result, invalid_value};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::io::{Read, Write};

/// Rounding mode attached to a [`BigFloat`]. Carried through the encoding
/// as representational metadata; it does not participate in the ordering
/// between numerically distinct values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to the nearest value, ties to even.
    #[default]
    ToNearestEven = 0,
    /// Round to the nearest value, ties away from zero.
    ToNearestAway = 1,
    /// Round towards zero.
    ToZero = 2,
    /// Round away from zero.
    AwayFromZero = 3,
    /// Round towards negative infinity.
    ToNegativeInf = 4,
    /// Round towards positive infinity.
    ToPositiveInf = 5,
}

impl RoundingMode {
    fn from_byte(byte: u8) -> Result<Self> {
        Ok(match byte {
            0 => Self::ToNearestEven,
            1 => Self::ToNearestAway,
            2 => Self::ToZero,
            3 => Self::AwayFromZero,
            4 => Self::ToNegativeInf,
            5 => Self::ToPositiveInf,
            byte => return invalid_value!("invalid rounding mode byte {byte:#04x}"),
        })
    }
}

/// The class of a [`BigFloat`]. Declaration order is value order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
enum Class {
    NegativeInfinity,
    FiniteNegative,
    NegativeZero,
    PositiveZero,
    FinitePositive,
    PositiveInfinity,
}

impl Class {
    fn tag(self) -> i8 {
        match self {
            Self::NegativeInfinity => -3,
            Self::FiniteNegative => -2,
            Self::NegativeZero => -1,
            Self::PositiveZero => 1,
            Self::FinitePositive => 2,
            Self::PositiveInfinity => 3,
        }
    }

    fn from_tag(tag: i8) -> Result<Self> {
        Ok(match tag {
            -3 => Self::NegativeInfinity,
            -2 => Self::FiniteNegative,
            -1 => Self::NegativeZero,
            1 => Self::PositiveZero,
            2 => Self::FinitePositive,
            3 => Self::PositiveInfinity,
            tag => return invalid_value!("invalid class tag {tag}"),
        })
    }
}

/// An arbitrary-precision binary floating point value: a sign, a 4-byte
/// binary exponent, a variable-length mantissa, a precision in bits, and a
/// rounding mode.
///
/// A finite non-zero value is `±0.m × 2^exponent` where `m` is the mantissa
/// bit string and its leading bit is 1. The stored mantissa is
/// byte-normalized: its bit length is a multiple of 8, the high bit of the
/// high byte is set, and the low byte is non-zero. Zeroes and infinities
/// are signed and carry no exponent, mantissa, precision or rounding mode.
///
/// Two values that differ only in precision are numerically equal but
/// remain distinct values with distinct encodings; within a sign, higher
/// precision sorts further from zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigFloat {
    class: Class,
    exponent: i32,
    mantissa: BigUint,
    precision: u32,
    rounding: RoundingMode,
}

impl BigFloat {
    /// A signed zero.
    pub fn zero(negative: bool) -> Self {
        Self {
            class: if negative { Class::NegativeZero } else { Class::PositiveZero },
            exponent: 0,
            mantissa: BigUint::zero(),
            precision: 0,
            rounding: RoundingMode::ToNearestEven,
        }
    }

    /// A signed infinity.
    pub fn infinity(negative: bool) -> Self {
        Self {
            class: if negative { Class::NegativeInfinity } else { Class::PositiveInfinity },
            exponent: 0,
            mantissa: BigUint::zero(),
            precision: 0,
            rounding: RoundingMode::ToNearestEven,
        }
    }

    /// A finite value `±mantissa × 2^exponent`, normalized so that only the
    /// significant mantissa bits are kept. A zero mantissa yields the
    /// signed zero. Fails if the normalized exponent leaves the 4-byte
    /// range or if `precision` cannot hold the significant bits.
    pub fn from_parts(
        negative: bool,
        mantissa: BigUint,
        exponent: i64,
        precision: u32,
        rounding: RoundingMode,
    ) -> Result<Self> {
        if mantissa.is_zero() {
            return Ok(Self::zero(negative));
        }
        let bits = mantissa.bits();
        let trailing = mantissa.trailing_zeros().unwrap_or(0);
        let significant = bits - trailing;

        // Move the binary point to the left of the most significant bit.
        let exponent = exponent + bits as i64;
        let Ok(exponent) = i32::try_from(exponent) else {
            return invalid_value!("exponent {exponent} out of range");
        };
        if u64::from(precision) < significant {
            return invalid_value!("precision {precision} below {significant} mantissa bits");
        }
        if precision > i32::MAX as u32 {
            return invalid_value!("precision {precision} out of range");
        }

        // Byte-normalize: high bit of the high byte set, low byte non-zero.
        let pad = (8 - significant % 8) % 8;
        let mantissa = (mantissa >> trailing) << pad;
        Ok(Self {
            class: if negative { Class::FiniteNegative } else { Class::FinitePositive },
            exponent,
            mantissa,
            precision,
            rounding,
        })
    }

    /// True for negative values, including the negative zero and infinity.
    pub fn is_negative(&self) -> bool {
        matches!(self.class, Class::NegativeInfinity | Class::FiniteNegative | Class::NegativeZero)
    }

    /// True for the two infinities.
    pub fn is_infinite(&self) -> bool {
        matches!(self.class, Class::NegativeInfinity | Class::PositiveInfinity)
    }

    /// True for the two zeroes.
    pub fn is_zero(&self) -> bool {
        matches!(self.class, Class::NegativeZero | Class::PositiveZero)
    }

    /// The binary exponent. Zero for zeroes and infinities.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The byte-normalized mantissa. Zero for zeroes and infinities.
    pub fn mantissa(&self) -> &BigUint {
        &self.mantissa
    }

    /// The precision in bits. Zero for zeroes and infinities.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// The rounding mode.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

impl TryFrom<f64> for BigFloat {
    type Error = Error;

    /// Converts exactly; every finite or infinite f64 is representable
    /// with 53 bits of precision. NaN has no place in an ordering and is
    /// rejected.
    fn try_from(value: f64) -> Result<Self> {
        if value.is_nan() {
            return invalid_value!("NaN has no ordered representation");
        }
        let negative = value.is_sign_negative();
        if value.is_infinite() {
            return Ok(Self::infinity(negative));
        }
        if value == 0.0 {
            return Ok(Self::zero(negative));
        }
        let bits = value.to_bits();
        let raw_exponent = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & 0x000f_ffff_ffff_ffff;
        let (mantissa, exponent) = if raw_exponent == 0 {
            (fraction, -1074) // subnormal
        } else {
            (fraction | (1 << 52), raw_exponent - 1075)
        };
        Self::from_parts(negative, BigUint::from(mantissa), exponent, 53, RoundingMode::ToNearestEven)
    }
}

/// Compares two byte-normalized mantissas as binary fractions: byte-wise,
/// with a shorter mantissa ordering before any extension of it.
fn cmp_fractions(a: &BigUint, b: &BigUint) -> Ordering {
    a.to_bytes_be().cmp(&b.to_bytes_be())
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    /// Matches the encoded byte order: class first; within finite values
    /// the exponent, then the mantissa fraction, then the precision, all
    /// reversed for negative values; the rounding mode last as an
    /// order-irrelevant tie-break that keeps `Ord` consistent with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        let ordering = self.class.cmp(&other.class);
        if ordering != Ordering::Equal
            || !matches!(self.class, Class::FiniteNegative | Class::FinitePositive)
        {
            return ordering;
        }
        let ordering = self
            .exponent
            .cmp(&other.exponent)
            .then_with(|| cmp_fractions(&self.mantissa, &other.mantissa))
            .then_with(|| self.precision.cmp(&other.precision));
        let ordering = if self.class == Class::FiniteNegative { ordering.reverse() } else { ordering };
        ordering.then_with(|| (self.rounding as u8).cmp(&(other.rounding as u8)))
    }
}

/// Arbitrary-precision floats.
///
/// The class tag alone encodes zeroes and infinities. For finite values the
/// signed exponent dominates, then the framed mantissa bytes, then the
/// precision, then the rounding mode byte. For negative values the
/// exponent and the framed mantissa go through the inverting sink and the
/// precision is arithmetically negated, reversing the order within
/// negatives; inverting the framed form rather than the raw mantissa keeps
/// the escape and terminator bytes unambiguous under negation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigFloatCodec;

impl Codec for BigFloatCodec {
    type Value = BigFloat;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &BigFloat) -> Result<()> {
        I8Codec.encode_into(writer, &value.class.tag())?;
        if !matches!(value.class, Class::FiniteNegative | Class::FinitePositive) {
            return Ok(());
        }
        let negative = value.class == Class::FiniteNegative;
        let mantissa = value.mantissa.to_bytes_be();
        if negative {
            let mut writer = InvertingWriter::new(writer);
            I32Codec.encode_into(&mut writer, &value.exponent)?;
            write_escaped(&mut writer, &mantissa)?;
        } else {
            I32Codec.encode_into(writer, &value.exponent)?;
            write_escaped(writer, &mantissa)?;
        }
        let precision = value.precision as i32;
        I32Codec.encode_into(writer, &if negative { -precision } else { precision })?;
        writer.write_all(&[value.rounding as u8])?;
        Ok(())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<BigFloat> {
        let class = Class::from_tag(I8Codec.decode_from(reader)?)?;
        match class {
            Class::NegativeInfinity => return Ok(BigFloat::infinity(true)),
            Class::PositiveInfinity => return Ok(BigFloat::infinity(false)),
            Class::NegativeZero => return Ok(BigFloat::zero(true)),
            Class::PositiveZero => return Ok(BigFloat::zero(false)),
            Class::FiniteNegative | Class::FinitePositive => {}
        }
        let negative = class == Class::FiniteNegative;

        let (exponent, mantissa) = if negative {
            let mut reader = InvertingReader::new(reader);
            let exponent = I32Codec.decode_from(&mut reader)?;
            (exponent, read_escaped(&mut reader)?)
        } else {
            let exponent = I32Codec.decode_from(reader)?;
            (exponent, read_escaped(reader)?)
        };
        if mantissa.is_empty()
            || mantissa[0] & 0x80 == 0
            || mantissa[mantissa.len() - 1] == 0
        {
            return invalid_value!("denormalized mantissa bytes {mantissa:x?}");
        }
        let mantissa = BigUint::from_bytes_be(&mantissa);

        let precision = I32Codec.decode_from(reader)?;
        let precision = if negative { precision.wrapping_neg() } else { precision };
        let significant = mantissa.bits() - mantissa.trailing_zeros().unwrap_or(0);
        if precision <= 0 || (precision as u64) < significant {
            return invalid_value!("precision {precision} below {significant} mantissa bits");
        }

        let rounding = RoundingMode::from_byte(require_byte(reader)?)?;
        Ok(BigFloat { class, exponent, mantissa, precision: precision as u32, rounding })
    }

    fn requires_terminator(&self) -> bool {
        true
    }
}
