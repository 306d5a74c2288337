// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Order-preserving binary encoding for keys in ordered key-value stores.
//!
//! Every codec maps values to byte strings whose lexicographic order equals
//! the declared order of the values, so encoded keys can be handed to any
//! storage engine that compares keys byte-wise. Codecs compose into a tree
//! matching the shape of the key: fixed arrays, sequences, mappings,
//! nullable wrappers and an order-reversing wrapper nest arbitrarily
//! without breaking the ordering, kept sound by a single escape-and-
//! terminate discipline for variable-length parts.

#![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use array::ArrayCodec;
pub use bigfloat::{BigFloat, BigFloatCodec, RoundingMode};
pub use bigint::BigIntCodec;
pub use codec::Codec;
pub use error::Error;
pub use float::{Complex32Codec, Complex64Codec, F32Codec, F64Codec};
pub use format::{Formatter, Raw};
pub use int::{
    BoolCodec, I8Codec, I16Codec, I32Codec, I64Codec, IsizeCodec, U8Codec, U16Codec, U32Codec,
    U64Codec, UsizeCodec,
};
pub use map::MapCodec;
pub use negate::Negate;
pub use nullable::Nullable;
pub use rational::RationalCodec;
pub use seq::SeqCodec;
pub use terminate::Terminate;
pub use text::{BytesCodec, TextCodec};
pub use time::{DurationCodec, TimestampCodec};
pub use unit::UnitCodec;

mod array;
mod bigfloat;
mod bigint;
mod codec;
mod error;
mod escape;
mod float;
mod format;
mod int;
mod map;
mod negate;
mod nullable;
mod prefix;
mod rational;
mod seq;
mod terminate;
mod text;
mod time;
mod unit;

/// A convenient Result type.
pub type Result<T> = std::result::Result<T, Error>;
