// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use thiserror::Error as ThisError;

/// Errors raised while encoding or decoding keys.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The byte source ended while a codec still required bytes to
    /// complete a value. End of input on an element boundary is not an
    /// error and never surfaces as this variant.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A nullability marker was expected but an unrecognized byte was read.
    #[error("invalid prefix byte 0x{0:02x}")]
    InvalidPrefix(u8),

    /// A byte sequence violated a codec's value constraints.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The underlying source or sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Builds an `Err(Error::InvalidValue)` from a format string.
#[macro_export]
macro_rules! invalid_value {
    ($($args:tt)*) => { Err($crate::Error::InvalidValue(format!($($args)*)).into()) };
}
