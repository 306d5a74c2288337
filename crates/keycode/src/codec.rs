// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::{Error, Result};
use std::io::{ErrorKind, Read, Write};

/// A codec over a single value type.
///
/// `encode_into` appends the canonical byte form of a value to a writer;
/// `decode_from` consumes exactly one value from a reader and leaves any
/// following bytes in place. Byte-wise comparison of two encodings agrees
/// with the declared order of the two values, so encoded keys can be handed
/// to any storage engine that compares keys as raw bytes.
///
/// Codecs hold no mutable state and compose by value: a container codec
/// owns its element codecs, and encoding walks the composition tree in
/// depth-first order.
pub trait Codec {
    /// The value type this codec encodes and decodes.
    type Value;

    /// Appends the canonical byte form of `value` to `writer`. May append
    /// zero bytes for the zero value of some types.
    fn encode_into<W: Write>(&self, writer: &mut W, value: &Self::Value) -> Result<()>;

    /// Consumes one value from `reader`.
    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Self::Value>;

    /// True if an encoding may be empty or a proper prefix of another valid
    /// encoding of the same codec. Containers wrap such codecs in the
    /// escape-and-terminate discipline before embedding them.
    fn requires_terminator(&self) -> bool;

    /// Encodes a value to a fresh byte vector.
    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode_into(&mut bytes, value)?;
        Ok(bytes)
    }

    /// Decodes a value from a byte slice, ignoring any trailing bytes.
    fn decode(&self, mut bytes: &[u8]) -> Result<Self::Value> {
        self.decode_from(&mut bytes)
    }
}

/// Fills `buf` from the reader, normalizing end-of-input into
/// [`Error::UnexpectedEof`]. Used wherever a codec is mid-value and the
/// remaining bytes are mandatory.
pub(crate) fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => Error::UnexpectedEof,
        _ => Error::Io(err),
    })
}

/// Reads a single byte, or None at end of input. Containers call this at
/// element boundaries, where running out of input is the signal to stop.
pub(crate) fn read_byte<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
}

/// Reads a single mandatory byte.
pub(crate) fn require_byte<R: Read>(reader: &mut R) -> Result<u8> {
    read_byte(reader)?.ok_or(Error::UnexpectedEof)
}
