// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::escape::{read_escaped, write_escaped};
use crate::{Codec, Result};
use std::io::{Read, Write};

/// Writes one embedded element through the terminator discipline: framed
/// when the element codec's output could embed ambiguously, verbatim
/// otherwise.
pub(crate) fn encode_element<C: Codec, W: Write>(
    codec: &C,
    writer: &mut W,
    value: &C::Value,
) -> Result<()> {
    if codec.requires_terminator() {
        let payload = codec.encode(value)?;
        write_escaped(writer, &payload)
    } else {
        codec.encode_into(writer, value)
    }
}

/// Reads one element written by [`encode_element`].
pub(crate) fn decode_element<C: Codec, R: Read>(codec: &C, reader: &mut R) -> Result<C::Value> {
    if codec.requires_terminator() {
        let payload = read_escaped(reader)?;
        codec.decode(&payload)
    } else {
        codec.decode_from(reader)
    }
}

/// Makes any codec safe to embed by applying the escape-and-terminate
/// discipline to its output. Wrapping a codec that is already unambiguous
/// is a no-op, so the wrapper can be applied unconditionally.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminate<C> {
    inner: C,
}

impl<C: Codec> Terminate<C> {
    /// Wraps an inner codec.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Codec> Codec for Terminate<C> {
    type Value = C::Value;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Self::Value) -> Result<()> {
        encode_element(&self.inner, writer, value)
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Self::Value> {
        decode_element(&self.inner, reader)
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}
