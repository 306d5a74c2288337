// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

// This file includes portions of code from https://github.com/erikgrinaker/toydb (Apache 2 License).
// Original Apache 2 License Copyright (c) erikgrinaker 2024.

use crate::codec::read_byte;
use crate::terminate::{decode_element, encode_element};
use crate::{Codec, Result};
use std::io::{Cursor, Read, Write};

/// Variable-length sequences: the concatenation of the element encodings,
/// each through the terminator discipline when the element codec needs it.
/// Decoding consumes elements until the input runs out on an element
/// boundary, so an empty input is the empty sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeqCodec<C> {
    element: C,
}

impl<C: Codec> SeqCodec<C> {
    /// Wraps an element codec.
    pub fn new(element: C) -> Self {
        Self { element }
    }
}

impl<C: Codec> Codec for SeqCodec<C> {
    type Value = Vec<C::Value>;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Self::Value) -> Result<()> {
        for element in value {
            encode_element(&self.element, writer, element)?;
        }
        Ok(())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Self::Value> {
        let mut elements = Vec::new();
        // Probe one byte per element: end of input here is the natural end
        // of the sequence, anywhere later it is mid-value.
        while let Some(byte) = read_byte(reader)? {
            let mut reader = Cursor::new([byte]).chain(&mut *reader);
            elements.push(decode_element(&self.element, &mut reader)?);
        }
        Ok(elements)
    }

    fn requires_terminator(&self) -> bool {
        true
    }
}
