// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::{Codec, Result, invalid_value};
use std::io::{Read, Write};

/// UTF-8 strings compared byte-wise, which is locale-independent and
/// matches codepoint order for UTF-8. The encoding is the raw content with
/// no delimiter; decoding consumes the remainder of the source, so the
/// codec must go through the terminator discipline when embedded.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCodec;

impl Codec for TextCodec {
    type Value = String;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &String) -> Result<()> {
        writer.write_all(value.as_bytes())?;
        Ok(())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<String> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => invalid_value!("invalid UTF-8: {err}"),
        }
    }

    fn requires_terminator(&self) -> bool {
        true
    }
}

/// Raw byte strings; the same shape as [`TextCodec`] without the UTF-8
/// constraint.
#[derive(Clone, Copy, Debug, Default)]
pub struct BytesCodec;

impl Codec for BytesCodec {
    type Value = Vec<u8>;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Vec<u8>) -> Result<()> {
        writer.write_all(value)?;
        Ok(())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn requires_terminator(&self) -> bool {
        true
    }
}
