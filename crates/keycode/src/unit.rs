// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::{Codec, Result};
use std::io::{Read, Write};

/// The empty payload: writes and reads nothing. Exists so structures with
/// no data, like set-shaped maps with unit values, compose uniformly. A
/// zero-byte output is a prefix of everything, so embedding always goes
/// through the terminator discipline.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitCodec;

impl Codec for UnitCodec {
    type Value = ();

    fn encode_into<W: Write>(&self, _writer: &mut W, _value: &()) -> Result<()> {
        Ok(())
    }

    fn decode_from<R: Read>(&self, _reader: &mut R) -> Result<()> {
        Ok(())
    }

    fn requires_terminator(&self) -> bool {
        true
    }
}
