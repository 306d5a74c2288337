// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::codec::read_byte;
use crate::terminate::{decode_element, encode_element};
use crate::{Codec, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::io::{Cursor, Read, Write};

/// Mappings as concatenated key/value pairs, each side through the
/// terminator discipline when its codec needs it.
///
/// Pairs are written in whatever order the map iterates, so two encodings
/// of the same mapping need not be byte-equal and ordering between encoded
/// mappings is not meaningful. Round-trip is by key/value set: decoding
/// rebuilds an equal map.
#[derive(Clone, Copy, Debug, Default)]
pub struct MapCodec<K, V> {
    key: K,
    value: V,
}

impl<K: Codec, V: Codec> MapCodec<K, V> {
    /// Wraps a key codec and a value codec.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: Codec, V: Codec> Codec for MapCodec<K, V>
where
    K::Value: Eq + Hash,
{
    type Value = HashMap<K::Value, V::Value>;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Self::Value) -> Result<()> {
        for (key, value) in value {
            encode_element(&self.key, writer, key)?;
            encode_element(&self.value, writer, value)?;
        }
        Ok(())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Self::Value> {
        let mut map = HashMap::new();
        // End of input on a pair boundary ends the mapping; a missing
        // value after a key is mid-value.
        while let Some(byte) = read_byte(reader)? {
            let key = {
                let mut reader = Cursor::new([byte]).chain(&mut *reader);
                decode_element(&self.key, &mut reader)?
            };
            let value = decode_element(&self.value, reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }

    fn requires_terminator(&self) -> bool {
        true
    }
}
