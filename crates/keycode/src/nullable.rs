// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::prefix::{read_prefix, write_prefix};
use crate::{Codec, Result};
use std::io::{Read, Write};

/// Optional values: a single sentinel byte encodes `None`, while `Some`
/// encodes as the non-null marker followed by the inner encoding. Whether
/// `None` sorts below or above every `Some` is pinned at construction.
///
/// Sequences, mappings and big numbers become nullable the same way:
/// wrap their codec.
#[derive(Clone, Copy, Debug)]
pub struct Nullable<C> {
    inner: C,
    nils_first: bool,
}

impl<C: Codec> Nullable<C> {
    /// Nulls sort before every non-null value.
    pub fn nils_first(inner: C) -> Self {
        Self { inner, nils_first: true }
    }

    /// Nulls sort after every non-null value.
    pub fn nils_last(inner: C) -> Self {
        Self { inner, nils_first: false }
    }
}

impl<C: Codec> Codec for Nullable<C> {
    type Value = Option<C::Value>;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Self::Value) -> Result<()> {
        write_prefix(writer, value.is_some(), self.nils_first)?;
        match value {
            Some(value) => self.inner.encode_into(writer, value),
            None => Ok(()),
        }
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Self::Value> {
        if read_prefix(reader)? {
            Ok(Some(self.inner.decode_from(reader)?))
        } else {
            Ok(None)
        }
    }

    /// Delegates to the inner codec: the marker byte cannot collide with a
    /// sentinel, so ambiguity can only come from the inner encoding.
    fn requires_terminator(&self) -> bool {
        self.inner.requires_terminator()
    }
}
