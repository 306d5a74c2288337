// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::terminate::{decode_element, encode_element};
use crate::{Codec, Result};
use std::io::{Read, Write};

/// Fixed-length arrays over a single element codec. The length is part of
/// the type, so nothing length-like is written; elements go through the
/// terminator discipline only when the element codec needs it.
///
/// Running out of input before the last element is an error; end of input
/// exactly after the last element is fine.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayCodec<C, const N: usize> {
    element: C,
}

impl<C: Codec, const N: usize> ArrayCodec<C, N> {
    /// Wraps an element codec.
    pub fn new(element: C) -> Self {
        Self { element }
    }
}

impl<C: Codec, const N: usize> Codec for ArrayCodec<C, N> {
    type Value = [C::Value; N];

    fn encode_into<W: Write>(&self, writer: &mut W, value: &Self::Value) -> Result<()> {
        for element in value {
            encode_element(&self.element, writer, element)?;
        }
        Ok(())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<Self::Value> {
        let mut elements = Vec::with_capacity(N);
        for _ in 0..N {
            elements.push(decode_element(&self.element, reader)?);
        }
        let Ok(elements) = elements.try_into() else { unreachable!("decoded exactly N elements") };
        Ok(elements)
    }

    /// A zero-length array writes zero bytes, which cannot embed unframed;
    /// any other length is self-delimiting element by element.
    fn requires_terminator(&self) -> bool {
        N == 0
    }
}
