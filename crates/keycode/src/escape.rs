// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

// This file includes portions of code from https://github.com/erikgrinaker/toydb (Apache 2 License).
// Original Apache 2 License Copyright (c) erikgrinaker 2024.

use crate::Result;
use crate::codec::require_byte;
use std::io::{Read, Write};

/// Ends an embedded variable-length encoding. Must be the smallest byte
/// value: a terminated encoding has to sort before every encoding that
/// extends it past the split point.
pub(crate) const TERMINATOR: u8 = 0x00;

/// Quotes a literal TERMINATOR or ESCAPE inside payload bytes. Must be the
/// second-smallest byte value so an escaped byte inside a payload sorts
/// below any unescaped continuation.
pub(crate) const ESCAPE: u8 = 0x01;

/// Writes `payload` in the escaped-and-terminated form: each 0x00 and 0x01
/// is preceded by 0x01, then a single unescaped 0x00 ends the payload.
pub(crate) fn write_escaped<W: Write>(writer: &mut W, payload: &[u8]) -> Result<()> {
    let mut escaped = Vec::with_capacity(payload.len() + 1);
    for &byte in payload {
        if byte == TERMINATOR || byte == ESCAPE {
            escaped.push(ESCAPE);
        }
        escaped.push(byte);
    }
    escaped.push(TERMINATOR);
    writer.write_all(&escaped)?;
    Ok(())
}

/// Reads an escaped-and-terminated payload, consuming the terminator and
/// leaving any following bytes on the reader. The byte after an escape is
/// taken literally.
pub(crate) fn read_escaped<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    loop {
        match require_byte(reader)? {
            TERMINATOR => return Ok(payload),
            ESCAPE => payload.push(require_byte(reader)?),
            byte => payload.push(byte),
        }
    }
}

/// A sink that complements every byte before forwarding it.
pub(crate) struct InvertingWriter<'a, W> {
    inner: &'a mut W,
}

impl<'a, W: Write> InvertingWriter<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for InvertingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let inverted = buf.iter().map(|byte| !byte).collect::<Vec<_>>();
        self.inner.write(&inverted)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// A source that complements every byte read from the underlying reader.
pub(crate) struct InvertingReader<'a, R> {
    inner: &'a mut R,
}

impl<'a, R: Read> InvertingReader<'a, R> {
    pub fn new(inner: &'a mut R) -> Self {
        Self { inner }
    }
}

impl<R: Read> Read for InvertingReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        for byte in &mut buf[..n] {
            *byte = !*byte;
        }
        Ok(n)
    }
}
