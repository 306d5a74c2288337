// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::codec::read_byte;
use crate::{Error, Result};
use std::io::{Read, Write};

/// Null sentinel for codecs constructed nils-first. Sorts below the
/// non-null marker, so nulls order before every non-null value.
pub(crate) const NILS_FIRST: u8 = 0x02;

/// Marks a non-null payload. Strictly between the two sentinels.
pub(crate) const NON_NULL: u8 = 0x04;

/// Null sentinel for codecs constructed nils-last. Sorts above the
/// non-null marker.
pub(crate) const NILS_LAST: u8 = 0x05;

/// Writes the nullability prefix: a sentinel for a null value, or the
/// non-null marker when a payload follows.
pub(crate) fn write_prefix<W: Write>(writer: &mut W, non_null: bool, nils_first: bool) -> Result<()> {
    let byte = match (non_null, nils_first) {
        (true, _) => NON_NULL,
        (false, true) => NILS_FIRST,
        (false, false) => NILS_LAST,
    };
    writer.write_all(&[byte])?;
    Ok(())
}

/// Reads the nullability prefix, returning true when a payload follows.
/// Either sentinel decodes as null regardless of which ordering the codec
/// was constructed with.
pub(crate) fn read_prefix<R: Read>(reader: &mut R) -> Result<bool> {
    match read_byte(reader)?.ok_or(Error::UnexpectedEof)? {
        NILS_FIRST | NILS_LAST => Ok(false),
        NON_NULL => Ok(true),
        byte => Err(Error::InvalidPrefix(byte)),
    }
}
