// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

// This file includes portions of code from https://github.com/erikgrinaker/toydb (Apache 2 License).
// Original Apache 2 License Copyright (c) erikgrinaker 2024.

/// Renders encoded keys for debugging and test output.
pub trait Formatter {
    /// Formats an encoded key.
    fn key(key: &[u8]) -> String;

    /// Formats a pair of encoded keys, e.g. for ordering diagnostics.
    fn key_pair(left: &[u8], right: &[u8]) -> String {
        format!("{} / {}", Self::key(left), Self::key(right))
    }
}

/// Formats raw byte slices without any decoding.
pub struct Raw;

impl Raw {
    /// Formats raw bytes as escaped ASCII strings.
    pub fn bytes(bytes: &[u8]) -> String {
        let escaped = bytes.iter().copied().flat_map(std::ascii::escape_default).collect::<Vec<_>>();
        format!("\"{}\"", String::from_utf8_lossy(&escaped))
    }
}

impl Formatter for Raw {
    fn key(key: &[u8]) -> String {
        Self::bytes(key)
    }
}
