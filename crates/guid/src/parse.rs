//! Validating decoders for the accepted textual forms.
//!
//! Three explicit modes are supported, each strict about shape:
//!
//! - [`Guid::parse`] — canonical hyphenated form, 36 characters.
//! - [`Guid::parse_simple`] — 32 hex digits, no hyphens.
//! - [`Guid::parse_any`] — canonical, braced `{…}`, or simple, with
//!   surrounding ASCII whitespace ignored.
//!
//! Hex digits are accepted in either case in every mode; re-encoding a
//! parsed value always yields the lowercase canonical form. Anything
//! else, including `urn:uuid:` prefixes, is rejected with
//! [`GuidError::Malformed`] and never yields a partially-decoded value.

use crate::{Guid, GuidError, GuidResult};

impl Guid {
    /// Parses the canonical hyphenated form.
    ///
    /// The input must be exactly 36 characters with hyphens at positions
    /// 8, 13, 18, and 23 and a hex digit (either case) everywhere else.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::Malformed`] on any deviation.
    pub fn parse(input: &str) -> GuidResult<Self> {
        decode_hyphenated(input).map(Self::from_bytes)
    }

    /// Parses the unhyphenated form: exactly 32 hex digits, either case.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::Malformed`] on any deviation.
    pub fn parse_simple(input: &str) -> GuidResult<Self> {
        let raw = input.as_bytes();
        if raw.len() != 32 {
            return Err(GuidError::Malformed(format!(
                "expected 32 hex digits, got {} characters in '{}'",
                raw.len(),
                input
            )));
        }
        let mut bytes = [0u8; 16];
        for (out, pair) in bytes.iter_mut().zip(raw.chunks_exact(2)) {
            *out = decode_pair(pair[0], pair[1], input)?;
        }
        Ok(Self::from_bytes(bytes))
    }

    /// Parses any accepted textual form.
    ///
    /// Surrounding ASCII whitespace is ignored; the remainder must be the
    /// canonical hyphenated form, that form wrapped in braces, or the
    /// 32-digit simple form.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::Malformed`] if the trimmed input matches none
    /// of the accepted forms.
    pub fn parse_any(input: &str) -> GuidResult<Self> {
        let trimmed = input.trim_matches(|c: char| c.is_ascii_whitespace());
        match trimmed.len() {
            36 => Self::parse(trimmed),
            32 => Self::parse_simple(trimmed),
            38 => {
                let inner = trimmed
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                    .ok_or_else(|| {
                        GuidError::Malformed(format!("expected braced GUID, got '{}'", trimmed))
                    })?;
                Self::parse(inner)
            }
            len => Err(GuidError::Malformed(format!(
                "no accepted GUID form is {} characters long: '{}'",
                len, trimmed
            ))),
        }
    }
}

fn decode_hyphenated(input: &str) -> GuidResult<[u8; 16]> {
    let raw = input.as_bytes();
    if raw.len() != 36 {
        return Err(GuidError::Malformed(format!(
            "expected 36 characters, got {} in '{}'",
            raw.len(),
            input
        )));
    }
    let mut bytes = [0u8; 16];
    let mut out = 0;
    let mut i = 0;
    while i < 36 {
        // group boundaries of the 8-4-4-4-12 layout
        if matches!(i, 8 | 13 | 18 | 23) {
            if raw[i] != b'-' {
                return Err(GuidError::Malformed(format!(
                    "expected '-' at position {} in '{}'",
                    i, input
                )));
            }
            i += 1;
            continue;
        }
        bytes[out] = decode_pair(raw[i], raw[i + 1], input)?;
        out += 1;
        i += 2;
    }
    Ok(bytes)
}

fn decode_pair(hi: u8, lo: u8, input: &str) -> GuidResult<u8> {
    match (hex_val(hi), hex_val(lo)) {
        (Some(h), Some(l)) => Ok((h << 4) | l),
        _ => Err(GuidError::Malformed(format!(
            "invalid hex digit in '{}'",
            input
        ))),
    }
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}
