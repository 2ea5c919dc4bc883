//! The `Guid` value type: byte layout, comparison, and text encoding.

use std::fmt;
use std::str::FromStr;

use crate::{GuidError, GuidResult};

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// A 128-bit globally-unique identifier.
///
/// Wraps exactly 16 octets and nothing else. Instances are immutable
/// `Copy` values; equality, ordering, and hashing are derived from the
/// bytes, so two `Guid`s are equal iff all 16 bytes match, ordering is
/// byte-lexicographic (the nil value compares smallest), and equal values
/// hash equally.
///
/// # Construction
/// - [`Guid::generate`] produces a fresh identifier from the default
///   generation source.
/// - [`Guid::parse`] / [`Guid::parse_any`] validate and decode text.
/// - [`Guid::from_bytes`] wraps raw bytes unchecked.
/// - [`Guid::NIL`] (also `Default`) is the all-zero identifier.
///
/// # Display format
/// `Display` always produces the canonical form: 36 characters, lowercase
/// hex, hyphens at positions 8, 13, 18, and 23.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guid {
    bytes: [u8; 16],
}

impl Guid {
    /// The all-zero identifier.
    pub const NIL: Guid = Guid { bytes: [0; 16] };

    /// Wraps 16 raw octets as a `Guid`.
    ///
    /// No validation is performed; the bytes are taken verbatim, in text
    /// order (byte 0 renders first).
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }

    /// Returns the 16 octets backing this identifier.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Consumes the identifier and returns its bytes.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.bytes
    }

    /// Returns true if every byte is zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_ne_bytes(self.bytes) == 0
    }

    /// Returns the version number encoded in the identifier (the high
    /// nibble of byte 6). Generated identifiers report 4; parsed foreign
    /// values report whatever scheme produced them.
    pub const fn version(&self) -> u8 {
        self.bytes[6] >> 4
    }

    /// Returns the 32-character unhyphenated lowercase hex encoding.
    pub fn to_simple_string(&self) -> String {
        let mut out = String::with_capacity(32);
        for b in self.bytes {
            out.push(char::from(HEX_LOWER[(b >> 4) as usize]));
            out.push(char::from(HEX_LOWER[(b & 0x0f) as usize]));
        }
        out
    }

    /// Returns the canonical grouping with uppercase hex digits.
    ///
    /// The canonical form itself is lowercase; this is an explicit
    /// alternate encoding for callers that need it.
    pub fn to_uppercase_string(&self) -> String {
        self.encode_hyphenated(HEX_UPPER)
    }

    fn encode_hyphenated(&self, table: &[u8; 16]) -> String {
        let mut out = String::with_capacity(36);
        for (i, b) in self.bytes.iter().enumerate() {
            // group boundaries after bytes 3, 5, 7 and 9
            if matches!(i, 4 | 6 | 8 | 10) {
                out.push('-');
            }
            out.push(char::from(table[(b >> 4) as usize]));
            out.push(char::from(table[(b & 0x0f) as usize]));
        }
        out
    }
}

impl Default for Guid {
    /// The default identifier is [`Guid::NIL`].
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Guid {
    /// Formats the identifier in canonical form (lowercase, hyphenated).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_hyphenated(HEX_LOWER))
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}

impl FromStr for Guid {
    type Err = GuidError;

    /// Parses the canonical hyphenated form. Equivalent to [`Guid::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::Malformed`] for anything but a 36-character
    /// hyphenated hex string.
    fn from_str(s: &str) -> GuidResult<Self> {
        Guid::parse(s)
    }
}

impl From<[u8; 16]> for Guid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<uuid::Uuid> for Guid {
    fn from(u: uuid::Uuid) -> Self {
        Self::from_bytes(*u.as_bytes())
    }
}

impl From<Guid> for uuid::Uuid {
    fn from(g: Guid) -> Self {
        uuid::Uuid::from_bytes(g.bytes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Guid {
    /// Serializes as the canonical 36-character string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Guid {
    /// Deserializes from any form accepted by [`Guid::parse_any`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Guid::parse_any(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 16] = [
        0x12, 0x3e, 0x45, 0x67, 0xe8, 0x9b, 0x12, 0xd3, 0xa4, 0x56, 0x42, 0x66, 0x14, 0x17, 0x40,
        0x00,
    ];

    #[test]
    fn test_nil_is_all_zero() {
        assert_eq!(Guid::NIL.as_bytes(), &[0u8; 16]);
        assert!(Guid::NIL.is_nil());
        assert_eq!(Guid::default(), Guid::NIL);
    }

    #[test]
    fn test_nil_formats_as_zeros() {
        assert_eq!(
            Guid::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let guid = Guid::from_bytes(SAMPLE);
        assert_eq!(guid.as_bytes(), &SAMPLE);
        assert_eq!(guid.into_bytes(), SAMPLE);
        assert!(!guid.is_nil());
    }

    #[test]
    fn test_display_is_canonical() {
        let guid = Guid::from_bytes(SAMPLE);
        let text = guid.to_string();

        assert_eq!(text, "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(text.len(), 36);
        for pos in [8, 13, 18, 23] {
            assert_eq!(text.as_bytes()[pos], b'-');
        }
        assert!(text
            .chars()
            .all(|c| c == '-' || c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_simple_string() {
        let guid = Guid::from_bytes(SAMPLE);
        assert_eq!(guid.to_simple_string(), "123e4567e89b12d3a456426614174000");
    }

    #[test]
    fn test_uppercase_string() {
        let guid = Guid::from_bytes(SAMPLE);
        assert_eq!(
            guid.to_uppercase_string(),
            "123E4567-E89B-12D3-A456-426614174000"
        );
    }

    #[test]
    fn test_version_nibble() {
        let guid = Guid::from_bytes(SAMPLE);
        assert_eq!(guid.version(), 1);
        assert_eq!(Guid::NIL.version(), 0);
    }

    #[test]
    fn test_equality_is_byte_exact() {
        let a = Guid::from_bytes(SAMPLE);
        let b = Guid::from_bytes(SAMPLE);
        let mut changed = SAMPLE;
        changed[15] ^= 1;
        let c = Guid::from_bytes(changed);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let low = Guid::from_bytes([0; 16]);
        let mut mid_bytes = [0u8; 16];
        mid_bytes[0] = 1;
        let mid = Guid::from_bytes(mid_bytes);
        let high = Guid::from_bytes([0xff; 16]);

        assert!(low < mid);
        assert!(mid < high);
        assert!(Guid::NIL <= low);
    }

    #[test]
    fn test_hash_consistency() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = Guid::from_bytes(SAMPLE);
        let b = Guid::from_bytes(SAMPLE);

        let mut hasher_a = DefaultHasher::new();
        let mut hasher_b = DefaultHasher::new();
        a.hash(&mut hasher_a);
        b.hash(&mut hasher_b);

        assert_eq!(hasher_a.finish(), hasher_b.finish());
    }

    #[test]
    fn test_debug_contains_canonical_form() {
        let guid = Guid::from_bytes(SAMPLE);
        let debug = format!("{:?}", guid);

        assert!(debug.contains("123e4567-e89b-12d3-a456-426614174000"));
    }

    #[test]
    fn test_uuid_conversion_round_trip() {
        let guid = Guid::from_bytes(SAMPLE);
        let uuid: uuid::Uuid = guid.into();

        assert_eq!(uuid.as_bytes(), &SAMPLE);
        assert_eq!(Guid::from(uuid), guid);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serializes_as_canonical_string() {
            let guid = Guid::from_bytes(SAMPLE);
            let json = serde_json::to_string(&guid).unwrap();

            assert_eq!(json, "\"123e4567-e89b-12d3-a456-426614174000\"");
        }

        #[test]
        fn test_deserializes_accepted_variants() {
            let expected = Guid::from_bytes(SAMPLE);
            for input in [
                "\"123e4567-e89b-12d3-a456-426614174000\"",
                "\"123E4567-E89B-12D3-A456-426614174000\"",
                "\"{123e4567-e89b-12d3-a456-426614174000}\"",
                "\"123e4567e89b12d3a456426614174000\"",
            ] {
                let guid: Guid = serde_json::from_str(input).unwrap();
                assert_eq!(guid, expected);
            }
        }

        #[test]
        fn test_deserialize_rejects_malformed() {
            let result: Result<Guid, _> =
                serde_json::from_str("\"123e4567-e89b-12d3-a456-42661417400\"");
            assert!(result.is_err());
        }

        #[test]
        fn test_round_trip_through_json() {
            let original = Guid::from_bytes(SAMPLE);
            let json = serde_json::to_string(&original).unwrap();
            let decoded: Guid = serde_json::from_str(&json).unwrap();

            assert_eq!(original, decoded);
        }
    }
}
