//! Cross-platform GUID/UUID generation, formatting, and parsing.
//!
//! A [`Guid`] is a 128-bit globally-unique identifier stored as 16 raw
//! octets. It is a plain `Copy` value type: comparison, ordering, and
//! hashing all operate on the bytes, so it can be used directly as a map
//! or set key and passed around freely.
//!
//! ## Canonical text form
//! - Length: 36
//! - 32 lowercase hex digits grouped 8-4-4-4-12, hyphens at positions
//!   8, 13, 18, and 23
//! - Example: `123e4567-e89b-12d3-a456-426614174000`
//!
//! [`Guid`]'s `Display` impl always produces this form. The parser accepts
//! a small set of named variants (see [`Guid::parse_any`]); whatever the
//! accepted input looked like, re-encoding yields the canonical form.
//!
//! ## Byte layout
//! Bytes are stored in the order they appear in the text form: byte `i`
//! renders as hex digits `2i` and `2i + 1` of the 32-digit run. This is
//! the big-endian field layout of RFC 4122, byte-compatible with
//! [`uuid::Uuid::as_bytes`].
//!
//! ## Generation
//! New identifiers come from a [`GuidSource`]. The default,
//! [`OsEntropySource`], reads the operating system's cryptographically
//! strong random facility and stamps the version-4 and variant bits;
//! [`NativeSource`] instead delegates to the platform UUID implementation
//! via the `uuid` crate. See [`Guid::generate`].
//!
//! Uniqueness is probabilistic: a version-4 identifier carries 122 random
//! bits, so collisions across any realistic number of generated values
//! are overwhelmingly unlikely, but not impossible.

mod guid;
mod parse;
mod source;

pub use guid::Guid;
pub use source::{GuidSource, NativeSource, OsEntropySource};

/// Error type for GUID operations.
#[derive(Debug, thiserror::Error)]
pub enum GuidError {
    /// Textual input rejected by the parser. The value is a description
    /// of the deviation. Recoverable; no partially-decoded identifier is
    /// ever produced.
    #[error("malformed GUID: {0}")]
    Malformed(String),
    /// No usable randomness source could be reached, so no identifier
    /// can be manufactured. Effectively fatal for the caller; retrying
    /// without a working entropy source will not succeed.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(rand::Error),
}

/// Result type for GUID operations.
pub type GuidResult<T> = Result<T, GuidError>;
