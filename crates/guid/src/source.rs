//! Generation sources.
//!
//! All platform-specific generation sits behind the [`GuidSource`] trait.
//! Library code and callers only ever see the trait; which facility
//! actually produces the bytes is decided here, at build time.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::{Guid, GuidError, GuidResult};

/// A producer of new identifiers.
///
/// Implementations must be callable concurrently from multiple threads
/// without external locking: `try_next` takes `&self` and sources hold no
/// mutable state.
pub trait GuidSource: Send + Sync {
    /// Produces one new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::EntropyUnavailable`] if the backing facility
    /// cannot be reached. Implementations never retry internally and
    /// never substitute a nil value.
    fn try_next(&self) -> GuidResult<Guid>;
}

/// Source used by [`Guid::generate`] on every supported target.
type DefaultSource = OsEntropySource;

/// Generates identifiers from the operating system's cryptographically
/// strong random facility.
///
/// Sixteen bytes are read from [`OsRng`] (which binds the per-target
/// native source: `getrandom(2)` on Linux, `getentropy` on Apple
/// platforms, `BCryptGenRandom` on Windows) and the version-4 and RFC
/// variant bits are stamped, so output is conformant regardless of the
/// facility behind it.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropySource;

impl GuidSource for OsEntropySource {
    fn try_next(&self) -> GuidResult<Guid> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(GuidError::EntropyUnavailable)?;
        Ok(Guid::from_bytes(stamp_random_bits(bytes)))
    }
}

/// Generates identifiers through the platform's established UUID
/// implementation, via [`uuid::Uuid::new_v4`].
///
/// Like the `uuid_generate`-style facilities it wraps, this source has no
/// error channel: it aborts the process if the facility is unreachable.
/// Use the default [`OsEntropySource`] where entropy failure must be
/// observable as [`GuidError::EntropyUnavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeSource;

impl GuidSource for NativeSource {
    fn try_next(&self) -> GuidResult<Guid> {
        Ok(uuid::Uuid::new_v4().into())
    }
}

fn stamp_random_bits(mut bytes: [u8; 16]) -> [u8; 16] {
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // RFC 4122 variant
    bytes
}

impl Guid {
    /// Generates a new identifier from the default source.
    ///
    /// The result is a version-4 identifier carrying 122 random bits;
    /// collisions across any realistic number of calls, in this process
    /// or cooperating ones, are overwhelmingly unlikely. Safe to call
    /// from multiple threads concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::EntropyUnavailable`] if no random source can
    /// be reached.
    pub fn generate() -> GuidResult<Self> {
        DefaultSource::default().try_next()
    }

    /// Generates a new identifier from an explicit source.
    ///
    /// # Errors
    ///
    /// Propagates whatever the source reports.
    pub fn generate_with(source: &dyn GuidSource) -> GuidResult<Self> {
        source.try_next()
    }
}
