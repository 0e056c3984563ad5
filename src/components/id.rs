//! # Record Identifiers
//!
//! Ids are 128 bits from the operating system's CSPRNG, hex encoded.
//! They are used as unguessable external references, so an entropy failure
//! is reported rather than papered over with a weaker generator.

use rand::rngs::OsRng;
use rand::RngCore;

use super::errors::GenerationFailure;

/// Number of random bytes in an id
pub const ID_BYTES: usize = 16;

/// Source of opaque record identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce a new unique identifier
    fn new_id(&self) -> Result<String, GenerationFailure>;
}

/// Default generator backed by [`OsRng`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngIdGenerator;

impl OsRngIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for OsRngIdGenerator {
    fn new_id(&self) -> Result<String, GenerationFailure> {
        let mut bytes = [0u8; ID_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| GenerationFailure(e.to_string()))?;
        Ok(hex::encode(bytes))
    }
}
