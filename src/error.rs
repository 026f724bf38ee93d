// RSA Error Types
// One enum covering the parameter, codec and decryption failure modes

/// Errors surfaced by key generation, the block codec and decryption.
///
/// A failed signature check is not an error: [`crate::crypto::verify`]
/// returns `false` for any mismatch, including malformed signature blocks.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter: bit length must be at least {min}, got {actual}")]
    InvalidParameter { min: u32, actual: u32 },

    #[error("block overflow: modulus of {modulus_bits} bits cannot hold a full byte")]
    BlockOverflow { modulus_bits: u64 },

    #[error("malformed block: {0}")]
    MalformedBlock(String),

    #[error("decryption failed: {0}")]
    Decryption(String),
}

/// Result type for RSA operations.
pub type Result<T> = std::result::Result<T, Error>;
