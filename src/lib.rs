// RSA Core Library
// Probabilistic primality testing, key generation, block codec and the
// encrypt/decrypt/sign/verify operations of the RSA cryptosystem.

//! A minimal, correct RSA core built on `num-bigint`.
//!
//! The crate provides four layers, leaves first:
//!
//! - [`bigint`]: number-theory helpers (Jacobi symbol, modular inverse)
//! - [`prime`]: Solovay-Strassen primality testing and random prime sampling
//! - [`keygen`]: validated, immutable RSA key pairs
//! - [`codec`] / [`crypto`]: modulus-aware block framing and the four
//!   public-key operations
//!
//! Signatures take a caller-supplied digest function. Passing the identity
//! (`|m| m.to_vec()`) reproduces the textbook sign-the-message-directly
//! protocol, which is insecure and only suitable for demonstration.
//!
//! All operations are pure functions over immutable inputs; the only
//! process-wide state is the thread-local RNG used for sampling.

pub mod bigint;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod keygen;
pub mod prime;

pub use codec::{decode, encode, Block, Ciphertext};
pub use crypto::{decrypt, encrypt, sign, verify};
pub use error::{Error, Result};
pub use keygen::{generate_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use prime::{is_probable_prime, random_prime};
