// RSA Key Generation
// Produces validated, immutable key pairs; the private exponent d is chosen
// first and e derived as its modular inverse, matching the original RSA
// paper's presentation

use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

use crate::bigint::mod_inverse;
use crate::error::{Error, Result};
use crate::prime::random_prime;

/// Default minimum bit length for each prime factor. Anything smaller is
/// trivially factorable; even this floor is only suitable for demonstration.
pub const MIN_PRIME_BITS: u32 = 16;

/// Default number of Solovay-Strassen rounds during prime generation.
pub const DEFAULT_ROUNDS: u32 = 100;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus n = p * q
    pub n: BigUint,
    /// Public exponent, e * d = 1 mod phi
    pub e: BigUint,
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    /// Modulus (same as public)
    pub n: BigUint,
    /// Private exponent
    pub d: BigUint,
    /// First prime factor
    pub p: BigUint,
    /// Second prime factor
    pub q: BigUint,
    /// Euler totient (p-1)(q-1)
    pub phi: BigUint,
}

/// RSA Key Pair (both public and private keys).
///
/// Only ever constructed whole by [`generate_keypair`]; the public key shares
/// the modulus of the private key by construction and neither is mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    /// Requested bit length of each prime factor
    pub bit_length: u32,
}

impl RsaPublicKey {
    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message using this public key
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<crate::codec::Block>> {
        crate::crypto::encrypt(plaintext, self)
    }

    /// Verify a signature against a message using this public key
    pub fn verify<D>(&self, message: &[u8], signature: &[crate::codec::Block], digest: D) -> bool
    where
        D: Fn(&[u8]) -> Vec<u8>,
    {
        crate::crypto::verify(message, signature, self, digest)
    }
}

impl RsaPrivateKey {
    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a ciphertext using this private key
    pub fn decrypt(&self, ciphertext: &[crate::codec::Block]) -> Result<Vec<u8>> {
        crate::crypto::decrypt(ciphertext, self)
    }

    /// Sign a message digest using this private key
    pub fn sign<D>(&self, message: &[u8], digest: D) -> Result<Vec<crate::codec::Block>>
    where
        D: Fn(&[u8]) -> Vec<u8>,
    {
        crate::crypto::sign(message, self, digest)
    }
}

/// Generate an RSA key pair from two fresh primes of `bit_length` bits each.
///
/// `rounds` is the Solovay-Strassen round count used while sampling primes
/// (see [`DEFAULT_ROUNDS`]); the resulting modulus has roughly
/// `2 * bit_length` bits. Fails with [`Error::InvalidParameter`] when
/// `bit_length < MIN_PRIME_BITS`.
pub fn generate_keypair(bit_length: u32, rounds: u32) -> Result<RsaKeyPair> {
    generate_keypair_with_min(bit_length, rounds, MIN_PRIME_BITS)
}

/// Like [`generate_keypair`] but with a caller-chosen minimum bit length.
///
/// Lowering the floor below [`MIN_PRIME_BITS`] yields exploitable keys and is
/// only sensible for tests and demonstrations.
pub fn generate_keypair_with_min(bit_length: u32, rounds: u32, min_bits: u32) -> Result<RsaKeyPair> {
    if bit_length < min_bits.max(2) {
        return Err(Error::InvalidParameter {
            min: min_bits.max(2),
            actual: bit_length,
        });
    }

    let one = BigUint::one();
    let two = BigUint::from(2u8);

    let p = random_prime(bit_length, rounds);
    let mut q = random_prime(bit_length, rounds);
    while q == p {
        q = random_prime(bit_length, rounds);
    }

    let n = &p * &q;
    let phi = (&p - &one) * (&q - &one);

    // Choose d first, then derive e = d^(-1) mod phi. The inverse is reduced
    // into [1, phi) by construction, so no negative-result retry exists.
    let mut rng = thread_rng();
    let (d, e) = loop {
        let d = rng.gen_biguint_range(&two, &phi);
        if let Some(e) = mod_inverse(&d, &phi) {
            break (d, e);
        }
    };

    // Arithmetic invariants; a violation here is a defect in this module,
    // never a recoverable caller error.
    assert!(d.gcd(&phi).is_one(), "private exponent not coprime to phi");
    assert!(((&e * &d) % &phi).is_one(), "e * d != 1 mod phi");

    debug!(
        "generated key pair: {}-bit primes, {}-bit modulus",
        bit_length,
        n.bits()
    );

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { n: n.clone(), e },
        private_key: RsaPrivateKey { n, d, p, q, phi },
        bit_length,
    })
}
