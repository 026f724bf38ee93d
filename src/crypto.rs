// RSA Cryptosystem Operations
// Stateless encrypt/decrypt/sign/verify over key pairs; signing and
// decryption share the private-exponent modular exponentiation

use num_bigint::BigUint;

use crate::codec::{self, Block};
use crate::error::{Error, Result};
use crate::keygen::{RsaPrivateKey, RsaPublicKey};

/// Encrypt a message under a public key.
///
/// Encodes the message into blocks bounded below `n` and raises each to the
/// public exponent: `c = b^e mod n`.
pub fn encrypt(message: &[u8], public_key: &RsaPublicKey) -> Result<Vec<Block>> {
    let blocks = codec::encode(message, &public_key.n)?;
    Ok(apply(&blocks, &public_key.e, &public_key.n))
}

/// Decrypt a ciphertext under a private key.
///
/// Raises each block to the private exponent and decodes the result. A codec
/// violation in the recovered blocks means the ciphertext does not belong to
/// this key (or was corrupted) and surfaces as [`Error::Decryption`].
pub fn decrypt(cipher: &[Block], private_key: &RsaPrivateKey) -> Result<Vec<u8>> {
    for block in cipher {
        if block >= &private_key.n {
            return Err(Error::Decryption(
                "ciphertext block not below the modulus".into(),
            ));
        }
    }
    let blocks = apply(cipher, &private_key.d, &private_key.n);
    codec::decode(&blocks, &private_key.n).map_err(|e| Error::Decryption(e.to_string()))
}

/// Sign a message under a private key.
///
/// Computes `digest(message)`, encodes the digest into blocks under the
/// signer's modulus and raises each to the private exponent. Passing the
/// identity as `digest` reproduces the textbook sign-the-message protocol,
/// which is insecure outside demonstrations.
pub fn sign<D>(message: &[u8], private_key: &RsaPrivateKey, digest: D) -> Result<Vec<Block>>
where
    D: Fn(&[u8]) -> Vec<u8>,
{
    let hash = digest(message);
    let blocks = codec::encode(&hash, &private_key.n)?;
    Ok(apply(&blocks, &private_key.d, &private_key.n))
}

/// Verify a signature against a message under the signer's public key.
///
/// Raises each signature block to the public exponent, decodes, and compares
/// byte-for-byte against `digest(message)`. Any mismatch, including
/// malformed signature blocks, is `false` rather than an error.
pub fn verify<D>(message: &[u8], signature: &[Block], public_key: &RsaPublicKey, digest: D) -> bool
where
    D: Fn(&[u8]) -> Vec<u8>,
{
    if signature.iter().any(|block| block >= &public_key.n) {
        return false;
    }
    let blocks = apply(signature, &public_key.e, &public_key.n);
    match codec::decode(&blocks, &public_key.n) {
        Ok(recovered) => recovered == digest(message),
        Err(_) => false,
    }
}

/// Raise every block to `exponent` modulo `modulus`.
fn apply(blocks: &[Block], exponent: &BigUint, modulus: &BigUint) -> Vec<Block> {
    blocks
        .iter()
        .map(|block| block.modpow(exponent, modulus))
        .collect()
}
