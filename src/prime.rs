// RSA Primality Testing
// Solovay-Strassen probabilistic test and random prime sampling

use log::trace;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

use crate::bigint::jacobi;

/// Solovay-Strassen primality test.
///
/// Runs `rounds` independent trials, each drawing a uniform witness
/// `a` in [2, n-2] and declaring `n` composite if `gcd(a, n) != 1` or
/// `a^((n-1)/2) mod n` disagrees with the Jacobi symbol (a/n) taken
/// modulo `n`. A composite survives one trial with probability at most
/// 1/2, so the false-positive probability is at most 2^-rounds.
pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
    let two = BigUint::from(2u8);
    let three = BigUint::from(3u8);
    if n < &two {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let one = BigUint::one();
    let n_minus_1 = n - &one;
    let exp = &n_minus_1 >> 1;

    let mut rng = thread_rng();
    for _ in 0..rounds {
        // witness a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_1);
        if !a.gcd(n).is_one() {
            return false;
        }
        let symbol = match jacobi(&a, n) {
            1 => one.clone(),
            -1 => n_minus_1.clone(),
            _ => return false,
        };
        if a.modpow(&exp, n) != symbol {
            return false;
        }
    }
    true
}

/// Sample a random probable prime with exactly `bit_length` bits.
///
/// Draws odd candidates uniformly from [2^(bit_length-1)+1, 2^bit_length - 1]
/// until one passes `rounds` trials of the Solovay-Strassen test.
///
/// # Panics
///
/// Panics if `bit_length < 2` (no prime has fewer than two bits).
pub fn random_prime(bit_length: u32, rounds: u32) -> BigUint {
    assert!(bit_length >= 2, "no prime has fewer than two bits");

    let one = BigUint::one();
    let lower = (&one << (bit_length - 1)) + &one;
    let upper = (&one << bit_length) - &one;

    let mut rng = thread_rng();
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let mut candidate = rng.gen_biguint_range(&lower, &upper);
        candidate |= &one;
        if is_probable_prime(&candidate, rounds) {
            trace!("found {}-bit prime after {} candidates", bit_length, attempts);
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u128) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_small_primes() {
        for p in [2u128, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 65537] {
            assert!(is_probable_prime(&big(p), 20), "{} is prime", p);
        }
    }

    #[test]
    fn test_small_composites() {
        for c in [0u128, 1, 4, 6, 8, 9, 15, 21, 25, 27, 33, 65535] {
            assert!(!is_probable_prime(&big(c), 20), "{} is composite", c);
        }
    }

    #[test]
    fn test_carmichael_number() {
        // 561 = 3 * 11 * 17 fools the plain Fermat test but not this one
        assert!(!is_probable_prime(&big(561), 20));
    }

    #[test]
    fn test_large_prime() {
        // Mersenne prime 2^61 - 1
        let p = big(2305843009213693951);
        assert!(is_probable_prime(&p, 20));
        assert!(!is_probable_prime(&(p + 2u8), 20));
    }

    #[test]
    fn test_random_prime_bit_length() {
        for _ in 0..4 {
            let p = random_prime(24, 20);
            assert_eq!(p.bits(), 24);
            assert!(p.is_odd());
            assert!(is_probable_prime(&p, 20));
        }
    }
}
