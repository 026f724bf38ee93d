// RSA Big Integer Helpers
// Number-theory routines on top of num-bigint that the library needs and
// the collaborator crate does not expose directly

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Euclid, One, Zero};

/// Compute the Jacobi symbol (a/n) for an odd modulus `n > 0`.
///
/// Iterative binary algorithm: strip factors of two from `a` (each pair of
/// flips tracked via n mod 8), apply quadratic reciprocity on the swap, and
/// reduce. Returns -1, 0 or 1.
pub fn jacobi(a: &BigUint, n: &BigUint) -> i8 {
    debug_assert!(n.is_odd() && !n.is_zero(), "jacobi requires an odd positive modulus");

    let three = BigUint::from(3u8);
    let five = BigUint::from(5u8);
    let seven = BigUint::from(7u8);

    let mut a = a.clone();
    let mut n = n.clone();
    let mut j = 1i8;
    loop {
        if n.is_one() {
            return j;
        }
        if a.is_zero() {
            return 0;
        }

        a %= &n;
        if a.is_zero() {
            return 0;
        }

        let s = a.trailing_zeros().unwrap_or(0);
        if s & 1 == 1 {
            let n_mod_8 = &n & &seven;
            if n_mod_8 == three || n_mod_8 == five {
                j = -j;
            }
        }
        a >>= s;

        // quadratic reciprocity: both odd, flip when both are 3 mod 4
        if (&a & &three) == three && (&n & &three) == three {
            j = -j;
        }
        std::mem::swap(&mut a, &mut n);
    }
}

/// Compute the modular inverse a^(-1) mod m, or `None` when gcd(a, m) != 1.
///
/// Runs the signed extended Euclidean algorithm and reduces the Bezout
/// coefficient with `rem_euclid`, so the result always lies in [0, m).
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a = BigInt::from(a.clone());
    let m = BigInt::from(m.clone());
    let g = a.extended_gcd(&m);
    if !g.gcd.is_one() {
        return None;
    }
    g.x.rem_euclid(&m).to_biguint()
}
