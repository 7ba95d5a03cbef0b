// src/integer_math/gcd.rs

use num::BigInt;
use num::Signed;
use num::Integer;
use num::Zero;

pub struct GCD;

impl GCD {
    pub fn find_lcm(numbers: &[BigInt]) -> BigInt {
        numbers.iter().fold(BigInt::from(1), |acc, x| Self::find_lcm_pair(&acc, x))
    }

    pub fn find_lcm_pair(left: &BigInt, right: &BigInt) -> BigInt {
        let abs_value1 = left.abs();
        let abs_value2 = right.abs();
        &(&abs_value1 * &abs_value2) / Self::find_gcd_pair(&abs_value1, &abs_value2)
    }

    pub fn find_gcd(numbers: &[BigInt]) -> BigInt {
        numbers.iter().fold(BigInt::from(0), |acc, x| Self::find_gcd_pair(&acc, x))
    }

    pub fn find_gcd_pair(left: &BigInt, right: &BigInt) -> BigInt {
        left.gcd(right)
    }

    pub fn are_coprime(numbers: &[BigInt]) -> bool {
        Self::find_gcd(numbers) == BigInt::from(1)
    }

    /// Modular inverse of `a` modulo `modulus` via the extended Euclidean
    /// algorithm. Returns `None` when `a` and `modulus` are not coprime.
    pub fn mod_inverse(a: &BigInt, modulus: &BigInt) -> Option<BigInt> {
        let (mut old_r, mut r) = (a.clone(), modulus.clone());
        let (mut old_s, mut s) = (BigInt::from(1), BigInt::from(0));

        while !r.is_zero() {
            let quotient = &old_r / &r;
            let new_r = &old_r - &quotient * &r;
            old_r = std::mem::replace(&mut r, new_r);
            let new_s = &old_s - &quotient * &s;
            old_s = std::mem::replace(&mut s, new_s);
        }

        if old_r != BigInt::from(1) && old_r != BigInt::from(-1) {
            return None;
        }

        let result = ((old_s % modulus) + modulus) % modulus;
        Some(result)
    }
}
