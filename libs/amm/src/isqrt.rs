//! Exact integer square root over arbitrary-precision integers
//!
//! Curve discriminants are products of two WAD-scaled values and routinely
//! exceed 2^160, so neither `u128` nor floating point is acceptable here.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;
use vix_types::QuoteError;

/// floor(sqrt(n)), failing with `DomainError` for negative input
pub fn isqrt(n: &BigInt) -> Result<BigInt, QuoteError> {
    if n.sign() == Sign::Minus {
        return Err(QuoteError::DomainError {
            value: n.to_string(),
        });
    }
    Ok(BigInt::from(isqrt_unsigned(n.magnitude())))
}

/// floor(sqrt(n)) by Newton-Raphson
///
/// Starts from x0 = n and stops at the first step that no longer decreases,
/// which is the floor of the root for every n >= 2.
pub fn isqrt_unsigned(n: &BigUint) -> BigUint {
    if n <= &BigUint::one() {
        return n.clone();
    }

    let mut x0 = n.clone();
    let mut x1 = (&x0 + n / &x0) / 2u32;
    while x1 < x0 {
        x0 = x1;
        x1 = (&x0 + n / &x0) / 2u32;
    }
    x0
}
