//! Canonical token pair ordering
//!
//! The execution layer keys every pool by `(currency0, currency1)` with the
//! lower address first. Comparison ignores ASCII case so checksummed and
//! lowercase spellings of the same address land on the same pool. If this
//! ordering disagrees with the router's, swaps silently target the wrong
//! (or a nonexistent) pool, and every direction flag flips.
//!
//! Identifiers keep the caller's spelling; validation of the address format
//! belongs to whoever supplies them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Compare two token identifiers case-insensitively
///
/// Identifiers that differ only in case fall back to raw byte order, which
/// keeps `order(a, b) == order(b, a)` for every input.
pub fn compare_tokens(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Order two identifiers as `(token0, token1)`
pub fn order<'a>(token_a: &'a str, token_b: &'a str) -> (&'a str, &'a str) {
    match compare_tokens(token_a, token_b) {
        Ordering::Greater => (token_b, token_a),
        _ => (token_a, token_b),
    }
}

/// Whether the reserve asset sorts first in its pool with `curve_token`
pub fn is_reserve_token0(reserve_token: &str, curve_token: &str) -> bool {
    compare_tokens(reserve_token, curve_token) != Ordering::Greater
}

/// Canonical ordering of a reserve/curve token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolKeyOrdering {
    token0: String,
    token1: String,
    is_reserve_token0: bool,
}

impl PoolKeyOrdering {
    pub fn new(reserve_token: &str, curve_token: &str) -> Self {
        let (token0, token1) = order(reserve_token, curve_token);
        Self {
            token0: token0.to_string(),
            token1: token1.to_string(),
            is_reserve_token0: is_reserve_token0(reserve_token, curve_token),
        }
    }

    pub fn token0(&self) -> &str {
        &self.token0
    }

    pub fn token1(&self) -> &str {
        &self.token1
    }

    pub fn is_reserve_token0(&self) -> bool {
        self.is_reserve_token0
    }

    pub fn reserve_token(&self) -> &str {
        if self.is_reserve_token0 {
            &self.token0
        } else {
            &self.token1
        }
    }

    pub fn curve_token(&self) -> &str {
        if self.is_reserve_token0 {
            &self.token1
        } else {
            &self.token0
        }
    }

    /// Token the trader pays with for a swap in the given direction
    pub fn input_token(&self, zero_for_one: bool) -> &str {
        if zero_for_one {
            &self.token0
        } else {
            &self.token1
        }
    }

    /// Token the trader receives for a swap in the given direction
    pub fn output_token(&self, zero_for_one: bool) -> &str {
        self.input_token(!zero_for_one)
    }

    /// Full pool key for the router
    pub fn pool_key(&self, fee: u32, tick_spacing: i32, hooks: &str) -> PoolKey {
        PoolKey {
            currency0: self.token0.clone(),
            currency1: self.token1.clone(),
            fee,
            tick_spacing,
            hooks: hooks.to_string(),
        }
    }
}

/// Pool identifier as the execution layer expects it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolKey {
    pub currency0: String,
    pub currency1: String,
    /// Fee in pips (3000 = 0.3%)
    pub fee: u32,
    pub tick_spacing: i32,
    /// Hook contract attached to the pool (the curve contract)
    pub hooks: String,
}
