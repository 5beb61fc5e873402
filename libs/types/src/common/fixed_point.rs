//! Fixed-point helpers for 18-decimal (WAD) token amounts
//!
//! All curve parameters, circulation figures and trade amounts travel as raw
//! `u128` integers scaled by [`WAD`], which is what the curve contract and the
//! swap router exchange on-chain. `Decimal` only appears at the human-readable
//! boundary: parsing what a user typed and formatting amounts for logs.
//!
//! Slippage bounds round against the trader: a maximum input rounds up and a
//! minimum output rounds down, so a bound never tolerates more movement than
//! the requested basis points.

use crate::common::errors::QuoteError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// One whole token at 18 decimals (1e18)
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Number of decimals carried by every amount
pub const WAD_DECIMALS: u32 = 18;

/// Basis points in 100%
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Parse a human-readable amount ("1.5") into a WAD-scaled integer
///
/// Digits beyond the 18th decimal place are truncated, matching how the
/// router treats sub-wei precision.
///
/// # Examples
/// ```
/// use vix_types::{parse_wad, WAD};
///
/// assert_eq!(parse_wad("1.5").unwrap(), WAD + WAD / 2);
/// ```
pub fn parse_wad(input: &str) -> Result<u128, QuoteError> {
    let invalid = || QuoteError::InvalidAmount {
        input: input.to_string(),
    };

    let decimal = Decimal::from_str(input.trim()).map_err(|_| invalid())?;
    if decimal < Decimal::ZERO {
        return Err(invalid());
    }

    let scaled = decimal
        .checked_mul(Decimal::from(WAD as u64))
        .ok_or_else(|| QuoteError::overflow("parsed amount"))?;

    scaled
        .trunc()
        .to_u128()
        .ok_or_else(|| QuoteError::overflow("parsed amount"))
}

/// Convert a WAD-scaled integer into a `Decimal` for display
///
/// Only use for display and logging. Quotes are always computed on the raw
/// integer.
pub fn format_wad(raw: u128) -> Result<Decimal, QuoteError> {
    let signed = i128::try_from(raw).map_err(|_| QuoteError::overflow("formatted amount"))?;
    Decimal::try_from_i128_with_scale(signed, WAD_DECIMALS)
        .map(|d| d.normalize())
        .map_err(|_| QuoteError::overflow("formatted amount"))
}

/// Reject slippage tolerances above 100%
pub fn check_slippage(slippage_bps: u32) -> Result<(), QuoteError> {
    if slippage_bps > BPS_DENOMINATOR {
        return Err(QuoteError::SlippageOutOfRange {
            bps: slippage_bps,
            max: BPS_DENOMINATOR,
        });
    }
    Ok(())
}

/// Upper bound for an input amount: `amount * (1 + slippage)`, rounded up
pub fn max_in_with_slippage(amount: u128, slippage_bps: u32) -> Result<u128, QuoteError> {
    check_slippage(slippage_bps)?;
    let numerator = amount
        .checked_mul(u128::from(BPS_DENOMINATOR + slippage_bps))
        .ok_or_else(|| QuoteError::overflow("slippage-adjusted maximum input"))?;
    Ok(numerator.div_ceil(u128::from(BPS_DENOMINATOR)))
}

/// Lower bound for an output amount: `amount * (1 - slippage)`, rounded down
pub fn min_out_with_slippage(amount: u128, slippage_bps: u32) -> Result<u128, QuoteError> {
    check_slippage(slippage_bps)?;
    let numerator = amount
        .checked_mul(u128::from(BPS_DENOMINATOR - slippage_bps))
        .ok_or_else(|| QuoteError::overflow("slippage-adjusted minimum output"))?;
    Ok(numerator / u128::from(BPS_DENOMINATOR))
}
