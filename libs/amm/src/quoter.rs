//! Quadratic bonding-curve quotes with exact integer arithmetic
//!
//! The curve prices circulation `s` at `cost(s) = base_price * s + slope * s^2 / 2`.
//! Buying `d` tokens at circulation `c` costs `b * d + a * d^2` and selling
//! them releases `b * d - a * d^2`, where `a = slope / 2` and
//! `b = base_price + slope * c`. Quotes solve those quadratics for `d`.
//!
//! Every input is WAD-scaled. With raw integers the positive buy root reduces
//! to `(sqrt(b^2 + 2 * slope * x) - b) * WAD / slope`, so the only rounding is
//! the floor of the square root and of each division.

use crate::curve_state::CurveParameters;
use crate::isqrt::{isqrt, isqrt_unsigned};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use tracing::debug;
use vix_types::{QuoteError, WAD};

/// Pure quote functions over a curve snapshot
///
/// Nothing is cached: every call recomputes from the parameters and
/// circulation it is given.
pub struct CurveQuoter;

impl CurveQuoter {
    /// Curve tokens minted for `reserve_in` of the reserve asset
    ///
    /// # Arguments
    /// * `reserve_in` - Reserve spent, before the fee (WAD)
    /// * `circulation` - Current circulation of the token being bought (WAD)
    /// * `params` - Curve parameters snapshot
    ///
    /// # Errors
    /// `DegenerateCurve` for a zero slope, `FeeOutOfRange` for a fee >= 1.
    pub fn quote_buy(
        reserve_in: u128,
        circulation: u128,
        params: &CurveParameters,
    ) -> Result<u128, QuoteError> {
        params.check_fee()?;
        if params.slope == 0 {
            return Err(QuoteError::DegenerateCurve);
        }

        let wad = BigUint::from(WAD);
        let slope = BigUint::from(params.slope);
        let adjusted = BigUint::from(reserve_in) * (WAD - params.fee_fraction) / &wad;
        let b = Self::linear_coefficient(circulation, params);

        let discriminant = &b * &b + &slope * &adjusted * 2u32;
        let root = isqrt_unsigned(&discriminant);

        // discriminant >= b^2, so root >= b
        let delta = (root - &b) * &wad / &slope;
        to_u128(delta, "curve tokens out")
    }

    /// Curve tokens that must be burned to receive `reserve_out` net of the fee
    ///
    /// Takes the smaller root of `a * d^2 - b * d + grossed = 0`, the only one
    /// reachable by burning from the current circulation. Rounds up, so burning
    /// the returned amount always releases at least `reserve_out`.
    ///
    /// # Errors
    /// - `FeeOutOfRange` when the fee is >= 1
    /// - `DegenerateCurve` for a zero slope
    /// - `QuoteUnavailable` when the curve cannot release that much reserve
    /// - `StaleStatePrecondition` when the burn exceeds the known circulation
    pub fn quote_sell(
        reserve_out: u128,
        circulation: u128,
        params: &CurveParameters,
    ) -> Result<u128, QuoteError> {
        params.check_fee()?;
        if params.slope == 0 {
            return Err(QuoteError::DegenerateCurve);
        }

        let wad = BigUint::from(WAD);
        let slope = BigUint::from(params.slope);
        let grossed =
            (BigUint::from(reserve_out) * WAD).div_ceil(&BigUint::from(WAD - params.fee_fraction));
        let b = Self::linear_coefficient(circulation, params);

        let discriminant = BigInt::from(&b * &b) - BigInt::from(&slope * &grossed * 2u32);
        if discriminant.sign() == Sign::Minus {
            debug!(reserve_out, circulation, "Sell quote unavailable: negative discriminant");
            return Err(QuoteError::unavailable(
                "sell would drive circulation negative",
            ));
        }

        // Floored root and ceiled division keep the burn on the pool's side
        let (_, root) = isqrt(&discriminant)?.into_parts();
        let delta = ((&b - root) * &wad).div_ceil(&slope);

        if delta > BigUint::from(circulation) {
            return Err(QuoteError::StaleStatePrecondition {
                required: delta.to_u128().unwrap_or(u128::MAX),
                circulation,
            });
        }
        to_u128(delta, "curve tokens in")
    }

    /// Reserve required to mint exactly `tokens_out`, grossed up by the fee
    ///
    /// Rounds up, so paying the returned amount always covers the mint.
    pub fn buy_cost(
        tokens_out: u128,
        circulation: u128,
        params: &CurveParameters,
    ) -> Result<u128, QuoteError> {
        params.check_fee()?;

        let wad = BigUint::from(WAD);
        let tokens = BigUint::from(tokens_out);
        let b = Self::linear_coefficient(circulation, params);

        // (2 * WAD * b * d + slope * d^2) / (2 * WAD^2)
        let numerator = &wad * &b * &tokens * 2u32 + BigUint::from(params.slope) * &tokens * &tokens;
        let cost = numerator.div_ceil(&(&wad * &wad * 2u32));

        let grossed = (cost * WAD).div_ceil(&BigUint::from(WAD - params.fee_fraction));
        to_u128(grossed, "buy cost")
    }

    /// Reserve released by burning `tokens_in`, net of the fee
    ///
    /// # Errors
    /// `StaleStatePrecondition` when `tokens_in` exceeds `circulation`.
    pub fn sell_proceeds(
        tokens_in: u128,
        circulation: u128,
        params: &CurveParameters,
    ) -> Result<u128, QuoteError> {
        params.check_fee()?;
        if tokens_in > circulation {
            return Err(QuoteError::StaleStatePrecondition {
                required: tokens_in,
                circulation,
            });
        }

        let wad = BigUint::from(WAD);
        let tokens = BigUint::from(tokens_in);
        let b = Self::linear_coefficient(circulation, params);

        // (2 * WAD * b * d - slope * d^2) / (2 * WAD^2), floored at zero
        let gain = &wad * &b * &tokens * 2u32;
        let curvature = BigUint::from(params.slope) * &tokens * &tokens;
        let numerator = if gain > curvature {
            gain - curvature
        } else {
            BigUint::zero()
        };
        let revenue = numerator / (&wad * &wad * 2u32);

        let net = revenue * (WAD - params.fee_fraction) / &wad;
        to_u128(net, "sell proceeds")
    }

    /// Marginal price of the next token at `circulation`
    pub fn spot_price(circulation: u128, params: &CurveParameters) -> Result<u128, QuoteError> {
        to_u128(Self::linear_coefficient(circulation, params), "spot price")
    }

    /// b = base_price + slope * circulation, WAD-scaled
    fn linear_coefficient(circulation: u128, params: &CurveParameters) -> BigUint {
        BigUint::from(params.base_price) + BigUint::from(params.slope) * circulation / WAD
    }
}

fn to_u128(value: BigUint, context: &'static str) -> Result<u128, QuoteError> {
    value.to_u128().ok_or_else(|| QuoteError::overflow(context))
}
