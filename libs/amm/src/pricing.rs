//! Pricing trait for quoting against a curve snapshot

use crate::curve_state::CurveState;
use crate::quoter::CurveQuoter;
use vix_types::{CurveSide, QuoteError};

/// Unified quoting interface over one side of the curve
pub trait CurvePricing {
    /// Curve tokens received for `reserve_in`
    fn quote_buy(&self, side: CurveSide, reserve_in: u128) -> Result<u128, QuoteError>;

    /// Curve tokens required to receive `reserve_out`
    fn quote_sell(&self, side: CurveSide, reserve_out: u128) -> Result<u128, QuoteError>;

    /// Marginal price of the next token
    fn spot_price(&self, side: CurveSide) -> Result<u128, QuoteError>;
}

impl CurvePricing for CurveState {
    fn quote_buy(&self, side: CurveSide, reserve_in: u128) -> Result<u128, QuoteError> {
        CurveQuoter::quote_buy(reserve_in, self.circulation(side), &self.params)
    }

    fn quote_sell(&self, side: CurveSide, reserve_out: u128) -> Result<u128, QuoteError> {
        CurveQuoter::quote_sell(reserve_out, self.circulation(side), &self.params)
    }

    fn spot_price(&self, side: CurveSide) -> Result<u128, QuoteError> {
        CurveQuoter::spot_price(self.circulation(side), &self.params)
    }
}
