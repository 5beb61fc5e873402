//! Curve parameter and circulation snapshots
//!
//! Callers read these from the curve contract, quote against them, and throw
//! them away once a swap settles. Nothing in this crate refreshes or caches a
//! snapshot.

use serde::{Deserialize, Serialize};
use vix_types::{CurveSide, QuoteError, WAD};

/// Curve pricing parameters, all WAD-scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParameters {
    /// Marginal price increase per whole token of circulation
    pub slope: u128,
    /// Marginal price at zero circulation
    pub base_price: u128,
    /// Fee charged on the reserve side, in [0, WAD)
    pub fee_fraction: u128,
}

impl CurveParameters {
    pub fn new(slope: u128, base_price: u128, fee_fraction: u128) -> Self {
        Self {
            slope,
            base_price,
            fee_fraction,
        }
    }

    /// Fee must stay strictly below one scale unit
    pub fn check_fee(&self) -> Result<(), QuoteError> {
        if self.fee_fraction >= WAD {
            return Err(QuoteError::FeeOutOfRange {
                fee: self.fee_fraction,
                scale: WAD,
            });
        }
        Ok(())
    }
}

/// Circulating supply of each curve token, WAD-scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CirculatingSupply {
    pub high: u128,
    pub low: u128,
}

impl CirculatingSupply {
    pub fn for_side(&self, side: CurveSide) -> u128 {
        match side {
            CurveSide::High => self.high,
            CurveSide::Low => self.low,
        }
    }
}

/// Immutable snapshot a quote is computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveState {
    pub params: CurveParameters,
    pub supply: CirculatingSupply,
}

impl CurveState {
    pub fn new(params: CurveParameters, supply: CirculatingSupply) -> Self {
        Self { params, supply }
    }

    pub fn circulation(&self, side: CurveSide) -> u128 {
        self.supply.for_side(side)
    }
}

/// Pool view exposed by the curve contract (`getVixData`)
///
/// Index 0 is always the High token and index 1 the Low token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VixData {
    pub high_token: String,
    pub low_token: String,
    pub circulation0: u128,
    pub circulation1: u128,
    pub contract_holdings0: u128,
    pub contract_holdings1: u128,
    pub reserve0: u128,
    pub reserve1: u128,
    pub pool_address: String,
}

impl VixData {
    pub fn supply(&self) -> CirculatingSupply {
        CirculatingSupply {
            high: self.circulation0,
            low: self.circulation1,
        }
    }

    pub fn curve_state(&self, params: CurveParameters) -> CurveState {
        CurveState::new(params, self.supply())
    }

    pub fn curve_token(&self, side: CurveSide) -> &str {
        match side {
            CurveSide::High => &self.high_token,
            CurveSide::Low => &self.low_token,
        }
    }
}
