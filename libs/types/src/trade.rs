//! Trade intents and the swap instructions planned from them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two curve-issued tokens a trade targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveSide {
    High,
    Low,
}

impl fmt::Display for CurveSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveSide::High => write!(f, "High"),
            CurveSide::Low => write!(f, "Low"),
        }
    }
}

/// Buy mints curve tokens for reserve, Sell burns them for reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    Buy,
    Sell,
}

/// A single user action, consumed once by the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeIntent {
    pub side: CurveSide,
    pub direction: TradeDirection,
    /// Reserve asset amount (WAD): spent on a buy, received on a sell
    pub reserve_amount: u128,
}

impl TradeIntent {
    pub fn buy(side: CurveSide, reserve_amount: u128) -> Self {
        Self {
            side,
            direction: TradeDirection::Buy,
            reserve_amount,
        }
    }

    pub fn sell(side: CurveSide, reserve_amount: u128) -> Self {
        Self {
            side,
            direction: TradeDirection::Sell,
            reserve_amount,
        }
    }
}

/// Router call shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapMode {
    /// `amount_specified` is spent exactly, `bound_amount` is the minimum received
    ExactInput,
    /// `amount_specified` is received exactly, `bound_amount` is the maximum spent
    ExactOutput,
}

/// Concrete instruction handed to the execution layer. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapInstruction {
    pub mode: SwapMode,
    pub amount_specified: u128,
    /// Slippage-adjusted: minimum out for ExactInput, maximum in for ExactOutput
    pub bound_amount: u128,
    /// true = token0 -> token1 on the canonically ordered pair
    pub zero_for_one: bool,
}

impl SwapInstruction {
    /// The most the router may pull from the trader for this swap
    pub fn input_amount(&self) -> u128 {
        match self.mode {
            SwapMode::ExactInput => self.amount_specified,
            SwapMode::ExactOutput => self.bound_amount,
        }
    }
}
