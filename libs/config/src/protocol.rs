//! Pool protocol constants
//!
//! Values the execution layer expects in every VIX pool key.

/// Pool fee in pips (3000 = 0.3%)
pub const DEFAULT_POOL_FEE: u32 = 3000;

/// Fee denominator for pips
pub const FEE_PIPS_DENOMINATOR: u32 = 1_000_000;

/// Tick spacing paired with the 0.3% fee tier
pub const DEFAULT_TICK_SPACING: i32 = 60;

/// Basis points in 100%
pub const MAX_SLIPPAGE_BPS: u32 = 10_000;
