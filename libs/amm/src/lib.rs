//! # VIX AMM Library - Exact Bonding-Curve Mathematics
//!
//! ## Purpose
//!
//! Deterministic quotes for minting and burning the VIX High/Low tokens
//! against their quadratic bonding curve. Every quote is computed from an
//! explicit [`CurveState`] snapshot with arbitrary-precision integers, so two
//! callers holding the same snapshot always get the same answer.
//!
//! ## Integration Points
//!
//! - **Input Sources**: Curve parameters and `getVixData` circulation read by the caller
//! - **Output Destinations**: Swap planner (amounts and slippage bounds), display layers
//! - **Precision**: 18-decimal fixed point throughout, floor rounding on every division
//!
//! ## Error Handling
//!
//! Quotes never return a sentinel zero for a failure. A flat curve, a fee at
//! 100%, insufficient curve depth and a burn larger than the snapshot's
//! circulation each surface as their own [`QuoteError`](vix_types::QuoteError) kind.

pub mod curve_state;
pub mod isqrt;
pub mod pricing;
pub mod quoter;

pub use curve_state::{CirculatingSupply, CurveParameters, CurveState, VixData};
pub use isqrt::{isqrt, isqrt_unsigned};
pub use pricing::CurvePricing;
pub use quoter::CurveQuoter;
