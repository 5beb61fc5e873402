//! # VIX Types
//!
//! Shared vocabulary for quoting and planning swaps against the VIX bonding
//! curve: WAD-scaled fixed-point helpers, trade intents, swap instructions,
//! canonical pair ordering, and the error kinds every component returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use vix_types::{parse_wad, CurveSide, PoolKeyOrdering, TradeIntent};
//!
//! let intent = TradeIntent::buy(CurveSide::High, parse_wad("25").unwrap());
//! let ordering = PoolKeyOrdering::new(
//!     "0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238",
//!     "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
//! );
//! assert!(ordering.is_reserve_token0());
//! # let _ = intent;
//! ```
//!
//! ## Conventions
//!
//! - Every amount is a raw `u128` scaled by [`WAD`] (1e18).
//! - `Decimal` is only used to parse and display amounts, never to quote.
//! - `token0` is always the case-insensitively smaller address.

pub mod common;
pub mod pairing;
pub mod trade;

pub use common::errors::QuoteError;
pub use common::fixed_point::{
    check_slippage, format_wad, max_in_with_slippage, min_out_with_slippage, parse_wad,
    BPS_DENOMINATOR, WAD, WAD_DECIMALS,
};
pub use pairing::{compare_tokens, is_reserve_token0, order, PoolKey, PoolKeyOrdering};
pub use trade::{CurveSide, SwapInstruction, SwapMode, TradeDirection, TradeIntent};
