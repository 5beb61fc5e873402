//! # Swap Planner
//!
//! Plans VIX curve trades into router calls and runs them through the
//! approve/swap/refresh pipeline.
//!
//! - [`planner::plan`] picks exact-input or exact-output, the amount, the
//!   slippage bound and the swap direction for a trade intent.
//! - [`allowance::needs_approval`] gates the approval transaction.
//! - [`executor::TradeExecutor`] sequences the external calls for one trade.

pub mod allowance;
pub mod executor;
pub mod planner;

pub use allowance::needs_approval;
pub use executor::{CurveOracle, ExecutionLayer, TradeExecutor, TradeOutcome, TxReceipt};
pub use planner::plan;
