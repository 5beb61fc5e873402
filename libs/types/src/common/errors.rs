//! Error kinds for curve quoting and swap planning
//!
//! Every failure of the pure quoting core maps to exactly one variant here, so
//! a caller can tell "the curve is too shallow" apart from "the fee is
//! misconfigured" instead of receiving a silent zero.

use thiserror::Error;

/// Errors that can occur while quoting against the bonding curve or planning a swap
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Square root requested for a negative value
    #[error("Domain error: cannot take the square root of negative value {value}")]
    DomainError { value: String },

    /// Curve slope is zero, so the quadratic has no finite positive root
    #[error("Degenerate curve: slope is zero, refusing to quote a free mint")]
    DegenerateCurve,

    /// Fee fraction is at or above one scale unit
    #[error("Fee {fee} is out of range: must be below {scale}")]
    FeeOutOfRange { fee: u128, scale: u128 },

    /// No valid quote exists for the requested amount
    #[error("Quote unavailable: {reason}")]
    QuoteUnavailable { reason: &'static str },

    /// Burn amount exceeds the circulation the snapshot knows about
    #[error("Stale state: burning {required} exceeds known circulation {circulation}")]
    StaleStatePrecondition { required: u128, circulation: u128 },

    /// Slippage tolerance beyond 100%
    #[error("Slippage {bps} bps exceeds maximum of {max} bps")]
    SlippageOutOfRange { bps: u32, max: u32 },

    /// Result does not fit the router's uint128 amount fields
    #[error("Amount overflow: {context} does not fit in 128 bits")]
    AmountOverflow { context: &'static str },

    /// Human-readable amount could not be parsed
    #[error("Invalid amount: '{input}' - expected a non-negative decimal")]
    InvalidAmount { input: String },
}

impl QuoteError {
    pub fn unavailable(reason: &'static str) -> Self {
        Self::QuoteUnavailable { reason }
    }

    pub fn overflow(context: &'static str) -> Self {
        Self::AmountOverflow { context }
    }
}
