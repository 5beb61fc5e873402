//! Swap planning
//!
//! Turns a trade intent into the router call that realises it. The router
//! anchors exact-input and exact-output semantics to the token0 -> token1
//! direction, so the call shape depends both on the trade direction and on
//! which asset sorts first in the pool:
//!
//! | direction | reserve is token0 | mode        | specified     | bound                   | zero_for_one |
//! |-----------|-------------------|-------------|---------------|-------------------------|--------------|
//! | Buy       | yes               | ExactOutput | quote_buy(r)  | r, max in               | true         |
//! | Buy       | no                | ExactInput  | r             | quote_buy(r), min out   | false        |
//! | Sell      | yes               | ExactInput  | quote_sell(r) | r, min out              | false        |
//! | Sell      | no                | ExactOutput | r             | quote_sell(r), max in   | true         |
//!
//! A wrong cell either reverts on chain or trades the wrong asset.

use tracing::debug;
use vix_amm::{CurvePricing, CurveState};
use vix_types::{
    check_slippage, max_in_with_slippage, min_out_with_slippage, PoolKeyOrdering, QuoteError,
    SwapInstruction, SwapMode, TradeDirection, TradeIntent,
};

/// Plan the router call for `intent` against a curve snapshot
///
/// Quotes use the circulation of the intent's side. A zero quote fails with
/// `QuoteUnavailable`; any other quote failure keeps its own error kind.
pub fn plan(
    intent: &TradeIntent,
    ordering: &PoolKeyOrdering,
    state: &CurveState,
    slippage_bps: u32,
) -> Result<SwapInstruction, QuoteError> {
    check_slippage(slippage_bps)?;

    let reserve = intent.reserve_amount;
    let instruction = match (intent.direction, ordering.is_reserve_token0()) {
        (TradeDirection::Buy, true) => {
            let tokens_out = non_zero(
                state.quote_buy(intent.side, reserve)?,
                "buy quote is zero",
            )?;
            SwapInstruction {
                mode: SwapMode::ExactOutput,
                amount_specified: tokens_out,
                bound_amount: max_in_with_slippage(reserve, slippage_bps)?,
                zero_for_one: true,
            }
        }
        (TradeDirection::Buy, false) => {
            let tokens_out = non_zero(
                state.quote_buy(intent.side, reserve)?,
                "buy quote is zero",
            )?;
            SwapInstruction {
                mode: SwapMode::ExactInput,
                amount_specified: reserve,
                bound_amount: min_out_with_slippage(tokens_out, slippage_bps)?,
                zero_for_one: false,
            }
        }
        (TradeDirection::Sell, true) => {
            let tokens_in = non_zero(
                state.quote_sell(intent.side, reserve)?,
                "sell quote is zero",
            )?;
            SwapInstruction {
                mode: SwapMode::ExactInput,
                amount_specified: tokens_in,
                bound_amount: min_out_with_slippage(reserve, slippage_bps)?,
                zero_for_one: false,
            }
        }
        (TradeDirection::Sell, false) => {
            let tokens_in = non_zero(
                state.quote_sell(intent.side, reserve)?,
                "sell quote is zero",
            )?;
            SwapInstruction {
                mode: SwapMode::ExactOutput,
                amount_specified: reserve,
                bound_amount: max_in_with_slippage(tokens_in, slippage_bps)?,
                zero_for_one: true,
            }
        }
    };

    debug!(
        side = %intent.side,
        direction = ?intent.direction,
        reserve_is_token0 = ordering.is_reserve_token0(),
        mode = ?instruction.mode,
        amount_specified = instruction.amount_specified,
        bound_amount = instruction.bound_amount,
        zero_for_one = instruction.zero_for_one,
        "Planned swap"
    );

    Ok(instruction)
}

fn non_zero(amount: u128, reason: &'static str) -> Result<u128, QuoteError> {
    if amount == 0 {
        return Err(QuoteError::unavailable(reason));
    }
    Ok(amount)
}
