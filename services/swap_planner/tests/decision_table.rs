//! Swap planning decision table
//!
//! One test per (direction, reserve position) row, plus the error kinds a
//! failing quote must surface with.

use proptest::prelude::*;
use swap_planner::plan;
use vix_amm::{CirculatingSupply, CurveParameters, CurveQuoter, CurveState};
use vix_types::{
    max_in_with_slippage, min_out_with_slippage, CurveSide, PoolKeyOrdering, QuoteError,
    SwapMode, TradeIntent, WAD,
};

/// Sorts before CURVE_TOKEN
const RESERVE_LOW: &str = "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238";
/// Sorts after CURVE_TOKEN
const RESERVE_HIGH: &str = "0xE737e5cebeeba77efe34d4aa090756590b1ce275";
const CURVE_TOKEN: &str = "0x8fe6b999dc680ccfdd5bf7eb0974218be2542daa";

const SLIPPAGE_BPS: u32 = 50;

fn params() -> CurveParameters {
    CurveParameters::new(2 * WAD, WAD, 0)
}

fn state() -> CurveState {
    CurveState::new(
        params(),
        CirculatingSupply {
            high: WAD,
            low: 0,
        },
    )
}

#[test]
fn test_buy_with_reserve_token0_is_exact_output() {
    let ordering = PoolKeyOrdering::new(RESERVE_LOW, CURVE_TOKEN);
    assert!(ordering.is_reserve_token0());

    let instruction = plan(
        &TradeIntent::buy(CurveSide::Low, WAD),
        &ordering,
        &state(),
        SLIPPAGE_BPS,
    )
    .unwrap();

    let tokens_out = CurveQuoter::quote_buy(WAD, 0, &params()).unwrap();
    assert_eq!(instruction.mode, SwapMode::ExactOutput);
    assert_eq!(instruction.amount_specified, tokens_out);
    assert_eq!(instruction.bound_amount, 1_005_000_000_000_000_000);
    assert!(instruction.zero_for_one);
    assert_eq!(ordering.input_token(instruction.zero_for_one), RESERVE_LOW);
}

#[test]
fn test_buy_with_reserve_token1_is_exact_input() {
    let ordering = PoolKeyOrdering::new(RESERVE_HIGH, CURVE_TOKEN);
    assert!(!ordering.is_reserve_token0());

    let instruction = plan(
        &TradeIntent::buy(CurveSide::Low, WAD),
        &ordering,
        &state(),
        SLIPPAGE_BPS,
    )
    .unwrap();

    let tokens_out = CurveQuoter::quote_buy(WAD, 0, &params()).unwrap();
    assert_eq!(instruction.mode, SwapMode::ExactInput);
    assert_eq!(instruction.amount_specified, WAD);
    assert_eq!(
        instruction.bound_amount,
        min_out_with_slippage(tokens_out, SLIPPAGE_BPS).unwrap()
    );
    assert!(!instruction.zero_for_one);
    assert_eq!(ordering.input_token(instruction.zero_for_one), RESERVE_HIGH);
}

#[test]
fn test_sell_with_reserve_token0_is_exact_input() {
    let ordering = PoolKeyOrdering::new(RESERVE_LOW, CURVE_TOKEN);

    let instruction = plan(
        &TradeIntent::sell(CurveSide::High, WAD),
        &ordering,
        &state(),
        SLIPPAGE_BPS,
    )
    .unwrap();

    let tokens_in = CurveQuoter::quote_sell(WAD, WAD, &params()).unwrap();
    assert_eq!(instruction.mode, SwapMode::ExactInput);
    assert_eq!(instruction.amount_specified, tokens_in);
    assert_eq!(instruction.bound_amount, 995_000_000_000_000_000);
    assert!(!instruction.zero_for_one);
    assert_eq!(ordering.input_token(instruction.zero_for_one), CURVE_TOKEN);
}

#[test]
fn test_sell_with_reserve_token1_is_exact_output() {
    let ordering = PoolKeyOrdering::new(RESERVE_HIGH, CURVE_TOKEN);

    let instruction = plan(
        &TradeIntent::sell(CurveSide::High, WAD),
        &ordering,
        &state(),
        SLIPPAGE_BPS,
    )
    .unwrap();

    let tokens_in = CurveQuoter::quote_sell(WAD, WAD, &params()).unwrap();
    assert_eq!(instruction.mode, SwapMode::ExactOutput);
    assert_eq!(instruction.amount_specified, WAD);
    assert_eq!(
        instruction.bound_amount,
        max_in_with_slippage(tokens_in, SLIPPAGE_BPS).unwrap()
    );
    assert!(instruction.zero_for_one);
    assert_eq!(ordering.input_token(instruction.zero_for_one), CURVE_TOKEN);
}

#[test]
fn test_exact_output_sell_bound_releases_full_reserve_at_zero_slippage() {
    let ordering = PoolKeyOrdering::new(RESERVE_HIGH, CURVE_TOKEN);
    let params = CurveParameters::new(2 * WAD, WAD, 3_000_000_000_000_000);
    let circulation = 10 * WAD;
    let state = CurveState::new(
        params,
        CirculatingSupply {
            high: circulation,
            low: circulation,
        },
    );

    for reserve_amount in [5 * WAD, WAD, 333_333_333_333_333_333, 2_718_281_828_459_045_235] {
        let instruction = plan(
            &TradeIntent::sell(CurveSide::High, reserve_amount),
            &ordering,
            &state,
            0,
        )
        .unwrap();
        assert_eq!(instruction.mode, SwapMode::ExactOutput);
        assert_eq!(instruction.amount_specified, reserve_amount);

        // Burning the max-in bound must cover the exact reserve requested
        let released =
            CurveQuoter::sell_proceeds(instruction.bound_amount, circulation, &params).unwrap();
        assert!(
            released >= reserve_amount,
            "max in {} releases {} < {}",
            instruction.bound_amount,
            released,
            reserve_amount
        );
    }
}

#[test]
fn test_reserve_sorting_last_buys_exact_input_regardless_of_case() {
    // Upper-case hex must not move the reserve ahead of the curve token
    let ordering = PoolKeyOrdering::new(&RESERVE_HIGH.to_uppercase(), CURVE_TOKEN);
    assert!(!ordering.is_reserve_token0());

    let instruction = plan(
        &TradeIntent::buy(CurveSide::High, WAD),
        &ordering,
        &state(),
        SLIPPAGE_BPS,
    )
    .unwrap();
    assert_eq!(instruction.mode, SwapMode::ExactInput);
    assert!(!instruction.zero_for_one);
}

#[test]
fn test_full_fee_surfaces_fee_out_of_range() {
    let ordering = PoolKeyOrdering::new(RESERVE_LOW, CURVE_TOKEN);
    let state = CurveState::new(
        CurveParameters::new(2 * WAD, WAD, WAD),
        CirculatingSupply {
            high: 10 * WAD,
            low: 10 * WAD,
        },
    );

    assert_eq!(
        plan(&TradeIntent::sell(CurveSide::High, WAD), &ordering, &state, SLIPPAGE_BPS),
        Err(QuoteError::FeeOutOfRange { fee: WAD, scale: WAD })
    );
}

#[test]
fn test_flat_curve_surfaces_degenerate_curve() {
    let ordering = PoolKeyOrdering::new(RESERVE_HIGH, CURVE_TOKEN);
    let state = CurveState::new(CurveParameters::new(0, WAD, 0), CirculatingSupply::default());

    assert_eq!(
        plan(&TradeIntent::buy(CurveSide::Low, WAD), &ordering, &state, SLIPPAGE_BPS),
        Err(QuoteError::DegenerateCurve)
    );
}

#[test]
fn test_selling_past_circulation_surfaces_stale_state() {
    let ordering = PoolKeyOrdering::new(RESERVE_LOW, CURVE_TOKEN);

    let result = plan(
        &TradeIntent::sell(CurveSide::High, 2_100_000_000_000_000_000),
        &ordering,
        &state(),
        SLIPPAGE_BPS,
    );
    assert!(matches!(
        result,
        Err(QuoteError::StaleStatePrecondition { circulation, .. }) if circulation == WAD
    ));
}

#[test]
fn test_selling_past_curve_depth_is_unavailable() {
    let ordering = PoolKeyOrdering::new(RESERVE_LOW, CURVE_TOKEN);

    let result = plan(
        &TradeIntent::sell(CurveSide::High, 3 * WAD),
        &ordering,
        &state(),
        SLIPPAGE_BPS,
    );
    assert!(matches!(result, Err(QuoteError::QuoteUnavailable { .. })));
}

prop_compose! {
    fn address()(bytes in prop::array::uniform20(any::<u8>())) -> String {
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        format!("0x{}", hex)
    }
}

proptest! {
    #[test]
    fn prop_buys_pay_reserve_and_sells_pay_curve_tokens(
        reserve in address(),
        curve in address(),
        reserve_amount in 1_000_000_000_000_000u128..=1_000_000_000_000_000_000u128,
        buy in any::<bool>(),
        slippage_bps in 0u32..=10_000,
    ) {
        prop_assume!(!reserve.eq_ignore_ascii_case(&curve));

        let ordering = PoolKeyOrdering::new(&reserve, &curve);
        let state = CurveState::new(
            params(),
            CirculatingSupply { high: 10 * WAD, low: 10 * WAD },
        );
        let intent = if buy {
            TradeIntent::buy(CurveSide::High, reserve_amount)
        } else {
            TradeIntent::sell(CurveSide::High, reserve_amount)
        };

        let instruction = plan(&intent, &ordering, &state, slippage_bps).unwrap();
        let paid_with = ordering.input_token(instruction.zero_for_one);
        let expected = if buy { reserve.as_str() } else { curve.as_str() };

        prop_assert_eq!(paid_with, expected);
        prop_assert!(instruction.amount_specified > 0);
    }
}
