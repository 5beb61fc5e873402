//! # Trade Executor
//!
//! Runs one trade end to end against the curve contract and the swap router:
//!
//! ```text
//! read curve state -> plan -> [approve, await receipt] -> swap, await receipt -> refresh state
//! ```
//!
//! Each stage depends on the settled result of the one before it, so stages
//! never overlap within a trade. Separate trades may run concurrently, each
//! against the snapshot it read itself. Timeouts and retries belong to the
//! collaborator implementations.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use vix_amm::{CurveParameters, CurveState, VixData};
use vix_config::QuoterConfig;
use vix_types::{format_wad, PoolKey, PoolKeyOrdering, SwapInstruction, TradeIntent};

use crate::allowance::needs_approval;
use crate::planner::plan;

/// Read-only view of the curve contract
#[async_trait]
pub trait CurveOracle: Send + Sync {
    /// Current slope, base price and fee
    async fn curve_parameters(&self) -> Result<CurveParameters>;

    /// Token addresses, circulation and reserves for a pool (`getVixData`)
    async fn vix_data(&self, pool: &str) -> Result<VixData>;
}

/// Transaction-submitting side of the chain
///
/// Every submission resolves once its transaction is final.
#[async_trait]
pub trait ExecutionLayer: Send + Sync {
    async fn allowance(&self, token: &str, owner: &str, spender: &str) -> Result<u128>;

    async fn approve(&self, token: &str, spender: &str, amount: u128) -> Result<TxReceipt>;

    async fn swap(&self, key: &PoolKey, instruction: &SwapInstruction) -> Result<TxReceipt>;
}

/// Finalized transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: String,
    /// false when the transaction reverted
    pub success: bool,
}

/// Result of a settled trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeOutcome {
    pub instruction: SwapInstruction,
    /// Present only when an approval had to be submitted first
    pub approval_tx: Option<String>,
    pub swap_tx: String,
    /// Curve state read after the swap settled
    pub refreshed_state: CurveState,
}

/// Sequential trade pipeline over the oracle and execution seams
pub struct TradeExecutor {
    config: QuoterConfig,
    oracle: Arc<dyn CurveOracle>,
    execution: Arc<dyn ExecutionLayer>,
}

impl TradeExecutor {
    pub fn new(
        config: QuoterConfig,
        oracle: Arc<dyn CurveOracle>,
        execution: Arc<dyn ExecutionLayer>,
    ) -> Self {
        Self {
            config,
            oracle,
            execution,
        }
    }

    /// Execute `intent` on `pool` for `owner` with the configured slippage
    pub async fn execute(
        &self,
        intent: TradeIntent,
        pool: &str,
        owner: &str,
    ) -> Result<TradeOutcome> {
        let slippage_bps = self.config.trading.default_slippage_bps;
        self.execute_with_slippage(intent, pool, owner, slippage_bps)
            .await
    }

    /// Execute `intent` with an explicit slippage tolerance
    pub async fn execute_with_slippage(
        &self,
        intent: TradeIntent,
        pool: &str,
        owner: &str,
        slippage_bps: u32,
    ) -> Result<TradeOutcome> {
        let reserve_amount = format_wad(intent.reserve_amount)
            .map(|amount| amount.to_string())
            .unwrap_or_else(|_| intent.reserve_amount.to_string());
        info!(
            side = %intent.side,
            direction = ?intent.direction,
            %reserve_amount,
            pool,
            "Executing trade"
        );

        let (state, data) = self.read_state(pool).await?;

        let router = self.config.trading.router.as_str();
        let ordering = PoolKeyOrdering::new(
            &self.config.trading.reserve_token,
            data.curve_token(intent.side),
        );

        let instruction = plan(&intent, &ordering, &state, slippage_bps).with_context(|| {
            format!(
                "Failed to plan {:?} of {} {} tokens",
                intent.direction, intent.reserve_amount, intent.side
            )
        })?;

        let input_token = ordering.input_token(instruction.zero_for_one);
        let required = instruction.input_amount();
        let current = self
            .execution
            .allowance(input_token, owner, router)
            .await
            .context("Failed to read allowance")?;

        let approval_tx = if needs_approval(owner, router, input_token, required, current) {
            info!(token = input_token, amount = required, "Submitting approval");
            let receipt = self
                .execution
                .approve(input_token, router, required)
                .await
                .context("Approval submission failed")?;
            if !receipt.success {
                bail!("Approval {} reverted", receipt.tx_hash);
            }
            Some(receipt.tx_hash)
        } else {
            None
        };

        let settings = &self.config.pool;
        let key = ordering.pool_key(settings.fee, settings.tick_spacing, &settings.hooks);
        debug!(
            ?key,
            ?instruction,
            token_in = input_token,
            token_out = ordering.output_token(instruction.zero_for_one),
            "Submitting swap"
        );

        let receipt = self
            .execution
            .swap(&key, &instruction)
            .await
            .context("Swap submission failed")?;
        if !receipt.success {
            bail!("Swap {} reverted", receipt.tx_hash);
        }

        // Circulation moved with the swap; the old snapshot is stale now
        let (refreshed_state, _) = self
            .read_state(pool)
            .await
            .context("Failed to refresh curve state after swap")?;

        info!(swap_tx = %receipt.tx_hash, "Trade settled");

        Ok(TradeOutcome {
            instruction,
            approval_tx,
            swap_tx: receipt.tx_hash,
            refreshed_state,
        })
    }

    async fn read_state(&self, pool: &str) -> Result<(CurveState, VixData)> {
        let (params, data) = tokio::try_join!(
            self.oracle.curve_parameters(),
            self.oracle.vix_data(pool)
        )
        .context("Failed to read curve state")?;

        Ok((data.curve_state(params), data))
    }
}
