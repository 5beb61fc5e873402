//! Quoter Configuration Module
//!
//! Loads pool and trading settings from a TOML file, layers optional
//! per-environment overrides and `VIX_`-prefixed environment variables on
//! top, then expands `${VAR}` placeholders in contract addresses.

use crate::protocol::{
    DEFAULT_POOL_FEE, DEFAULT_TICK_SPACING, FEE_PIPS_DENOMINATOR, MAX_SLIPPAGE_BPS,
};
use crate::service::{DEFAULT_CONFIG_PATH, DEFAULT_SLIPPAGE_BPS, ENVIRONMENTS_DIR, ENV_PREFIX};
use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main quoter configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QuoterConfig {
    /// Pool key settings shared by every High/Low pool
    pub pool: PoolSettings,

    /// Trade execution settings
    pub trading: TradingSettings,
}

/// Pool key settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PoolSettings {
    #[serde(default = "default_pool_fee")]
    pub fee: u32,

    #[serde(default = "default_tick_spacing")]
    pub tick_spacing: i32,

    /// Hook contract attached to the pools (the curve contract)
    pub hooks: String,
}

/// Trade execution settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TradingSettings {
    /// Reserve asset every curve token trades against
    pub reserve_token: String,

    /// Swap router, also the spender approvals are granted to
    pub router: String,

    #[serde(default = "default_slippage_bps")]
    pub default_slippage_bps: u32,
}

fn default_pool_fee() -> u32 {
    DEFAULT_POOL_FEE
}

fn default_tick_spacing() -> i32 {
    DEFAULT_TICK_SPACING
}

fn default_slippage_bps() -> u32 {
    DEFAULT_SLIPPAGE_BPS
}

impl QuoterConfig {
    /// Load configuration from files with environment overrides
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        debug!("Loading quoter config: {:?}", base);

        let mut builder = Config::builder().add_source(File::from(base).required(true));

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = PathBuf::from(ENVIRONMENTS_DIR).join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        // Override with environment variables (VIX_TRADING__ROUTER=...)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Parse configuration from TOML text without touching the environment
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Expand `${VAR}` placeholders in contract addresses
    pub fn expand_env_vars(&mut self) -> Result<()> {
        self.pool.hooks = shellexpand::env(&self.pool.hooks)
            .context("Failed to expand hooks address")?
            .to_string();
        self.trading.reserve_token = shellexpand::env(&self.trading.reserve_token)
            .context("Failed to expand reserve token address")?
            .to_string();
        self.trading.router = shellexpand::env(&self.trading.router)
            .context("Failed to expand router address")?
            .to_string();
        Ok(())
    }

    /// Reject settings that would produce unusable pool keys or bounds
    pub fn validate(&self) -> Result<()> {
        if self.pool.fee >= FEE_PIPS_DENOMINATOR {
            bail!(
                "Pool fee {} pips must be below {}",
                self.pool.fee,
                FEE_PIPS_DENOMINATOR
            );
        }
        if self.pool.tick_spacing <= 0 {
            bail!("Tick spacing must be positive, got {}", self.pool.tick_spacing);
        }
        if self.trading.default_slippage_bps > MAX_SLIPPAGE_BPS {
            bail!(
                "Default slippage {} bps exceeds {} bps",
                self.trading.default_slippage_bps,
                MAX_SLIPPAGE_BPS
            );
        }

        for (name, address) in [
            ("pool.hooks", &self.pool.hooks),
            ("trading.reserve_token", &self.trading.reserve_token),
            ("trading.router", &self.trading.router),
        ] {
            if address.trim().is_empty() {
                bail!("{} must be set", name);
            }
        }

        if self
            .trading
            .reserve_token
            .eq_ignore_ascii_case(&self.trading.router)
        {
            bail!("Reserve token and router cannot share an address");
        }

        Ok(())
    }
}

/// Convenience function to load, expand and validate configuration
pub fn load_config(path: Option<&Path>, environment: Option<&str>) -> Result<QuoterConfig> {
    let mut config = QuoterConfig::load(path, environment)?;
    config.expand_env_vars()?;
    config.validate()?;
    Ok(config)
}
