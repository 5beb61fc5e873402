//! Trading defaults
//!
//! Defaults applied when a configuration file leaves a value out.

/// Slippage tolerance applied to planned swaps (basis points, 50 = 0.5%)
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// Base configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/vix.toml";

/// Directory holding per-environment override files
pub const ENVIRONMENTS_DIR: &str = "config/environments";

/// Prefix for environment variable overrides (VIX_TRADING__ROUTER=...)
pub const ENV_PREFIX: &str = "VIX";
