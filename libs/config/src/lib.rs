//! # VIX Quoter Configuration
//!
//! Pool key constants, service defaults and the file/environment loader used
//! by the swap planner.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vix_config::load_config;
//!
//! let config = load_config(None, Some("sepolia")).unwrap();
//! println!("router: {}", config.trading.router);
//! ```

pub mod protocol;
pub mod quoter_config;
pub mod service;

// Re-export commonly used types
pub use protocol::*;
pub use quoter_config::{load_config, PoolSettings, QuoterConfig, TradingSettings};
