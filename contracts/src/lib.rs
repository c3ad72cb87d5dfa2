//! dUSD Protocol Contracts
//!
//! Casper-native collateral-backed stablecoin engine.
//!
//! ## Architecture
//!
//! - **StableEngine**: collateral/debt ledgers, minting, redemption, liquidation
//! - **Stablecoin (dUSD)**: CEP-18 stablecoin, mint authority held by the engine
//! - **PriceFeed**: aggregator-style 8-decimal USD price feed
//! - **OracleAdapter**: staleness-gated feed reads (fail-closed)
//! - **CollateralToken**: reference CEP-18 collateral for local networks
//!
//! ## Solvency model
//!
//! Only 50% of nominal collateral value counts toward solvency, so every
//! position must stay at least 2x over-collateralized. Positions with a
//! health factor below 1.0 can be liquidated by anyone for a 10%
//! collateral bonus. Stale oracle data freezes every valuation-dependent
//! operation rather than risking mispriced collateral.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod errors;
pub mod health;
pub mod oracle_adapter;
pub mod types;

// Contract modules
pub mod collateral_token;
pub mod engine;
pub mod price_feed;
pub mod stablecoin;
