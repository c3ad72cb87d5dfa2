//! Solvency math for the stable engine.
//!
//! The health factor is the ratio of threshold-adjusted collateral value
//! to minted debt, scaled by `PRECISION`. Only half of nominal collateral
//! value counts toward solvency, so every position must stay at least 2x
//! over-collateralized. A ratio of exactly `PRECISION` (1.0) is the
//! solvency boundary.

use odra::casper_types::U256;

/// Internal precision scale (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Fractional decimals carried by every feed answer
pub const FEED_DECIMALS: u32 = 8;

/// Normalization from 8-decimal feed answers to 18-decimal values (1e10)
pub const ADDITIONAL_FEED_PRECISION: u128 = 10_000_000_000;

/// Share of nominal collateral value counted toward solvency (percent)
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Extra collateral awarded to a liquidator (percent of seized notional)
pub const LIQUIDATION_BONUS: u64 = 10;

/// Percentage scale
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Minimum health factor (1.0 scaled by PRECISION)
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;

/// Collateral value counted toward solvency: `value * 50 / 100`.
pub fn threshold_adjusted(collateral_value_usd: U256) -> U256 {
    collateral_value_usd * U256::from(LIQUIDATION_THRESHOLD) / U256::from(LIQUIDATION_PRECISION)
}

/// Health factor for a (debt, collateral value) pair.
///
/// A debt-free account is maximally solvent and never liquidatable.
/// Division truncates, so the ratio is rounded down and never overstates
/// solvency.
pub fn health_factor(total_minted: U256, collateral_value_usd: U256) -> U256 {
    if total_minted.is_zero() {
        return U256::MAX;
    }
    threshold_adjusted(collateral_value_usd) * U256::from(PRECISION) / total_minted
}

/// Whether a health factor clears the solvency boundary.
pub fn is_solvent(ratio: U256) -> bool {
    ratio >= U256::from(MIN_HEALTH_FACTOR)
}
