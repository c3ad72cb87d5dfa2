//! Common types used across the protocol.

use odra::casper_types::U256;
use odra::prelude::*;

/// A single price feed round
#[odra::odra_type]
pub struct RoundData {
    /// Monotonic round counter
    pub round_id: u64,
    /// USD price with 8 implied fractional decimals
    pub answer: U256,
    /// Timestamp the round was started
    pub started_at: u64,
    /// Timestamp the answer was last updated
    pub updated_at: u64,
    /// Round in which the answer was computed
    pub answered_in_round: u64,
}

/// Debt and collateral valuation snapshot for an account
#[odra::odra_type]
pub struct AccountSummary {
    /// Total dUSD minted by the account (18 decimals)
    pub total_minted: U256,
    /// USD value of all deposited collateral (18 decimals)
    pub collateral_value_usd: U256,
}
