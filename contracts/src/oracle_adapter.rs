//! Price oracle adapter.
//!
//! Reads an external aggregator-style price feed and rejects stale
//! rounds. The gate fails closed: without a fresh answer the engine
//! refuses to value collateral at all, freezing every dependent
//! operation rather than proceeding on bad data.

use odra::casper_types::RuntimeArgs;
use odra::casper_types::U256;
use odra::prelude::*;
use odra::CallDef;

use crate::errors::EngineError;
use crate::types::RoundData;

/// Maximum accepted age of a feed answer (3 hours)
pub const MAX_PRICE_AGE: u64 = 3 * 60 * 60;

/// Entry point exposed by price feed contracts
const LATEST_ROUND_DATA_EP: &str = "latest_round_data";

/// Staleness-gated reader over external price feeds
pub struct PriceOracle;

impl PriceOracle {
    /// Read the latest answer from `feed`.
    ///
    /// Returns the raw 8-decimal answer and its update timestamp.
    /// Reverts with `StalePrice` when the answer is older than
    /// `MAX_PRICE_AGE` or is zero; a missing price is not a price.
    pub fn read(env: &odra::ContractEnv, feed: Address) -> (U256, u64) {
        let call_def = CallDef::new(LATEST_ROUND_DATA_EP, false, RuntimeArgs::new());
        let round: RoundData = env.call_contract(feed, call_def);

        let now = env.get_block_time();
        if now.saturating_sub(round.updated_at) > MAX_PRICE_AGE {
            env.revert(EngineError::StalePrice);
        }
        if round.answer.is_zero() {
            env.revert(EngineError::StalePrice);
        }

        (round.answer, round.updated_at)
    }
}
