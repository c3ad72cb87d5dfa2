//! Aggregator-style price feed contract.
//!
//! Stores an 8-decimal USD answer pushed by a designated feeder account
//! and serves it in the standard round shape. Consumers apply their own
//! freshness policy on `updated_at`; the feed itself never rejects reads.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::EngineError;
use crate::types::RoundData;

/// Fractional decimals in every answer
const FEED_DECIMALS: u8 = 8;

/// Price Feed Contract
#[odra::module]
pub struct PriceFeed {
    /// Account allowed to push answers
    feeder: Var<Address>,
    /// Human-readable pair description (e.g. "WETH / USD")
    description: Var<String>,
    /// Latest answer (8 decimals)
    answer: Var<U256>,
    /// Round counter
    round: Var<u64>,
    /// Timestamp the latest round was started
    started_at: Var<u64>,
    /// Timestamp of the latest answer
    updated_at: Var<u64>,
}

#[odra::module]
impl PriceFeed {
    /// Initialize the feed with its description and first answer.
    ///
    /// The deployer becomes the feeder.
    pub fn init(&mut self, description: String, initial_answer: U256) {
        let now = self.env().get_block_time();
        self.feeder.set(self.env().caller());
        self.description.set(description);
        self.answer.set(initial_answer);
        self.round.set(1);
        self.started_at.set(now);
        self.updated_at.set(now);
    }

    /// Push a new answer (feeder only), starting a fresh round.
    pub fn update_answer(&mut self, answer: U256) {
        self.require_feeder();

        let now = self.env().get_block_time();
        let round = self.round.get().unwrap_or(0) + 1;
        self.answer.set(answer);
        self.round.set(round);
        self.started_at.set(now);
        self.updated_at.set(now);
    }

    /// Latest round in the standard aggregator shape.
    pub fn latest_round_data(&self) -> RoundData {
        let round = self.round.get().unwrap_or(0);
        RoundData {
            round_id: round,
            answer: self.answer.get().unwrap_or(U256::zero()),
            started_at: self.started_at.get().unwrap_or(0),
            updated_at: self.updated_at.get().unwrap_or(0),
            answered_in_round: round,
        }
    }

    /// Latest answer (8 decimals)
    pub fn latest_answer(&self) -> U256 {
        self.answer.get().unwrap_or(U256::zero())
    }

    /// Timestamp of the latest answer
    pub fn latest_timestamp(&self) -> u64 {
        self.updated_at.get().unwrap_or(0)
    }

    /// Fractional decimals carried by answers
    pub fn decimals(&self) -> u8 {
        FEED_DECIMALS
    }

    /// Pair description
    pub fn description(&self) -> String {
        self.description.get().unwrap_or_default()
    }

    /// Account allowed to push answers
    pub fn get_feeder(&self) -> Option<Address> {
        self.feeder.get()
    }

    fn require_feeder(&self) {
        let caller = self.env().caller();
        match self.feeder.get() {
            Some(feeder) if caller == feeder => {}
            _ => self.env().revert(EngineError::Unauthorized),
        }
    }
}
