//! Stable Engine Contract
//!
//! Collateral and debt bookkeeping for the dUSD stablecoin:
//! - accounts deposit supported CEP-18 collateral into engine custody
//! - mint dUSD against it, bounded by a 2x over-collateralization rule
//! - positions whose health factor falls below 1.0 can be liquidated by
//!   anyone for a 10% collateral bonus
//!
//! Every mutating entry point settles its ledger writes before making
//! any external token call, so a reentrant call observes consistent
//! state. Any failure reverts the whole operation; there is no partial
//! commit.

use odra::casper_types::{runtime_args, U256};
use odra::prelude::*;
use odra::CallDef;

use crate::errors::EngineError;
use crate::health;
use crate::oracle_adapter::PriceOracle;
use crate::types::AccountSummary;

/// Collateral moved into engine custody
#[odra::event]
pub struct CollateralDeposited {
    /// Depositing account
    pub account: Address,
    /// Collateral token
    pub token: Address,
    /// Amount deposited
    pub amount: U256,
}

/// Collateral released from engine custody
#[odra::event]
pub struct CollateralRedeemed {
    /// Account the collateral was debited from
    pub from: Address,
    /// Recipient of the collateral
    pub to: Address,
    /// Collateral token
    pub token: Address,
    /// Amount redeemed
    pub amount: U256,
}

/// Stable Engine Contract
#[odra::module]
pub struct StableEngine {
    /// dUSD stablecoin contract address
    stablecoin: Var<Address>,
    /// Fixed, ordered list of supported collateral tokens
    collateral_tokens: Var<Vec<Address>>,
    /// Price feed bound to each supported token
    price_feeds: Mapping<Address, Address>,
    /// Deposited collateral per (account, token)
    collateral_deposited: Mapping<(Address, Address), U256>,
    /// dUSD minted per account
    minted: Mapping<Address, U256>,
}

#[odra::module]
impl StableEngine {
    /// Initialize the engine with its supported collateral set.
    ///
    /// `collateral_tokens` and `price_feeds` are parallel lists; entry i
    /// of one belongs to entry i of the other. The set is fixed for the
    /// lifetime of the contract.
    pub fn init(
        &mut self,
        collateral_tokens: Vec<Address>,
        price_feeds: Vec<Address>,
        stablecoin: Address,
    ) {
        if collateral_tokens.len() != price_feeds.len() {
            self.env().revert(EngineError::ConfigurationMismatch);
        }

        for (token, feed) in collateral_tokens.iter().zip(price_feeds.iter()) {
            self.price_feeds.set(token, *feed);
        }
        self.collateral_tokens.set(collateral_tokens);
        self.stablecoin.set(stablecoin);
    }

    // ========== Deposit / Mint ==========

    /// Move `amount` of `token` from the caller into engine custody.
    pub fn deposit_collateral(&mut self, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }
        if self.price_feeds.get(&token).is_none() {
            self.env().revert(EngineError::UnsupportedCollateral);
        }

        let caller = self.env().caller();
        let key = (caller, token);
        let deposited = self.collateral_deposited.get(&key).unwrap_or(U256::zero());
        self.collateral_deposited.set(&key, deposited + amount);

        self.env().emit_event(CollateralDeposited {
            account: caller,
            token,
            amount,
        });

        let custody = self.env().self_address();
        if !self.token_transfer_from(token, caller, custody, amount) {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    /// Mint `amount` dUSD against the caller's collateral.
    pub fn mint_dusd(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let caller = self.env().caller();
        let debt = self.minted.get(&caller).unwrap_or(U256::zero());
        self.minted.set(&caller, debt + amount);

        self.require_solvent(caller);

        if !self.stablecoin_mint(caller, amount) {
            self.env().revert(EngineError::MintFailed);
        }
    }

    /// Deposit collateral and mint dUSD in one transaction.
    pub fn deposit_collateral_and_mint_dusd(
        &mut self,
        token: Address,
        collateral_amount: U256,
        dusd_amount: U256,
    ) {
        self.deposit_collateral(token, collateral_amount);
        self.mint_dusd(dusd_amount);
    }

    // ========== Redeem / Burn ==========

    /// Withdraw `amount` of `token` back to the caller.
    ///
    /// The caller's position must stay solvent after the withdrawal.
    pub fn redeem_collateral(&mut self, token: Address, amount: U256) {
        let caller = self.env().caller();
        self.redeem_internal(caller, caller, token, amount);
        self.require_solvent(caller);
    }

    /// Repay `amount` of the caller's minted debt.
    ///
    /// Pulls the tokens from the caller (requires allowance) and retires
    /// them from supply. Burning never worsens a health factor, so no
    /// solvency post-check is needed.
    pub fn burn_dusd(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.burn_internal(caller, caller, amount);
    }

    /// Burn dUSD and withdraw collateral in one transaction.
    pub fn redeem_collateral_for_dusd(
        &mut self,
        token: Address,
        collateral_amount: U256,
        dusd_amount: U256,
    ) {
        let caller = self.env().caller();
        // Burn first so the solvency check sees the reduced debt.
        self.burn_internal(caller, caller, dusd_amount);
        self.redeem_internal(caller, caller, token, collateral_amount);
        self.require_solvent(caller);
    }

    // ========== Liquidation ==========

    /// Cover `debt_to_cover` of an insolvent `user`'s debt with the
    /// caller's dUSD, seizing the equivalent collateral plus a 10% bonus.
    ///
    /// The target's health factor must strictly improve, otherwise the
    /// whole liquidation is rejected. The caller's own solvency is not
    /// checked; liquidators manage their own risk.
    pub fn liquidate(&mut self, token: Address, user: Address, debt_to_cover: U256) {
        if debt_to_cover.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let caller = self.env().caller();
        let starting_health_factor = self.health_factor(user);
        if starting_health_factor >= U256::from(health::MIN_HEALTH_FACTOR) {
            self.env().revert(EngineError::HealthFactorOk);
        }

        let seized = self.get_token_amount_from_usd(token, debt_to_cover);
        let bonus = seized * U256::from(health::LIQUIDATION_BONUS)
            / U256::from(health::LIQUIDATION_PRECISION);
        self.redeem_internal(user, caller, token, seized + bonus);
        self.burn_internal(user, caller, debt_to_cover);

        let ending_health_factor = self.health_factor(user);
        if ending_health_factor <= starting_health_factor {
            self.env().revert(EngineError::HealthFactorNotImproved);
        }
    }

    // ========== Valuation Views ==========

    /// USD value (18 decimals) of `amount` of `token` at the current
    /// feed price.
    pub fn get_usd_value(&self, token: Address, amount: U256) -> U256 {
        let price = self.read_price(token);
        price * U256::from(health::ADDITIONAL_FEED_PRECISION) * amount
            / U256::from(health::PRECISION)
    }

    /// Token amount equivalent to `usd_amount` (18 decimals) at the
    /// current feed price.
    pub fn get_token_amount_from_usd(&self, token: Address, usd_amount: U256) -> U256 {
        let price = self.read_price(token);
        usd_amount * U256::from(health::PRECISION)
            / (price * U256::from(health::ADDITIONAL_FEED_PRECISION))
    }

    /// Debt and total collateral value for `account`.
    pub fn get_account_information(&self, account: Address) -> AccountSummary {
        let mut collateral_value_usd = U256::zero();
        // Sum in the fixed token order so valuation is deterministic.
        for token in self.collateral_tokens.get().unwrap_or_default() {
            let amount = self
                .collateral_deposited
                .get(&(account, token))
                .unwrap_or(U256::zero());
            if !amount.is_zero() {
                collateral_value_usd = collateral_value_usd + self.get_usd_value(token, amount);
            }
        }

        AccountSummary {
            total_minted: self.minted.get(&account).unwrap_or(U256::zero()),
            collateral_value_usd,
        }
    }

    /// Current health factor for `account`.
    pub fn health_factor(&self, account: Address) -> U256 {
        let summary = self.get_account_information(account);
        health::health_factor(summary.total_minted, summary.collateral_value_usd)
    }

    /// Health factor for an arbitrary (debt, collateral value) pair.
    pub fn calculate_health_factor(&self, total_minted: U256, collateral_value_usd: U256) -> U256 {
        health::health_factor(total_minted, collateral_value_usd)
    }

    // ========== Configuration Views ==========

    /// Supported collateral tokens, in valuation order
    pub fn get_collateral_tokens(&self) -> Vec<Address> {
        self.collateral_tokens.get().unwrap_or_default()
    }

    /// Price feed bound to `token`
    pub fn get_price_feed(&self, token: Address) -> Option<Address> {
        self.price_feeds.get(&token)
    }

    /// Deposited collateral for (account, token)
    pub fn get_collateral_balance_of(&self, account: Address, token: Address) -> U256 {
        self.collateral_deposited
            .get(&(account, token))
            .unwrap_or(U256::zero())
    }

    /// dUSD stablecoin address
    pub fn get_stablecoin(&self) -> Option<Address> {
        self.stablecoin.get()
    }

    /// Minimum health factor (1.0 scaled by 1e18)
    pub fn min_health_factor(&self) -> U256 {
        U256::from(health::MIN_HEALTH_FACTOR)
    }

    /// Share of nominal collateral value counted toward solvency (percent)
    pub fn liquidation_threshold(&self) -> u64 {
        health::LIQUIDATION_THRESHOLD
    }

    /// Liquidator bonus (percent of seized notional)
    pub fn liquidation_bonus(&self) -> u64 {
        health::LIQUIDATION_BONUS
    }

    // ========== Internal: ledger movements ==========

    fn redeem_internal(&mut self, from: Address, to: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let key = (from, token);
        let deposited = self.collateral_deposited.get(&key).unwrap_or(U256::zero());
        if deposited < amount {
            self.env().revert(EngineError::InsufficientCollateral);
        }
        self.collateral_deposited.set(&key, deposited - amount);

        self.env().emit_event(CollateralRedeemed {
            from,
            to,
            token,
            amount,
        });

        if !self.token_transfer(token, to, amount) {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    fn burn_internal(&mut self, on_behalf_of: Address, payer: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::InvalidAmount);
        }

        let debt = self.minted.get(&on_behalf_of).unwrap_or(U256::zero());
        if debt < amount {
            self.env().revert(EngineError::InsufficientDebt);
        }
        self.minted.set(&on_behalf_of, debt - amount);

        let custody = self.env().self_address();
        if !self.stablecoin_transfer_from(payer, custody, amount) {
            self.env().revert(EngineError::TransferFailed);
        }
        self.stablecoin_burn(amount);
    }

    fn require_solvent(&self, account: Address) {
        let ratio = self.health_factor(account);
        if ratio < U256::from(health::MIN_HEALTH_FACTOR) {
            self.env().revert(EngineError::BreaksHealthFactor);
        }
    }

    fn read_price(&self, token: Address) -> U256 {
        let feed = match self.price_feeds.get(&token) {
            Some(feed) => feed,
            None => self.env().revert(EngineError::UnsupportedCollateral),
        };
        let (answer, _updated_at) = PriceOracle::read(&self.env(), feed);
        answer
    }

    // ========== Internal: cross-contract calls ==========

    fn token_transfer_from(
        &self,
        token: Address,
        owner: Address,
        recipient: Address,
        amount: U256,
    ) -> bool {
        let args = runtime_args! {
            "owner" => owner,
            "recipient" => recipient,
            "amount" => amount
        };
        self.env().call_contract(token, CallDef::new("transfer_from", true, args))
    }

    fn token_transfer(&self, token: Address, recipient: Address, amount: U256) -> bool {
        let args = runtime_args! {
            "recipient" => recipient,
            "amount" => amount
        };
        self.env().call_contract(token, CallDef::new("transfer", true, args))
    }

    fn stablecoin_mint(&self, to: Address, amount: U256) -> bool {
        let args = runtime_args! {
            "to" => to,
            "amount" => amount
        };
        self.env()
            .call_contract(self.stablecoin_address(), CallDef::new("mint", true, args))
    }

    fn stablecoin_transfer_from(&self, owner: Address, recipient: Address, amount: U256) -> bool {
        let args = runtime_args! {
            "owner" => owner,
            "recipient" => recipient,
            "amount" => amount
        };
        self.env().call_contract(
            self.stablecoin_address(),
            CallDef::new("transfer_from", true, args),
        )
    }

    fn stablecoin_burn(&self, amount: U256) {
        let args = runtime_args! {
            "amount" => amount
        };
        self.env()
            .call_contract::<()>(self.stablecoin_address(), CallDef::new("burn", true, args));
    }

    fn stablecoin_address(&self) -> Address {
        self.stablecoin.get().unwrap_or_else(|| self.env().self_address())
    }
}
