//! Deploy contracts to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000

use odra::casper_types::U256;
use odra::host::{Deployer, NoArgs};
use odra::prelude::*;

use cspr_dusd_contracts::collateral_token::{CollateralToken, CollateralTokenInitArgs};
use cspr_dusd_contracts::engine::{StableEngine, StableEngineInitArgs};
use cspr_dusd_contracts::price_feed::{PriceFeed, PriceFeedInitArgs};
use cspr_dusd_contracts::stablecoin::DUsd;

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== dUSD Protocol Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    // Get deployer address
    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // Initial feed answers (8 decimals)
    let weth_usd_answer = U256::from(2_000_u64) * U256::from(100_000_000u64); // $2000
    let wbtc_usd_answer = U256::from(30_000_u64) * U256::from(100_000_000u64); // $30000

    // ==================== Phase 1: Price Feeds ====================
    println!("=== Phase 1: Deploying Price Feeds ===");
    println!();

    println!("Deploying WETH/USD PriceFeed...");
    let weth_feed = PriceFeed::deploy(
        &env,
        PriceFeedInitArgs {
            description: String::from("WETH / USD"),
            initial_answer: weth_usd_answer,
        },
    );
    let weth_feed_addr = weth_feed.address().clone();
    println!("WETH/USD PriceFeed deployed at: {:?}", weth_feed_addr);

    println!("Deploying WBTC/USD PriceFeed...");
    let wbtc_feed = PriceFeed::deploy(
        &env,
        PriceFeedInitArgs {
            description: String::from("WBTC / USD"),
            initial_answer: wbtc_usd_answer,
        },
    );
    let wbtc_feed_addr = wbtc_feed.address().clone();
    println!("WBTC/USD PriceFeed deployed at: {:?}", wbtc_feed_addr);

    println!();

    // ==================== Phase 2: Tokens ====================
    println!("=== Phase 2: Deploying Tokens ===");
    println!();

    println!("Deploying WETH CollateralToken...");
    let weth = CollateralToken::deploy(
        &env,
        CollateralTokenInitArgs {
            name: String::from("Wrapped Ether"),
            symbol: String::from("WETH"),
            decimals: 18,
        },
    );
    let weth_addr = weth.address().clone();
    println!("WETH deployed at: {:?}", weth_addr);

    println!("Deploying WBTC CollateralToken...");
    let wbtc = CollateralToken::deploy(
        &env,
        CollateralTokenInitArgs {
            name: String::from("Wrapped Bitcoin"),
            symbol: String::from("WBTC"),
            decimals: 18,
        },
    );
    let wbtc_addr = wbtc.address().clone();
    println!("WBTC deployed at: {:?}", wbtc_addr);

    println!("Deploying DUsd (Stablecoin)...");
    let mut stablecoin = DUsd::deploy(&env, NoArgs);
    let stablecoin_addr = stablecoin.address().clone();
    println!("DUsd deployed at: {:?}", stablecoin_addr);

    println!();

    // ==================== Phase 3: Engine ====================
    println!("=== Phase 3: Deploying Engine ===");
    println!();

    println!("Deploying StableEngine...");
    let engine = StableEngine::deploy(
        &env,
        StableEngineInitArgs {
            collateral_tokens: vec![weth_addr, wbtc_addr],
            price_feeds: vec![weth_feed_addr, wbtc_feed_addr],
            stablecoin: stablecoin_addr,
        },
    );
    let engine_addr = engine.address().clone();
    println!("StableEngine deployed at: {:?}", engine_addr);

    println!();

    // ==================== Phase 4: Wiring ====================
    println!("=== Phase 4: Wiring Mint Authority ===");
    println!();

    println!("Authorizing StableEngine as dUSD minter...");
    stablecoin.add_minter(engine_addr);

    println!();
    println!("=== Deployment Complete ===");
    println!("WETH:         {:?}", weth_addr);
    println!("WBTC:         {:?}", wbtc_addr);
    println!("WETH/USD:     {:?}", weth_feed_addr);
    println!("WBTC/USD:     {:?}", wbtc_feed_addr);
    println!("dUSD:         {:?}", stablecoin_addr);
    println!("StableEngine: {:?}", engine_addr);
}
