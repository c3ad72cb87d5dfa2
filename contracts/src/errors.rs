//! Protocol error definitions.

use odra::prelude::*;

/// Stable engine errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineError {
    // Engine errors (1xx)
    InvalidAmount = 100,
    UnsupportedCollateral = 101,
    InsufficientCollateral = 102,
    InsufficientDebt = 103,
    BreaksHealthFactor = 104,
    HealthFactorOk = 105,
    HealthFactorNotImproved = 106,

    // Oracle errors (2xx)
    StalePrice = 200,

    // Access control errors (4xx)
    Unauthorized = 400,
    UnauthorizedMinter = 401,

    // Token errors (5xx)
    TransferFailed = 500,
    MintFailed = 501,
    InsufficientTokenBalance = 502,
    InsufficientAllowance = 503,

    // Configuration errors (9xx)
    ConfigurationMismatch = 900,
}

impl EngineError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Engine
            EngineError::InvalidAmount => "Amount must be greater than zero",
            EngineError::UnsupportedCollateral => "Collateral not supported",
            EngineError::InsufficientCollateral => "Insufficient collateral deposited",
            EngineError::InsufficientDebt => "Burn amount exceeds minted debt",
            EngineError::BreaksHealthFactor => "Operation breaks health factor",
            EngineError::HealthFactorOk => "Health factor above minimum, not liquidatable",
            EngineError::HealthFactorNotImproved => "Liquidation did not improve health factor",

            // Oracle
            EngineError::StalePrice => "Oracle price stale or unavailable",

            // Access control
            EngineError::Unauthorized => "Unauthorized: caller is not admin",
            EngineError::UnauthorizedMinter => "Unauthorized: caller is not an authorized minter",

            // Token
            EngineError::TransferFailed => "Token transfer failed",
            EngineError::MintFailed => "Stablecoin mint failed",
            EngineError::InsufficientTokenBalance => "Insufficient token balance",
            EngineError::InsufficientAllowance => "Insufficient allowance",

            // Config
            EngineError::ConfigurationMismatch => "Token and price feed lists differ in length",
        }
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<EngineError> for OdraError {
    fn from(error: EngineError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
