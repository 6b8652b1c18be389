//! State definitions for the CREACoin contract
//!
//! Token metadata is fixed at compile time; everything else lives in contract storage.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:creacoin";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Token Metadata
// ============================================================================

pub const TOKEN_NAME: &str = "CREACoin";
pub const TOKEN_SYMBOL: &str = "CREAC";
pub const TOKEN_DECIMALS: u8 = 18;

/// 1000 whole tokens, minted to the deployer at instantiation
pub const INITIAL_SUPPLY: u128 = 1_000 * 10u128.pow(TOKEN_DECIMALS as u32);

// ============================================================================
// Faucet Configuration
// ============================================================================

/// Owner-controlled faucet policy
#[cw_serde]
#[derive(Default)]
pub struct FaucetConfig {
    /// Amount minted per call (zero disables the faucet)
    pub mint_amount: Uint128,
    /// Minimum seconds between two mints to the same recipient
    pub mint_delay: u64,
}

impl FaucetConfig {
    pub fn is_enabled(&self) -> bool {
        !self.mint_amount.is_zero()
    }
}

// ============================================================================
// Storage
// ============================================================================

pub const OWNER: Item<Addr> = Item::new("owner");

pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

pub const FAUCET_CONFIG: Item<FaucetConfig> = Item::new("faucet_config");

/// account => balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// (owner, spender) => remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

/// recipient => last faucet mint timestamp (seconds)
pub const LAST_MINT: Map<&Addr, u64> = Map::new("last_mint");
