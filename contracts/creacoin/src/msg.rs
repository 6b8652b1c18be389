//! Message types for the CREACoin contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::cooldown::MintState;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Instantiate message
///
/// The sender becomes the owner and receives the whole initial supply.
#[cw_serde]
pub struct InstantiateMsg {}

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Token
    // ========================================================================
    /// Move `amount` from the sender to `recipient`
    Transfer { recipient: String, amount: Uint128 },

    /// Set the amount `spender` may draw from the sender's balance.
    /// Overwrites any previous allowance.
    Approve { spender: String, amount: Uint128 },

    /// Move `amount` from `owner` to `recipient`, consuming the sender's allowance
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Faucet
    // ========================================================================
    /// Set the amount minted per faucet call
    ///
    /// Authorization: Owner only
    SetMintAmount { amount: Uint128 },

    /// Set the minimum seconds between two mints to the same recipient
    ///
    /// Authorization: Owner only
    SetMintDelay { seconds: u64 },

    /// Mint the configured amount to `recipient`
    ///
    /// Authorization: Anyone. The recipient does not have to be the sender;
    /// the only limits are faucet enablement and the recipient's cooldown.
    Mint { recipient: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Name, symbol, decimals and total supply
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(NameResponse)]
    Name {},

    #[returns(SymbolResponse)]
    Symbol {},

    #[returns(DecimalsResponse)]
    Decimals {},

    #[returns(TotalSupplyResponse)]
    TotalSupply {},

    /// Balance of `address` (zero if the address never held tokens)
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// Remaining amount `spender` may draw from `owner`
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(OwnerResponse)]
    Owner {},

    /// Current faucet policy
    #[returns(FaucetConfigResponse)]
    FaucetConfig {},

    /// Faucet state of `address` at the current block time
    #[returns(MintStatusResponse)]
    MintStatus { address: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct NameResponse {
    pub name: String,
}

#[cw_serde]
pub struct SymbolResponse {
    pub symbol: String,
}

#[cw_serde]
pub struct DecimalsResponse {
    pub decimals: u8,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct FaucetConfigResponse {
    pub mint_amount: Uint128,
    pub mint_delay: u64,
    /// False while `mint_amount` is zero
    pub enabled: bool,
}

#[cw_serde]
pub struct MintStatusResponse {
    pub state: MintState,
    /// Timestamp (seconds) of the last mint, if any
    pub last_mint: Option<u64>,
    /// Earliest timestamp (seconds) of the next allowed mint, if ever minted
    pub mintable_at: Option<u64>,
}
