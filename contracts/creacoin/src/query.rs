//! Query handlers for the CREACoin contract.

use cosmwasm_std::{Deps, Env, StdResult};
use cw20::{BalanceResponse, TokenInfoResponse};

use crate::cooldown::{mint_state, mintable_at};
use crate::msg::{
    AllowanceResponse, DecimalsResponse, FaucetConfigResponse, MintStatusResponse, NameResponse,
    OwnerResponse, SymbolResponse, TotalSupplyResponse,
};
use crate::state::{
    ALLOWANCES, BALANCES, FAUCET_CONFIG, LAST_MINT, OWNER, TOKEN_DECIMALS, TOKEN_NAME,
    TOKEN_SYMBOL, TOTAL_SUPPLY,
};

// ============================================================================
// Token Queries
// ============================================================================

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    Ok(TokenInfoResponse {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        decimals: TOKEN_DECIMALS,
        total_supply: TOTAL_SUPPLY.load(deps.storage)?,
    })
}

pub fn query_name() -> NameResponse {
    NameResponse {
        name: TOKEN_NAME.to_string(),
    }
}

pub fn query_symbol() -> SymbolResponse {
    SymbolResponse {
        symbol: TOKEN_SYMBOL.to_string(),
    }
}

pub fn query_decimals() -> DecimalsResponse {
    DecimalsResponse {
        decimals: TOKEN_DECIMALS,
    }
}

pub fn query_total_supply(deps: Deps) -> StdResult<TotalSupplyResponse> {
    Ok(TotalSupplyResponse {
        total_supply: TOTAL_SUPPLY.load(deps.storage)?,
    })
}

/// Balance of an address; unknown addresses hold zero.
pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let spender_addr = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner_addr, &spender_addr))?
        .unwrap_or_default();
    Ok(AllowanceResponse { allowance })
}

// ============================================================================
// Faucet Queries
// ============================================================================

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER.load(deps.storage)?;
    Ok(OwnerResponse { owner })
}

pub fn query_faucet_config(deps: Deps) -> StdResult<FaucetConfigResponse> {
    let config = FAUCET_CONFIG.load(deps.storage)?;
    Ok(FaucetConfigResponse {
        enabled: config.is_enabled(),
        mint_amount: config.mint_amount,
        mint_delay: config.mint_delay,
    })
}

/// Cooldown state of `address` evaluated at the current block time.
pub fn query_mint_status(deps: Deps, env: Env, address: String) -> StdResult<MintStatusResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let config = FAUCET_CONFIG.load(deps.storage)?;
    let last_mint = LAST_MINT.may_load(deps.storage, &addr)?;

    Ok(MintStatusResponse {
        state: mint_state(last_mint, env.block.time.seconds(), config.mint_delay),
        last_mint,
        mintable_at: mintable_at(last_mint, config.mint_delay),
    })
}
