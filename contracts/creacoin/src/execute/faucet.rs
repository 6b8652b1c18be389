//! Faucet handlers.
//!
//! This module handles:
//! - Mint amount / mint delay configuration (owner only)
//! - Rate-limited minting to any recipient

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::cooldown::{mint_state, MintState};
use crate::error::ContractError;
use crate::state::{BALANCES, FAUCET_CONFIG, LAST_MINT, OWNER, TOTAL_SUPPLY};

// ============================================================================
// Configuration
// ============================================================================

/// Set the amount minted per faucet call. Zero disables the faucet.
pub fn execute_set_mint_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::NotAuthorized);
    }

    let mut config = FAUCET_CONFIG.load(deps.storage)?;
    config.mint_amount = amount;
    FAUCET_CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_mint_amount")
        .add_attribute("mint_amount", amount))
}

/// Set the cooldown between two mints to the same recipient.
pub fn execute_set_mint_delay(
    deps: DepsMut,
    info: MessageInfo,
    seconds: u64,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::NotAuthorized);
    }

    let mut config = FAUCET_CONFIG.load(deps.storage)?;
    config.mint_delay = seconds;
    FAUCET_CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_mint_delay")
        .add_attribute("mint_delay", seconds.to_string()))
}

// ============================================================================
// Mint
// ============================================================================

/// Mint the configured amount to `recipient`.
///
/// Any sender may trigger a mint for any recipient; only the recipient's
/// cooldown and the global enablement are checked.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = FAUCET_CONFIG.load(deps.storage)?;
    if !config.is_enabled() {
        return Err(ContractError::MintingDisabled);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let now = env.block.time.seconds();
    let last = LAST_MINT.may_load(deps.storage, &recipient_addr)?;

    if mint_state(last, now, config.mint_delay) == MintState::Cooldown {
        return Err(ContractError::MintCooldownActive);
    }

    let total_supply = TOTAL_SUPPLY.load(deps.storage)?.checked_add(config.mint_amount)?;
    let balance = BALANCES
        .may_load(deps.storage, &recipient_addr)?
        .unwrap_or_default()
        .checked_add(config.mint_amount)?;

    BALANCES.save(deps.storage, &recipient_addr, &balance)?;
    TOTAL_SUPPLY.save(deps.storage, &total_supply)?;
    LAST_MINT.save(deps.storage, &recipient_addr, &now)?;

    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", config.mint_amount)
        .add_attribute("minted_at", now.to_string())
        .add_attribute("total_supply", total_supply))
}
