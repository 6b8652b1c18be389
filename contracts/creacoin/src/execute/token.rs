//! Token handlers.
//!
//! This module handles:
//! - Transfer
//! - Approve
//! - TransferFrom (allowance checked before balance)

use cosmwasm_std::{to_json_binary, Addr, DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{ALLOWANCES, BALANCES};

/// Move `amount` from `from` to `to` after checking `from` can cover it.
///
/// Both balances are computed before either is written, so a failure leaves storage untouched.
pub(crate) fn move_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let from_balance = BALANCES.may_load(storage, from)?.unwrap_or_default();
    if from_balance < amount {
        return Err(ContractError::InsufficientBalance {
            account: from.to_string(),
            available: from_balance,
            required: amount,
        });
    }

    if from == to {
        return Ok(());
    }

    let to_balance = BALANCES.may_load(storage, to)?.unwrap_or_default();
    let new_to_balance = to_balance.checked_add(amount)?;

    BALANCES.save(storage, from, &(from_balance - amount))?;
    BALANCES.save(storage, to, &new_to_balance)?;
    Ok(())
}

/// Transfer tokens from the sender to `recipient`.
pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    move_balance(deps.storage, &info.sender, &recipient_addr, amount)?;

    Ok(Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

/// Set the sender's allowance for `spender`, replacing any previous value.
pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;

    ALLOWANCES.save(deps.storage, (&info.sender, &spender_addr), &amount)?;

    Ok(Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("method", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("amount", amount))
}

/// Spend the sender's allowance on `owner` to move tokens to `recipient`.
pub fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let spender = info.sender;

    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner_addr, &spender))?
        .unwrap_or_default();
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            owner: owner_addr.to_string(),
            spender: spender.to_string(),
            available: allowance,
            required: amount,
        });
    }

    move_balance(deps.storage, &owner_addr, &recipient_addr, amount)?;
    ALLOWANCES.save(
        deps.storage,
        (&owner_addr, &spender),
        &(allowance - amount),
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("method", "transfer_from")
        .add_attribute("from", owner_addr)
        .add_attribute("to", recipient_addr)
        .add_attribute("by", spender)
        .add_attribute("amount", amount))
}
