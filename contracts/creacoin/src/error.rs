//! Error types for the CREACoin contract

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Token Errors
    // ========================================================================

    #[error("Insufficient balance: {account} has {available}, needs {required}")]
    InsufficientBalance {
        account: String,
        available: Uint128,
        required: Uint128,
    },

    #[error(
        "Insufficient allowance: {spender} may spend {available} from {owner}, needs {required}"
    )]
    InsufficientAllowance {
        owner: String,
        spender: String,
        available: Uint128,
        required: Uint128,
    },

    // ========================================================================
    // Faucet Errors
    // ========================================================================

    #[error("You do not have permission.")]
    NotAuthorized,

    #[error("Minting is not enabled.")]
    MintingDisabled,

    #[error("You cannot mint twice in a row.")]
    MintCooldownActive,
}
