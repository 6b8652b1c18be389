//! CREACoin Contract - Fungible Token with a Rate-Limited Faucet
//!
//! A single-asset token ledger with the usual balance/allowance interface:
//! `Transfer`, `Approve`, `TransferFrom` and the matching queries.
//!
//! # Faucet
//! 1. The instantiator becomes the owner and receives 1000 CREAC
//! 2. The owner sets the mint amount (zero keeps the faucet closed) and the mint delay
//! 3. Anyone calls `Mint { recipient }` to mint the configured amount to any address
//! 4. The same recipient can be minted to again once `mint_delay` seconds have passed
//!
//! Time is taken from the block of each message; the contract keeps no clock of its own.

pub mod contract;
pub mod cooldown;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::cooldown::MintState;
pub use crate::error::ContractError;
