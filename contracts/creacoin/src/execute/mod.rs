//! Execute handlers for the CREACoin contract.
//!
//! - `token` - Transfer, Approve and TransferFrom
//! - `faucet` - Faucet configuration and Mint

mod faucet;
mod token;

pub use faucet::*;
pub use token::*;
