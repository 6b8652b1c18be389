//! Faucet cooldown state machine.
//!
//! Each recipient moves through three states:
//!
//! ```text
//! NeverMinted --mint--> Cooldown --(now - last >= delay)--> Ready --mint--> Cooldown
//! ```
//!
//! The state is derived from the stored last-mint timestamp and the block time of the
//! current message, so no transition is ever written to storage on its own.

use cosmwasm_schema::cw_serde;

/// Faucet state of a single recipient
#[cw_serde]
#[derive(Copy, Eq)]
pub enum MintState {
    /// The recipient has never received a faucet mint
    NeverMinted,
    /// The last mint is younger than the configured delay
    Cooldown,
    /// The configured delay has elapsed since the last mint
    Ready,
}

impl MintState {
    pub fn can_mint(self) -> bool {
        !matches!(self, MintState::Cooldown)
    }
}

/// Derive the state of a recipient at `now`.
///
/// A `now` earlier than `last_mint` counts as zero elapsed seconds.
pub fn mint_state(last_mint: Option<u64>, now: u64, mint_delay: u64) -> MintState {
    match last_mint {
        None => MintState::NeverMinted,
        Some(last) if now.saturating_sub(last) < mint_delay => MintState::Cooldown,
        Some(_) => MintState::Ready,
    }
}

/// Earliest timestamp at which the recipient may be minted to again.
///
/// Returns `None` for a recipient that has never been minted to.
pub fn mintable_at(last_mint: Option<u64>, mint_delay: u64) -> Option<u64> {
    last_mint.map(|last| last.saturating_add(mint_delay))
}
