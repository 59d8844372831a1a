//! Winner selection from on-chain entropy.
//!
//! The inputs are the current slot, the cluster timestamp and the player
//! list. All of them are visible to (and partly steerable by) callers and
//! block producers, so the result is NOT a secure random number. It keeps
//! casual players from predicting a draw; it does not protect a pot worth
//! manipulating. Use a VRF or randomness oracle for anything of value.

use anchor_lang::prelude::*;
use solana_program::keccak;

/// Snapshot of the clock values mixed into a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawEntropy {
    pub slot: u64,
    pub unix_timestamp: i64,
}

impl DrawEntropy {
    pub fn from_clock(clock: &Clock) -> Self {
        Self {
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
        }
    }
}

/// keccak256(slot || unix_timestamp || players...)
pub fn entropy_digest(entropy: &DrawEntropy, players: &[Pubkey]) -> [u8; 32] {
    let slot = entropy.slot.to_le_bytes();
    let timestamp = entropy.unix_timestamp.to_le_bytes();

    let mut parts: Vec<&[u8]> = Vec::with_capacity(players.len() + 2);
    parts.push(&slot);
    parts.push(&timestamp);
    parts.extend(players.iter().map(|player| player.as_ref()));

    keccak::hashv(&parts).to_bytes()
}

/// Reduces the digest, read as a 256-bit big-endian integer, modulo `modulus`.
///
/// Returns 0 when `modulus` is 0; callers reject empty pools before getting here.
pub fn reduce_digest(digest: &[u8; 32], modulus: u64) -> u64 {
    if modulus == 0 {
        return 0;
    }
    let modulus = modulus as u128;
    digest
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | *byte as u128) % modulus) as u64
}

/// Position of the winning entry among `players`.
pub fn select_winner_index(entropy: &DrawEntropy, players: &[Pubkey]) -> usize {
    let digest = entropy_digest(entropy, players);
    reduce_digest(&digest, players.len() as u64) as usize
}
