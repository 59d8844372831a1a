use anchor_lang::prelude::*;

/// Seed of the single pool PDA holding round state and staked lamports.
#[constant]
pub const POOL_SEED: &[u8] = b"lottery_pool";

/// Entries must stake strictly more than this (0.01 SOL).
#[constant]
pub const MINIMUM_STAKE: u64 = 10_000_000;

/// Entries a single round can hold. Must match `max_len` on `LotteryPool::players`.
/// Bounded so the serialized player list fits in program return data.
pub const MAX_PLAYERS: usize = 30;
