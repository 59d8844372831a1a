use anchor_lang::prelude::*;

/// Emitted once, when the pool PDA is created.
#[event]
pub struct PoolInitialized {
    pub manager: Pubkey,
}

#[event]
pub struct PlayerEntered {
    pub player: Pubkey,
    /// Lamports moved into the pool by this entry
    pub stake: u64,
    /// Entries in the round after this one was recorded
    pub players: u32,
    pub round: u64,
}

/// Emitted after the pot has been paid out and the round reset.
#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    /// Position of the winning entry in the round's player list
    pub index: u32,
    pub payout: u64,
    /// The round that was just closed
    pub round: u64,
}
