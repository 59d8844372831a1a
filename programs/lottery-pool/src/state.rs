use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS, MINIMUM_STAKE};
use crate::error::LotteryError;
use crate::utils::{select_winner_index, DrawEntropy};

/// The single lottery pool.
///
/// Staked lamports are held by this account itself; the pot is whatever it
/// holds above its rent-exempt floor, so no running total is stored here.
#[account]
#[derive(InitSpace)]
pub struct LotteryPool {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The only key allowed to draw a winner. Fixed at creation.
    pub manager: Pubkey,

    /// Number of draws completed so far.
    pub round: u64,

    /// Entries of the current round in the order they were made.
    /// A player appears once per entry. Capacity is `MAX_PLAYERS`.
    #[max_len(30)]
    pub players: Vec<Pubkey>,
}

impl LotteryPool {
    pub fn initialize(&mut self, manager: Pubkey, bump: u8) {
        self.bump = bump;
        self.manager = manager;
        self.round = 0;
        self.players = Vec::new();
    }

    /// Validates a stake and appends the player to the round.
    pub fn record_entry(&mut self, player: Pubkey, stake: u64) -> Result<()> {
        require!(stake > MINIMUM_STAKE, LotteryError::InsufficientStake);
        require!(self.players.len() < MAX_PLAYERS, LotteryError::PoolFull);

        self.players.push(player);
        Ok(())
    }

    pub fn ensure_manager(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.manager, LotteryError::Unauthorized);
        Ok(())
    }

    /// Index of the entry that wins this round.
    pub fn draw_index(&self, entropy: &DrawEntropy) -> Result<usize> {
        require!(!self.players.is_empty(), LotteryError::NoPlayers);
        Ok(select_winner_index(entropy, &self.players))
    }

    /// Entries of the current round, as returned by `get_players`.
    pub fn player_list(&self) -> Vec<Pubkey> {
        self.players.clone()
    }

    /// Closes the round once its pot has been paid out.
    pub fn reset(&mut self) -> Result<()> {
        self.round = self
            .round
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        self.players.clear();
        Ok(())
    }
}
