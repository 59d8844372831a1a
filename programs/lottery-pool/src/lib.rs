//! A pooled-stake lottery.
//!
//! Players stake more than 0.01 SOL to enter the current round; the manager
//! draws a winner who receives the whole pot, and the round starts over.
//!
//! Winner selection hashes the clock and the player list. Validators and
//! anyone simulating the draw can predict or influence the outcome, so the
//! program is not suitable for pots worth attacking.

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMY");

#[program]
pub mod lottery_pool {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        process_initialize_pool(ctx)
    }

    pub fn enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
        process_enter(ctx, stake)
    }

    pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn get_players(ctx: Context<ReadPool>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }

    pub fn get_pot(ctx: Context<ReadPool>) -> Result<u64> {
        process_get_pot(ctx)
    }
}
