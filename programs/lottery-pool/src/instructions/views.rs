use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::state::LotteryPool;
use crate::utils::pot_lamports;

/// Read-only access to the pool, shared by the view instructions.
#[derive(Accounts)]
pub struct ReadPool<'info> {
    #[account(
        seeds = [POOL_SEED],
        bump = lottery_pool.bump,
    )]
    pub lottery_pool: Account<'info, LotteryPool>,
}

pub fn process_get_players(ctx: Context<ReadPool>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery_pool.player_list())
}

/// Lamports the next draw would pay out.
pub fn process_get_pot(ctx: Context<ReadPool>) -> Result<u64> {
    let pool = ctx.accounts.lottery_pool.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(pool.data_len());
    Ok(pot_lamports(pool.lamports(), rent_floor))
}
