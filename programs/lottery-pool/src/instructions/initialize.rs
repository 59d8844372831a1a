use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::events::PoolInitialized;
use crate::state::LotteryPool;

/// Accounts required to create the lottery pool.
/// The signer pays for the account and becomes its manager.
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// Pays for account creation and is recorded as the manager.
    #[account(mut)]
    pub manager: Signer<'info>,

    /// The pool state account; also holds every staked lamport.
    #[account(
        init,
        payer = manager,
        space = 8 + LotteryPool::INIT_SPACE,
        seeds = [POOL_SEED],
        bump
    )]
    pub lottery_pool: Account<'info, LotteryPool>,

    pub system_program: Program<'info, System>,
}

pub fn process_initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    ctx.accounts
        .lottery_pool
        .initialize(manager, ctx.bumps.lottery_pool);

    msg!("Lottery pool created, manager: {}", manager);
    emit!(PoolInitialized { manager });

    Ok(())
}
