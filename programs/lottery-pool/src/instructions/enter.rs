use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::POOL_SEED;
use crate::events::PlayerEntered;
use crate::state::LotteryPool;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The entrant; the stake is debited from this account.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = lottery_pool.bump,
    )]
    pub lottery_pool: Account<'info, LotteryPool>,

    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Check the stake exceeds the minimum and the round has room.
/// 2. Record the caller as the newest entry.
/// 3. Transfer the stake from the caller into the pool account.
///
/// Any failure aborts the instruction, so a rejected entry keeps neither the
/// player slot nor the lamports.
///
/// # Arguments
/// * `ctx` - Context containing Enter accounts
/// * `stake` - Lamports to put into the pot
pub fn process_enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
    let player = ctx.accounts.player.key();

    ctx.accounts.lottery_pool.record_entry(player, stake)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery_pool.to_account_info(),
            },
        ),
        stake,
    )?;

    let pool = &ctx.accounts.lottery_pool;
    msg!("Entry {} from {}", pool.players.len(), player);
    emit!(PlayerEntered {
        player,
        stake,
        players: pool.players.len() as u32,
        round: pool.round,
    });

    Ok(())
}
