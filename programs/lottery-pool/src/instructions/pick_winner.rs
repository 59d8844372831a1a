use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::error::LotteryError;
use crate::events::WinnerPicked;
use crate::state::LotteryPool;
use crate::utils::{pot_lamports, transfer_pot, DrawEntropy};

/// Accounts required to draw a winner.
///
/// Every distinct player of the round must be passed as a writable entry in
/// `remaining_accounts`, since the winner is only known once the instruction
/// runs.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// Must be the pool manager.
    pub manager: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = lottery_pool.bump,
    )]
    pub lottery_pool: Account<'info, LotteryPool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    pub winner: Pubkey,
    pub index: usize,
    pub payout: u64,
    /// The round that was closed by this draw
    pub round: u64,
}

/// Picks the winning entry, pays it the whole pot and resets the round.
///
/// The pool is only reset after the payout went through; an error anywhere
/// leaves players and lamports as they were.
pub fn settle_draw(
    pool: &mut LotteryPool,
    pool_info: &AccountInfo,
    candidates: &[AccountInfo],
    entropy: &DrawEntropy,
    rent_floor: u64,
) -> Result<DrawOutcome> {
    let index = pool.draw_index(entropy)?;
    let winner = pool.players[index];

    let Some(winner_info) = candidates.iter().find(|account| account.key == &winner) else {
        msg!("Winner account {} was not supplied", winner);
        return err!(LotteryError::TransferFailed);
    };

    let payout = pot_lamports(pool_info.lamports(), rent_floor);
    transfer_pot(pool_info, winner_info, payout)?;

    let round = pool.round;
    pool.reset()?;

    Ok(DrawOutcome {
        winner,
        index,
        payout,
        round,
    })
}

/// Draws the winner of the current round.
///
/// The index comes from hashing the clock and the player list (see
/// `utils::entropy`). That is predictable to validators and to anyone
/// simulating the transaction, so this draw is only fit for low stakes.
pub fn process_pick_winner(ctx: Context<PickWinner>) -> Result<()> {
    ctx.accounts
        .lottery_pool
        .ensure_manager(&ctx.accounts.manager.key())?;

    let clock = Clock::get()?;
    let pool_info = ctx.accounts.lottery_pool.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(pool_info.data_len());

    msg!("Drawing from {} entries", ctx.accounts.lottery_pool.players.len());

    let outcome = settle_draw(
        &mut ctx.accounts.lottery_pool,
        &pool_info,
        ctx.remaining_accounts,
        &DrawEntropy::from_clock(&clock),
        rent_floor,
    )?;

    msg!("Winner: {} (entry {})", outcome.winner, outcome.index);
    msg!("Payout: {} lamports", outcome.payout);

    emit!(WinnerPicked {
        winner: outcome.winner,
        index: outcome.index as u32,
        payout: outcome.payout,
        round: outcome.round,
    });

    Ok(())
}
