use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Stake must be greater than the minimum entry amount")]
    InsufficientStake,
    #[msg("Only the pool manager can pick a winner")]
    Unauthorized,
    #[msg("Payout to the winner could not be issued")]
    TransferFailed,
    #[msg("Cannot draw a winner from an empty pool")]
    NoPlayers,
    #[msg("The pool has reached its player capacity for this round")]
    PoolFull,
    #[msg("Math overflow")]
    MathOverflow,
}
