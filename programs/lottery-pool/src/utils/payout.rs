use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Lamports the pool can pay out: everything above its rent-exempt floor.
pub fn pot_lamports(pool_lamports: u64, rent_floor: u64) -> u64 {
    pool_lamports.saturating_sub(rent_floor)
}

/// Moves `amount` lamports from the program-owned pool to `winner`.
///
/// Both balances are computed before either is written, so a failed check
/// leaves both accounts untouched.
pub fn transfer_pot(pool: &AccountInfo, winner: &AccountInfo, amount: u64) -> Result<()> {
    require!(winner.is_writable, LotteryError::TransferFailed);

    let pool_lamports = pool
        .lamports()
        .checked_sub(amount)
        .ok_or(LotteryError::TransferFailed)?;
    let winner_lamports = winner
        .lamports()
        .checked_add(amount)
        .ok_or(LotteryError::TransferFailed)?;

    **pool.try_borrow_mut_lamports()? = pool_lamports;
    **winner.try_borrow_mut_lamports()? = winner_lamports;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const SYSTEM: Pubkey = Pubkey::new_from_array([0u8; 32]);

    fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
        }
    }

    fn account<'a>(
        key: &'a Pubkey,
        owner: &'a Pubkey,
        lamports: &'a mut u64,
        is_writable: bool,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, false, is_writable, lamports, &mut [], owner, false, 0)
    }

    #[test]
    fn test_pot_excludes_rent_floor() {
        assert_eq!(pot_lamports(2_000_000_000 + 1_000, 1_000), 2_000_000_000);
        assert_eq!(pot_lamports(1_000, 1_000), 0);
        assert_eq!(pot_lamports(500, 1_000), 0);
    }

    #[test]
    fn test_transfer_moves_full_amount() {
        let (pool_key, winner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut pool_lamports, mut winner_lamports) = (2_000_001_000u64, 5u64);
        let pool = account(&pool_key, &crate::ID, &mut pool_lamports, true);
        let winner = account(&winner_key, &SYSTEM, &mut winner_lamports, true);

        transfer_pot(&pool, &winner, 2_000_000_000).unwrap();
        assert_eq!(pool.lamports(), 1_000);
        assert_eq!(winner.lamports(), 2_000_000_005);
    }

    #[test]
    fn test_read_only_winner_rejected() {
        let (pool_key, winner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut pool_lamports, mut winner_lamports) = (100u64, 0u64);
        let pool = account(&pool_key, &crate::ID, &mut pool_lamports, true);
        let winner = account(&winner_key, &SYSTEM, &mut winner_lamports, false);

        let err = transfer_pot(&pool, &winner, 50).unwrap_err();
        assert_eq!(error_code(err), u32::from(LotteryError::TransferFailed));
        assert_eq!(pool.lamports(), 100);
        assert_eq!(winner.lamports(), 0);
    }

    #[test]
    fn test_overdraw_rejected() {
        let (pool_key, winner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut pool_lamports, mut winner_lamports) = (100u64, 0u64);
        let pool = account(&pool_key, &crate::ID, &mut pool_lamports, true);
        let winner = account(&winner_key, &SYSTEM, &mut winner_lamports, true);

        let err = transfer_pot(&pool, &winner, 101).unwrap_err();
        assert_eq!(error_code(err), u32::from(LotteryError::TransferFailed));
        assert_eq!(pool.lamports(), 100);
        assert_eq!(winner.lamports(), 0);
    }
}
