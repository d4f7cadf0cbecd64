use anchor_lang::prelude::*;

use crate::errors::PiggyBankError;
use crate::state::{BetTier, TierLadder};

/// Global configuration plus the header of the round ledger.
///
/// Rounds live in their own PDAs at indices `0..rounds_count`; only the
/// last one can be open.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Bank {
    /// Operator who receives the skim.
    pub owner: Pubkey,
    /// Skim taken from competing deposits, in percent (0..=100).
    pub owner_distribution: u8,
    /// Mint of the pot currency.
    pub mint: Pubkey,
    /// Bank-owned token account holding every open cap.
    pub vault: Pubkey,
    /// Operator token account receiving skims.
    pub treasury: Pubkey,
    /// Bet tiers, ascending.
    #[max_len(32)]
    pub ladder: Vec<BetTier>,
    /// Number of rounds ever created.
    pub rounds_count: u64,
    /// Whether round `rounds_count - 1` still accepts deposits.
    pub round_open: bool,
    /// Cumulative raw deposit volume.
    pub total_deposited: u64,
    /// Cumulative skim routed to the treasury.
    pub total_fees: u64,
    /// Cumulative caps paid to winners.
    pub total_paid_out: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Bank {
    pub const SEED: &'static [u8] = b"bank";

    pub fn ladder(&self) -> TierLadder<'_> {
        TierLadder::trusted(&self.ladder)
    }

    pub fn open_round_index(&self) -> Result<u64> {
        require!(self.round_open, PiggyBankError::NoOpenRound);
        self.rounds_count
            .checked_sub(1)
            .ok_or_else(|| error!(PiggyBankError::NoOpenRound))
    }

    /// Ledger slot the next deposit lands in: the open round, or the next
    /// free index when none is open.
    pub fn deposit_round_index(&self) -> u64 {
        if self.round_open {
            self.rounds_count.saturating_sub(1)
        } else {
            self.rounds_count
        }
    }

    pub fn ensure_round_exists(&self, index: u64) -> Result<()> {
        require!(index < self.rounds_count, PiggyBankError::RoundNotFound);
        Ok(())
    }

    /// Appends a round to the ledger and returns its index.
    pub fn record_round_opened(&mut self) -> Result<u64> {
        require!(!self.round_open, PiggyBankError::RoundMismatch);
        let index = self.rounds_count;
        self.rounds_count = index
            .checked_add(1)
            .ok_or(PiggyBankError::MathOverflow)?;
        self.round_open = true;
        Ok(index)
    }

    pub fn record_round_closed(&mut self, index: u64) -> Result<()> {
        require!(
            self.open_round_index()? == index,
            PiggyBankError::RoundMismatch
        );
        self.round_open = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERENCE_LADDER;

    fn bank() -> Bank {
        Bank {
            owner: Pubkey::new_unique(),
            owner_distribution: 10,
            ladder: REFERENCE_LADDER.to_vec(),
            ..Bank::default()
        }
    }

    #[test]
    fn test_empty_ledger_has_no_open_round() {
        let bank = bank();
        assert!(bank.open_round_index().is_err());
        assert!(bank.ensure_round_exists(0).is_err());
        assert_eq!(bank.deposit_round_index(), 0);
    }

    #[test]
    fn test_ledger_lifecycle() {
        let mut bank = bank();

        assert_eq!(bank.record_round_opened().unwrap(), 0);
        assert_eq!(bank.open_round_index().unwrap(), 0);
        assert_eq!(bank.deposit_round_index(), 0);
        assert!(bank.ensure_round_exists(0).is_ok());
        assert!(bank.ensure_round_exists(1).is_err());
        // cannot open a second round while one is open
        assert!(bank.record_round_opened().is_err());

        bank.record_round_closed(0).unwrap();
        assert!(bank.open_round_index().is_err());
        assert_eq!(bank.deposit_round_index(), 1);
        assert!(bank.record_round_closed(0).is_err());

        assert_eq!(bank.record_round_opened().unwrap(), 1);
        assert_eq!(bank.rounds_count, 2);
        match bank.record_round_closed(0) {
            Err(anchor_lang::error::Error::AnchorError(err)) => assert_eq!(
                err.error_code_number,
                u32::from(PiggyBankError::RoundMismatch)
            ),
            other => panic!("expected RoundMismatch, got {:?}", other),
        }
        assert!(bank.round_open);
    }

    #[test]
    fn test_ladder_view_matches_storage() {
        let bank = bank();
        assert_eq!(bank.ladder().tier_count(), 26);
        assert_eq!(bank.ladder().tier_at(0).unwrap(), REFERENCE_LADDER[0]);
    }

    #[test]
    fn test_bank_space_fits_full_ladder() {
        let mut bank = bank();
        bank.ladder = (1..=32u64).map(|i| BetTier::new(i, 1)).collect();
        let bytes = bank.try_to_vec().unwrap();
        assert!(bytes.len() <= Bank::INIT_SPACE);
    }
}
