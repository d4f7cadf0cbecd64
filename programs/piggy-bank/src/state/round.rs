use anchor_lang::prelude::*;

use crate::errors::PiggyBankError;
use crate::state::TierLadder;

/// One accumulation cycle of the pot. Created by the opening deposit,
/// grown by every later qualifying deposit, closed by the payout.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Round {
    /// Position in the round ledger.
    pub index: u64,
    /// Unix timestamp at or after which the cap can be paid out.
    pub end_time: i64,
    /// Payable amount accumulated so far, net of skims.
    pub cap: u64,
    /// Ladder tier currently governing minimum deposit and cooldown.
    pub last_bet_index: u8,
    /// Number of qualifying deposits.
    pub deposits: u64,
    /// Most recent qualifying depositor.
    pub winner: Pubkey,
    /// Set once the cap has been paid out.
    pub closed: bool,
    /// Unix timestamp of the opening deposit.
    pub opened_at: i64,
    /// Unix timestamp of the payout (0 while open).
    pub paid_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

/// Snapshot returned by the `rounds` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundInfo {
    pub end_time: i64,
    pub cap: u64,
    pub last_bet_index: u8,
    pub deposits: u64,
    pub winner: Pubkey,
    pub closed: bool,
}

impl Round {
    pub const SEED: &'static [u8] = b"round";

    /// Reads a round from an account the `Accounts` struct could not
    /// deserialize up front (the index is checked against the ledger first).
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require_keys_eq!(*info.owner, crate::ID, ErrorCode::AccountOwnedByWrongProgram);
        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }

    /// Starts the round with an unskimmed opening deposit governed by
    /// `tier_index`.
    pub fn open(
        &mut self,
        index: u64,
        amount: u64,
        depositor: Pubkey,
        ladder: TierLadder,
        tier_index: u8,
        now: i64,
    ) -> Result<()> {
        let tier = ladder.tier_at(tier_index)?;
        let end_time = now
            .checked_add(tier.cooldown)
            .ok_or(PiggyBankError::MathOverflow)?;

        self.index = index;
        self.end_time = end_time;
        self.cap = amount;
        self.last_bet_index = tier_index;
        self.deposits = 1;
        self.winner = depositor;
        self.closed = false;
        self.opened_at = now;
        self.paid_at = 0;
        Ok(())
    }

    /// Folds a competing deposit into the round. `tier_index` is the tier
    /// resolved for this deposit; the cooldown restarts from the tier the
    /// round ends up on.
    pub fn apply_deposit(
        &mut self,
        net: u64,
        depositor: Pubkey,
        ladder: TierLadder,
        tier_index: u8,
        now: i64,
    ) -> Result<()> {
        require!(!self.closed, PiggyBankError::NoOpenRound);

        let last_bet_index = self.last_bet_index.max(tier_index);
        let tier = ladder.tier_at(last_bet_index)?;
        let cap = self
            .cap
            .checked_add(net)
            .ok_or(PiggyBankError::MathOverflow)?;
        let deposits = self
            .deposits
            .checked_add(1)
            .ok_or(PiggyBankError::MathOverflow)?;
        let end_time = now
            .checked_add(tier.cooldown)
            .ok_or(PiggyBankError::MathOverflow)?;

        self.cap = cap;
        self.deposits = deposits;
        self.winner = depositor;
        self.last_bet_index = last_bet_index;
        self.end_time = end_time;
        Ok(())
    }

    pub fn ensure_payable(&self, now: i64) -> Result<()> {
        require!(now >= self.end_time, PiggyBankError::NotYetPayable);
        require!(!self.closed, PiggyBankError::AlreadyPaid);
        Ok(())
    }

    pub fn close(&mut self, now: i64) {
        self.closed = true;
        self.paid_at = now;
    }

    pub fn info(&self) -> RoundInfo {
        RoundInfo {
            end_time: self.end_time,
            cap: self.cap,
            last_bet_index: self.last_bet_index,
            deposits: self.deposits,
            winner: self.winner,
            closed: self.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BetTier;

    const TIERS: [BetTier; 2] = [BetTier::new(100, 30), BetTier::new(200, 60)];

    fn ladder() -> TierLadder<'static> {
        TierLadder::new(&TIERS).unwrap()
    }

    fn opened(depositor: Pubkey) -> Round {
        let mut round = Round::default();
        round.open(4, 100, depositor, ladder(), 0, 1_000).unwrap();
        round
    }

    #[test]
    fn test_open_sets_cap_winner_and_end_time() {
        let alice = Pubkey::new_unique();
        let round = opened(alice);

        assert_eq!(round.index, 4);
        assert_eq!(round.cap, 100);
        assert_eq!(round.winner, alice);
        assert_eq!(round.last_bet_index, 0);
        assert_eq!(round.end_time, 1_030);
        assert_eq!(round.deposits, 1);
        assert!(!round.closed);
    }

    #[test]
    fn test_open_takes_cooldown_from_its_tier() {
        let mut round = Round::default();
        round
            .open(0, 200, Pubkey::new_unique(), ladder(), 1, 1_000)
            .unwrap();
        assert_eq!(round.last_bet_index, 1);
        assert_eq!(round.end_time, 1_060);

        let mut untouched = Round::default();
        assert!(untouched
            .open(0, 200, Pubkey::new_unique(), ladder(), 2, 1_000)
            .is_err());
        assert_eq!(untouched, Round::default());
    }

    #[test]
    fn test_apply_deposit_updates_round() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut round = opened(alice);

        round.apply_deposit(180, bob, ladder(), 1, 1_010).unwrap();

        assert_eq!(round.cap, 280);
        assert_eq!(round.winner, bob);
        assert_eq!(round.last_bet_index, 1);
        assert_eq!(round.end_time, 1_070);
        assert_eq!(round.deposits, 2);
    }

    #[test]
    fn test_apply_deposit_never_lowers_tier() {
        let mut round = opened(Pubkey::new_unique());
        round
            .apply_deposit(180, Pubkey::new_unique(), ladder(), 1, 1_010)
            .unwrap();
        round
            .apply_deposit(90, Pubkey::new_unique(), ladder(), 0, 1_020)
            .unwrap();
        assert_eq!(round.last_bet_index, 1);
        // cooldown follows the tier the round stays on
        assert_eq!(round.end_time, 1_080);
    }

    #[test]
    fn test_apply_deposit_on_closed_round_fails_untouched() {
        let mut round = opened(Pubkey::new_unique());
        round.close(2_000);
        let before = round.clone();

        assert!(round
            .apply_deposit(90, Pubkey::new_unique(), ladder(), 0, 2_001)
            .is_err());
        assert_eq!(round, before);
    }

    #[test]
    fn test_overflowing_cap_fails_untouched() {
        let mut round = opened(Pubkey::new_unique());
        let before = round.clone();
        assert!(round
            .apply_deposit(u64::MAX, Pubkey::new_unique(), ladder(), 0, 1_001)
            .is_err());
        assert_eq!(round, before);
    }

    #[test]
    fn test_payable_only_after_end_time() {
        let mut round = opened(Pubkey::new_unique());
        assert!(round.ensure_payable(1_029).is_err());
        assert!(round.ensure_payable(1_030).is_ok());

        round.close(1_030);
        assert!(round.ensure_payable(5_000).is_err());
        assert_eq!(round.paid_at, 1_030);
    }

    #[test]
    fn test_store_then_load_from_account() {
        let round = opened(Pubkey::new_unique());
        let key = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data = vec![0u8; 8 + Round::INIT_SPACE];
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &crate::ID,
            false,
            0,
        );

        round.store(&info).unwrap();
        assert_eq!(Round::load(&info).unwrap(), round);
    }

    #[test]
    fn test_load_rejects_foreign_or_empty_account() {
        let key = Pubkey::new_unique();
        let system = Pubkey::default();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &system,
            false,
            0,
        );
        assert!(Round::load(&info).is_err());

        let mut lamports = 0u64;
        let mut data: Vec<u8> = Vec::new();
        let owned_empty = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &crate::ID,
            false,
            0,
        );
        assert!(Round::load(&owned_empty).is_err());
    }
}
