use anchor_lang::prelude::*;

use crate::constants::MAX_TIERS;
use crate::errors::PiggyBankError;

/// One rung of the bet ladder.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct BetTier {
    /// Smallest deposit accepted while this tier governs the round.
    pub min_sum: u64,
    /// Seconds after a qualifying deposit before the round becomes payable.
    pub cooldown: i64,
}

impl BetTier {
    pub const fn new(min_sum: u64, cooldown: i64) -> Self {
        Self { min_sum, cooldown }
    }
}

/// Read-only view over an ordered tier table.
///
/// Every ladder that reaches a `Bank` has passed [`TierLadder::new`], so
/// lookups only need to guard the index.
#[derive(Clone, Copy, Debug)]
pub struct TierLadder<'a> {
    tiers: &'a [BetTier],
}

impl<'a> TierLadder<'a> {
    /// Validates the table: non-empty, bounded, strictly ascending minimums,
    /// non-decreasing cooldowns.
    pub fn new(tiers: &'a [BetTier]) -> Result<Self> {
        require!(
            !tiers.is_empty() && tiers.len() <= MAX_TIERS,
            PiggyBankError::InvalidLadder
        );
        require!(
            tiers[0].min_sum > 0 && tiers[0].cooldown >= 0,
            PiggyBankError::InvalidLadder
        );
        for pair in tiers.windows(2) {
            require!(
                pair[1].min_sum > pair[0].min_sum && pair[1].cooldown >= pair[0].cooldown,
                PiggyBankError::InvalidLadder
            );
        }
        Ok(Self { tiers })
    }

    pub(crate) fn trusted(tiers: &'a [BetTier]) -> Self {
        Self { tiers }
    }

    pub fn tier_count(&self) -> u8 {
        self.tiers.len() as u8
    }

    pub fn tier_at(&self, index: u8) -> Result<BetTier> {
        self.tiers
            .get(index as usize)
            .copied()
            .ok_or_else(|| error!(PiggyBankError::OutOfRange))
    }

    pub fn tiers(&self) -> &'a [BetTier] {
        self.tiers
    }

    /// Tier governing a round after a deposit of `amount` lands on a round
    /// currently at `current`.
    ///
    /// Moves at most one rung forward, and only when `amount` meets the next
    /// rung's minimum. Never moves backward.
    pub fn advance(&self, current: u8, amount: u64) -> Result<u8> {
        self.tier_at(current)?;
        let next = current.checked_add(1).ok_or(PiggyBankError::MathOverflow)?;
        match self.tiers.get(next as usize) {
            Some(tier) if amount >= tier.min_sum => Ok(next),
            _ => Ok(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{REFERENCE_LADDER, REFERENCE_TIER_COUNT};

    fn small_ladder() -> Vec<BetTier> {
        vec![
            BetTier::new(100, 10),
            BetTier::new(200, 20),
            BetTier::new(400, 20),
        ]
    }

    #[test]
    fn test_reference_ladder_is_valid() {
        let ladder = TierLadder::new(&REFERENCE_LADDER).unwrap();
        assert_eq!(ladder.tier_count() as usize, REFERENCE_TIER_COUNT);
        assert_eq!(ladder.tier_count(), 26);
    }

    #[test]
    fn test_reference_ladder_is_monotonic() {
        for pair in REFERENCE_LADDER.windows(2) {
            assert!(pair[1].min_sum > pair[0].min_sum);
            assert!(pair[1].cooldown >= pair[0].cooldown);
        }
    }

    #[test]
    fn test_tier_at_out_of_range() {
        let tiers = small_ladder();
        let ladder = TierLadder::new(&tiers).unwrap();
        assert_eq!(ladder.tier_at(2).unwrap(), BetTier::new(400, 20));
        assert!(ladder.tier_at(3).is_err());
        assert!(ladder.tier_at(u8::MAX).is_err());
    }

    #[test]
    fn test_rejects_malformed_ladders() {
        assert!(TierLadder::new(&[]).is_err());
        assert!(TierLadder::new(&[BetTier::new(0, 10)]).is_err());
        assert!(TierLadder::new(&[BetTier::new(10, -1)]).is_err());
        // equal minimums
        assert!(TierLadder::new(&[BetTier::new(10, 1), BetTier::new(10, 2)]).is_err());
        // shrinking cooldown
        assert!(TierLadder::new(&[BetTier::new(10, 5), BetTier::new(20, 4)]).is_err());

        let too_long: Vec<BetTier> = (1..=(MAX_TIERS as u64 + 1))
            .map(|i| BetTier::new(i, 1))
            .collect();
        assert!(TierLadder::new(&too_long).is_err());
        assert!(TierLadder::new(&too_long[..MAX_TIERS]).is_ok());
    }

    #[test]
    fn test_advance_moves_one_rung_at_most() {
        let tiers = small_ladder();
        let ladder = TierLadder::new(&tiers).unwrap();

        assert_eq!(ladder.advance(0, 100).unwrap(), 0);
        assert_eq!(ladder.advance(0, 199).unwrap(), 0);
        assert_eq!(ladder.advance(0, 200).unwrap(), 1);
        // enough for tier 2, still only one step
        assert_eq!(ladder.advance(0, 10_000).unwrap(), 1);
        assert_eq!(ladder.advance(1, 400).unwrap(), 2);
    }

    #[test]
    fn test_advance_stays_on_top_rung() {
        let tiers = small_ladder();
        let ladder = TierLadder::new(&tiers).unwrap();
        assert_eq!(ladder.advance(2, u64::MAX).unwrap(), 2);
        assert!(ladder.advance(3, 1_000).is_err());
    }
}
