use crate::state::BetTier;

/// Skim percentages are expressed out of 100.
pub const PERCENT_DENOM: u64 = 100;

/// Upper bound on the operator skim.
pub const MAX_OWNER_DISTRIBUTION: u8 = 100;

/// Ladder storage reserved in the bank account.
pub const MAX_TIERS: usize = 32;

/// One whole pot token at 6 decimal places (USDC-like mint).
pub const TOKEN_UNIT: u64 = 1_000_000;

pub const MINUTE: i64 = 60;
pub const HOUR: i64 = 60 * MINUTE;

pub const REFERENCE_TIER_COUNT: usize = 26;

/// Ladder installed when `initialize` is called without an explicit one.
pub const REFERENCE_LADDER: [BetTier; REFERENCE_TIER_COUNT] = [
    BetTier::new(TOKEN_UNIT, 5 * MINUTE),
    BetTier::new(2 * TOKEN_UNIT, 5 * MINUTE),
    BetTier::new(3 * TOKEN_UNIT, 5 * MINUTE),
    BetTier::new(5 * TOKEN_UNIT, 10 * MINUTE),
    BetTier::new(8 * TOKEN_UNIT, 10 * MINUTE),
    BetTier::new(10 * TOKEN_UNIT, 15 * MINUTE),
    BetTier::new(15 * TOKEN_UNIT, 15 * MINUTE),
    BetTier::new(20 * TOKEN_UNIT, 20 * MINUTE),
    BetTier::new(25 * TOKEN_UNIT, 20 * MINUTE),
    BetTier::new(30 * TOKEN_UNIT, 30 * MINUTE),
    BetTier::new(40 * TOKEN_UNIT, 30 * MINUTE),
    BetTier::new(50 * TOKEN_UNIT, 45 * MINUTE),
    BetTier::new(75 * TOKEN_UNIT, HOUR),
    BetTier::new(100 * TOKEN_UNIT, HOUR),
    BetTier::new(150 * TOKEN_UNIT, 90 * MINUTE),
    BetTier::new(200 * TOKEN_UNIT, 2 * HOUR),
    BetTier::new(250 * TOKEN_UNIT, 2 * HOUR),
    BetTier::new(300 * TOKEN_UNIT, 3 * HOUR),
    BetTier::new(400 * TOKEN_UNIT, 3 * HOUR),
    BetTier::new(500 * TOKEN_UNIT, 4 * HOUR),
    BetTier::new(750 * TOKEN_UNIT, 6 * HOUR),
    BetTier::new(1_000 * TOKEN_UNIT, 8 * HOUR),
    BetTier::new(1_500 * TOKEN_UNIT, 12 * HOUR),
    BetTier::new(2_000 * TOKEN_UNIT, 12 * HOUR),
    BetTier::new(3_500 * TOKEN_UNIT, 18 * HOUR),
    BetTier::new(5_000 * TOKEN_UNIT, 24 * HOUR),
];
