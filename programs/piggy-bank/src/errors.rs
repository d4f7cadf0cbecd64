use anchor_lang::prelude::*;

#[error_code]
pub enum PiggyBankError {
    #[msg("Deposit is below the active tier minimum.")]
    DepositTooSmall,
    #[msg("No round is currently open.")]
    NoOpenRound,
    #[msg("Round has never been created.")]
    RoundNotFound,
    #[msg("Round cooldown has not elapsed yet.")]
    NotYetPayable,
    #[msg("Round has already been paid out.")]
    AlreadyPaid,
    #[msg("Round cooldown has elapsed; it can only be paid out.")]
    RoundExpired,
    #[msg("Tier index is outside the bet ladder.")]
    OutOfRange,
    #[msg("Owner distribution must be between 0 and 100 percent.")]
    InvalidOwnerDistribution,
    #[msg("Bet ladder must be non-empty, at most 32 tiers, with ascending minimums and non-decreasing cooldowns.")]
    InvalidLadder,
    #[msg("Token account mint does not match the bank mint.")]
    InvalidMint,
    #[msg("Vault token account does not belong to the bank.")]
    InvalidVault,
    #[msg("Treasury token account does not match the bank treasury.")]
    InvalidTreasury,
    #[msg("Payout token account is not owned by the round winner.")]
    NotWinner,
    #[msg("Round account does not match the requested round index.")]
    RoundMismatch,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
