use anchor_lang::prelude::*;

use crate::errors::PiggyBankError;
use crate::state::{Bank, Round};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayoutReceipt {
    pub round_index: u64,
    pub winner: Pubkey,
    pub amount: u64,
    pub paid_at: i64,
}

/// Closes `round` and reports the cap owed to its winner.
///
/// Fails with `RoundNotFound` for an index the ledger never created,
/// `NotYetPayable` before `end_time` and `AlreadyPaid` for a closed round.
pub fn process_payout(
    bank: &mut Bank,
    round: &mut Round,
    round_index: u64,
    now: i64,
) -> Result<PayoutReceipt> {
    bank.ensure_round_exists(round_index)?;
    require!(round.index == round_index, PiggyBankError::RoundMismatch);
    round.ensure_payable(now)?;

    let total_paid_out = bank
        .total_paid_out
        .checked_add(round.cap)
        .ok_or(PiggyBankError::MathOverflow)?;
    bank.record_round_closed(round_index)?;
    bank.total_paid_out = total_paid_out;
    round.close(now);

    Ok(PayoutReceipt {
        round_index,
        winner: round.winner,
        amount: round.cap,
        paid_at: now,
    })
}
