use anchor_lang::prelude::*;

use crate::errors::PiggyBankError;
use crate::logic::fees::{record_fee, split_deposit};
use crate::state::{Bank, Round};

/// Round state right after a deposit, plus what the deposit cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositOutcome {
    pub round_index: u64,
    /// True when this deposit created the round.
    pub opened_round: bool,
    pub amount: u64,
    /// Part of `amount` added to the cap.
    pub net: u64,
    /// Part of `amount` owed to the operator treasury.
    pub owner_cut: u64,
    pub cap: u64,
    pub winner: Pubkey,
    pub end_time: i64,
    pub tier: u8,
}

/// Applies a deposit to the ledger slot `round` occupies.
///
/// `round` must be the open round when one exists, or a blank slot at
/// `bank.deposit_round_index()` otherwise. Both accounts are left
/// untouched on any error.
pub fn process_deposit(
    bank: &mut Bank,
    round: &mut Round,
    amount: u64,
    depositor: Pubkey,
    now: i64,
) -> Result<DepositOutcome> {
    let mut next_bank = bank.clone();
    let mut next_round = round.clone();

    let outcome = if bank.round_open {
        require!(
            round.index == bank.open_round_index()?,
            PiggyBankError::RoundMismatch
        );
        compete(&mut next_bank, &mut next_round, amount, depositor, now)?
    } else {
        open(&mut next_bank, &mut next_round, amount, depositor, now)?
    };

    *bank = next_bank;
    *round = next_round;
    Ok(outcome)
}

// The opening deposit is never skimmed: its whole amount seeds the cap.
fn open(
    bank: &mut Bank,
    round: &mut Round,
    amount: u64,
    depositor: Pubkey,
    now: i64,
) -> Result<DepositOutcome> {
    let ladder = bank.ladder();
    require!(
        amount >= ladder.tier_at(0)?.min_sum,
        PiggyBankError::DepositTooSmall
    );

    round.open(bank.deposit_round_index(), amount, depositor, ladder, 0, now)?;
    bank.record_round_opened()?;
    bank.total_deposited = bank
        .total_deposited
        .checked_add(amount)
        .ok_or(PiggyBankError::MathOverflow)?;

    Ok(DepositOutcome {
        round_index: round.index,
        opened_round: true,
        amount,
        net: amount,
        owner_cut: 0,
        cap: round.cap,
        winner: round.winner,
        end_time: round.end_time,
        tier: round.last_bet_index,
    })
}

// Only before the cooldown lapses can a rival take the lead.
fn compete(
    bank: &mut Bank,
    round: &mut Round,
    amount: u64,
    depositor: Pubkey,
    now: i64,
) -> Result<DepositOutcome> {
    require!(now < round.end_time, PiggyBankError::RoundExpired);

    let ladder = bank.ladder();
    let current = round.last_bet_index;
    let active = ladder.tier_at(current)?;
    require!(amount >= active.min_sum, PiggyBankError::DepositTooSmall);

    let tier_index = ladder.advance(current, amount)?;
    let split = split_deposit(amount, bank.owner_distribution)?;

    round.apply_deposit(split.net, depositor, ladder, tier_index, now)?;
    record_fee(bank, split.owner_cut)?;
    bank.total_deposited = bank
        .total_deposited
        .checked_add(amount)
        .ok_or(PiggyBankError::MathOverflow)?;

    Ok(DepositOutcome {
        round_index: round.index,
        opened_round: false,
        amount,
        net: split.net,
        owner_cut: split.owner_cut,
        cap: round.cap,
        winner: round.winner,
        end_time: round.end_time,
        tier: round.last_bet_index,
    })
}
