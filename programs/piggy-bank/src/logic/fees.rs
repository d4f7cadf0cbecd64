use anchor_lang::prelude::*;

use crate::constants::PERCENT_DENOM;
use crate::errors::PiggyBankError;
use crate::state::Bank;

/// How a competing deposit is divided between the operator and the pot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub owner_cut: u64,
    pub net: u64,
}

/// `owner_cut = floor(amount * owner_distribution / 100)`, the rest is net.
pub fn split_deposit(amount: u64, owner_distribution: u8) -> Result<FeeSplit> {
    let owner_cut = (amount as u128)
        .checked_mul(owner_distribution as u128)
        .ok_or(PiggyBankError::MathOverflow)?
        .checked_div(PERCENT_DENOM as u128)
        .ok_or(PiggyBankError::MathOverflow)?;
    let owner_cut = u64::try_from(owner_cut).map_err(|_| PiggyBankError::MathOverflow)?;

    let net = amount
        .checked_sub(owner_cut)
        .ok_or(PiggyBankError::MathOverflow)?;

    Ok(FeeSplit { owner_cut, net })
}

/// Books the operator's share in the bank totals.
pub fn record_fee(bank: &mut Bank, owner_cut: u64) -> Result<()> {
    bank.total_fees = bank
        .total_fees
        .checked_add(owner_cut)
        .ok_or(PiggyBankError::MathOverflow)?;
    Ok(())
}
