use anchor_lang::prelude::*;

use crate::errors::PiggyBankError;
use crate::state::{Bank, BetTier, Round, RoundInfo};

#[derive(Accounts)]
pub struct ReadBank<'info> {
    #[account(
        seeds = [Bank::SEED],
        bump = bank.bump,
    )]
    pub bank: Account<'info, Bank>,
}

#[derive(Accounts)]
#[instruction(round_index: u64)]
pub struct ReadRound<'info> {
    #[account(
        seeds = [Bank::SEED],
        bump = bank.bump,
    )]
    pub bank: Account<'info, Bank>,

    /// CHECK: Round PDA for `round_index`; deserialized only once the ledger
    /// confirms the index exists.
    #[account(
        seeds = [Round::SEED, round_index.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: UncheckedAccount<'info>,
}

pub fn read_round(ctx: Context<ReadRound>, round_index: u64) -> Result<RoundInfo> {
    ctx.accounts.bank.ensure_round_exists(round_index)?;
    let round = Round::load(&ctx.accounts.round)?;
    require!(round.index == round_index, PiggyBankError::RoundMismatch);
    Ok(round.info())
}

pub fn read_bet(ctx: Context<ReadBank>, tier_index: u8) -> Result<BetTier> {
    ctx.accounts.bank.ladder().tier_at(tier_index)
}

pub fn read_bets_count(ctx: Context<ReadBank>) -> Result<u8> {
    Ok(ctx.accounts.bank.ladder().tier_count())
}

pub fn read_owner_distribution(ctx: Context<ReadBank>) -> Result<u8> {
    Ok(ctx.accounts.bank.owner_distribution)
}

pub fn read_owner(ctx: Context<ReadBank>) -> Result<Pubkey> {
    Ok(ctx.accounts.bank.owner)
}
