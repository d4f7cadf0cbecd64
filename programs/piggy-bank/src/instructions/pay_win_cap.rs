use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::PiggyBankError;
use crate::events::WinCapPaid;
use crate::logic::process_payout;
use crate::state::{Bank, Round};

#[derive(Accounts)]
#[instruction(round_index: u64)]
pub struct PayWinCap<'info> {
    #[account(
        mut,
        seeds = [Bank::SEED],
        bump = bank.bump,
    )]
    pub bank: Account<'info, Bank>,

    /// CHECK: Round PDA for `round_index`; deserialized in the handler once
    /// the ledger confirms the index exists.
    #[account(
        mut,
        seeds = [Round::SEED, round_index.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: UncheckedAccount<'info>,

    /// Vault token account owned by the bank PDA.
    #[account(
        mut,
        constraint = vault.key() == bank.vault @ PiggyBankError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Winner's pot-currency token account.
    #[account(
        mut,
        constraint = winner_token_account.mint == bank.mint @ PiggyBankError::InvalidMint,
    )]
    pub winner_token_account: Account<'info, TokenAccount>,

    /// Anyone can trigger the payout (permissionless).
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<PayWinCap>, round_index: u64) -> Result<()> {
    let clock = Clock::get()?;

    ctx.accounts.bank.ensure_round_exists(round_index)?;
    let mut round = Round::load(&ctx.accounts.round)?;

    let receipt = process_payout(
        &mut ctx.accounts.bank,
        &mut round,
        round_index,
        clock.unix_timestamp,
    )?;
    require_keys_eq!(
        ctx.accounts.winner_token_account.owner,
        receipt.winner,
        PiggyBankError::NotWinner
    );
    round.store(&ctx.accounts.round)?;

    // Build PDA signer seeds for the bank account.
    let bump_bytes = [ctx.accounts.bank.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Bank::SEED, &bump_bytes]];

    let transfer_to_winner = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.winner_token_account.to_account_info(),
            authority: ctx.accounts.bank.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_to_winner, receipt.amount)?;

    msg!(
        "Round {} closed, {} paid to {}",
        receipt.round_index,
        receipt.amount,
        receipt.winner
    );

    emit!(WinCapPaid {
        round_index: receipt.round_index,
        winner: receipt.winner,
        amount: receipt.amount,
        paid_by: ctx.accounts.caller.key(),
        paid_at: receipt.paid_at,
    });

    Ok(())
}
