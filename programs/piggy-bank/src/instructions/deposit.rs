use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::PiggyBankError;
use crate::events::{Deposited, RoundOpened};
use crate::logic::process_deposit;
use crate::state::{Bank, Round};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [Bank::SEED],
        bump = bank.bump,
    )]
    pub bank: Account<'info, Bank>,

    /// Open round, or the next ledger slot when none is open.
    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + Round::INIT_SPACE,
        seeds = [Round::SEED, bank.deposit_round_index().to_le_bytes().as_ref()],
        bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        constraint = vault.key() == bank.vault @ PiggyBankError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Depositor's pot-currency token account.
    #[account(
        mut,
        constraint = depositor_token_account.owner == depositor.key(),
        constraint = depositor_token_account.mint == bank.mint @ PiggyBankError::InvalidMint,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    /// Operator token account receiving the skim.
    #[account(
        mut,
        constraint = treasury_token_account.key() == bank.treasury @ PiggyBankError::InvalidTreasury,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    fn transfer_from_depositor(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        let transfer_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.depositor_token_account.to_account_info(),
                to,
                authority: self.depositor.to_account_info(),
            },
        );
        token::transfer(transfer_ctx, amount)
    }
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let depositor = ctx.accounts.depositor.key();

    let outcome = process_deposit(
        &mut ctx.accounts.bank,
        &mut ctx.accounts.round,
        amount,
        depositor,
        clock.unix_timestamp,
    )?;

    if outcome.opened_round {
        ctx.accounts.round.bump = ctx.bumps.round;
    }

    // Net share into the pot, skim straight to the operator.
    let accounts = &ctx.accounts;
    accounts.transfer_from_depositor(accounts.vault.to_account_info(), outcome.net)?;
    if outcome.owner_cut > 0 {
        accounts.transfer_from_depositor(
            accounts.treasury_token_account.to_account_info(),
            outcome.owner_cut,
        )?;
    }

    if outcome.opened_round {
        msg!(
            "Round {} opened, payable at {}",
            outcome.round_index,
            outcome.end_time
        );
        emit!(RoundOpened {
            round_index: outcome.round_index,
            depositor,
            cap: outcome.cap,
            end_time: outcome.end_time,
        });
    }

    emit!(Deposited {
        round_index: outcome.round_index,
        depositor,
        amount,
        net: outcome.net,
        owner_cut: outcome.owner_cut,
        cap: outcome.cap,
        tier: outcome.tier,
        end_time: outcome.end_time,
    });

    Ok(())
}
