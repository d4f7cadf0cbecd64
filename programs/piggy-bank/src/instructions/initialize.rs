use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_OWNER_DISTRIBUTION, REFERENCE_LADDER};
use crate::errors::PiggyBankError;
use crate::events::BankInitialized;
use crate::state::{Bank, BetTier, TierLadder};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Bank::INIT_SPACE,
        seeds = [Bank::SEED],
        bump,
    )]
    pub bank: Account<'info, Bank>,

    /// Vault token account owned by the bank PDA.
    #[account(
        init,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = bank,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Pot currency mint.
    pub mint: Account<'info, Mint>,

    /// Owner token account that receives skims.
    #[account(
        constraint = treasury_token_account.owner == owner.key() @ PiggyBankError::InvalidTreasury,
        constraint = treasury_token_account.mint == mint.key() @ PiggyBankError::InvalidMint,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    /// Operator; fixed for the lifetime of the bank.
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(
    ctx: Context<Initialize>,
    owner_distribution: u8,
    ladder: Option<Vec<BetTier>>,
) -> Result<()> {
    require!(
        owner_distribution <= MAX_OWNER_DISTRIBUTION,
        PiggyBankError::InvalidOwnerDistribution
    );

    let ladder = ladder.unwrap_or_else(|| REFERENCE_LADDER.to_vec());
    let bets_count = TierLadder::new(&ladder)?.tier_count();

    let bank = &mut ctx.accounts.bank;
    bank.owner = ctx.accounts.owner.key();
    bank.owner_distribution = owner_distribution;
    bank.mint = ctx.accounts.mint.key();
    bank.vault = ctx.accounts.vault.key();
    bank.treasury = ctx.accounts.treasury_token_account.key();
    bank.ladder = ladder;
    bank.rounds_count = 0;
    bank.round_open = false;
    bank.total_deposited = 0;
    bank.total_fees = 0;
    bank.total_paid_out = 0;
    bank.bump = ctx.bumps.bank;

    emit!(BankInitialized {
        owner: bank.owner,
        mint: bank.mint,
        owner_distribution,
        bets_count,
    });

    Ok(())
}
