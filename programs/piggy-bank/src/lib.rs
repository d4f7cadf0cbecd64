use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod logic;
pub mod state;

use instructions::*;
use state::{BetTier, RoundInfo};

declare_id!("7scXtEu17BEHfM6sVapxbao7uwFybx8PtCyFYZD3q6ki");

#[program]
pub mod piggy_bank {
    use super::*;

    /// One-time bank setup: operator, skim percent and bet ladder.
    /// Pass `ladder = None` to install the reference ladder.
    pub fn initialize(
        ctx: Context<Initialize>,
        owner_distribution: u8,
        ladder: Option<Vec<BetTier>>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, owner_distribution, ladder)
    }

    /// Deposit into the open round, opening a new one if none is open.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Pay a round's cap to its winner once the cooldown has elapsed.
    /// Callable by anyone.
    pub fn pay_win_cap(ctx: Context<PayWinCap>, round_index: u64) -> Result<()> {
        instructions::pay_win_cap::handler(ctx, round_index)
    }

    pub fn rounds(ctx: Context<ReadRound>, round_index: u64) -> Result<RoundInfo> {
        instructions::views::read_round(ctx, round_index)
    }

    pub fn get_bet(ctx: Context<ReadBank>, tier_index: u8) -> Result<BetTier> {
        instructions::views::read_bet(ctx, tier_index)
    }

    pub fn bets_count(ctx: Context<ReadBank>) -> Result<u8> {
        instructions::views::read_bets_count(ctx)
    }

    pub fn owner_distribution(ctx: Context<ReadBank>) -> Result<u8> {
        instructions::views::read_owner_distribution(ctx)
    }

    pub fn owner(ctx: Context<ReadBank>) -> Result<Pubkey> {
        instructions::views::read_owner(ctx)
    }
}
