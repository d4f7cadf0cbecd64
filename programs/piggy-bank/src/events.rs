use anchor_lang::prelude::*;

#[event]
pub struct BankInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub owner_distribution: u8,
    pub bets_count: u8,
}

#[event]
pub struct RoundOpened {
    pub round_index: u64,
    pub depositor: Pubkey,
    pub cap: u64,
    pub end_time: i64,
}

#[event]
pub struct Deposited {
    pub round_index: u64,
    pub depositor: Pubkey,
    pub amount: u64,
    pub net: u64,
    pub owner_cut: u64,
    pub cap: u64,
    pub tier: u8,
    pub end_time: i64,
}

#[event]
pub struct WinCapPaid {
    pub round_index: u64,
    pub winner: Pubkey,
    pub amount: u64,
    pub paid_by: Pubkey,
    pub paid_at: i64,
}
