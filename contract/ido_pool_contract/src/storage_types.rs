use soroban_sdk::{contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    TokenInfo,
    Schedule,
    LiquidityInfo,
    LiquiditySplit,
    TotalRaised,
    ClaimedStake,
    Withdrawn,
    RewardSwept,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    UserInfo(Address),
}

/// Escrow entry of one participant.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct UserInfo {
    pub staked_amount: i128,   // Buy-token units held for this participant
    pub has_claimed: bool,
}

/// `TokenInfo` as reported to readers, with the running raise attached.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenInfoView {
    pub reward_token: Address,
    pub reward_token_price: i128,
    pub buy_token: Address,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub total_raised: i128,
}

/// How much of the settlement goes to the liquidity router on withdraw.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LiquiditySplit {
    pub buy_token_bps: u32,          // Share of the raised balance, in basis points
    pub reward_token_amount: i128,   // Reward tokens paired against it
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const APPROVAL_LEDGERS: u32 = 100; // Router allowance lifetime
