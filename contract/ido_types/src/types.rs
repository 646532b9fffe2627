use soroban_sdk::{contracttype, Address, String};

use crate::error::IdoError;

/// Asset pair and raise limits of a campaign.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenInfo {
    pub reward_token: Address,
    /// Buy-asset units per one whole reward-asset unit, scaled by `PRICE_SCALE`.
    pub reward_token_price: i128,
    pub buy_token: Address,
    pub soft_cap: i128,
    pub hard_cap: i128,
}

/// Ledger timestamps (seconds) bounding the sale and the claim window.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Schedule {
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub claim_timestamp: u64,
}

/// Router and pair factory handed to the post-withdraw liquidity hook.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LiquidityInfo {
    pub router: Address,
    pub factory: Address,
}

/// Metadata and initial supply of the reward token minted per campaign.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FeeTokenParams {
    pub name: String,
    pub symbol: String,
    pub supply: i128,
}

pub fn validate_schedule(schedule: &Schedule) -> Result<(), IdoError> {
    if schedule.end_timestamp < schedule.start_timestamp
        || schedule.claim_timestamp < schedule.end_timestamp
    {
        return Err(IdoError::InvalidSchedule);
    }
    Ok(())
}

pub fn validate_caps(soft_cap: i128, hard_cap: i128) -> Result<(), IdoError> {
    if soft_cap < 0 || hard_cap <= 0 || soft_cap > hard_cap {
        return Err(IdoError::InvalidCap);
    }
    Ok(())
}

pub fn validate_token_info(info: &TokenInfo) -> Result<(), IdoError> {
    if info.reward_token_price <= 0 {
        return Err(IdoError::InvalidPrice);
    }
    validate_caps(info.soft_cap, info.hard_cap)
}
