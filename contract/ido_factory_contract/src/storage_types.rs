use soroban_sdk::{contracttype, Address, String};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    FeeTokenWasm,
    PoolWasm,
    NextCampaignId,
}

#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    OwnerCampaignCount(Address),
    OwnerCampaign(Address, u32),
}

pub type CampaignId = u64;

/// Provenance of one campaign, written once at creation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub pool: Address,
    pub reward_token: Address,
    pub metadata_uri: String,
    pub created_at: u64,
}

pub const FEE_TOKEN_DECIMALS: u32 = 18;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
