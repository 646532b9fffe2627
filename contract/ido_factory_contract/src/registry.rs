use ido_types::IdoError;
use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{
    Campaign, CampaignId, DataKey, PersistentKey, MAX_PAGE_SIZE, TTL_PERSISTENT,
};

/// Id the next campaign will receive. Ids start at 1 and never repeat.
pub fn next_campaign_id(env: &Env) -> Result<CampaignId, IdoError> {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(IdoError::NotInitialized)
}

pub fn campaign_count(env: &Env) -> u64 {
    next_campaign_id(env).map(|next| next - 1).unwrap_or(0)
}

/// Store `campaign` and index it under its owner. The id counter moves past
/// `campaign.id`, which must be the value `next_campaign_id` handed out.
///
/// Each owner slot is its own entry, so the index never outgrows a ledger entry.
pub fn record_campaign(env: &Env, campaign: &Campaign) -> Result<(), IdoError> {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);

    let index = owner_campaign_count(env, &campaign.owner);
    let slot_key = PersistentKey::OwnerCampaign(campaign.owner.clone(), index);
    env.storage().persistent().set(&slot_key, &campaign.id);
    extend_persistent(env, &slot_key);

    let count_key = PersistentKey::OwnerCampaignCount(campaign.owner.clone());
    let count = index.checked_add(1).ok_or(IdoError::ArithmeticError)?;
    env.storage().persistent().set(&count_key, &count);
    extend_persistent(env, &count_key);

    let next = campaign.id.checked_add(1).ok_or(IdoError::ArithmeticError)?;
    env.storage().instance().set(&DataKey::NextCampaignId, &next);
    Ok(())
}

pub fn read_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, IdoError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(IdoError::CampaignNotFound)
}

pub fn owner_campaign_count(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&PersistentKey::OwnerCampaignCount(owner.clone()))
        .unwrap_or(0)
}

/// Ids of the campaigns `owner` created, oldest first, from position `start`.
/// At most `MAX_PAGE_SIZE` ids come back per call.
pub fn campaigns_by_owner(env: &Env, owner: &Address, start: u32, limit: u32) -> Vec<CampaignId> {
    let mut ids = Vec::new(env);
    let end = start
        .saturating_add(limit.min(MAX_PAGE_SIZE))
        .min(owner_campaign_count(env, owner));
    for index in start..end {
        let id: Option<CampaignId> = env
            .storage()
            .persistent()
            .get(&PersistentKey::OwnerCampaign(owner.clone(), index));
        if let Some(id) = id {
            ids.push_back(id);
        }
    }
    ids
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
