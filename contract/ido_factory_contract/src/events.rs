use soroban_sdk::{contracttype, Address, BytesN, Env, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub pool: Address,
    pub reward_token: Address,
    pub metadata_uri: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WasmUpdatedEvent {
    pub fee_token_wasm: BytesN<32>,
    pub pool_wasm: BytesN<32>,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.campaign_id),
        event,
    );
}

pub fn emit_wasm_updated(env: &Env, event: WasmUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "wasm_updated"),), event);
}
