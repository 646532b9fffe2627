#![no_std]

mod deployer;
mod events;
mod registry;
mod storage_types;


use ido_types::{
    validate_schedule, validate_token_info, FeeTokenParams, IdoError, LiquidityInfo, Schedule,
    TokenInfo,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

pub use storage_types::{Campaign, CampaignId};
use storage_types::{DataKey, TTL_INSTANCE};

#[contract]
pub struct IdoFactory;

#[contractimpl]
impl IdoFactory {
    /// Initialize the factory with its admin and the wasm it deploys per campaign
    pub fn initialize(
        env: Env,
        admin: Address,
        fee_token_wasm: BytesN<32>,
        pool_wasm: BytesN<32>,
    ) -> Result<(), IdoError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(IdoError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::FeeTokenWasm, &fee_token_wasm);
        env.storage().instance().set(&DataKey::PoolWasm, &pool_wasm);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);

        extend_instance(&env);
        Ok(())
    }

    /// Point future campaigns at new token/pool wasm. Existing campaigns keep theirs.
    pub fn update_wasm(
        env: Env,
        fee_token_wasm: BytesN<32>,
        pool_wasm: BytesN<32>,
    ) -> Result<(), IdoError> {
        let admin = read_admin(&env)?;
        admin.require_auth();

        env.storage().instance().set(&DataKey::FeeTokenWasm, &fee_token_wasm);
        env.storage().instance().set(&DataKey::PoolWasm, &pool_wasm);
        extend_instance(&env);

        events::emit_wasm_updated(
            &env,
            events::WasmUpdatedEvent {
                fee_token_wasm,
                pool_wasm,
            },
        );
        Ok(())
    }

    /// Create a new campaign: mint its reward token to `creator` and deploy a
    /// pool owned by `creator`.
    ///
    /// `token_info.reward_token` is ignored; the pool is always wired to the
    /// freshly minted token. Returns the campaign id.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        fee_token_params: FeeTokenParams,
        token_info: TokenInfo,
        schedule: Schedule,
        liquidity_info: LiquidityInfo,
        metadata_uri: String,
    ) -> Result<CampaignId, IdoError> {
        creator.require_auth();

        if fee_token_params.supply <= 0 {
            return Err(IdoError::InvalidAmount);
        }
        validate_schedule(&schedule)?;
        validate_token_info(&token_info)?;

        let campaign_id = registry::next_campaign_id(&env)?;

        let reward_token =
            deployer::deploy_fee_token(&env, campaign_id, &creator, &fee_token_params)?;
        let pool_token_info = TokenInfo {
            reward_token: reward_token.clone(),
            ..token_info
        };
        let pool = deployer::deploy_pool(
            &env,
            campaign_id,
            &creator,
            pool_token_info,
            schedule,
            liquidity_info,
        )?;

        let campaign = Campaign {
            id: campaign_id,
            owner: creator.clone(),
            pool: pool.clone(),
            reward_token: reward_token.clone(),
            metadata_uri: metadata_uri.clone(),
            created_at: env.ledger().timestamp(),
        };
        registry::record_campaign(&env, &campaign)?;
        extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                owner: creator,
                pool,
                reward_token,
                metadata_uri,
            },
        );

        Ok(campaign_id)
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, IdoError> {
        registry::read_campaign(&env, campaign_id)
    }

    pub fn campaign_count(env: Env) -> u64 {
        registry::campaign_count(&env)
    }

    /// Page through the campaigns `owner` created, oldest first.
    pub fn campaigns_by_owner(env: Env, owner: Address, start: u32, limit: u32) -> Vec<CampaignId> {
        registry::campaigns_by_owner(&env, &owner, start, limit)
    }

    pub fn owner_campaign_count(env: Env, owner: Address) -> u32 {
        registry::owner_campaign_count(&env, &owner)
    }

    /// Token and pool addresses the next `create_campaign` call will deploy to.
    pub fn next_addresses(env: Env) -> Result<(Address, Address), IdoError> {
        let campaign_id = registry::next_campaign_id(&env)?;
        Ok(deployer::predicted_addresses(&env, campaign_id))
    }

    pub fn admin(env: Env) -> Result<Address, IdoError> {
        read_admin(&env)
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn read_admin(env: &Env) -> Result<Address, IdoError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(IdoError::NotInitialized)
}
