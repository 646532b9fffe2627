use ido_types::{FeeTokenParams, IdoError, LiquidityInfo, Schedule, TokenInfo};
use soroban_sdk::{Address, BytesN, Env};

use crate::storage_types::{CampaignId, DataKey, FEE_TOKEN_DECIMALS};

const FEE_TOKEN_SALT: u8 = 0x01;
const POOL_SALT: u8 = 0x02;

/// Deterministic per-campaign salt: tag byte up front, big-endian id at the tail.
pub fn salt(env: &Env, campaign_id: CampaignId, tag: u8) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[0] = tag;
    bytes[24..].copy_from_slice(&campaign_id.to_be_bytes());
    BytesN::from_array(env, &bytes)
}

fn read_wasm(env: &Env, key: &DataKey) -> Result<BytesN<32>, IdoError> {
    env.storage()
        .instance()
        .get(key)
        .ok_or(IdoError::NotInitialized)
}

/// Deploy the campaign's reward token, minting the whole supply to `owner`.
pub fn deploy_fee_token(
    env: &Env,
    campaign_id: CampaignId,
    owner: &Address,
    params: &FeeTokenParams,
) -> Result<Address, IdoError> {
    let wasm = read_wasm(env, &DataKey::FeeTokenWasm)?;
    let address = env
        .deployer()
        .with_current_contract(salt(env, campaign_id, FEE_TOKEN_SALT))
        .deploy_v2(
            wasm,
            (
                owner.clone(),
                params.name.clone(),
                params.symbol.clone(),
                FEE_TOKEN_DECIMALS,
                params.supply,
            ),
        );
    Ok(address)
}

/// Deploy the escrow pool, owned by `owner` and wired to `token_info`.
pub fn deploy_pool(
    env: &Env,
    campaign_id: CampaignId,
    owner: &Address,
    token_info: TokenInfo,
    schedule: Schedule,
    liquidity_info: LiquidityInfo,
) -> Result<Address, IdoError> {
    let wasm = read_wasm(env, &DataKey::PoolWasm)?;
    let address = env
        .deployer()
        .with_current_contract(salt(env, campaign_id, POOL_SALT))
        .deploy_v2(wasm, (owner.clone(), token_info, schedule, liquidity_info));
    Ok(address)
}

/// Addresses `create_campaign` will deploy to for `campaign_id`.
pub fn predicted_addresses(env: &Env, campaign_id: CampaignId) -> (Address, Address) {
    let token = env
        .deployer()
        .with_current_contract(salt(env, campaign_id, FEE_TOKEN_SALT))
        .deployed_address();
    let pool = env
        .deployer()
        .with_current_contract(salt(env, campaign_id, POOL_SALT))
        .deployed_address();
    (token, pool)
}
