use soroban_sdk::{Env, I256};

use crate::error::IdoError;

/// Fixed-point scale of `TokenInfo::reward_token_price` (18 decimals).
pub const PRICE_SCALE: i128 = 1_000_000_000_000_000_000;
pub const BASIS_POINTS: u32 = 10_000;

/// Reward owed for `staked` buy-asset units at `price` buy units per reward unit.
///
/// `staked * PRICE_SCALE` does not fit an `i128` for realistic raises, so the
/// product is taken in 256 bits before the floor division.
pub fn reward_for(env: &Env, staked: i128, price: i128) -> Result<i128, IdoError> {
    if staked < 0 {
        return Err(IdoError::InvalidAmount);
    }
    if price <= 0 {
        return Err(IdoError::InvalidPrice);
    }
    let scaled = I256::from_i128(env, staked).mul(&I256::from_i128(env, PRICE_SCALE));
    scaled
        .div(&I256::from_i128(env, price))
        .to_i128()
        .ok_or(IdoError::ArithmeticError)
}

pub fn bps_share(amount: i128, bps: u32) -> Result<i128, IdoError> {
    if bps > BASIS_POINTS {
        return Err(IdoError::InvalidSplit);
    }
    amount
        .checked_mul(bps as i128)
        .map(|v| v / BASIS_POINTS as i128)
        .ok_or(IdoError::ArithmeticError)
}
