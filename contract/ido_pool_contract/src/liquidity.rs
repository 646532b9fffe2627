use ido_types::{LiquidityInfo, TokenInfo};
use soroban_sdk::{contractclient, log, token, Address, Env};

use crate::events::{self, LiquiditySeededEvent};
use crate::storage_types::APPROVAL_LEDGERS;

/// Router side of the post-withdraw hook.
///
/// The router pulls `amount_a`/`amount_b` from `provider` with `transfer_from`,
/// so the pool approves it for both amounts right before the call.
#[contractclient(name = "LiquidityRouterClient")]
pub trait LiquidityRouter {
    fn add_liquidity(
        env: Env,
        provider: Address,
        token_a: Address,
        token_b: Address,
        amount_a: i128,
        amount_b: i128,
        to: Address,
        factory: Address,
    ) -> Address;
}

/// Best-effort seeding of a buy/reward pair. Returns whether the router call
/// went through; on failure nothing has left the pool.
pub fn seed(
    env: &Env,
    token_info: &TokenInfo,
    liquidity: &LiquidityInfo,
    lp_recipient: &Address,
    buy_amount: i128,
    reward_amount: i128,
) -> bool {
    if buy_amount <= 0 || reward_amount <= 0 {
        return false;
    }

    let pool = env.current_contract_address();
    let expiration = env.ledger().sequence() + APPROVAL_LEDGERS;
    let buy = token::TokenClient::new(env, &token_info.buy_token);
    let reward = token::TokenClient::new(env, &token_info.reward_token);

    let approved = matches!(
        buy.try_approve(&pool, &liquidity.router, &buy_amount, &expiration),
        Ok(Ok(()))
    ) && matches!(
        reward.try_approve(&pool, &liquidity.router, &reward_amount, &expiration),
        Ok(Ok(()))
    );

    let seeded = if approved {
        let router = LiquidityRouterClient::new(env, &liquidity.router);
        match router.try_add_liquidity(
            &pool,
            &token_info.buy_token,
            &token_info.reward_token,
            &buy_amount,
            &reward_amount,
            lp_recipient,
            &liquidity.factory,
        ) {
            Ok(Ok(pair)) => {
                events::emit_liquidity_seeded(
                    env,
                    LiquiditySeededEvent {
                        pair,
                        buy_amount,
                        reward_amount,
                    },
                );
                true
            }
            _ => {
                log!(
                    env,
                    "liquidity router rejected seeding",
                    liquidity.router,
                    buy_amount,
                    reward_amount
                );
                false
            }
        }
    } else {
        log!(env, "could not approve liquidity router", liquidity.router);
        false
    };

    // Unused allowance never outlives the hook
    let _ = buy.try_approve(&pool, &liquidity.router, &0, &0);
    let _ = reward.try_approve(&pool, &liquidity.router, &0, &0);

    seeded
}
