#![no_std]


mod events;
mod liquidity;
mod storage_types;

pub use liquidity::{LiquidityRouter, LiquidityRouterClient};
pub use storage_types::{LiquiditySplit, TokenInfoView, UserInfo};
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

use ido_types::{
    bps_share, reward_for, validate_caps, validate_schedule, validate_token_info, IdoError,
    LiquidityInfo, Phase, Schedule, TokenInfo, BASIS_POINTS,
};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, token, Address, Env, TryFromVal, Val,
};

#[contract]
pub struct IdoPool;

#[contractimpl]
impl IdoPool {
    /// Store the campaign configuration. Reward tokens are sent to the pool
    /// address separately by the owner before the sale starts.
    pub fn __constructor(
        e: Env,
        owner: Address,
        token_info: TokenInfo,
        schedule: Schedule,
        liquidity_info: LiquidityInfo,
    ) {
        if let Err(err) = validate_schedule(&schedule).and_then(|_| validate_token_info(&token_info))
        {
            panic_with_error!(&e, err);
        }

        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::TokenInfo, &token_info);
        e.storage().instance().set(&DataKey::Schedule, &schedule);
        e.storage().instance().set(&DataKey::LiquidityInfo, &liquidity_info);
        e.storage().instance().set(&DataKey::TotalRaised, &0i128);
        e.storage().instance().set(&DataKey::Withdrawn, &false);

        extend_instance(&e);
    }

    /// Escrow `amount` buy tokens from `participant` while the sale is active.
    pub fn stake(e: Env, participant: Address, amount: i128) -> Result<(), IdoError> {
        participant.require_auth();

        if amount <= 0 {
            return Err(IdoError::InvalidAmount);
        }

        let now = e.ledger().timestamp();
        let schedule: Schedule = read_instance(&e, &DataKey::Schedule);
        if now < schedule.start_timestamp {
            return Err(IdoError::NotStarted);
        }
        if now >= schedule.end_timestamp {
            return Err(IdoError::NotActive);
        }

        let token_info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        let total_raised = read_total_raised(&e)
            .checked_add(amount)
            .ok_or(IdoError::ArithmeticError)?;
        if total_raised > token_info.hard_cap {
            return Err(IdoError::CapExceeded);
        }

        transfer(
            &e,
            &token_info.buy_token,
            &participant,
            &e.current_contract_address(),
            amount,
        )?;

        let mut user = read_user(&e, &participant);
        user.staked_amount = user
            .staked_amount
            .checked_add(amount)
            .ok_or(IdoError::ArithmeticError)?;
        write_user(&e, &participant, &user);
        write_total_raised(&e, total_raised);

        events::emit_staked(
            &e,
            events::StakedEvent {
                participant,
                amount,
                total_raised,
            },
        );
        Ok(())
    }

    /// Return the whole stake of `participant` after a failed sale.
    pub fn refund(e: Env, participant: Address) -> Result<i128, IdoError> {
        participant.require_auth();

        let token_info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        let total_raised = read_total_raised(&e);
        match current_phase(&e, &token_info, total_raised) {
            Phase::Pending | Phase::Active => return Err(IdoError::NotEnded),
            Phase::Succeeded | Phase::Claimable => return Err(IdoError::SaleSucceeded),
            Phase::Failed => {}
        }

        let mut user = read_user(&e, &participant);
        let amount = user.staked_amount;
        if amount <= 0 {
            return Err(IdoError::NoStake);
        }

        // Books first, tokens second
        user.staked_amount = 0;
        write_user(&e, &participant, &user);
        write_total_raised(&e, total_raised - amount);

        transfer(
            &e,
            &token_info.buy_token,
            &e.current_contract_address(),
            &participant,
            amount,
        )?;

        events::emit_refunded(&e, events::RefundedEvent { participant, amount });
        Ok(amount)
    }

    /// Pay out the reward owed for the stake of `participant`.
    pub fn claim(e: Env, participant: Address) -> Result<i128, IdoError> {
        participant.require_auth();

        let now = e.ledger().timestamp();
        let schedule: Schedule = read_instance(&e, &DataKey::Schedule);
        let token_info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        let total_raised = read_total_raised(&e);

        if now < schedule.claim_timestamp {
            return Err(IdoError::NotClaimable);
        }
        if Phase::derive(now, total_raised, token_info.soft_cap, &schedule) != Phase::Claimable {
            return Err(IdoError::SaleFailed);
        }

        let mut user = read_user(&e, &participant);
        if user.staked_amount <= 0 {
            return Err(IdoError::NoStake);
        }
        if user.has_claimed {
            return Err(IdoError::AlreadyClaimed);
        }

        let reward_amount = reward_for(&e, user.staked_amount, token_info.reward_token_price)?;

        // The stake stays on record; only the flag flips
        user.has_claimed = true;
        write_user(&e, &participant, &user);
        let claimed_stake = read_claimed_stake(&e)
            .checked_add(user.staked_amount)
            .ok_or(IdoError::ArithmeticError)?;
        e.storage().instance().set(&DataKey::ClaimedStake, &claimed_stake);

        if reward_amount > 0 {
            transfer(
                &e,
                &token_info.reward_token,
                &e.current_contract_address(),
                &participant,
                reward_amount,
            )?;
        }

        events::emit_claimed(
            &e,
            events::ClaimedEvent {
                participant,
                reward_amount,
            },
        );
        Ok(reward_amount)
    }

    /// Send the raised buy tokens to the owner once the sale is over.
    ///
    /// After a successful sale with a liquidity split configured, the split
    /// share is offered to the router first; the owner then receives whatever
    /// buy tokens remain. After a failed sale only the surplus above the
    /// refundable stakes leaves the pool.
    pub fn withdraw(e: Env, caller: Address) -> Result<i128, IdoError> {
        let owner = require_owner(&e, &caller)?;

        let token_info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        let total_raised = read_total_raised(&e);
        let phase = current_phase(&e, &token_info, total_raised);
        if !phase.has_ended() {
            return Err(IdoError::NotEnded);
        }
        if read_withdrawn(&e) {
            return Err(IdoError::AlreadyWithdrawn);
        }

        e.storage().instance().set(&DataKey::Withdrawn, &true);
        extend_instance(&e);

        let pool = e.current_contract_address();
        let buy = token::TokenClient::new(&e, &token_info.buy_token);

        let split: Option<LiquiditySplit> = e.storage().instance().get(&DataKey::LiquiditySplit);
        if let Some(split) = split.filter(|_| phase.is_successful()) {
            let buy_amount = bps_share(buy.balance(&pool), split.buy_token_bps)?;
            let reward_amount = split
                .reward_token_amount
                .min(reward_surplus(&e, &token_info, phase, total_raised)?);
            let liquidity_info: LiquidityInfo = read_instance(&e, &DataKey::LiquidityInfo);
            liquidity::seed(
                &e,
                &token_info,
                &liquidity_info,
                &owner,
                buy_amount,
                reward_amount,
            );
        }

        // Stakes of a failed sale stay refundable
        let escrowed = if phase == Phase::Failed { total_raised } else { 0 };
        let paid = (buy.balance(&pool) - escrowed).max(0);
        if paid > 0 {
            transfer(&e, &token_info.buy_token, &pool, &owner, paid)?;
        }

        events::emit_withdrawn(&e, events::WithdrawnEvent { owner, amount: paid });
        Ok(paid)
    }

    /// Send the owner the reward tokens no participant can claim: everything
    /// after a failed sale, otherwise the excess over outstanding claims.
    pub fn sweep_reward(e: Env, caller: Address) -> Result<i128, IdoError> {
        let owner = require_owner(&e, &caller)?;

        let token_info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        let total_raised = read_total_raised(&e);
        let phase = current_phase(&e, &token_info, total_raised);
        if !phase.has_ended() {
            return Err(IdoError::NotEnded);
        }

        let amount = reward_surplus(&e, &token_info, phase, total_raised)?;
        e.storage().instance().set(&DataKey::RewardSwept, &true);
        extend_instance(&e);

        if amount > 0 {
            transfer(
                &e,
                &token_info.reward_token,
                &e.current_contract_address(),
                &owner,
                amount,
            )?;
        }

        events::emit_reward_swept(&e, events::RewardSweptEvent { owner, amount });
        Ok(amount)
    }

    /// Move the success threshold. Later calls derive the outcome from the new
    /// value; nothing about the old outcome is kept.
    pub fn set_soft_cap(e: Env, caller: Address, new_soft_cap: i128) -> Result<(), IdoError> {
        require_owner(&e, &caller)?;

        let mut token_info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        validate_caps(new_soft_cap, token_info.hard_cap)?;

        let total_raised = read_total_raised(&e);
        if current_phase(&e, &token_info, total_raised) == Phase::Claimable {
            return Err(IdoError::ClaimsOpen);
        }
        // Funds already settled against the current outcome
        if read_withdrawn(&e) || e.storage().instance().has(&DataKey::RewardSwept) {
            return Err(IdoError::OutcomeLocked);
        }

        let old_soft_cap = token_info.soft_cap;
        token_info.soft_cap = new_soft_cap;
        e.storage().instance().set(&DataKey::TokenInfo, &token_info);
        extend_instance(&e);

        events::emit_soft_cap_updated(
            &e,
            events::SoftCapUpdatedEvent {
                old_soft_cap,
                new_soft_cap,
            },
        );
        Ok(())
    }

    /// Configure the share of the settlement offered to the liquidity router.
    pub fn set_liquidity_split(
        e: Env,
        caller: Address,
        split: LiquiditySplit,
    ) -> Result<(), IdoError> {
        require_owner(&e, &caller)?;

        if read_withdrawn(&e) {
            return Err(IdoError::AlreadyWithdrawn);
        }
        if split.buy_token_bps > BASIS_POINTS || split.reward_token_amount < 0 {
            return Err(IdoError::InvalidSplit);
        }

        e.storage().instance().set(&DataKey::LiquiditySplit, &split);
        extend_instance(&e);
        Ok(())
    }

    /// View functions
    pub fn phase(e: Env) -> Phase {
        let token_info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        current_phase(&e, &token_info, read_total_raised(&e))
    }

    pub fn user_info(e: Env, participant: Address) -> UserInfo {
        read_user(&e, &participant)
    }

    pub fn token_info(e: Env) -> TokenInfoView {
        let info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        TokenInfoView {
            reward_token: info.reward_token,
            reward_token_price: info.reward_token_price,
            buy_token: info.buy_token,
            soft_cap: info.soft_cap,
            hard_cap: info.hard_cap,
            total_raised: read_total_raised(&e),
        }
    }

    pub fn schedule(e: Env) -> Schedule {
        read_instance(&e, &DataKey::Schedule)
    }

    pub fn liquidity_info(e: Env) -> LiquidityInfo {
        read_instance(&e, &DataKey::LiquidityInfo)
    }

    pub fn liquidity_split(e: Env) -> Option<LiquiditySplit> {
        e.storage().instance().get(&DataKey::LiquiditySplit)
    }

    pub fn owner(e: Env) -> Address {
        read_instance(&e, &DataKey::Owner)
    }

    pub fn total_raised(e: Env) -> i128 {
        read_total_raised(&e)
    }

    pub fn is_withdrawn(e: Env) -> bool {
        read_withdrawn(&e)
    }

    /// Reward `participant` would receive from `claim`, ignoring the clock.
    pub fn pending_reward(e: Env, participant: Address) -> Result<i128, IdoError> {
        let user = read_user(&e, &participant);
        if user.has_claimed {
            return Ok(0);
        }
        let info: TokenInfo = read_instance(&e, &DataKey::TokenInfo);
        reward_for(&e, user.staked_amount, info.reward_token_price)
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn read_instance<V>(e: &Env, key: &DataKey) -> V
where
    V: TryFromVal<Env, Val>,
{
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, IdoError::NotInitialized))
}

fn read_total_raised(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalRaised).unwrap_or(0)
}

fn write_total_raised(e: &Env, total_raised: i128) {
    e.storage().instance().set(&DataKey::TotalRaised, &total_raised);
    extend_instance(e);
}

fn read_claimed_stake(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::ClaimedStake).unwrap_or(0)
}

fn read_withdrawn(e: &Env) -> bool {
    read_instance(e, &DataKey::Withdrawn)
}

/// Reward tokens held beyond what unclaimed stakes can still redeem. Flooring
/// the pooled stake bounds the sum of the per-participant floors from above.
fn reward_surplus(
    e: &Env,
    token_info: &TokenInfo,
    phase: Phase,
    total_raised: i128,
) -> Result<i128, IdoError> {
    let balance = token::TokenClient::new(e, &token_info.reward_token)
        .balance(&e.current_contract_address());
    let owed = if phase.is_successful() {
        let unclaimed = total_raised - read_claimed_stake(e);
        reward_for(e, unclaimed, token_info.reward_token_price)?
    } else {
        0
    };
    Ok((balance - owed).max(0))
}

fn read_user(e: &Env, participant: &Address) -> UserInfo {
    e.storage()
        .persistent()
        .get(&PersistentKey::UserInfo(participant.clone()))
        .unwrap_or_default()
}

fn write_user(e: &Env, participant: &Address, user: &UserInfo) {
    let key = PersistentKey::UserInfo(participant.clone());
    e.storage().persistent().set(&key, user);
    extend_persistent(e, &key);
}

/// Phase at the ledger timestamp of the current invocation.
fn current_phase(e: &Env, token_info: &TokenInfo, total_raised: i128) -> Phase {
    let schedule: Schedule = read_instance(e, &DataKey::Schedule);
    Phase::derive(
        e.ledger().timestamp(),
        total_raised,
        token_info.soft_cap,
        &schedule,
    )
}

fn require_owner(e: &Env, caller: &Address) -> Result<Address, IdoError> {
    caller.require_auth();
    let owner: Address = read_instance(e, &DataKey::Owner);
    if *caller != owner {
        return Err(IdoError::NotOwner);
    }
    Ok(owner)
}

fn transfer(
    e: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), IdoError> {
    let client = token::TokenClient::new(e, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(IdoError::TransferFailed),
    }
}
