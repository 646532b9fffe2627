use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub participant: Address,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedEvent {
    pub participant: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub participant: Address,
    pub reward_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSweptEvent {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoftCapUpdatedEvent {
    pub old_soft_cap: i128,
    pub new_soft_cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquiditySeededEvent {
    pub pair: Address,
    pub buy_amount: i128,
    pub reward_amount: i128,
}

pub fn emit_staked(env: &Env, event: StakedEvent) {
    env.events().publish((Symbol::new(env, "staked"),), event);
}

pub fn emit_refunded(env: &Env, event: RefundedEvent) {
    env.events().publish((Symbol::new(env, "refunded"),), event);
}

pub fn emit_claimed(env: &Env, event: ClaimedEvent) {
    env.events().publish((Symbol::new(env, "claimed"),), event);
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish((Symbol::new(env, "withdrawn"),), event);
}

pub fn emit_reward_swept(env: &Env, event: RewardSweptEvent) {
    env.events()
        .publish((Symbol::new(env, "reward_swept"),), event);
}

pub fn emit_soft_cap_updated(env: &Env, event: SoftCapUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "soft_cap_updated"),), event);
}

pub fn emit_liquidity_seeded(env: &Env, event: LiquiditySeededEvent) {
    env.events()
        .publish((Symbol::new(env, "liquidity_seeded"),), event);
}
