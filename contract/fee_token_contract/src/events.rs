use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct ApprovalEvent {
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "mint"), to.clone()), amount);
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn emit_approve(env: &Env, from: &Address, event: ApprovalEvent) {
    env.events()
        .publish((Symbol::new(env, "approve"), from.clone()), event);
}
