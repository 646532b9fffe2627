#![no_std]
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

mod events;
mod storage_types;


pub use storage_types::{AllowanceValue, TokenError};
use storage_types::{AllowanceKey, DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

#[contract]
pub struct FeeToken;

#[contractimpl]
impl FeeToken {
    /// Set the token metadata and mint the whole supply to `owner`.
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        supply: i128,
    ) {
        if supply < 0 {
            panic_with_error!(&env, TokenError::NegativeAmount);
        }

        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::Decimals, &decimals);
        env.storage().instance().set(&DataKey::TotalSupply, &supply);
        extend_instance(&env);

        if supply > 0 {
            write_balance(&env, &owner, supply);
            events::emit_mint(&env, &owner, supply);
        }
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative(amount)?;

        move_balance(&env, &from, &to, amount)?;
        events::emit_transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_nonnegative(amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        move_balance(&env, &from, &to, amount)?;
        events::emit_transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative(amount)?;

        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(TokenError::InvalidExpiration);
        }

        write_allowance(
            &env,
            &from,
            &spender,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );

        events::emit_approve(
            &env,
            &from,
            events::ApprovalEvent {
                spender,
                amount,
                expiration_ledger,
            },
        );
        Ok(())
    }

    /// View functions
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::Decimals).unwrap_or(0)
    }

    pub fn name(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    pub fn symbol(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Symbol)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn check_nonnegative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = PersistentKey::Balance(id.clone());
    match env.storage().persistent().get::<PersistentKey, i128>(&key) {
        Some(balance) => {
            extend_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = PersistentKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, from, from_balance - amount);

    let to_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    write_balance(env, to, to_balance);
    Ok(())
}

fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = PersistentKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env
        .storage()
        .persistent()
        .get::<PersistentKey, AllowanceValue>(&key)
    {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

fn write_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = PersistentKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().persistent().set(&key, allowance);

    if allowance.amount > 0 {
        let live_for = allowance
            .expiration_ledger
            .saturating_sub(env.ledger().sequence())
            .min(env.storage().max_ttl());
        if live_for > 0 {
            env.storage().persistent().extend_ttl(&key, live_for, live_for);
        }
    }
}

fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            &AllowanceValue {
                amount: allowance.amount - amount,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }
    Ok(())
}
