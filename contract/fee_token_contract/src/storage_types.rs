use soroban_sdk::{contracterror, contracttype, Address};

// Instance storage: token metadata and supply
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Name,
    Symbol,
    Decimals,
    TotalSupply,
}

// Persistent storage: one entry per holder / approval
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Balance(Address),
    Allowance(AllowanceKey),
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NegativeAmount = 1,
    InsufficientBalance = 2,
    InsufficientAllowance = 3,
    InvalidExpiration = 4,
    Overflow = 5,
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
