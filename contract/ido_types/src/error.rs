use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum IdoError {
    // Sale window
    NotStarted = 1,
    NotActive = 2,
    CapExceeded = 3,
    NotEnded = 4,
    SaleSucceeded = 5,
    SaleFailed = 6,
    NotClaimable = 7,

    // Participant bookkeeping
    NoStake = 8,
    AlreadyClaimed = 9,

    // Owner operations
    NotOwner = 10,
    InvalidCap = 11,
    AlreadyWithdrawn = 12,
    ClaimsOpen = 13,
    InvalidSplit = 14,
    OutcomeLocked = 23,

    // Configuration
    InvalidSchedule = 15,
    InvalidAmount = 16,
    InvalidPrice = 17,

    // Token movement and arithmetic
    TransferFailed = 18,
    ArithmeticError = 19,

    // Factory
    AlreadyInitialized = 20,
    NotInitialized = 21,
    CampaignNotFound = 22,
}
