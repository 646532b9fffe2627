use soroban_sdk::contracttype;

use crate::types::Schedule;

/// Campaign phase. Never stored; always derived from the clock and totals.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Phase {
    /// Before the start timestamp.
    Pending = 0,
    /// Accepting stakes.
    Active = 1,
    /// Ended below the soft cap; stakes are refundable.
    Failed = 2,
    /// Ended at or above the soft cap, claim window not yet open.
    Succeeded = 3,
    /// Succeeded and the claim timestamp has passed.
    Claimable = 4,
}

impl Phase {
    pub fn derive(now: u64, total_raised: i128, soft_cap: i128, schedule: &Schedule) -> Phase {
        if now < schedule.start_timestamp {
            Phase::Pending
        } else if now < schedule.end_timestamp {
            Phase::Active
        } else if total_raised < soft_cap {
            Phase::Failed
        } else if now < schedule.claim_timestamp {
            Phase::Succeeded
        } else {
            Phase::Claimable
        }
    }

    pub fn has_ended(self) -> bool {
        !matches!(self, Phase::Pending | Phase::Active)
    }

    pub fn is_successful(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Claimable)
    }
}
