#![no_std]

//! Value types shared by the campaign factory and the per-campaign pool.
//!
//! Everything in here is pure: configuration structs, validation, the derived
//! campaign phase and the fixed-point reward conversion. Storage and token
//! movement live in the contracts themselves.

mod error;
mod math;
mod phase;
mod types;


pub use error::IdoError;
pub use math::{bps_share, reward_for, BASIS_POINTS, PRICE_SCALE};
pub use phase::Phase;
pub use types::{
    validate_caps, validate_schedule, validate_token_info, FeeTokenParams, LiquidityInfo,
    Schedule, TokenInfo,
};
