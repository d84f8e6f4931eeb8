/// Testing utilities for the sale workspace
pub mod fixtures;

pub use fixtures::*;

/// Common test constants
pub mod constants {
    pub const BASE_RATE: u128 = 253;
    pub const CAP: u128 = 100;
    pub const FIRST_TIER_THRESHOLD: u128 = 50;
    pub const FIRST_TIER_RATE: u128 = 300;
    pub const MAX_CONTRIBUTION: u128 = 60;
    pub const BUYER_FUNDS: i128 = 1_000;
}
