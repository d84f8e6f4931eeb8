use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OracleConfig {
    pub owner: Address,
    pub max_contribution: u128, // Per-purchase ceiling in payment units
    pub updated_at: u64,
}

#[contracttype]
pub enum DataKey {
    Config,
}
