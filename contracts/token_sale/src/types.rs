use fp_math::MathError;
use soroban_sdk::{contracterror, contracttype, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    Unauthorized = 4,
    InvalidAddress = 5,
    InvalidContribution = 6,
    SaleClosed = 7,
    SaleNotStarted = 8,
    NotWhitelisted = 9,
    BelowMinimumContribution = 10,
    AboveMaximumContribution = 11,
    CapExceeded = 12,
    ArithmeticOverflow = 13,
    ArithmeticUnderflow = 14,
    DivisionByZero = 15,
    IssuanceFailed = 16,
    FundsForwardingFailed = 17,
    ReentrantCall = 18,
    OracleUnavailable = 19,
    OwnershipReleaseFailed = 20,
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow => Error::ArithmeticOverflow,
            MathError::Underflow => Error::ArithmeticUnderflow,
            MathError::DivisionByZero => Error::DivisionByZero,
        }
    }
}

/// Construction parameters for a sale.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub token: Address,           // Token ledger the sale mints from
    pub payment_token: Address,   // Asset contributions are paid in
    pub funds_recipient: Address, // Receives every contribution in full
    pub oracle: Address,          // Max-contribution oracle
    pub rate: u128,               // Base rate, tokens per payment unit
    pub cap: u128,
    pub start_time: u64,
    pub min_contribution: u128,
}

/// Immutable part of the sale, fixed at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,
    pub payment_token: Address,
    pub funds_recipient: Address,
    pub rate: u128,
    pub cap: u128,
    pub start_time: u64,
    pub min_contribution: u128,
}

/// Bonus bracket: applies while total raised is strictly below `threshold`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PricingTier {
    pub threshold: u128,
    pub rate: u128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Oracle,
    Tiers,
    TotalRaised,
    Closed,
    Whitelisted(Address),
    PurchaseLock,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// The sale's own address stands in for the null identity: it can never
/// authorize an owner call or meaningfully receive tokens or proceeds.
pub fn is_null_identity(env: &Env, who: &Address) -> bool {
    *who == env.current_contract_address()
}
