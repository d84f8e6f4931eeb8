//! Calls out to the collaborating contracts: the token ledger, the
//! max-contribution oracle and the payment asset.

use crate::types::Error;
use soroban_sdk::{contractclient, token, Address, Env};

// Minimal interface for the token ledger the sale mints from
#[contractclient(name = "TokenLedgerClient")]
pub trait TokenLedger {
    fn mint(env: Env, to: Address, amount: i128) -> bool;
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> bool;
    fn transfer_ownership(env: Env, new_owner: Address);
}

#[contractclient(name = "MaxContributionOracleClient")]
pub trait MaxContributionOracle {
    fn current_max(env: Env) -> u128;
}

pub fn mint(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), Error> {
    let amount = fp_math::to_i128(amount)?;
    let client = TokenLedgerClient::new(env, token);
    match client.try_mint(to, &amount) {
        Ok(Ok(true)) => Ok(()),
        _ => Err(Error::IssuanceFailed),
    }
}

pub fn release_ownership(env: &Env, token: &Address, new_owner: &Address) -> Result<(), Error> {
    let client = TokenLedgerClient::new(env, token);
    match client.try_transfer_ownership(new_owner) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::OwnershipReleaseFailed),
    }
}

/// Read fresh on every call; the oracle can be swapped mid-sale.
pub fn max_contribution(env: &Env, oracle: &Address) -> Result<u128, Error> {
    let client = MaxContributionOracleClient::new(env, oracle);
    match client.try_current_max() {
        Ok(Ok(max)) => Ok(max),
        _ => Err(Error::OracleUnavailable),
    }
}

pub fn forward_funds(
    env: &Env,
    payment_token: &Address,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), Error> {
    let amount = fp_math::to_i128(amount)?;
    let client = token::Client::new(env, payment_token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::FundsForwardingFailed),
    }
}
