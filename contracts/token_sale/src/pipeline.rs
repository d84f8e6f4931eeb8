//! The purchase transaction.
//!
//! Pre-validators run in a fixed order and the first failure aborts the whole
//! invocation. Later validators rely on earlier ones having passed (the cap
//! check assumes a non-zero amount, for instance), so the order of
//! [`PRE_VALIDATORS`] is part of the contract's behaviour.
//!
//! After validation the state is updated before any external call is made:
//! the running total is recorded, then tokens are minted, then the payment is
//! forwarded. A failure at any step rolls the invocation back in full.

use crate::cap;
use crate::events;
use crate::ledger;
use crate::lifecycle::{self, require_open};
use crate::limits;
use crate::ownable::require_owner;
use crate::pricing;
use crate::storage::get_config;
use crate::types::{is_null_identity, Error};
use crate::whitelist;
use soroban_sdk::{log, Address, Env};

pub struct PurchaseContext {
    pub purchaser: Address,
    pub beneficiary: Address,
    pub amount: u128,
}

pub type Validator = fn(&Env, &PurchaseContext) -> Result<(), Error>;

pub const PRE_VALIDATORS: &[Validator] = &[
    lifecycle::validate_open,
    validate_contribution,
    limits::validate_bounds,
    whitelist::validate_beneficiary,
    cap::validate_cap,
];

pub const POST_VALIDATORS: &[Validator] = &[cap::validate_within_cap];

fn run(env: &Env, validators: &[Validator], ctx: &PurchaseContext) -> Result<(), Error> {
    for validate in validators.iter() {
        validate(env, ctx)?;
    }
    Ok(())
}

fn validate_contribution(env: &Env, ctx: &PurchaseContext) -> Result<(), Error> {
    if ctx.amount == 0 || is_null_identity(env, &ctx.beneficiary) {
        return Err(Error::InvalidContribution);
    }
    Ok(())
}

/// Returns the number of tokens issued to the beneficiary.
pub fn buy_tokens(env: &Env, ctx: PurchaseContext) -> Result<u128, Error> {
    run(env, PRE_VALIDATORS, &ctx)?;

    let config = get_config(env)?;
    let tokens = pricing::token_amount(env, &config, ctx.amount)?;

    let total = cap::record_contribution(env, ctx.amount)?;

    ledger::mint(env, &config.token, &ctx.beneficiary, tokens)?;
    events::purchase(env, &ctx.purchaser, &ctx.beneficiary, ctx.amount, tokens);

    ledger::forward_funds(
        env,
        &config.payment_token,
        &ctx.purchaser,
        &config.funds_recipient,
        ctx.amount,
    )?;

    run(env, POST_VALIDATORS, &ctx)?;

    log!(env, "purchase recorded", ctx.amount, tokens, total);
    Ok(tokens)
}

/// Out-of-band issuance by the owner. Skips pricing, cap and whitelist.
pub fn create_bounty_token(
    env: &Env,
    caller: &Address,
    beneficiary: &Address,
    amount: u128,
) -> Result<(), Error> {
    require_owner(env, caller)?;
    require_open(env)?;
    if amount == 0 || is_null_identity(env, beneficiary) {
        return Err(Error::InvalidContribution);
    }

    let config = get_config(env)?;
    ledger::mint(env, &config.token, beneficiary, amount)?;
    events::bounty_minted(env, caller, beneficiary, amount);
    Ok(())
}
