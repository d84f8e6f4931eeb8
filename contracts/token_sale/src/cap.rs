use crate::pipeline::PurchaseContext;
use crate::storage::{get_config, get_total_raised, set_total_raised};
use crate::types::Error;
use soroban_sdk::Env;

pub fn check_cap(env: &Env, amount: u128) -> Result<(), Error> {
    let config = get_config(env)?;
    let after = fp_math::add(get_total_raised(env), amount)?;
    if after > config.cap {
        return Err(Error::CapExceeded);
    }
    Ok(())
}

/// Must run after validation and before any external call.
pub fn record_contribution(env: &Env, amount: u128) -> Result<u128, Error> {
    let total = fp_math::add(get_total_raised(env), amount)?;
    set_total_raised(env, total);
    Ok(total)
}

pub fn remaining(env: &Env) -> Result<u128, Error> {
    let config = get_config(env)?;
    Ok(fp_math::sub(config.cap, get_total_raised(env))?)
}

pub fn validate_cap(env: &Env, ctx: &PurchaseContext) -> Result<(), Error> {
    check_cap(env, ctx.amount)
}

pub fn validate_within_cap(env: &Env, _ctx: &PurchaseContext) -> Result<(), Error> {
    let config = get_config(env)?;
    if get_total_raised(env) > config.cap {
        return Err(Error::CapExceeded);
    }
    Ok(())
}
