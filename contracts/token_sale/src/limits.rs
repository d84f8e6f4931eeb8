use crate::events;
use crate::ledger;
use crate::ownable::require_owner;
use crate::pipeline::PurchaseContext;
use crate::storage::{get_config, get_oracle, set_oracle};
use crate::types::{is_null_identity, Error};
use soroban_sdk::{Address, Env};

pub fn check_bounds(env: &Env, amount: u128) -> Result<(), Error> {
    let config = get_config(env)?;
    if amount < config.min_contribution {
        return Err(Error::BelowMinimumContribution);
    }
    let max = ledger::max_contribution(env, &get_oracle(env)?)?;
    if amount > max {
        return Err(Error::AboveMaximumContribution);
    }
    Ok(())
}

pub fn validate_bounds(env: &Env, ctx: &PurchaseContext) -> Result<(), Error> {
    check_bounds(env, ctx.amount)
}

pub fn set_max_contribution_oracle(env: &Env, caller: &Address, oracle: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    if is_null_identity(env, oracle) {
        return Err(Error::InvalidAddress);
    }

    set_oracle(env, oracle);
    events::oracle_updated(env, oracle);
    Ok(())
}
