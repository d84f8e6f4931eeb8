use crate::events;
use crate::ledger;
use crate::ownable::require_owner;
use crate::pipeline::PurchaseContext;
use crate::storage::{get_config, get_owner, get_total_raised, is_closed, set_closed};
use crate::types::Error;
use soroban_sdk::{log, Address, Env};

/// Runs once, in order, while the sale is being closed.
pub type CloseHook = fn(&Env) -> Result<(), Error>;

const CLOSE_HOOKS: &[CloseHook] = &[release_token_supply];

pub fn require_open(env: &Env) -> Result<(), Error> {
    if is_closed(env) {
        return Err(Error::SaleClosed);
    }
    Ok(())
}

pub fn validate_open(env: &Env, _ctx: &PurchaseContext) -> Result<(), Error> {
    require_open(env)
}

pub fn close_sale(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    require_open(env)?;

    for hook in CLOSE_HOOKS.iter() {
        hook(env)?;
    }

    set_closed(env, true);
    let total_raised = get_total_raised(env);
    log!(env, "sale closed", total_raised);
    events::sale_closed(env, total_raised);
    Ok(())
}

// Hands minting rights back to the owner so the sale can no longer issue.
fn release_token_supply(env: &Env) -> Result<(), Error> {
    let config = get_config(env)?;
    let owner = get_owner(env)?;
    ledger::release_ownership(env, &config.token, &owner)
}
