use crate::events;
use crate::ownable::require_owner;
use crate::pipeline::PurchaseContext;
use crate::storage::{is_whitelisted, set_whitelisted};
use crate::types::Error;
use soroban_sdk::{Address, Env, Vec};

pub fn add(env: &Env, caller: &Address, who: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    allow(env, who);
    Ok(())
}

pub fn add_many(env: &Env, caller: &Address, who: &Vec<Address>) -> Result<(), Error> {
    require_owner(env, caller)?;
    for addr in who.iter() {
        allow(env, &addr);
    }
    Ok(())
}

pub fn remove(env: &Env, caller: &Address, who: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    if is_whitelisted(env, who) {
        set_whitelisted(env, who, false);
        events::whitelist_removed(env, who);
    }
    Ok(())
}

// Re-adding is a no-op and stays silent.
fn allow(env: &Env, who: &Address) {
    if !is_whitelisted(env, who) {
        set_whitelisted(env, who, true);
        events::whitelist_added(env, who);
    }
}

pub fn validate_beneficiary(env: &Env, ctx: &PurchaseContext) -> Result<(), Error> {
    if !is_whitelisted(env, &ctx.beneficiary) {
        return Err(Error::NotWhitelisted);
    }
    Ok(())
}
