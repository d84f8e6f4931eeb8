use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_oracle(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(Error::NotInitialized)
}

pub fn set_oracle(env: &Env, oracle: &Address) {
    env.storage().instance().set(&DataKey::Oracle, oracle);
}

pub fn get_tiers(env: &Env) -> Vec<PricingTier> {
    env.storage()
        .instance()
        .get(&DataKey::Tiers)
        .unwrap_or(Vec::new(env))
}

pub fn set_tiers(env: &Env, tiers: &Vec<PricingTier>) {
    env.storage().instance().set(&DataKey::Tiers, tiers);
}

pub fn get_total_raised(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}

pub fn is_closed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Closed)
        .unwrap_or(false)
}

pub fn set_closed(env: &Env, closed: bool) {
    env.storage().instance().set(&DataKey::Closed, &closed);
}

pub fn is_whitelisted(env: &Env, who: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(who.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, who: &Address, allowed: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Whitelisted(who.clone()), &allowed);
}

// The host already rejects re-entry into a contract on the call stack; the
// lock states the same invariant in contract storage.
pub fn enter_purchase(env: &Env) -> Result<(), Error> {
    let locked: bool = env
        .storage()
        .temporary()
        .get(&DataKey::PurchaseLock)
        .unwrap_or(false);
    if locked {
        return Err(Error::ReentrantCall);
    }
    env.storage().temporary().set(&DataKey::PurchaseLock, &true);
    Ok(())
}

pub fn exit_purchase(env: &Env) {
    env.storage().temporary().remove(&DataKey::PurchaseLock);
}
