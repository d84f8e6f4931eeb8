use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Error, OracleConfig};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<OracleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, cfg: &OracleConfig) {
    env.storage().instance().set(&DataKey::Config, cfg);
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<OracleConfig, Error> {
    caller.require_auth();
    let cfg = get_config(env)?;
    if cfg.owner != *caller {
        return Err(Error::NotAuthorized);
    }
    Ok(cfg)
}
