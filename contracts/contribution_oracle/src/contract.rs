use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env};

use crate::storage::{get_config, has_config, require_owner, set_config};
use crate::types::{Error, OracleConfig};

#[contract]
pub struct ContributionOracleContract;

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Owner-maintained ceiling for a single sale contribution"
);

#[contractimpl]
impl ContributionOracleContract {
    pub fn initialize(env: Env, owner: Address, max_contribution: u128) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        let cfg = OracleConfig {
            owner,
            max_contribution,
            updated_at: env.ledger().timestamp(),
        };
        set_config(&env, &cfg);
        Ok(())
    }

    // Admin
    pub fn set_max(env: Env, caller: Address, max_contribution: u128) -> Result<(), Error> {
        let mut cfg = require_owner(&env, &caller)?;
        cfg.max_contribution = max_contribution;
        cfg.updated_at = env.ledger().timestamp();
        set_config(&env, &cfg);
        env.events()
            .publish((symbol_short!("max_set"),), (max_contribution, cfg.updated_at));
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let mut cfg = require_owner(&env, &caller)?;
        cfg.owner = new_owner;
        set_config(&env, &cfg);
        Ok(())
    }

    // Read by the sale on every purchase
    pub fn current_max(env: Env) -> Result<u128, Error> {
        Ok(get_config(&env)?.max_contribution)
    }

    // Views
    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.owner)
    }

    pub fn get_config_view(env: Env) -> Result<OracleConfig, Error> {
        get_config(&env)
    }
}
