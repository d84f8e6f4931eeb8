use crate::events;
use crate::pipeline::{self, PurchaseContext};
use crate::storage::*;
use crate::types::*;
use crate::{cap, lifecycle, limits, ownable, pricing, whitelist};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped, whitelisted token sale with tiered bonus pricing"
);

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the token sale contract
    pub fn initialize(
        env: Env,
        owner: Address,
        params: SaleParams,
        tiers: Vec<PricingTier>,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        if params.rate == 0 || params.cap == 0 {
            return Err(Error::InvalidConfig);
        }
        pricing::validate_tiers(&tiers)?;

        for addr in [
            &owner,
            &params.token,
            &params.payment_token,
            &params.funds_recipient,
            &params.oracle,
        ] {
            if is_null_identity(&env, addr) {
                return Err(Error::InvalidAddress);
            }
        }

        let config = SaleConfig {
            token: params.token,
            payment_token: params.payment_token,
            funds_recipient: params.funds_recipient,
            rate: params.rate,
            cap: params.cap,
            start_time: params.start_time,
            min_contribution: params.min_contribution,
        };

        set_config(&env, &config);
        set_owner(&env, &owner);
        set_oracle(&env, &params.oracle);
        set_tiers(&env, &tiers);
        set_total_raised(&env, 0);
        set_closed(&env, false);

        events::sale_initialized(&env, &owner, &config);
        Ok(())
    }

    /// Contribute `amount` of the payment asset and issue tokens to `beneficiary`
    pub fn buy_tokens(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        amount: u128,
    ) -> Result<u128, Error> {
        purchaser.require_auth();
        get_config(&env)?;

        enter_purchase(&env)?;
        let tokens = pipeline::buy_tokens(
            &env,
            PurchaseContext {
                purchaser,
                beneficiary,
                amount,
            },
        )?;
        exit_purchase(&env);

        Ok(tokens)
    }

    pub fn create_bounty_token(
        env: Env,
        caller: Address,
        beneficiary: Address,
        amount: u128,
    ) -> Result<(), Error> {
        pipeline::create_bounty_token(&env, &caller, &beneficiary, amount)
    }

    /// Close the sale for good and hand token minting back to the owner
    pub fn close_sale(env: Env, caller: Address) -> Result<(), Error> {
        lifecycle::close_sale(&env, &caller)
    }

    // Whitelist management

    pub fn add_to_whitelist(env: Env, caller: Address, who: Address) -> Result<(), Error> {
        whitelist::add(&env, &caller, &who)
    }

    pub fn add_many_to_whitelist(
        env: Env,
        caller: Address,
        who: Vec<Address>,
    ) -> Result<(), Error> {
        whitelist::add_many(&env, &caller, &who)
    }

    pub fn remove_from_whitelist(env: Env, caller: Address, who: Address) -> Result<(), Error> {
        whitelist::remove(&env, &caller, &who)
    }

    // Administration

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        ownable::transfer_ownership(&env, &caller, &new_owner)
    }

    pub fn set_max_contribution_oracle(
        env: Env,
        caller: Address,
        oracle: Address,
    ) -> Result<(), Error> {
        limits::set_max_contribution_oracle(&env, &caller, &oracle)
    }

    // View functions

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn is_whitelisted(env: Env, who: Address) -> bool {
        is_whitelisted(&env, &who)
    }

    pub fn is_closed(env: Env) -> bool {
        is_closed(&env)
    }

    pub fn has_started(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(get_ledger_timestamp(&env) >= config.start_time)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_tiers(env: Env) -> Vec<PricingTier> {
        get_tiers(&env)
    }

    pub fn get_max_contribution_oracle(env: Env) -> Result<Address, Error> {
        get_oracle(&env)
    }

    pub fn get_total_raised(env: Env) -> u128 {
        get_total_raised(&env)
    }

    pub fn get_remaining_cap(env: Env) -> Result<u128, Error> {
        cap::remaining(&env)
    }

    pub fn get_current_rate(env: Env) -> Result<u128, Error> {
        let config = get_config(&env)?;
        pricing::rate_now(&env, &config)
    }

    /// Tokens `amount` would buy right now, without buying them
    pub fn preview_tokens(env: Env, amount: u128) -> Result<u128, Error> {
        let config = get_config(&env)?;
        pricing::token_amount(&env, &config, amount)
    }
}
