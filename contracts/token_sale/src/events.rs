use crate::types::SaleConfig;
use soroban_sdk::{symbol_short, Address, Env};

pub fn sale_initialized(env: &Env, owner: &Address, config: &SaleConfig) {
    env.events().publish(
        (symbol_short!("init"),),
        (owner.clone(), config.token.clone(), config.rate, config.cap),
    );
}

pub fn purchase(env: &Env, purchaser: &Address, beneficiary: &Address, amount: u128, tokens: u128) {
    env.events().publish(
        (symbol_short!("purchase"), beneficiary.clone()),
        (purchaser.clone(), beneficiary.clone(), amount, tokens),
    );
}

pub fn bounty_minted(env: &Env, minter: &Address, beneficiary: &Address, amount: u128) {
    env.events().publish(
        (symbol_short!("bounty"), beneficiary.clone()),
        (minter.clone(), beneficiary.clone(), amount),
    );
}

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"),),
        (previous.clone(), new_owner.clone()),
    );
}

pub fn sale_closed(env: &Env, total_raised: u128) {
    env.events()
        .publish((symbol_short!("closed"),), (total_raised,));
}

pub fn whitelist_added(env: &Env, who: &Address) {
    env.events().publish((symbol_short!("wl_add"),), (who.clone(),));
}

pub fn whitelist_removed(env: &Env, who: &Address) {
    env.events().publish((symbol_short!("wl_rm"),), (who.clone(),));
}

pub fn oracle_updated(env: &Env, oracle: &Address) {
    env.events()
        .publish((symbol_short!("oracle"),), (oracle.clone(),));
}
