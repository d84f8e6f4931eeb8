#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address,
    Env, String,
};

contractmeta!(
    key = "Description",
    val = "Mintable sale token whose supply is controlled by a single owner"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Overflow = 3,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Metadata,
    Owner,
    TotalSupply,
    Balance(Address),
}

fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

fn get_metadata(env: &Env) -> Result<TokenMetadata, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(Error::NotInitialized)
}

fn read_balance(env: &Env, who: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(who.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, who: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(who.clone()), &amount);
}

fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    pub fn initialize(
        env: Env,
        owner: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        let metadata = TokenMetadata {
            decimal,
            name,
            symbol,
        };
        env.storage().instance().set(&DataKey::Metadata, &metadata);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        Ok(())
    }

    /// Issue new units to `to`. Only the current owner can mint; a
    /// non-positive amount is refused with `false`.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<bool, Error> {
        let owner = get_owner(&env)?;
        owner.require_auth();

        if amount <= 0 {
            return Ok(false);
        }

        let balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        write_balance(&env, &to, balance);
        env.storage().instance().set(&DataKey::TotalSupply, &supply);

        env.events()
            .publish((symbol_short!("mint"), to), (owner, amount));
        Ok(true)
    }

    /// Move units between holders. Returns `false` when `from` cannot cover
    /// the amount.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<bool, Error> {
        from.require_auth();

        let from_balance = read_balance(&env, &from);
        if amount <= 0 || from_balance < amount {
            return Ok(false);
        }
        if from == to {
            return Ok(true);
        }
        let to_balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        write_balance(&env, &from, from_balance - amount);
        write_balance(&env, &to, to_balance);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(true)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), Error> {
        let owner = get_owner(&env)?;
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &new_owner);
        env.events()
            .publish((symbol_short!("own_xfer"),), (owner, new_owner));
        Ok(())
    }

    // View functions

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(get_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.symbol)
    }
}
