use crate::events;
use crate::storage::{get_owner, set_owner};
use crate::types::{is_null_identity, Error};
use soroban_sdk::{Address, Env};

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = get_owner(env)?;
    if *caller != owner {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    if is_null_identity(env, new_owner) {
        return Err(Error::InvalidAddress);
    }

    set_owner(env, new_owner);
    events::ownership_transferred(env, caller, new_owner);
    Ok(())
}
