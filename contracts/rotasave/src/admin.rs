use soroban_sdk::{log, Address, Env};

use crate::errors::ContractError;
use crate::events;
use crate::status::status_or_default;
use crate::storage;
use crate::types::{ContractConfig, GroupStatus};

pub fn update_config(env: &Env, config: ContractConfig) -> Result<(), ContractError> {
    let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
    admin.require_auth();

    if !config.validate() {
        return Err(ContractError::InvalidConfig);
    }

    storage::set_config(env, &config);
    events::config_updated(env, admin);

    Ok(())
}

pub fn get_config(env: &Env) -> Result<ContractConfig, ContractError> {
    storage::get_config(env).ok_or(ContractError::NotInitialized)
}

/// Stops a group for good. Either the group admin or the protocol admin may do this
/// while the group is Forming or Active.
pub fn cancel_group(env: &Env, caller: Address, group_id: u64) -> Result<(), ContractError> {
    caller.require_auth();

    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if caller != group.admin && Some(&caller) != storage::get_admin(env).as_ref() {
        return Err(ContractError::Unauthorized);
    }

    let status = status_or_default(storage::get_status(env, group_id));
    if !status.can_transition_to(GroupStatus::Cancelled) {
        return Err(ContractError::InvalidState);
    }

    storage::set_status(env, group_id, GroupStatus::Cancelled);

    log!(env, "group cancelled", group_id, group.current_cycle);
    events::group_cancelled(env, group_id, env.ledger().timestamp());

    Ok(())
}

pub fn set_group_admin(
    env: &Env,
    current_admin: Address,
    group_id: u64,
    new_admin: Address,
) -> Result<(), ContractError> {
    current_admin.require_auth();

    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if current_admin != group.admin {
        return Err(ContractError::Unauthorized);
    }

    if status_or_default(storage::get_status(env, group_id)).is_terminal() {
        return Err(ContractError::InvalidState);
    }

    group.admin = new_admin.clone();
    storage::set_group(env, &group);

    events::admin_changed(env, group_id, new_admin);

    Ok(())
}
