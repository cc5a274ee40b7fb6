use soroban_sdk::{log, Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::events;
use crate::status::status_or_default;
use crate::storage;
use crate::types::{ContractConfig, Group, GroupPage, GroupStatus, MemberProfile};

const LIST_PAGE_LIMIT: u32 = 50;
/// Ids read per listed slot, bounding storage reads when a filter rarely matches.
const LIST_SCAN_FACTOR: u64 = 4;

pub fn create_group(
    env: &Env,
    admin: Address,
    name: String,
    contribution_amount: i128,
    cycle_duration: u64,
    max_members: u32,
) -> Result<u64, ContractError> {
    admin.require_auth();

    let config = storage::get_config(env).unwrap_or_default();
    validate_params(&config, contribution_amount, cycle_duration, max_members)?;

    let group_id = storage::get_group_counter(env)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    let group = Group {
        id: group_id,
        admin: admin.clone(),
        name,
        contribution_amount,
        cycle_duration,
        max_members,
        member_count: 0,
        current_cycle: 0,
        created_at: env.ledger().timestamp(),
        started_at: 0,
    };

    storage::set_group_counter(env, group_id);
    storage::set_group(env, &group);
    storage::set_status(env, group_id, GroupStatus::Forming);

    log!(env, "group created", group_id);
    events::group_created(
        env,
        group_id,
        admin,
        contribution_amount,
        cycle_duration,
        max_members,
    );

    Ok(group_id)
}

/// Changes the economic parameters of a group that has not started yet.
pub fn update_group(
    env: &Env,
    group_id: u64,
    contribution_amount: i128,
    cycle_duration: u64,
    max_members: u32,
) -> Result<(), ContractError> {
    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    group.admin.require_auth();

    if status_or_default(storage::get_status(env, group_id)) != GroupStatus::Forming {
        return Err(ContractError::InvalidState);
    }

    let config = storage::get_config(env).unwrap_or_default();
    validate_params(&config, contribution_amount, cycle_duration, max_members)?;
    if max_members < group.member_count {
        return Err(ContractError::InvalidConfig);
    }

    group.contribution_amount = contribution_amount;
    group.cycle_duration = cycle_duration;
    group.max_members = max_members;
    storage::set_group(env, &group);

    events::group_updated(env, group_id, group.admin);

    Ok(())
}

pub fn join_group(env: &Env, member: Address, group_id: u64) -> Result<(), ContractError> {
    member.require_auth();

    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if !status_or_default(storage::get_status(env, group_id)).accepts_members() {
        return Err(ContractError::InvalidState);
    }

    if storage::has_member(env, group_id, &member) {
        return Err(ContractError::AlreadyMember);
    }

    if group.member_count >= group.max_members {
        return Err(ContractError::GroupFull);
    }

    let profile = MemberProfile {
        address: member.clone(),
        group_id,
        position: group.member_count,
        joined_at: env.ledger().timestamp(),
    };

    let mut members = storage::get_group_members(env, group_id);
    members.push_back(member.clone());
    group.member_count += 1;

    storage::set_member(env, &profile);
    storage::set_group_members(env, group_id, &members);
    storage::set_group(env, &group);
    storage::add_member_group(env, &member, group_id);

    events::member_joined(env, group_id, member, profile.position, group.member_count);

    Ok(())
}

/// Removes a group that nobody has joined yet. The id is not reused.
pub fn delete_group(env: &Env, group_id: u64) -> Result<(), ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    group.admin.require_auth();

    let status = status_or_default(storage::get_status(env, group_id));
    if status != GroupStatus::Forming || group.member_count > 0 {
        return Err(ContractError::InvalidState);
    }

    storage::remove_group(env, group_id);

    log!(env, "group deleted", group_id);
    events::group_deleted(env, group_id, group.admin);

    Ok(())
}

/// Starts the first cycle. The only place `started_at` is ever written.
pub fn activate_group(env: &Env, group_id: u64) -> Result<(), ContractError> {
    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    group.admin.require_auth();

    let status = status_or_default(storage::get_status(env, group_id));
    if !status.allows_activation() {
        return Err(ContractError::InvalidState);
    }

    group.started_at = env.ledger().timestamp();
    storage::set_group(env, &group);
    storage::set_status(env, group_id, GroupStatus::Active);

    log!(env, "group activated", group_id, group.member_count);
    events::group_activated(env, group_id, group.started_at, group.member_count);

    Ok(())
}

/// Moves a group past `expected_cycle`, completing it after the last rotation slot.
pub fn advance_cycle(env: &Env, group_id: u64, expected_cycle: u32) -> Result<(), ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    group.admin.require_auth();

    close_cycle(env, group, expected_cycle)
}

/// Shared by `advance_cycle` and payout confirmation; the caller has already
/// authenticated the group admin.
pub(crate) fn close_cycle(
    env: &Env,
    mut group: Group,
    expected_cycle: u32,
) -> Result<(), ContractError> {
    let status = status_or_default(storage::get_status(env, group.id));
    if status != GroupStatus::Active {
        return Err(ContractError::InvalidState);
    }

    // A replayed call for a cycle that already moved on is rejected here.
    if expected_cycle != group.current_cycle {
        return Err(ContractError::CycleMismatch);
    }

    let count = storage::get_cycle_count(env, group.id, group.current_cycle).unwrap_or(0);
    if count < group.member_count {
        return Err(ContractError::CycleNotComplete);
    }

    if group.current_cycle.saturating_add(1) >= group.total_cycles() {
        storage::set_status(env, group.id, GroupStatus::Completed);
        log!(env, "group completed", group.id, group.current_cycle);
        events::group_completed(env, group.id, group.current_cycle);
    } else {
        group.current_cycle += 1;
        storage::set_group(env, &group);
        log!(env, "cycle advanced", group.id, group.current_cycle);
        events::cycle_advanced(env, group.id, group.current_cycle);
    }

    Ok(())
}

pub fn get_group(env: &Env, group_id: u64) -> Result<Group, ContractError> {
    storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)
}

pub fn get_group_status(env: &Env, group_id: u64) -> Result<GroupStatus, ContractError> {
    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }
    Ok(status_or_default(storage::get_status(env, group_id)))
}

pub fn is_group_active(env: &Env, group_id: u64) -> Result<bool, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    let status = status_or_default(storage::get_status(env, group_id));

    Ok(status == GroupStatus::Active
        && group.member_count >= 1
        && group.member_count <= group.max_members)
}

pub fn get_members(env: &Env, group_id: u64) -> Result<Vec<Address>, ContractError> {
    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }
    Ok(storage::get_group_members(env, group_id))
}

pub fn get_member_profile(
    env: &Env,
    group_id: u64,
    member: Address,
) -> Result<Option<MemberProfile>, ContractError> {
    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }
    Ok(storage::get_member(env, group_id, &member))
}

pub fn get_member_groups(env: &Env, member: Address) -> Vec<u64> {
    storage::get_member_groups(env, &member)
}

pub fn get_total_groups(env: &Env) -> u64 {
    storage::get_group_counter(env)
}

/// Newest first. `cursor == 0` starts from the latest group; otherwise listing starts
/// at `cursor` itself. At most `limit * 4` ids are read per call, so a filtered page
/// can come back short with a non-zero `next_cursor`.
pub fn list_groups(
    env: &Env,
    cursor: u64,
    limit: u32,
    status_filter: Option<GroupStatus>,
) -> GroupPage {
    let mut groups = Vec::new(env);
    let latest = storage::get_group_counter(env);
    let start = if cursor == 0 || cursor > latest {
        latest
    } else {
        cursor
    };
    let page_limit = limit.min(LIST_PAGE_LIMIT);
    let scan_budget = u64::from(page_limit) * LIST_SCAN_FACTOR;

    let mut id = start;
    let mut scanned = 0;
    while id > 0 && groups.len() < page_limit && scanned < scan_budget {
        scanned += 1;
        let current = id;
        id -= 1;

        let Some(group) = storage::get_group(env, current) else {
            continue;
        };
        if let Some(filter) = status_filter {
            if status_or_default(storage::get_status(env, current)) != filter {
                continue;
            }
        }
        groups.push_back(group);
    }

    GroupPage {
        groups,
        next_cursor: id,
    }
}

pub fn is_cycle_deadline_passed(env: &Env, group_id: u64) -> Result<bool, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    Ok(group.is_cycle_deadline_passed(env.ledger().timestamp()))
}

pub fn get_cycle_deadline(env: &Env, group_id: u64) -> Result<Option<u64>, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    Ok(group.cycle_deadline())
}

fn validate_params(
    config: &ContractConfig,
    contribution_amount: i128,
    cycle_duration: u64,
    max_members: u32,
) -> Result<(), ContractError> {
    if contribution_amount <= 0 || !config.allows_contribution(contribution_amount) {
        return Err(ContractError::InvalidAmount);
    }
    if max_members < 1 || !config.allows_group_size(max_members) {
        return Err(ContractError::InvalidConfig);
    }
    if cycle_duration == 0 || !config.allows_cycle_duration(cycle_duration) {
        return Err(ContractError::InvalidConfig);
    }
    Ok(())
}
