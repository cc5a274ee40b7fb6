use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::ContractError;
use crate::events;
use crate::status::status_or_default;
use crate::storage;
use crate::types::ContributionRecord;

/// Records `contributor`'s payment for the group's current cycle.
///
/// All checks run before the first write, so a rejected call leaves storage untouched.
/// The token movement itself belongs to the caller's transaction; if it fails the host
/// discards this whole invocation.
pub fn contribute(env: &Env, group_id: u64, contributor: Address) -> Result<(), ContractError> {
    contributor.require_auth();

    if !storage::has_member(env, group_id, &contributor) {
        return Err(ContractError::NotMember);
    }

    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    let status = status_or_default(storage::get_status(env, group_id));
    if !status.accepts_contributions() {
        return Err(ContractError::InvalidState);
    }

    let amount = group.contribution_amount;
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let cycle = group.current_cycle;
    if storage::has_contribution(env, group_id, cycle, &contributor) {
        return Err(ContractError::AlreadyContributed);
    }

    let cycle_total = storage::get_cycle_total(env, group_id, cycle)
        .unwrap_or(0)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    let cycle_count = storage::get_cycle_count(env, group_id, cycle)
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    let now = env.ledger().timestamp();
    let record = ContributionRecord {
        contributor: contributor.clone(),
        group_id,
        cycle,
        amount,
        contributed_at: now,
    };
    storage::set_contribution(env, &record);
    storage::set_cycle_total(env, group_id, cycle, cycle_total);
    storage::set_cycle_count(env, group_id, cycle, cycle_count);

    log!(env, "contribution recorded", group_id, cycle, cycle_count);
    events::contribution_made(env, group_id, contributor, amount, cycle, cycle_total, now);

    // Notification only: payout and cycle advance are driven from outside.
    if cycle_count == group.member_count {
        events::cycle_complete(env, group_id, cycle);
    }

    Ok(())
}

pub fn get_contribution(
    env: &Env,
    group_id: u64,
    cycle: u32,
    member: Address,
) -> Option<ContributionRecord> {
    storage::get_contribution(env, group_id, cycle, &member)
}

pub fn has_contributed(env: &Env, group_id: u64, cycle: u32, member: Address) -> bool {
    storage::has_contribution(env, group_id, cycle, &member)
}

pub fn get_cycle_total(env: &Env, group_id: u64, cycle: u32) -> i128 {
    storage::get_cycle_total(env, group_id, cycle).unwrap_or(0)
}

pub fn get_cycle_count(env: &Env, group_id: u64, cycle: u32) -> u32 {
    storage::get_cycle_count(env, group_id, cycle).unwrap_or(0)
}

/// Every member in rotation order, paired with whether they paid in `cycle`.
pub fn get_contribution_status(
    env: &Env,
    group_id: u64,
    cycle: u32,
) -> Result<Vec<(Address, bool)>, ContractError> {
    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }

    let mut status = Vec::new(env);
    for member in storage::get_group_members(env, group_id).iter() {
        let paid = storage::has_contribution(env, group_id, cycle, &member);
        status.push_back((member, paid));
    }

    Ok(status)
}
