use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::events;
use crate::group;
use crate::status::status_or_default;
use crate::storage;
use crate::types::{Group, GroupStatus, PayoutRecord, PayoutRequest};

/// What the payout process must transfer for the current cycle. Only available once
/// every member has contributed.
pub fn get_payout_request(env: &Env, group_id: u64) -> Result<PayoutRequest, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    build_request(env, &group)
}

pub fn get_current_recipient(env: &Env, group_id: u64) -> Result<Address, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if status_or_default(storage::get_status(env, group_id)) != GroupStatus::Active {
        return Err(ContractError::InvalidState);
    }

    recipient_for(env, &group)
}

/// Called back by the payout process once the pool of `cycle` has been transferred.
/// Records the payout and advances the group in the same invocation.
pub fn confirm_payout(env: &Env, group_id: u64, cycle: u32) -> Result<(), ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    group.admin.require_auth();

    if cycle != group.current_cycle {
        return Err(ContractError::CycleMismatch);
    }
    if storage::has_payout(env, group_id, cycle) {
        return Err(ContractError::InvalidState);
    }

    let request = build_request(env, &group)?;
    let record = PayoutRecord {
        group_id,
        cycle,
        recipient: request.recipient,
        amount: request.amount,
        paid_at: env.ledger().timestamp(),
    };
    storage::set_payout(env, &record);

    events::payout_recorded(env, group_id, cycle, record.recipient, record.amount);

    group::close_cycle(env, group, cycle)
}

pub fn get_payout(env: &Env, group_id: u64, cycle: u32) -> Option<PayoutRecord> {
    storage::get_payout(env, group_id, cycle)
}

fn build_request(env: &Env, group: &Group) -> Result<PayoutRequest, ContractError> {
    if status_or_default(storage::get_status(env, group.id)) != GroupStatus::Active {
        return Err(ContractError::InvalidState);
    }

    let cycle = group.current_cycle;
    let count = storage::get_cycle_count(env, group.id, cycle).unwrap_or(0);
    if count < group.member_count {
        return Err(ContractError::CycleNotComplete);
    }

    Ok(PayoutRequest {
        group_id: group.id,
        cycle,
        recipient: recipient_for(env, group)?,
        amount: storage::get_cycle_total(env, group.id, cycle).unwrap_or(0),
    })
}

/// Join order decides the rotation: cycle N pays the member at position N.
fn recipient_for(env: &Env, group: &Group) -> Result<Address, ContractError> {
    storage::get_group_members(env, group.id)
        .get(group.current_cycle)
        .ok_or(ContractError::InvalidState)
}
