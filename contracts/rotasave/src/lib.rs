#![no_std]

//! Rotating savings group (ROSCA) contract.
//!
//! Members of a group pay a fixed amount every cycle. When everyone has paid, the pool
//! of that cycle is owed to the member whose join position equals the cycle number; the
//! payout process transfers it and calls back to advance the group.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod admin;
mod contribution;
mod errors;
mod events;
mod group;
mod helpers;
mod payout;
mod status;
mod storage;
mod types;

pub use errors::ContractError;
pub use events::{
    ContributionMadeEvent, GroupActivatedEvent, GroupCreatedEvent, MemberJoinedEvent,
    PayoutRecordedEvent,
};
pub use types::*;

#[contract]
pub struct RotaSaveContract;

#[contractimpl]
impl RotaSaveContract {
    /// Initialize the protocol with a global admin and default limits.
    pub fn __constructor(env: Env, admin: Address) {
        if storage::has_admin(&env) {
            panic!("already initialized");
        }
        storage::set_admin(&env, &admin);
        storage::set_config(&env, &ContractConfig::default());
    }

    // ─── Group Lifecycle ────────────────────────────────────────────

    /// Create a new savings group in the Forming state. The caller becomes its admin.
    pub fn create_group(
        env: Env,
        admin: Address,
        name: String,
        contribution_amount: i128,
        cycle_duration: u64,
        max_members: u32,
    ) -> Result<u64, ContractError> {
        group::create_group(
            &env,
            admin,
            name,
            contribution_amount,
            cycle_duration,
            max_members,
        )
    }

    /// Change contribution amount, cycle duration or capacity before activation.
    pub fn update_group(
        env: Env,
        group_id: u64,
        contribution_amount: i128,
        cycle_duration: u64,
        max_members: u32,
    ) -> Result<(), ContractError> {
        group::update_group(
            &env,
            group_id,
            contribution_amount,
            cycle_duration,
            max_members,
        )
    }

    /// Delete a forming group that has no members yet. Group admin only.
    pub fn delete_group(env: Env, group_id: u64) -> Result<(), ContractError> {
        group::delete_group(&env, group_id)
    }

    /// Join a group that is still forming. Join order is payout order.
    pub fn join_group(env: Env, member: Address, group_id: u64) -> Result<(), ContractError> {
        group::join_group(&env, member, group_id)
    }

    /// Start cycle 0. Only the group admin can call this.
    pub fn activate_group(env: Env, group_id: u64) -> Result<(), ContractError> {
        group::activate_group(&env, group_id)
    }

    /// Close `expected_cycle` and move to the next one, or complete the group after the
    /// last member's turn.
    pub fn advance_cycle(
        env: Env,
        group_id: u64,
        expected_cycle: u32,
    ) -> Result<(), ContractError> {
        group::advance_cycle(&env, group_id, expected_cycle)
    }

    /// Get group details.
    pub fn get_group(env: Env, group_id: u64) -> Result<Group, ContractError> {
        group::get_group(&env, group_id)
    }

    pub fn get_group_status(env: Env, group_id: u64) -> Result<GroupStatus, ContractError> {
        group::get_group_status(&env, group_id)
    }

    /// True when the group is Active and has between 1 and `max_members` members.
    pub fn is_group_active(env: Env, group_id: u64) -> Result<bool, ContractError> {
        group::is_group_active(&env, group_id)
    }

    /// Members in rotation order.
    pub fn get_members(env: Env, group_id: u64) -> Result<Vec<Address>, ContractError> {
        group::get_members(&env, group_id)
    }

    /// Rotation slot and join time of `member`, if they belong to the group.
    pub fn get_member_profile(
        env: Env,
        group_id: u64,
        member: Address,
    ) -> Result<Option<MemberProfile>, ContractError> {
        group::get_member_profile(&env, group_id, member)
    }

    /// Get all group IDs a member belongs to.
    pub fn get_member_groups(env: Env, member: Address) -> Vec<u64> {
        group::get_member_groups(&env, member)
    }

    pub fn get_total_groups(env: Env) -> u64 {
        group::get_total_groups(&env)
    }

    /// Page through groups, newest first, optionally filtered by status.
    pub fn list_groups(
        env: Env,
        cursor: u64,
        limit: u32,
        status_filter: Option<GroupStatus>,
    ) -> GroupPage {
        group::list_groups(&env, cursor, limit, status_filter)
    }

    /// Whether the current cycle's deadline is behind the ledger clock.
    pub fn is_cycle_deadline_passed(env: Env, group_id: u64) -> Result<bool, ContractError> {
        group::is_cycle_deadline_passed(&env, group_id)
    }

    pub fn get_cycle_deadline(env: Env, group_id: u64) -> Result<Option<u64>, ContractError> {
        group::get_cycle_deadline(&env, group_id)
    }

    // ─── Contributions ──────────────────────────────────────────────

    /// Contribute to the current cycle of a group.
    pub fn contribute(env: Env, group_id: u64, contributor: Address) -> Result<(), ContractError> {
        contribution::contribute(&env, group_id, contributor)
    }

    pub fn get_contribution(
        env: Env,
        group_id: u64,
        cycle: u32,
        member: Address,
    ) -> Option<ContributionRecord> {
        contribution::get_contribution(&env, group_id, cycle, member)
    }

    /// Check if a member has contributed in a specific cycle.
    pub fn has_contributed(env: Env, group_id: u64, cycle: u32, member: Address) -> bool {
        contribution::has_contributed(&env, group_id, cycle, member)
    }

    pub fn get_cycle_total(env: Env, group_id: u64, cycle: u32) -> i128 {
        contribution::get_cycle_total(&env, group_id, cycle)
    }

    pub fn get_cycle_count(env: Env, group_id: u64, cycle: u32) -> u32 {
        contribution::get_cycle_count(&env, group_id, cycle)
    }

    /// Every member paired with whether they paid in `cycle`.
    pub fn get_contribution_status(
        env: Env,
        group_id: u64,
        cycle: u32,
    ) -> Result<Vec<(Address, bool)>, ContractError> {
        contribution::get_contribution_status(&env, group_id, cycle)
    }

    // ─── Payouts ────────────────────────────────────────────────────

    /// Recipient and amount for the current cycle, once every member has paid.
    pub fn get_payout_request(env: Env, group_id: u64) -> Result<PayoutRequest, ContractError> {
        payout::get_payout_request(&env, group_id)
    }

    /// Get the current cycle's recipient.
    pub fn get_current_recipient(env: Env, group_id: u64) -> Result<Address, ContractError> {
        payout::get_current_recipient(&env, group_id)
    }

    /// Record that the pool of `cycle` has been paid out and advance the group.
    pub fn confirm_payout(env: Env, group_id: u64, cycle: u32) -> Result<(), ContractError> {
        payout::confirm_payout(&env, group_id, cycle)
    }

    pub fn get_payout(env: Env, group_id: u64, cycle: u32) -> Option<PayoutRecord> {
        payout::get_payout(&env, group_id, cycle)
    }

    // ─── Admin / Governance ─────────────────────────────────────────

    /// Replace the protocol-wide limits. Protocol admin only.
    pub fn update_config(env: Env, config: ContractConfig) -> Result<(), ContractError> {
        admin::update_config(&env, config)
    }

    pub fn get_config(env: Env) -> Result<ContractConfig, ContractError> {
        admin::get_config(&env)
    }

    /// Cancel a forming or active group.
    pub fn cancel_group(env: Env, caller: Address, group_id: u64) -> Result<(), ContractError> {
        admin::cancel_group(&env, caller, group_id)
    }

    /// Transfer group admin role.
    pub fn set_group_admin(
        env: Env,
        current_admin: Address,
        group_id: u64,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        admin::set_group_admin(&env, current_admin, group_id, new_admin)
    }

    // ─── Display ────────────────────────────────────────────────────

    /// `GROUP-{id}`.
    pub fn format_group_id(env: Env, group_id: u64) -> String {
        helpers::format_group_id(&env, group_id)
    }
}
