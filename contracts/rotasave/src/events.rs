//! Notifications published for every state change.
//!
//! Topics are `(name, group_id)`; the payload is one of the structs below. Events are
//! an output log only: no contract logic reads them back.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const GROUP_CREATED: Symbol = symbol_short!("grp_creat");
pub const GROUP_UPDATED: Symbol = symbol_short!("grp_updt");
pub const MEMBER_JOINED: Symbol = symbol_short!("grp_join");
pub const GROUP_ACTIVATED: Symbol = symbol_short!("grp_actv");
pub const CONTRIBUTION_MADE: Symbol = symbol_short!("contrib");
pub const CYCLE_COMPLETE: Symbol = symbol_short!("cyc_done");
pub const CYCLE_ADVANCED: Symbol = symbol_short!("cyc_next");
pub const GROUP_COMPLETED: Symbol = symbol_short!("grp_comp");
pub const GROUP_CANCELLED: Symbol = symbol_short!("grp_canc");
pub const GROUP_DELETED: Symbol = symbol_short!("grp_del");
pub const PAYOUT_RECORDED: Symbol = symbol_short!("payout");
pub const ADMIN_CHANGED: Symbol = symbol_short!("adm_chng");
pub const CONFIG_UPDATED: Symbol = symbol_short!("cfg_updt");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupCreatedEvent {
    pub admin: Address,
    pub contribution_amount: i128,
    pub cycle_duration: u64,
    pub max_members: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberJoinedEvent {
    pub member: Address,
    pub position: u32,
    pub member_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupActivatedEvent {
    pub started_at: u64,
    pub member_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMadeEvent {
    pub contributor: Address,
    pub amount: i128,
    pub cycle: u32,
    /// Pool size for the cycle after this contribution.
    pub cycle_total: i128,
    pub contributed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutRecordedEvent {
    pub cycle: u32,
    pub recipient: Address,
    pub amount: i128,
}

pub fn group_created(
    env: &Env,
    group_id: u64,
    admin: Address,
    contribution_amount: i128,
    cycle_duration: u64,
    max_members: u32,
) {
    env.events().publish(
        (GROUP_CREATED, group_id),
        GroupCreatedEvent {
            admin,
            contribution_amount,
            cycle_duration,
            max_members,
        },
    );
}

pub fn group_updated(env: &Env, group_id: u64, admin: Address) {
    env.events().publish((GROUP_UPDATED, group_id), admin);
}

pub fn member_joined(env: &Env, group_id: u64, member: Address, position: u32, member_count: u32) {
    env.events().publish(
        (MEMBER_JOINED, group_id),
        MemberJoinedEvent {
            member,
            position,
            member_count,
        },
    );
}

pub fn group_activated(env: &Env, group_id: u64, started_at: u64, member_count: u32) {
    env.events().publish(
        (GROUP_ACTIVATED, group_id),
        GroupActivatedEvent {
            started_at,
            member_count,
        },
    );
}

pub fn contribution_made(
    env: &Env,
    group_id: u64,
    contributor: Address,
    amount: i128,
    cycle: u32,
    cycle_total: i128,
    contributed_at: u64,
) {
    env.events().publish(
        (CONTRIBUTION_MADE, group_id),
        ContributionMadeEvent {
            contributor,
            amount,
            cycle,
            cycle_total,
            contributed_at,
        },
    );
}

pub fn cycle_complete(env: &Env, group_id: u64, cycle: u32) {
    env.events().publish((CYCLE_COMPLETE, group_id), cycle);
}

pub fn cycle_advanced(env: &Env, group_id: u64, new_cycle: u32) {
    env.events().publish((CYCLE_ADVANCED, group_id), new_cycle);
}

pub fn group_completed(env: &Env, group_id: u64, final_cycle: u32) {
    env.events().publish((GROUP_COMPLETED, group_id), final_cycle);
}

pub fn group_cancelled(env: &Env, group_id: u64, cancelled_at: u64) {
    env.events().publish((GROUP_CANCELLED, group_id), cancelled_at);
}

pub fn group_deleted(env: &Env, group_id: u64, admin: Address) {
    env.events().publish((GROUP_DELETED, group_id), admin);
}

pub fn payout_recorded(env: &Env, group_id: u64, cycle: u32, recipient: Address, amount: i128) {
    env.events().publish(
        (PAYOUT_RECORDED, group_id),
        PayoutRecordedEvent {
            cycle,
            recipient,
            amount,
        },
    );
}

pub fn admin_changed(env: &Env, group_id: u64, new_admin: Address) {
    env.events().publish((ADMIN_CHANGED, group_id), new_admin);
}

pub fn config_updated(env: &Env, admin: Address) {
    env.events().publish((CONFIG_UPDATED,), admin);
}
