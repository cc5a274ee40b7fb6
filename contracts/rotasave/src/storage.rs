use soroban_sdk::{Address, Env, Vec};

use crate::types::{
    ContractConfig, ContributionRecord, DataKey, Group, GroupStatus, MemberProfile, PayoutRecord,
};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Admin & Config ---

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_config(env: &Env) -> Option<ContractConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &ContractConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// --- Group Counter ---

pub fn get_group_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::GroupCounter)
        .unwrap_or(0)
}

pub fn set_group_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&DataKey::GroupCounter, &counter);
    extend_instance_ttl(env);
}

// --- Group ---

pub fn get_group(env: &Env, group_id: u64) -> Option<Group> {
    read_persistent(env, &DataKey::Group(group_id))
}

pub fn set_group(env: &Env, group: &Group) {
    write_persistent(env, &DataKey::Group(group.id), group);
}

/// Drops the group record and its status. Used only for groups nobody joined.
pub fn remove_group(env: &Env, group_id: u64) {
    env.storage().persistent().remove(&DataKey::Group(group_id));
    env.storage().persistent().remove(&DataKey::GroupStatus(group_id));
}

/// Raw status record; callers decide what absence means.
pub fn get_status(env: &Env, group_id: u64) -> Option<GroupStatus> {
    read_persistent(env, &DataKey::GroupStatus(group_id))
}

pub fn set_status(env: &Env, group_id: u64, status: GroupStatus) {
    write_persistent(env, &DataKey::GroupStatus(group_id), &status);
}

// --- Members ---

pub fn get_member(env: &Env, group_id: u64, member: &Address) -> Option<MemberProfile> {
    read_persistent(env, &DataKey::Member(group_id, member.clone()))
}

pub fn has_member(env: &Env, group_id: u64, member: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Member(group_id, member.clone()))
}

pub fn set_member(env: &Env, profile: &MemberProfile) {
    let key = DataKey::Member(profile.group_id, profile.address.clone());
    write_persistent(env, &key, profile);
}

/// Members in join order, which is the payout rotation.
pub fn get_group_members(env: &Env, group_id: u64) -> Vec<Address> {
    read_persistent(env, &DataKey::GroupMembers(group_id)).unwrap_or(Vec::new(env))
}

pub fn set_group_members(env: &Env, group_id: u64, members: &Vec<Address>) {
    write_persistent(env, &DataKey::GroupMembers(group_id), members);
}

// --- Member Groups ---

pub fn get_member_groups(env: &Env, member: &Address) -> Vec<u64> {
    read_persistent(env, &DataKey::MemberGroups(member.clone())).unwrap_or(Vec::new(env))
}

pub fn add_member_group(env: &Env, member: &Address, group_id: u64) {
    let mut groups = get_member_groups(env, member);
    groups.push_back(group_id);
    write_persistent(env, &DataKey::MemberGroups(member.clone()), &groups);
}

// --- Contributions ---

pub fn get_contribution(
    env: &Env,
    group_id: u64,
    cycle: u32,
    contributor: &Address,
) -> Option<ContributionRecord> {
    read_persistent(env, &DataKey::Contribution(group_id, cycle, contributor.clone()))
}

pub fn has_contribution(env: &Env, group_id: u64, cycle: u32, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Contribution(group_id, cycle, contributor.clone()))
}

pub fn set_contribution(env: &Env, record: &ContributionRecord) {
    let key = DataKey::Contribution(record.group_id, record.cycle, record.contributor.clone());
    write_persistent(env, &key, record);
}

pub fn get_cycle_total(env: &Env, group_id: u64, cycle: u32) -> Option<i128> {
    read_persistent(env, &DataKey::CycleTotal(group_id, cycle))
}

pub fn set_cycle_total(env: &Env, group_id: u64, cycle: u32, total: i128) {
    write_persistent(env, &DataKey::CycleTotal(group_id, cycle), &total);
}

pub fn get_cycle_count(env: &Env, group_id: u64, cycle: u32) -> Option<u32> {
    read_persistent(env, &DataKey::CycleCount(group_id, cycle))
}

pub fn set_cycle_count(env: &Env, group_id: u64, cycle: u32, count: u32) {
    write_persistent(env, &DataKey::CycleCount(group_id, cycle), &count);
}

// --- Payouts ---

pub fn get_payout(env: &Env, group_id: u64, cycle: u32) -> Option<PayoutRecord> {
    read_persistent(env, &DataKey::Payout(group_id, cycle))
}

pub fn has_payout(env: &Env, group_id: u64, cycle: u32) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Payout(group_id, cycle))
}

pub fn set_payout(env: &Env, record: &PayoutRecord) {
    write_persistent(env, &DataKey::Payout(record.group_id, record.cycle), record);
}

// --- Helpers ---

fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let result = env.storage().persistent().get(key);
    if result.is_some() {
        extend_persistent_ttl(env, key);
    }
    result
}

fn write_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    extend_persistent_ttl(env, key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
