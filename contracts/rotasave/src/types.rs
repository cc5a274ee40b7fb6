use soroban_sdk::{contracttype, Address, String, Vec};

/// Status of a savings group throughout its lifecycle.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GroupStatus {
    Forming,   // Accepting members, not yet started
    Active,    // Cycles in progress
    Completed, // Every member has received a payout
    Cancelled, // Stopped by the group admin
}

/// Core savings group configuration and state.
///
/// The lifecycle status is stored under its own key (`DataKey::GroupStatus`) so that
/// transitions do not rewrite the whole record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
    pub id: u64,
    pub admin: Address,
    pub name: String,
    pub contribution_amount: i128,
    /// Seconds per cycle.
    pub cycle_duration: u64,
    pub max_members: u32,
    pub member_count: u32,
    /// 0-based; also the rotation slot of the member paid for this cycle.
    pub current_cycle: u32,
    pub created_at: u64,
    /// 0 until activation.
    pub started_at: u64,
}

impl Group {
    pub fn is_started(&self) -> bool {
        self.started_at != 0
    }

    /// One payout per member.
    pub fn total_cycles(&self) -> u32 {
        self.member_count
    }

    /// Timestamp at which the current cycle closes, `None` before activation or when
    /// the value does not fit in a `u64`.
    pub fn cycle_deadline(&self) -> Option<u64> {
        if !self.is_started() {
            return None;
        }
        let elapsed_cycles = u64::from(self.current_cycle) + 1;
        self.cycle_duration
            .checked_mul(elapsed_cycles)
            .and_then(|span| self.started_at.checked_add(span))
    }

    /// The boundary instant itself still belongs to the cycle.
    pub fn is_cycle_deadline_passed(&self, current_time: u64) -> bool {
        match self.cycle_deadline() {
            Some(deadline) => current_time > deadline,
            None => false,
        }
    }
}

/// Membership proof for (group, address). Never removed once written.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberProfile {
    pub address: Address,
    pub group_id: u64,
    /// Join order, which is also the payout rotation slot.
    pub position: u32,
    pub joined_at: u64,
}

/// A single member's payment for one cycle. Immutable once written.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRecord {
    pub contributor: Address,
    pub group_id: u64,
    pub cycle: u32,
    pub amount: i128,
    pub contributed_at: u64,
}

/// Confirmation that the pool of a cycle was paid out by the external payout process.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutRecord {
    pub group_id: u64,
    pub cycle: u32,
    pub recipient: Address,
    pub amount: i128,
    pub paid_at: u64,
}

/// What the external payout process has to transfer for a complete cycle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutRequest {
    pub group_id: u64,
    pub cycle: u32,
    pub recipient: Address,
    pub amount: i128,
}

/// One page of `list_groups`. Pass `next_cursor` back to continue; 0 means the scan
/// reached group 1.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupPage {
    pub groups: Vec<Group>,
    pub next_cursor: u64,
}

/// Protocol-wide bounds applied when groups are created or updated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractConfig {
    pub min_contribution: i128,
    pub max_contribution: i128,
    pub max_group_size: u32,
    pub min_cycle_duration: u64,
    pub max_cycle_duration: u64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            min_contribution: 1,
            max_contribution: i128::MAX,
            max_group_size: 100,
            min_cycle_duration: 1,
            max_cycle_duration: 31_536_000, // one year
        }
    }
}

impl ContractConfig {
    pub fn validate(&self) -> bool {
        self.min_contribution > 0
            && self.max_contribution >= self.min_contribution
            && self.max_group_size >= 1
            && self.min_cycle_duration > 0
            && self.max_cycle_duration >= self.min_cycle_duration
    }

    pub fn allows_contribution(&self, amount: i128) -> bool {
        amount >= self.min_contribution && amount <= self.max_contribution
    }

    pub fn allows_cycle_duration(&self, duration: u64) -> bool {
        duration >= self.min_cycle_duration && duration <= self.max_cycle_duration
    }

    pub fn allows_group_size(&self, max_members: u32) -> bool {
        max_members >= 1 && max_members <= self.max_group_size
    }
}

/// Storage keys for all contract data.
///
/// Every variant is encoded with its own name as discriminant, so keys from different
/// domains never collide even when their numeric fields coincide.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    GroupCounter,
    Group(u64),
    GroupStatus(u64),
    Member(u64, Address),
    GroupMembers(u64),
    Contribution(u64, u32, Address),
    CycleTotal(u64, u32),
    CycleCount(u64, u32),
    Payout(u64, u32),
    MemberGroups(Address),
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    fn sample_group(env: &Env, started_at: u64, current_cycle: u32) -> Group {
        Group {
            id: 1,
            admin: Address::generate(env),
            name: String::from_str(env, "Sample"),
            contribution_amount: 100,
            cycle_duration: 3_600,
            max_members: 3,
            member_count: 3,
            current_cycle,
            created_at: 500,
            started_at,
        }
    }

    #[test]
    fn test_deadline_not_passed_before_activation() {
        let env = Env::default();
        let group = sample_group(&env, 0, 0);
        assert_eq!(group.cycle_deadline(), None);
        assert!(!group.is_cycle_deadline_passed(u64::MAX));
    }

    #[test]
    fn test_deadline_boundary_is_exclusive() {
        let env = Env::default();
        let group = sample_group(&env, 1_000, 0);
        assert!(!group.is_cycle_deadline_passed(1_000 + 3_600));
        assert!(group.is_cycle_deadline_passed(1_000 + 3_600 + 1));
    }

    #[test]
    fn test_deadline_moves_with_cycle() {
        let env = Env::default();
        let group = sample_group(&env, 1_000, 2);
        assert_eq!(group.cycle_deadline(), Some(1_000 + 3 * 3_600));
        assert!(!group.is_cycle_deadline_passed(1_000 + 2 * 3_600 + 1));
    }

    #[test]
    fn test_deadline_overflow_never_passes() {
        let env = Env::default();
        let mut group = sample_group(&env, u64::MAX - 10, 0);
        group.cycle_duration = 100;
        assert_eq!(group.cycle_deadline(), None);
        assert!(!group.is_cycle_deadline_passed(u64::MAX));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ContractConfig::default();
        assert!(config.validate());
        assert!(config.allows_contribution(1));
        assert!(!config.allows_contribution(0));
        assert!(!config.allows_group_size(0));
        assert!(!config.allows_cycle_duration(0));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = ContractConfig {
            min_contribution: 500,
            max_contribution: 100,
            ..ContractConfig::default()
        };
        assert!(!config.validate());
    }
}
