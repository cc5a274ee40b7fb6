//! Which lifecycle states permit which operations.
//!
//! Every predicate is total over [`GroupStatus`] and answers `false` for anything it
//! does not explicitly allow.

use crate::types::GroupStatus;

impl GroupStatus {
    pub fn accepts_contributions(&self) -> bool {
        matches!(self, GroupStatus::Active)
    }

    pub fn allows_activation(&self) -> bool {
        matches!(self, GroupStatus::Forming)
    }

    pub fn accepts_members(&self) -> bool {
        matches!(self, GroupStatus::Forming)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GroupStatus::Completed | GroupStatus::Cancelled)
    }

    /// Forming→Active, Forming→Cancelled, Active→Completed and Active→Cancelled.
    pub fn can_transition_to(&self, next: GroupStatus) -> bool {
        matches!(
            (*self, next),
            (GroupStatus::Forming, GroupStatus::Active)
                | (GroupStatus::Forming, GroupStatus::Cancelled)
                | (GroupStatus::Active, GroupStatus::Completed)
                | (GroupStatus::Active, GroupStatus::Cancelled)
        )
    }
}

/// Status to assume when no status record exists for a group.
pub fn status_or_default(status: Option<GroupStatus>) -> GroupStatus {
    status.unwrap_or(GroupStatus::Forming)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [GroupStatus; 4] = [
        GroupStatus::Forming,
        GroupStatus::Active,
        GroupStatus::Completed,
        GroupStatus::Cancelled,
    ];

    #[test]
    fn test_only_active_accepts_contributions() {
        for status in ALL {
            assert_eq!(status.accepts_contributions(), status == GroupStatus::Active);
        }
    }

    #[test]
    fn test_only_forming_allows_activation() {
        for status in ALL {
            assert_eq!(status.allows_activation(), status == GroupStatus::Forming);
            assert_eq!(status.accepts_members(), status == GroupStatus::Forming);
        }
    }

    #[test]
    fn test_nothing_returns_to_forming() {
        for status in ALL {
            assert!(!status.can_transition_to(GroupStatus::Forming));
        }
    }

    #[test]
    fn test_terminal_states_are_final() {
        for from in [GroupStatus::Completed, GroupStatus::Cancelled] {
            assert!(from.is_terminal());
            for to in ALL {
                assert!(!from.can_transition_to(to));
            }
        }
    }

    #[test]
    fn test_forming_cannot_complete() {
        assert!(!GroupStatus::Forming.can_transition_to(GroupStatus::Completed));
        assert!(GroupStatus::Forming.can_transition_to(GroupStatus::Active));
        assert!(GroupStatus::Active.can_transition_to(GroupStatus::Completed));
    }

    #[test]
    fn test_missing_status_fails_closed() {
        let status = status_or_default(None);
        assert_eq!(status, GroupStatus::Forming);
        assert!(!status.accepts_contributions());
    }
}
