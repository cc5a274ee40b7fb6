use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    GroupNotFound = 2,
    NotMember = 3,
    InvalidState = 4,
    InvalidAmount = 5,
    InvalidConfig = 6,
    AlreadyContributed = 7,
    AlreadyMember = 8,
    GroupFull = 9,
    /// `advance_cycle` was asked to close a cycle that is not the current one.
    CycleMismatch = 10,
    CycleNotComplete = 11,
    Overflow = 12,
    Unauthorized = 13,
}
