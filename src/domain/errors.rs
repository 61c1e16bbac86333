use thiserror::Error;

/// Usage errors raised by the domain layer before any query executes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Team name cannot be empty")]
    EmptyTeamName,

    #[error("Member must be saved before joining a team")]
    UnsavedMember,

    #[error("Team must be saved before accepting members")]
    UnsavedTeam,

    #[error("Page offset must be non-negative, got {0}")]
    NegativeOffset(i64),

    #[error("Page limit must be positive, got {0}")]
    NonPositiveLimit(i64),
}

pub type DomainResult<T> = Result<T, DomainError>;
