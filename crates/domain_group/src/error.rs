//! Group domain errors

use thiserror::Error;

/// Errors that can occur in the group domain
#[derive(Debug, Error)]
pub enum GroupError {
    /// Member already present in the roster
    #[error("Member already in group: {0}")]
    DuplicateMember(String),

    /// Member not present in the roster
    #[error("Member not found in group: {0}")]
    MemberNotFound(String),
}
