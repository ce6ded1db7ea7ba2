//! Group members

use serde::{Deserialize, Serialize};

use core_kernel::MemberId;

/// A person participating in a group
///
/// Identity is stable and externally assigned; the engine treats members
/// as opaque ids with a display name attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,
    /// Display name
    pub name: String,
}

impl Member {
    /// Creates a member with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new_v7(),
            name: name.into(),
        }
    }

    /// Creates a member with an externally assigned id
    pub fn with_id(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
