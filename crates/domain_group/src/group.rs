//! Expense-sharing groups

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GroupError;
use crate::member::Member;
use core_kernel::{Currency, GroupId, MemberId};

/// A group of people sharing expenses
///
/// The roster is an ordered list: computation crates that assign rounding
/// remainders to "the last entry" rely on this order being stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,
    /// Display name
    pub name: String,
    /// Currency every charge, payment, and receipt in the group uses
    pub currency: Currency,
    /// Ordered member roster
    pub members: Vec<Member>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Creates an empty group
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: GroupId::new_v7(),
            name: name.into(),
            currency,
            members: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a member to the roster
    ///
    /// # Errors
    ///
    /// Returns an error if a member with the same id is already present.
    pub fn add_member(&mut self, member: Member) -> Result<(), GroupError> {
        if self.contains(&member.id) {
            return Err(GroupError::DuplicateMember(member.id.to_string()));
        }
        self.members.push(member);
        Ok(())
    }

    /// Removes a member from the roster
    ///
    /// # Errors
    ///
    /// Returns an error if no member with the given id exists.
    pub fn remove_member(&mut self, id: &MemberId) -> Result<Member, GroupError> {
        let position = self
            .members
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| GroupError::MemberNotFound(id.to_string()))?;
        Ok(self.members.remove(position))
    }

    /// Returns true if the member belongs to this group
    pub fn contains(&self, id: &MemberId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    /// Looks up a member by id
    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Returns the member ids in roster order
    pub fn member_ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|m| m.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trio() -> Group {
        let mut group = Group::new("Trip", Currency::USD);
        group.add_member(Member::new("Alice")).unwrap();
        group.add_member(Member::new("Bob")).unwrap();
        group.add_member(Member::new("Carol")).unwrap();
        group
    }

    #[test]
    fn test_add_member() {
        let group = trio();
        assert_eq!(group.members.len(), 3);
        assert_eq!(group.member_ids().len(), 3);
    }

    #[test]
    fn test_add_duplicate_member_rejected() {
        let mut group = Group::new("Trip", Currency::USD);
        let alice = Member::new("Alice");
        group.add_member(alice.clone()).unwrap();

        let result = group.add_member(alice);
        assert!(matches!(result, Err(GroupError::DuplicateMember(_))));
    }

    #[test]
    fn test_remove_member() {
        let mut group = trio();
        let id = group.members[1].id;

        let removed = group.remove_member(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(!group.contains(&id));
    }

    #[test]
    fn test_remove_unknown_member_rejected() {
        let mut group = trio();
        let result = group.remove_member(&MemberId::new());
        assert!(matches!(result, Err(GroupError::MemberNotFound(_))));
    }

    #[test]
    fn test_group_json_round_trip() {
        let group = trio();

        let json = serde_json::to_string(&group).unwrap();
        let back: Group = serde_json::from_str(&json).unwrap();

        assert_eq!(back, group);
        assert!(json.contains("\"currency\":\"USD\""));
    }

    #[test]
    fn test_member_ids_preserve_roster_order() {
        let group = trio();
        let names: Vec<_> = group
            .member_ids()
            .iter()
            .map(|id| group.member(id).unwrap().name.clone())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }
}
