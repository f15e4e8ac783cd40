//! Group model.
//!
//! A group is a named set of members. Rotation responsibility and helper
//! assignment both operate over group membership.

use serde::{Deserialize, Serialize};

/// A named group of members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group name.
    pub name: String,
    /// Member names. Helpers are drawn from here.
    pub members: Vec<String>,
}

impl Group {
    /// Creates a new empty group with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Adds a member.
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Sets the full member list.
    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }

    /// Whether the given person belongs to this group.
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_builder() {
        let group = Group::new("north").with_member("Dana").with_member("Eli");
        assert_eq!(group.name, "north");
        assert_eq!(group.member_count(), 2);
        assert!(group.has_member("Dana"));
        assert!(!group.has_member("Fay"));
    }
}
