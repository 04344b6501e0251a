//! Team rosters: ordered unit ids for one side

use serde::{Deserialize, Serialize};

use crate::core::types::{Side, UnitId};

/// Roster of units fighting for one side
///
/// Order is insertion order; the enemy AI relies on it when it falls back to
/// moving "the first" enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub side: Side,
    members: Vec<UnitId>,
}

impl Team {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            members: Vec::new(),
        }
    }

    pub fn add(&mut self, id: UnitId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    /// Remove a member. Returns true if it was on the roster.
    pub fn remove(&mut self, id: UnitId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| *m != id);
        self.members.len() != before
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.members.contains(&id)
    }

    pub fn members(&self) -> &[UnitId] {
        &self.members
    }

    pub fn first(&self) -> Option<UnitId> {
        self.members.first().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_order_and_ignores_duplicates() {
        let mut team = Team::new(Side::Player);
        let a = UnitId::new();
        let b = UnitId::new();
        team.add(a);
        team.add(b);
        team.add(a);
        assert_eq!(team.members(), &[a, b]);
        assert_eq!(team.first(), Some(a));
    }

    #[test]
    fn test_remove() {
        let mut team = Team::new(Side::Enemy);
        let a = UnitId::new();
        team.add(a);
        assert!(team.remove(a));
        assert!(!team.remove(a));
        assert!(team.is_empty());
    }
}
