/// Player state and inventory operations for a single session.
use std::collections::HashSet;

use super::types::ItemRecord;

/// Where the player stands, what they carry, and what they have seen.
///
/// `location` always names an existing, unlocked location: the `go` handler
/// is the only writer and it refuses locked destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub location: String,
    pub has_backpack: bool,
    pub inventory: Vec<ItemRecord>,
    visited: HashSet<String>,
}

impl PlayerState {
    pub fn new(start: &str) -> Self {
        Self {
            location: start.to_string(),
            has_backpack: false,
            inventory: Vec::new(),
            visited: HashSet::new(),
        }
    }

    /// Membership test over inventory by exact title.
    pub fn has_item(&self, title: &str) -> bool {
        self.inventory.iter().any(|item| item.title == title)
    }

    /// Count of inventory entries with this title.
    pub fn item_quantity(&self, title: &str) -> usize {
        self.inventory
            .iter()
            .filter(|item| item.title == title)
            .count()
    }

    pub fn acquire_backpack(&mut self, item: ItemRecord) {
        self.has_backpack = true;
        self.inventory.push(item);
    }

    /// Append to inventory. The backpack gate is the caller's precondition.
    pub fn acquire_item(&mut self, item: ItemRecord) {
        self.inventory.push(item);
    }

    /// Record a visit. Returns true only the first time for a given title.
    pub fn visit(&mut self, title: &str) -> bool {
        self.visited.insert(title.to_string())
    }

    pub fn has_visited(&self, title: &str) -> bool {
        self.visited.contains(title)
    }

    pub fn move_to(&mut self, title: &str) {
        self.location = title.to_string();
    }
}
