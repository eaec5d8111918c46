//! The session-owned world graph.
//!
//! A [`WorldGraph`] is a deep copy of a [`WorldDefinition`]: handlers remove
//! items and flip lock flags in place, so two sessions must never share one.

use std::collections::HashMap;

use log::debug;

use crate::quest::types::{ItemRecord, LocationRecord, WorldDefinition};

/// Locations plus a title index. Lookups are by exact title.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    locations: Vec<LocationRecord>,
    index: HashMap<String, usize>,
}

impl WorldGraph {
    /// Build a graph from a definition snapshot.
    ///
    /// If two locations share a title the first one wins, matching the scan
    /// order used everywhere else.
    pub fn from_definition(definition: &WorldDefinition) -> Self {
        let locations = definition.locations.clone();
        let mut index = HashMap::with_capacity(locations.len());
        for (position, location) in locations.iter().enumerate() {
            index.entry(location.title.clone()).or_insert(position);
        }
        Self { locations, index }
    }

    pub fn find_location(&self, title: &str) -> Option<&LocationRecord> {
        self.index
            .get(title)
            .and_then(|&position| self.locations.get(position))
    }

    pub fn find_location_mut(&mut self, title: &str) -> Option<&mut LocationRecord> {
        let position = *self.index.get(title)?;
        self.locations.get_mut(position)
    }

    /// Locked state of a location; unknown titles read as unlocked.
    pub fn is_locked(&self, title: &str) -> bool {
        self.find_location(title)
            .map(|location| location.locked)
            .unwrap_or(false)
    }

    /// Clear the lock flag. Returns false when no such location exists.
    pub fn unlock(&mut self, title: &str) -> bool {
        match self.find_location_mut(title) {
            Some(location) => {
                if location.locked {
                    debug!("Unlocking location {}", title);
                }
                location.locked = false;
                true
            }
            None => false,
        }
    }

    /// Remove one item titled `item_title` from the first object at
    /// `location_title` that holds it. Returns the item and the object title.
    pub fn take_item_from(
        &mut self,
        location_title: &str,
        item_title: &str,
    ) -> Option<(ItemRecord, String)> {
        let location = self.find_location_mut(location_title)?;
        location.objects.iter_mut().find_map(|object| {
            object
                .take_item(item_title)
                .map(|item| (item, object.title.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::types::ObjectRecord;

    fn sample() -> WorldDefinition {
        WorldDefinition::new(vec![
            LocationRecord::new("кухня", "кухня").with_path("коридор").with_object(
                ObjectRecord::new("столе").with_item("чай"),
            ),
            LocationRecord::new("коридор", "ничего интересного"),
            LocationRecord::new("улица", "на улице весна").locked(),
        ])
    }

    #[test]
    fn take_item_scans_objects_in_order() {
        let definition = WorldDefinition::new(vec![LocationRecord::new("комната", "")
            .with_object(ObjectRecord::new("столе").with_item("ключи"))
            .with_object(ObjectRecord::new("стуле").with_item("ключи"))]);
        let mut world = WorldGraph::from_definition(&definition);

        let (item, object) = world.take_item_from("комната", "ключи").unwrap();
        assert_eq!(item.title, "ключи");
        assert_eq!(object, "столе");

        let (_, object) = world.take_item_from("комната", "ключи").unwrap();
        assert_eq!(object, "стуле");
        assert!(world.take_item_from("комната", "ключи").is_none());
    }

    #[test]
    fn take_item_is_exact_match() {
        let mut world = WorldGraph::from_definition(&sample());
        assert!(world.take_item_from("кухня", "Чай").is_none());
        assert!(world.take_item_from("кухня", "ча").is_none());
        assert!(world.take_item_from("нигде", "чай").is_none());
    }

    #[test]
    fn unlock_and_lookup() {
        let mut world = WorldGraph::from_definition(&sample());
        assert!(world.is_locked("улица"));
        assert!(world.unlock("улица"));
        assert!(!world.is_locked("улица"));
        assert!(!world.unlock("дача"));
        assert!(world.find_location("коридор").is_some());
        assert!(world.find_location("Коридор").is_none());
    }

    #[test]
    fn graph_does_not_alias_definition() {
        let definition = sample();
        let mut world = WorldGraph::from_definition(&definition);
        world.take_item_from("кухня", "чай");
        world.unlock("улица");
        assert_eq!(definition.locations[0].objects[0].items.len(), 1);
        assert!(definition.locations[2].locked);
    }
}
