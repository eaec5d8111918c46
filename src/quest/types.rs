//! Plain data records for the quest world.
//!
//! These are the values a world file deserializes into and the values a
//! [`crate::quest::WorldGraph`] owns for the lifetime of a session. Identity
//! is by title everywhere: there are no generated ids.

use serde::{Deserialize, Serialize};

/// A takeable thing. Two items with the same title are interchangeable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ItemRecord {
    pub title: String,
}

impl ItemRecord {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

/// A piece of furniture anchored to a location, holding items in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectRecord {
    pub title: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl ObjectRecord {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, title: &str) -> Self {
        self.items.push(ItemRecord::new(title));
        self
    }

    /// Remove the first item whose title matches exactly.
    pub fn take_item(&mut self, title: &str) -> Option<ItemRecord> {
        let index = self.items.iter().position(|item| item.title == title)?;
        Some(self.items.remove(index))
    }

    pub fn item_titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.title.as_str())
    }
}

/// A node of the world graph.
///
/// `paths` are directed edges by title and need not be symmetric. `locked`
/// gates entry through `go` regardless of adjacency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub title: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub welcome: String,
    #[serde(default)]
    pub no_item_message: String,
    /// Narration shown on arrival through `go`. Empty means paths only.
    #[serde(default)]
    pub flavor: String,
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
}

impl LocationRecord {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            locked: false,
            description: description.to_string(),
            welcome: String::new(),
            no_item_message: String::new(),
            flavor: String::new(),
            paths: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn with_welcome(mut self, welcome: &str) -> Self {
        self.welcome = welcome.to_string();
        self
    }

    pub fn with_no_item_message(mut self, message: &str) -> Self {
        self.no_item_message = message.to_string();
        self
    }

    pub fn with_flavor(mut self, flavor: &str) -> Self {
        self.flavor = flavor.to_string();
        self
    }

    pub fn with_path(mut self, destination: &str) -> Self {
        self.paths.push(destination.to_string());
        self
    }

    pub fn with_object(mut self, object: ObjectRecord) -> Self {
        self.objects.push(object);
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn has_path_to(&self, destination: &str) -> bool {
        self.paths.iter().any(|path| path == destination)
    }
}

/// Immutable snapshot a session is built from. The first location is the start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct WorldDefinition {
    pub locations: Vec<LocationRecord>,
}

impl WorldDefinition {
    pub fn new(locations: Vec<LocationRecord>) -> Self {
        Self { locations }
    }

    pub fn start(&self) -> Option<&LocationRecord> {
        self.locations.first()
    }
}
