//! Seed data loaders for the world definition and message catalog.
//!
//! Both files are JSON so operators can swap in their own map or translate
//! the narration without recompiling. Anything wrong with them is fatal: a
//! session is never built from a half-valid world.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::quest::catalog::{CatalogFile, MessageCatalog};
use crate::quest::errors::QuestError;
use crate::quest::types::WorldDefinition;

/// Load locations from a world file (JSON array, first element is the start).
pub fn load_world_from_json<P: AsRef<Path>>(path: P) -> Result<WorldDefinition, QuestError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let world = parse_world(&contents)?;
    info!(
        "Loaded world from {}: {} locations",
        path.display(),
        world.locations.len()
    );
    Ok(world)
}

/// Parse and validate a world definition from JSON text.
pub fn parse_world(contents: &str) -> Result<WorldDefinition, QuestError> {
    let world: WorldDefinition = serde_json::from_str(contents)?;
    validate_world(&world)?;
    Ok(world)
}

/// Load the message catalog (sections: errors, messages, commands, items, targets, places).
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<MessageCatalog, QuestError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents)?;
    info!("Loaded message catalog from {}", path.display());
    Ok(catalog)
}

pub fn parse_catalog(contents: &str) -> Result<MessageCatalog, QuestError> {
    let file: CatalogFile = serde_json::from_str(contents)?;
    MessageCatalog::from_file(file)
}

/// Structural checks a world must pass before a session may use it.
///
/// Hard failures: no locations, duplicate titles, locked start. Paths to
/// unknown titles and repeated item titles inside one object are allowed but
/// logged, since `go` and `take` already handle them.
pub fn validate_world(world: &WorldDefinition) -> Result<(), QuestError> {
    let start = world.start().ok_or(QuestError::EmptyWorld)?;
    if start.locked {
        return Err(QuestError::LockedStart(start.title.clone()));
    }

    let mut titles = HashSet::with_capacity(world.locations.len());
    for location in &world.locations {
        if !titles.insert(location.title.as_str()) {
            return Err(QuestError::DuplicateLocation(location.title.clone()));
        }
    }

    for location in &world.locations {
        for path in &location.paths {
            if !titles.contains(path.as_str()) {
                warn!(
                    "Location {} has a path to unknown location {}",
                    location.title, path
                );
            }
        }
        for object in &location.objects {
            let mut seen = HashSet::new();
            for title in object.item_titles() {
                if !seen.insert(title) {
                    warn!(
                        "Object {} in {} holds several items titled {}; they are interchangeable",
                        object.title, location.title, title
                    );
                }
            }
        }
    }

    Ok(())
}

/// Write a world definition as pretty JSON.
pub fn save_world_to_json<P: AsRef<Path>>(
    path: P,
    world: &WorldDefinition,
) -> Result<(), QuestError> {
    let contents = serde_json::to_string_pretty(world)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Write a message catalog in its sectioned JSON layout.
pub fn save_catalog_to_json<P: AsRef<Path>>(
    path: P,
    catalog: &MessageCatalog,
) -> Result<(), QuestError> {
    let contents = serde_json::to_string_pretty(&catalog.to_file())?;
    fs::write(path, contents)?;
    Ok(())
}
