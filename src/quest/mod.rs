//! Quest core: world graph, player state and the five-verb interpreter.
//!
//! A [`Session`] is built from an immutable [`WorldDefinition`] and a
//! [`MessageCatalog`], then fed one input line at a time. Loading those two
//! inputs from disk lives in [`seed_loader`]; a bundled sample world lives in
//! [`state`].

pub mod catalog;
pub mod commands;
pub mod errors;
pub mod narration;
pub mod player;
pub mod seed_loader;
pub mod session;
pub mod state;
pub mod types;
pub mod world;

pub use catalog::{CatalogFile, MessageCatalog, MessageKey, Vocabulary};
pub use commands::{CommandTable, QuestCommand, Verb};
pub use errors::QuestError;
pub use player::PlayerState;
pub use seed_loader::{
    load_catalog_from_json, load_world_from_json, parse_catalog, parse_world,
    save_catalog_to_json, save_world_to_json, validate_world,
};
pub use session::{process_all, Session};
pub use state::{canonical_world, CANONICAL_LOCATION_TITLES, START_LOCATION};
pub use types::*;
pub use world::WorldGraph;
