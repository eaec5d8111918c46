//! # Textquest - a small turn-based text adventure
//!
//! Textquest models a handful of connected locations holding furniture and
//! items, a player who walks between them, and a command interpreter that
//! turns short verb phrases into state changes and narration.
//!
//! ## Features
//!
//! - **Five verbs**: look, go, take, use and wear, with per-verb argument checks.
//! - **Backpack gate**: nothing but the backpack can be carried until it is worn.
//! - **Locked doors**: locked locations refuse entry until unlocked with the keys.
//! - **First-visit narration**: a location greets the player once, then lists what is left.
//! - **Data-driven content**: world and message catalog load from JSON; every
//!   player-facing string comes from the catalog.
//!
//! ## Quick Start
//!
//! ```rust
//! use textquest::quest::{canonical_world, MessageCatalog, Session};
//!
//! let catalog = MessageCatalog::default();
//! let mut session = Session::new(&canonical_world(), &catalog).unwrap();
//! let reply = session.process("взять чай");
//! assert_eq!(reply, "некуда класть");
//! ```
//!
//! ## Module Organization
//!
//! - [`quest`] - world graph, player state, interpreter and loaders
//! - [`config`] - TOML configuration for the binary
//! - [`logutil`] - single-line log escaping

pub mod config;
pub mod logutil;
pub mod quest;
