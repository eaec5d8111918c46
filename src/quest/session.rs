//! A play session: one world graph, one player, one catalog.
//!
//! [`Session::process`] is the whole interface to the interpreter. It never
//! fails: unknown verbs, missing arguments and blocked moves all come back as
//! ordinary narration strings and leave the session usable.

use log::{debug, info};

use crate::logutil::escape_log;
use crate::quest::catalog::{MessageCatalog, MessageKey};
use crate::quest::commands::{CommandTable, QuestCommand};
use crate::quest::errors::QuestError;
use crate::quest::narration;
use crate::quest::player::PlayerState;
use crate::quest::types::WorldDefinition;
use crate::quest::world::WorldGraph;

pub struct Session<'c> {
    catalog: &'c MessageCatalog,
    commands: CommandTable,
    world: WorldGraph,
    player: PlayerState,
}

impl<'c> Session<'c> {
    /// Deep-copy `definition` into a fresh session starting at its first location.
    pub fn new(
        definition: &WorldDefinition,
        catalog: &'c MessageCatalog,
    ) -> Result<Self, QuestError> {
        let start = definition.start().ok_or(QuestError::EmptyWorld)?;
        if start.locked {
            return Err(QuestError::LockedStart(start.title.clone()));
        }

        let world = WorldGraph::from_definition(definition);
        let player = PlayerState::new(&start.title);
        info!(
            "Quest session started: {} locations, start={}",
            definition.locations.len(),
            escape_log(&start.title)
        );

        Ok(Self {
            catalog,
            commands: CommandTable::from_vocabulary(catalog.vocabulary()),
            world,
            player,
        })
    }

    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Interpret one input line and return the text to display.
    pub fn process(&mut self, line: &str) -> String {
        let command = self.commands.parse_command(line);
        debug!(
            "Quest command parsed: location={} input={} command={:?}",
            escape_log(&self.player.location),
            escape_log(line),
            command
        );

        let reply = match command {
            QuestCommand::Look => self.handle_look(),
            QuestCommand::Go(target) => self.handle_go(&target),
            QuestCommand::Take(item) => self.handle_take(&item),
            QuestCommand::Use { item, target } => self.handle_use(&item, &target),
            QuestCommand::Wear(item) => self.handle_wear(&item),
            QuestCommand::MissingArguments(verb) => match verb.missing_args_key() {
                Some(key) => self.catalog.text(key).to_string(),
                None => self.handle_look(),
            },
            QuestCommand::Empty => self.catalog.text(MessageKey::EnterCommand).to_string(),
            QuestCommand::Unknown(_) => self.catalog.text(MessageKey::UnknownCommand).to_string(),
        };

        debug!("Quest reply: {}", escape_log(&reply));
        reply
    }

    fn handle_look(&mut self) -> String {
        let title = self.player.location.clone();
        let first_time = self.player.visit(&title);
        match self.world.find_location(&title) {
            Some(location) if first_time => narration::first_visit(location, self.catalog),
            Some(location) => narration::repeat_visit(location, self.catalog),
            None => String::new(),
        }
    }

    fn handle_go(&mut self, target: &str) -> String {
        let Some(destination) = self.world.find_location(target) else {
            return self.catalog.with_subject(MessageKey::NoPath, target);
        };
        // lock check comes before adjacency
        if destination.locked {
            return self.catalog.text(MessageKey::DoorClosed).to_string();
        }
        let adjacent = self
            .world
            .find_location(&self.player.location)
            .map(|here| here.has_path_to(target))
            .unwrap_or(false);
        if !adjacent {
            return self.catalog.with_subject(MessageKey::NoPath, target);
        }

        let reply = narration::arrival(destination, self.catalog);
        debug!(
            "Player moved {} -> {}",
            escape_log(&self.player.location),
            escape_log(target)
        );
        self.player.move_to(target);
        reply
    }

    fn handle_take(&mut self, item_title: &str) -> String {
        let backpack = &self.catalog.vocabulary().backpack;
        let is_backpack = item_title == backpack.as_str();
        if !is_backpack && !self.player.has_backpack {
            return self.catalog.text(MessageKey::NoInventory).to_string();
        }

        let Some((item, object)) = self.world.take_item_from(&self.player.location, item_title)
        else {
            return self.catalog.text(MessageKey::ItemNotFound).to_string();
        };
        debug!(
            "Took {} from {} at {}",
            escape_log(&item.title),
            escape_log(&object),
            escape_log(&self.player.location)
        );

        if is_backpack {
            self.player.acquire_backpack(item);
            self.catalog.with_subject(MessageKey::YouWear, item_title)
        } else {
            self.player.acquire_item(item);
            self.catalog.with_subject(MessageKey::ItemTaken, item_title)
        }
    }

    fn handle_wear(&mut self, item_title: &str) -> String {
        let backpack = self.catalog.vocabulary().backpack.clone();
        if item_title.to_lowercase() != backpack {
            return self.catalog.text(MessageKey::UnknownCommand).to_string();
        }
        self.handle_take(&backpack)
    }

    fn handle_use(&mut self, item_title: &str, target: &str) -> String {
        if !self.player.has_item(item_title) {
            return self
                .catalog
                .with_subject(MessageKey::NoItemInInventory, item_title);
        }

        let vocabulary = self.catalog.vocabulary();
        if item_title == vocabulary.keys && target == vocabulary.door {
            // the street door opens from anywhere
            if self.world.unlock(&vocabulary.street) {
                info!("Door unlocked: {}", escape_log(&vocabulary.street));
                return self.catalog.text(MessageKey::DoorOpen).to_string();
            }
        }
        self.catalog.text(MessageKey::NoObjectInLocation).to_string()
    }
}

/// Run `lines` in order against a fresh session built from `definition`.
pub fn process_all<I, S>(
    definition: &WorldDefinition,
    catalog: &MessageCatalog,
    lines: I,
) -> Result<Vec<String>, QuestError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut session = Session::new(definition, catalog)?;
    Ok(lines
        .into_iter()
        .map(|line| session.process(line.as_ref()))
        .collect())
}
