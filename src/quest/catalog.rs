//! Message catalog: every narration and error template, plus the vocabulary
//! of verb tokens and fixed identifiers the interpreter recognises.
//!
//! The on-disk layout ([`CatalogFile`]) groups strings into sections
//! (`errors`, `messages`, `commands`, `items`, `targets`, `places`). A
//! [`MessageCatalog`] is only built from a file once every key is present,
//! so lookups during a session never fail.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::quest::errors::QuestError;

/// Symbolic key of one narration or error template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    EnterCommand,
    WhatDirection,
    WhatItem,
    WhatToUse,
    WhatToWear,
    DoorOpen,
    YouWear,
    ItemTaken,
    CanGo,
    UnknownCommand,
    NoInventory,
    DoorClosed,
    ItemNotFound,
    NoItemInInventory,
    NoObjectInLocation,
    NoPath,
}

impl MessageKey {
    pub const ALL: [MessageKey; 16] = [
        MessageKey::EnterCommand,
        MessageKey::WhatDirection,
        MessageKey::WhatItem,
        MessageKey::WhatToUse,
        MessageKey::WhatToWear,
        MessageKey::DoorOpen,
        MessageKey::YouWear,
        MessageKey::ItemTaken,
        MessageKey::CanGo,
        MessageKey::UnknownCommand,
        MessageKey::NoInventory,
        MessageKey::DoorClosed,
        MessageKey::ItemNotFound,
        MessageKey::NoItemInInventory,
        MessageKey::NoObjectInLocation,
        MessageKey::NoPath,
    ];

    /// Catalog section this key lives in.
    pub fn section(self) -> &'static str {
        match self {
            MessageKey::UnknownCommand
            | MessageKey::NoInventory
            | MessageKey::DoorClosed
            | MessageKey::ItemNotFound
            | MessageKey::NoItemInInventory
            | MessageKey::NoObjectInLocation
            | MessageKey::NoPath => "errors",
            _ => "messages",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::EnterCommand => "enter_command",
            MessageKey::WhatDirection => "what_direction",
            MessageKey::WhatItem => "what_item",
            MessageKey::WhatToUse => "what_to_use",
            MessageKey::WhatToWear => "what_to_wear",
            MessageKey::DoorOpen => "door_open",
            MessageKey::YouWear => "you_wear",
            MessageKey::ItemTaken => "item_taken",
            MessageKey::CanGo => "can_go",
            MessageKey::UnknownCommand => "unknown_command",
            MessageKey::NoInventory => "no_inventory",
            MessageKey::DoorClosed => "door_closed",
            MessageKey::ItemNotFound => "item_not_found",
            MessageKey::NoItemInInventory => "no_item_in_inventory",
            MessageKey::NoObjectInLocation => "no_object_in_location",
            MessageKey::NoPath => "no_path",
        }
    }
}

/// Verb tokens and the fixed identifiers the built-in rules refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub look: String,
    pub go: String,
    pub take: String,
    pub use_item: String,
    pub wear: String,
    /// Item that opens the backpack gate.
    pub backpack: String,
    /// Item that opens the street door.
    pub keys: String,
    pub door: String,
    /// Location unlocked by using the keys on the door.
    pub street: String,
}

impl Vocabulary {
    /// Verb tokens keyed by their name in the `commands` section.
    pub fn verb_tokens(&self) -> [(&'static str, &str); 5] {
        [
            ("look", self.look.as_str()),
            ("go", self.go.as_str()),
            ("take", self.take.as_str()),
            ("use", self.use_item.as_str()),
            ("wear", self.wear.as_str()),
        ]
    }
}

/// Serialized catalog layout, one map per section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFile {
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
    #[serde(default)]
    pub items: BTreeMap<String, String>,
    #[serde(default)]
    pub targets: BTreeMap<String, String>,
    #[serde(default)]
    pub places: BTreeMap<String, String>,
}

/// Immutable, fully-populated catalog consumed by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    texts: HashMap<MessageKey, String>,
    vocabulary: Vocabulary,
}

const DEFAULT_TEXTS: [(MessageKey, &str); 16] = [
    (MessageKey::EnterCommand, "введите команду"),
    (MessageKey::WhatDirection, "уточните направление"),
    (MessageKey::WhatItem, "уточните предмет"),
    (MessageKey::WhatToUse, "уточните, что и к чему применить"),
    (MessageKey::WhatToWear, "уточните, что надеть"),
    (MessageKey::DoorOpen, "дверь открыта"),
    (MessageKey::YouWear, "вы надели: "),
    (MessageKey::ItemTaken, "предмет добавлен в инвентарь: "),
    (MessageKey::CanGo, "можно пройти - "),
    (MessageKey::UnknownCommand, "неизвестная команда"),
    (MessageKey::NoInventory, "некуда класть"),
    (MessageKey::DoorClosed, "дверь закрыта"),
    (MessageKey::ItemNotFound, "нет такого"),
    (MessageKey::NoItemInInventory, "нет предмета в инвентаре - "),
    (MessageKey::NoObjectInLocation, "не к чему применить"),
    (MessageKey::NoPath, "нет пути в "),
];

fn vocabulary_entry(
    section: &'static str,
    map: &BTreeMap<String, String>,
    key: &'static str,
) -> Result<String, QuestError> {
    map.get(key)
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .ok_or(QuestError::MissingVocabulary { section, key })
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let texts = DEFAULT_TEXTS
            .iter()
            .map(|(key, text)| (*key, text.to_string()))
            .collect();
        let vocabulary = Vocabulary {
            look: "осмотреться".to_string(),
            go: "идти".to_string(),
            take: "взять".to_string(),
            use_item: "применить".to_string(),
            wear: "надеть".to_string(),
            backpack: "рюкзак".to_string(),
            keys: "ключи".to_string(),
            door: "дверь".to_string(),
            street: "улица".to_string(),
        };
        Self { texts, vocabulary }
    }
}

impl MessageCatalog {
    /// Validate a deserialized catalog; every template and identifier must be present.
    pub fn from_file(file: CatalogFile) -> Result<Self, QuestError> {
        let mut texts = HashMap::with_capacity(MessageKey::ALL.len());
        for key in MessageKey::ALL {
            let section = match key.section() {
                "errors" => &file.errors,
                _ => &file.messages,
            };
            let text = section
                .get(key.as_str())
                .ok_or(QuestError::MissingCatalogKey {
                    section: key.section(),
                    key: key.as_str(),
                })?;
            texts.insert(key, text.clone());
        }

        let vocabulary = Vocabulary {
            look: vocabulary_entry("commands", &file.commands, "look")?,
            go: vocabulary_entry("commands", &file.commands, "go")?,
            take: vocabulary_entry("commands", &file.commands, "take")?,
            use_item: vocabulary_entry("commands", &file.commands, "use")?,
            wear: vocabulary_entry("commands", &file.commands, "wear")?,
            backpack: vocabulary_entry("items", &file.items, "backpack")?,
            keys: vocabulary_entry("items", &file.items, "keys")?,
            door: vocabulary_entry("targets", &file.targets, "door")?,
            street: vocabulary_entry("places", &file.places, "street")?,
        };

        let mut seen: HashMap<&str, &'static str> = HashMap::with_capacity(5);
        for (name, token) in vocabulary.verb_tokens() {
            if let Some(first) = seen.insert(token, name) {
                return Err(QuestError::DuplicateVerbToken {
                    token: token.to_string(),
                    first,
                    second: name,
                });
            }
        }

        Ok(Self { texts, vocabulary })
    }

    /// Inverse of [`MessageCatalog::from_file`], used to write seed files.
    pub fn to_file(&self) -> CatalogFile {
        let mut file = CatalogFile::default();
        for key in MessageKey::ALL {
            let target = match key.section() {
                "errors" => &mut file.errors,
                _ => &mut file.messages,
            };
            target.insert(key.as_str().to_string(), self.text(key).to_string());
        }
        let v = &self.vocabulary;
        for (name, token) in v.verb_tokens() {
            file.commands.insert(name.to_string(), token.to_string());
        }
        file.items.insert("backpack".to_string(), v.backpack.clone());
        file.items.insert("keys".to_string(), v.keys.clone());
        file.targets.insert("door".to_string(), v.door.clone());
        file.places.insert("street".to_string(), v.street.clone());
        file
    }

    pub fn text(&self, key: MessageKey) -> &str {
        self.texts.get(&key).map(String::as_str).unwrap_or_default()
    }

    /// Template followed directly by a subject, e.g. `"нет пути в " + target`.
    pub fn with_subject(&self, key: MessageKey, subject: &str) -> String {
        format!("{}{}", self.text(key), subject)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
