//! Command parsing for the quest interpreter.
//!
//! A line is split on whitespace; the first token selects a [`Verb`] through a
//! [`CommandTable`] built from the catalog vocabulary, the rest are arguments.
//! Arity is checked here so handlers only ever see well-formed commands.

use std::collections::HashMap;

use crate::quest::catalog::{MessageKey, Vocabulary};

/// The five verbs the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Look,
    Go,
    Take,
    Use,
    Wear,
}

impl Verb {
    pub fn min_args(self) -> usize {
        match self {
            Verb::Look => 0,
            Verb::Go | Verb::Take | Verb::Wear => 1,
            Verb::Use => 2,
        }
    }

    /// Prompt returned when too few arguments were given. `None` for verbs
    /// that take no arguments.
    pub fn missing_args_key(self) -> Option<MessageKey> {
        match self {
            Verb::Look => None,
            Verb::Go => Some(MessageKey::WhatDirection),
            Verb::Take => Some(MessageKey::WhatItem),
            Verb::Use => Some(MessageKey::WhatToUse),
            Verb::Wear => Some(MessageKey::WhatToWear),
        }
    }
}

/// Parsed form of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestCommand {
    Look,
    Go(String),
    Take(String),
    Use { item: String, target: String },
    Wear(String),
    /// Known verb with too few arguments.
    MissingArguments(Verb),
    /// Blank line.
    Empty,
    Unknown(String),
}

/// Mapping from verb token to verb.
#[derive(Debug, Clone)]
pub struct CommandTable {
    verbs: HashMap<String, Verb>,
}

impl CommandTable {
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let verbs = [
            (&vocabulary.look, Verb::Look),
            (&vocabulary.go, Verb::Go),
            (&vocabulary.take, Verb::Take),
            (&vocabulary.use_item, Verb::Use),
            (&vocabulary.wear, Verb::Wear),
        ]
        .into_iter()
        .map(|(token, verb)| (token.clone(), verb))
        .collect();
        Self { verbs }
    }

    pub fn verb(&self, token: &str) -> Option<Verb> {
        self.verbs.get(token).copied()
    }

    pub fn parse_command(&self, line: &str) -> QuestCommand {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = parts.split_first() else {
            return QuestCommand::Empty;
        };

        let Some(verb) = self.verb(head) else {
            return QuestCommand::Unknown(head.to_string());
        };

        if args.len() < verb.min_args() {
            return QuestCommand::MissingArguments(verb);
        }

        match verb {
            Verb::Look => QuestCommand::Look,
            Verb::Go => QuestCommand::Go(args[0].to_string()),
            Verb::Take => QuestCommand::Take(args[0].to_string()),
            Verb::Wear => QuestCommand::Wear(args[0].to_string()),
            Verb::Use => QuestCommand::Use {
                item: args[0].to_string(),
                target: args[1..].join(" "),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::catalog::MessageCatalog;

    fn table() -> CommandTable {
        CommandTable::from_vocabulary(MessageCatalog::default().vocabulary())
    }

    #[test]
    fn test_command_parsing() {
        let table = table();
        assert_eq!(table.parse_command("осмотреться"), QuestCommand::Look);
        assert_eq!(table.parse_command("осмотреться вокруг"), QuestCommand::Look);
        assert_eq!(
            table.parse_command("идти коридор"),
            QuestCommand::Go("коридор".to_string())
        );
        assert_eq!(
            table.parse_command("  взять   чай "),
            QuestCommand::Take("чай".to_string())
        );
        assert_eq!(
            table.parse_command("надеть Рюкзак"),
            QuestCommand::Wear("Рюкзак".to_string())
        );
        assert_eq!(
            table.parse_command("применить ключи входная дверь"),
            QuestCommand::Use {
                item: "ключи".to_string(),
                target: "входная дверь".to_string()
            }
        );
    }

    #[test]
    fn test_arity() {
        let table = table();
        assert_eq!(
            table.parse_command("идти"),
            QuestCommand::MissingArguments(Verb::Go)
        );
        assert_eq!(
            table.parse_command("взять"),
            QuestCommand::MissingArguments(Verb::Take)
        );
        assert_eq!(
            table.parse_command("применить ключи"),
            QuestCommand::MissingArguments(Verb::Use)
        );
        assert_eq!(
            table.parse_command("надеть"),
            QuestCommand::MissingArguments(Verb::Wear)
        );
    }

    #[test]
    fn test_missing_args_prompts() {
        assert_eq!(Verb::Look.missing_args_key(), None);
        assert_eq!(Verb::Go.missing_args_key(), Some(MessageKey::WhatDirection));
        assert_eq!(Verb::Take.missing_args_key(), Some(MessageKey::WhatItem));
        assert_eq!(Verb::Use.missing_args_key(), Some(MessageKey::WhatToUse));
        assert_eq!(Verb::Wear.missing_args_key(), Some(MessageKey::WhatToWear));
        for verb in [Verb::Look, Verb::Go, Verb::Take, Verb::Use, Verb::Wear] {
            assert_eq!(verb.min_args() == 0, verb.missing_args_key().is_none());
        }
    }

    #[test]
    fn test_empty_and_unknown_input() {
        let table = table();
        assert_eq!(table.parse_command(""), QuestCommand::Empty);
        assert_eq!(table.parse_command("   "), QuestCommand::Empty);
        assert_eq!(
            table.parse_command("прыгнуть высоко"),
            QuestCommand::Unknown("прыгнуть".to_string())
        );
        // verb tokens are case-sensitive
        assert_eq!(
            table.parse_command("Идти коридор"),
            QuestCommand::Unknown("Идти".to_string())
        );
    }
}
