use thiserror::Error;

/// Errors that can arise while loading a world definition or message catalog.
///
/// None of these are produced once a [`crate::quest::Session`] exists: the
/// command interpreter reports every player mistake as narration text.
#[derive(Debug, Error)]
pub enum QuestError {
    /// Wrapper around IO errors (missing seed files, unwritable data dir).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around serde_json parse and encode errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Returned when a world definition contains no locations at all.
    #[error("world definition has no locations")]
    EmptyWorld,

    /// Two locations share the same title.
    #[error("duplicate location title: {0}")]
    DuplicateLocation(String),

    /// The first location is where the player starts, so it cannot be locked.
    #[error("start location is locked: {0}")]
    LockedStart(String),

    /// A catalog section is missing a narration template.
    #[error("message catalog is missing key {section}.{key}")]
    MissingCatalogKey { section: &'static str, key: &'static str },

    /// A catalog section is missing a verb token or fixed identifier.
    #[error("message catalog vocabulary is missing {section}.{key}")]
    MissingVocabulary { section: &'static str, key: &'static str },

    /// Two verbs share one command token.
    #[error("message catalog maps verb token {token} to both {first} and {second}")]
    DuplicateVerbToken {
        token: String,
        first: &'static str,
        second: &'static str,
    },
}
