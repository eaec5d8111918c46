//! Pure sentence builders over locations and the message catalog.

use crate::quest::catalog::{MessageCatalog, MessageKey};
use crate::quest::types::LocationRecord;

/// Separator between a lead sentence and the paths description.
const SENTENCE_BREAK: &str = ". ";

/// `"<can_go>a, b, c"`, or an empty string when there are no paths.
pub fn paths_description(location: &LocationRecord, catalog: &MessageCatalog) -> String {
    if location.paths.is_empty() {
        return String::new();
    }
    format!(
        "{}{}",
        catalog.text(MessageKey::CanGo),
        location.paths.join(", ")
    )
}

/// `"<object>: a, b, <object>: c"` over objects that still hold items.
pub fn items_description(location: &LocationRecord) -> String {
    location
        .objects
        .iter()
        .filter(|object| !object.items.is_empty())
        .map(|object| {
            let titles: Vec<&str> = object.item_titles().collect();
            format!("{}: {}", object.title, titles.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn with_paths(lead: &str, location: &LocationRecord, catalog: &MessageCatalog) -> String {
    format!(
        "{}{}{}",
        lead,
        SENTENCE_BREAK,
        paths_description(location, catalog)
    )
}

/// Narration for the first `look` at a location: welcome, else description.
pub fn first_visit(location: &LocationRecord, catalog: &MessageCatalog) -> String {
    let lead = if location.welcome.is_empty() {
        &location.description
    } else {
        &location.welcome
    };
    with_paths(lead, location, catalog)
}

/// Narration for later `look`s: remaining items, else the empty-room message.
pub fn repeat_visit(location: &LocationRecord, catalog: &MessageCatalog) -> String {
    let items = items_description(location);
    let lead = if items.is_empty() {
        location.no_item_message.as_str()
    } else {
        items.as_str()
    };
    with_paths(lead, location, catalog)
}

/// Narration on arrival through `go`.
pub fn arrival(location: &LocationRecord, catalog: &MessageCatalog) -> String {
    if location.flavor.is_empty() {
        paths_description(location, catalog)
    } else {
        with_paths(&location.flavor, location, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::types::ObjectRecord;

    fn room() -> LocationRecord {
        LocationRecord::new("комната", "ты в своей комнате")
            .with_no_item_message("пустая комната")
            .with_path("коридор")
            .with_object(
                ObjectRecord::new("столе")
                    .with_item("ключи")
                    .with_item("конспекты"),
            )
            .with_object(ObjectRecord::new("полке"))
            .with_object(ObjectRecord::new("стуле").with_item("рюкзак"))
    }

    #[test]
    fn items_skip_empty_objects() {
        assert_eq!(
            items_description(&room()),
            "столе: ключи, конспекты, стуле: рюкзак"
        );
    }

    #[test]
    fn paths_empty_when_no_edges() {
        let catalog = MessageCatalog::default();
        let dead_end = LocationRecord::new("домой", "");
        assert_eq!(paths_description(&dead_end, &catalog), "");
        assert_eq!(
            paths_description(&room(), &catalog),
            "можно пройти - коридор"
        );
    }

    #[test]
    fn first_visit_prefers_welcome() {
        let catalog = MessageCatalog::default();
        let mut location = room();
        assert_eq!(
            first_visit(&location, &catalog),
            "ты в своей комнате. можно пройти - коридор"
        );
        location.welcome = "добро пожаловать".to_string();
        assert_eq!(
            first_visit(&location, &catalog),
            "добро пожаловать. можно пройти - коридор"
        );
    }

    #[test]
    fn repeat_visit_falls_back_to_no_item_message() {
        let catalog = MessageCatalog::default();
        let mut location = room();
        location.objects.iter_mut().for_each(|o| o.items.clear());
        assert_eq!(
            repeat_visit(&location, &catalog),
            "пустая комната. можно пройти - коридор"
        );
    }

    #[test]
    fn arrival_without_flavor_is_paths_only() {
        let catalog = MessageCatalog::default();
        let location = room();
        assert_eq!(arrival(&location, &catalog), "можно пройти - коридор");
        let location = location.with_flavor("ты в своей комнате");
        assert_eq!(
            arrival(&location, &catalog),
            "ты в своей комнате. можно пройти - коридор"
        );
    }
}
