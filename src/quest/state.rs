use crate::quest::types::{LocationRecord, ObjectRecord, WorldDefinition};

/// Location the player starts in.
pub const START_LOCATION: &str = "кухня";

/// Locations of the bundled apartment world, in definition order.
pub const CANONICAL_LOCATION_TITLES: &[&str] = &["кухня", "коридор", "комната", "улица", "домой"];

/// The sample world shipped with the binary and written out by `init`.
///
/// The player wakes in the kitchen, has to fetch the backpack from the room,
/// pick up the keys and open the street door before leaving.
pub fn canonical_world() -> WorldDefinition {
    let kitchen = LocationRecord::new(START_LOCATION, "кухня, ничего интересного")
        .with_welcome("ты находишься на кухне, на столе: чай, надо собрать рюкзак и идти в универ")
        .with_flavor("кухня, ничего интересного")
        .with_no_item_message("на кухне пусто")
        .with_path("коридор")
        .with_object(ObjectRecord::new("столе").with_item("чай"));

    let corridor = LocationRecord::new("коридор", "ничего интересного")
        .with_flavor("ничего интересного")
        .with_no_item_message("ничего интересного")
        .with_path("кухня")
        .with_path("комната")
        .with_path("улица");

    let room = LocationRecord::new("комната", "ты в своей комнате")
        .with_flavor("ты в своей комнате")
        .with_no_item_message("пустая комната")
        .with_path("коридор")
        .with_object(
            ObjectRecord::new("столе")
                .with_item("ключи")
                .with_item("конспекты"),
        )
        .with_object(ObjectRecord::new("стуле").with_item("рюкзак"));

    let street = LocationRecord::new("улица", "на улице весна")
        .with_flavor("на улице весна")
        .with_path("домой")
        .locked();

    let home = LocationRecord::new("домой", "ты дома")
        .with_flavor("ты дома")
        .with_path("улица");

    WorldDefinition::new(vec![kitchen, corridor, room, street, home])
}
