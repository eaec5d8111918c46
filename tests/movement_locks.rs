//! Integration tests for GO: existence, lock and adjacency checks.

use textquest::quest::{canonical_world, LocationRecord, MessageCatalog, Session, WorldDefinition};

#[test]
fn test_go_along_paths() {
    let catalog = MessageCatalog::default();
    let mut session = Session::new(&canonical_world(), &catalog).unwrap();

    assert_eq!(
        session.process("идти коридор"),
        "ничего интересного. можно пройти - кухня, комната, улица"
    );
    assert_eq!(session.player().location, "коридор");
    assert_eq!(
        session.process("идти комната"),
        "ты в своей комнате. можно пройти - коридор"
    );
    assert_eq!(session.player().location, "комната");
}

#[test]
fn test_go_unknown_location() {
    let catalog = MessageCatalog::default();
    let mut session = Session::new(&canonical_world(), &catalog).unwrap();

    assert_eq!(session.process("идти чердак"), "нет пути в чердак");
    assert_eq!(session.process("идти"), "уточните направление");
    assert_eq!(session.player().location, "кухня");
}

#[test]
fn test_locked_reported_before_adjacency() {
    let catalog = MessageCatalog::default();
    let mut session = Session::new(&canonical_world(), &catalog).unwrap();

    // street is locked and not adjacent to the kitchen
    assert_eq!(session.process("идти улица"), "дверь закрыта");
    assert_eq!(session.player().location, "кухня");

    session.process("идти коридор");
    assert_eq!(session.process("идти улица"), "дверь закрыта");
    assert_eq!(session.player().location, "коридор");
}

#[test]
fn test_non_adjacent_unlocked_location() {
    let catalog = MessageCatalog::default();
    let mut session = Session::new(&canonical_world(), &catalog).unwrap();

    assert_eq!(session.process("идти комната"), "нет пути в комната");
    assert_eq!(session.player().location, "кухня");
}

#[test]
fn test_paths_are_directed() {
    let catalog = MessageCatalog::default();
    let world = WorldDefinition::new(vec![
        LocationRecord::new("двор", "двор").with_path("сад"),
        LocationRecord::new("сад", "сад"),
    ]);
    let mut session = Session::new(&world, &catalog).unwrap();

    // no flavor and no paths: arrival narration is empty
    assert_eq!(session.process("идти сад"), "");
    assert_eq!(session.process("идти двор"), "нет пути в двор");
    assert_eq!(session.player().location, "сад");
}
