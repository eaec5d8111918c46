//! Integration tests for LOOK first-visit and repeat-visit narration.

use textquest::quest::{
    canonical_world, LocationRecord, MessageCatalog, ObjectRecord, Session, WorldDefinition,
};

#[test]
fn test_first_look_uses_welcome_then_items() {
    let catalog = MessageCatalog::default();
    let mut session = Session::new(&canonical_world(), &catalog).unwrap();

    assert_eq!(
        session.process("осмотреться"),
        "ты находишься на кухне, на столе: чай, надо собрать рюкзак и идти в универ. можно пройти - коридор"
    );
    assert!(session.player().has_visited("кухня"));
    assert_eq!(
        session.process("осмотреться"),
        "столе: чай. можно пройти - коридор"
    );
}

#[test]
fn test_first_look_falls_back_to_description() {
    let catalog = MessageCatalog::default();
    let mut session = Session::new(&canonical_world(), &catalog).unwrap();
    session.process("идти коридор");
    session.process("идти комната");

    assert_eq!(
        session.process("осмотреться"),
        "ты в своей комнате. можно пройти - коридор"
    );
    assert_eq!(
        session.process("осмотреться"),
        "столе: ключи, конспекты, стуле: рюкзак. можно пройти - коридор"
    );
}

#[test]
fn test_empty_location_uses_no_item_message() {
    let catalog = MessageCatalog::default();
    let mut session = Session::new(&canonical_world(), &catalog).unwrap();
    session.process("идти коридор");
    session.process("идти комната");
    session.process("осмотреться");
    session.process("надеть рюкзак");
    session.process("взять ключи");
    session.process("взять конспекты");

    assert_eq!(
        session.process("осмотреться"),
        "пустая комната. можно пройти - коридор"
    );
}

#[test]
fn test_go_does_not_count_as_a_visit() {
    let catalog = MessageCatalog::default();
    let mut session = Session::new(&canonical_world(), &catalog).unwrap();
    session.process("идти коридор");
    session.process("идти кухня");

    assert!(!session.player().has_visited("кухня"));
    assert!(session
        .process("осмотреться")
        .starts_with("ты находишься на кухне"));
}

#[test]
fn test_look_without_paths_keeps_separator() {
    let catalog = MessageCatalog::default();
    let world = WorldDefinition::new(vec![LocationRecord::new("чулан", "темно")
        .with_object(ObjectRecord::new("полке").with_item("свеча"))]);
    let mut session = Session::new(&world, &catalog).unwrap();

    assert_eq!(session.process("осмотреться"), "темно. ");
    assert_eq!(session.process("осмотреться"), "полке: свеча. ");
}
