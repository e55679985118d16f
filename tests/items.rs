use derelict::ship::actions::unlock;
use derelict::ship::{build_world, ActionError, Game, Item, ItemKind, Room, World};
mod common;

fn items_of_kind(world: &World, kind: ItemKind) -> Vec<(String, Item)> {
    let mut found: Vec<(String, Item)> = world
        .rooms()
        .flat_map(|room| {
            room.items
                .values()
                .filter(move |item| item.kind == kind)
                .map(move |item| (room.name.clone(), item.clone()))
        })
        .collect();
    found.sort_by(|a, b| a.1.name.cmp(&b.1.name));
    found
}

#[test]
fn every_key_chest_pairing_opens_iff_ids_match() {
    let world = build_world();
    let keys = items_of_kind(&world, ItemKind::Key);
    let chests = items_of_kind(&world, ItemKind::Chest);
    assert_eq!(keys.len(), 5);
    assert_eq!(chests.len(), 5);

    for (key_room, key) in &keys {
        for (_, chest) in &chests {
            // Carry the chest to the key so one room holds both.
            let mut world = build_world();
            world.place(key_room, chest.clone());
            let mut game = Game::with_world(world, key_room).unwrap();
            game.process(&format!("cp {}", key.name));

            let result = unlock(&mut game, &chest.name, &key.name);
            if chest.key_id == key.key_id {
                let text = result.unwrap_or_else(|e| panic!("{} should open {}: {e}", key.name, chest.name));
                assert!(text.ends_with(&format!("Inside you find: {}", chest.content)));
            } else {
                assert_eq!(
                    result,
                    Err(ActionError::KeyMismatch {
                        chest: chest.name.clone(),
                        key: key.name.clone()
                    })
                );
                assert!(game.current_room().items.contains_key(&chest.name));
            }
        }
    }
}

#[test]
fn copy_keeps_item_in_room() {
    let mut game = Game::new();
    common::walk(&mut game, &["Observatory", "Storage"]);

    assert_eq!(game.process("cp Epsilon Key").text, "Copied Epsilon Key to inventory.");
    assert_eq!(
        game.process("cat Epsilon Key").text,
        "Epsilon Key: A tiny key with epsilon written in alien script."
    );
    assert_eq!(game.process("inventory").text, "Inventory:\n  Epsilon Key");

    let listing = game.process("ls").text;
    assert!(common::listed_names(&listing).contains(&"Epsilon Key".to_string()));

    // Still readable from the inventory once the player has moved on.
    common::walk(&mut game, &["Observatory"]);
    assert!(game.process("cat Epsilon Key").text.starts_with("Epsilon Key:"));
}

#[test]
fn notes_show_their_content() {
    let mut game = Game::new();
    assert_eq!(
        game.process("cat Captain's Note").text,
        "Captain's Note: Personal note from the captain\nContent: The flag is hidden in the room most connected to our journey."
    );
    assert_eq!(game.process("cp Captain's Note").text, "Copied Captain's Note to inventory.");
}

#[test]
fn examine_and_copy_have_distinct_not_found_messages() {
    let mut game = Game::new();
    assert_eq!(game.process("cat Alpha Key").text, "Item not found: Alpha Key");
    assert_eq!(
        game.process("cp Alpha Key").text,
        "Item not found in current room: Alpha Key"
    );
    assert_eq!(game.process("cat captain's note").text, "Item not found: captain's note");
}

#[test]
fn chests_cannot_be_copied() {
    let mut game = Game::new();
    common::walk(&mut game, &["Observatory"]);
    assert_eq!(
        game.process("cp Observatory Chest").text,
        "You cannot copy Observatory Chest. Use 'unrar' to open it."
    );
    assert!(game.inventory().is_empty());
}

#[test]
fn flag_wins_without_ending_the_session() {
    let mut game = Game::new();
    common::walk(&mut game, &["Communications"]);
    assert!(!game.has_won());

    let reply = game.process("cp Flag");
    assert!(reply.text.starts_with("Congratulations!"));
    assert!(reply.text.ends_with("You win!"));
    assert!(!reply.terminate);
    assert!(game.has_won());
    assert!(game.inventory().contains("Flag"));

    let after = game.process("inv");
    assert_eq!(after.text, "Inventory:\n  Flag");
    assert!(!after.terminate);
    assert!(game.process("exit").terminate);
}

#[test]
fn unrar_reads_only_first_token_as_chest() {
    let mut game = Game::new();
    common::walk(&mut game, &["Observatory", "Storage", "Engine Room"]);
    game.process("cp Alpha Key");
    common::walk(&mut game, &["Storage", "Armory"]);

    let reply = game.process("unrar Armory Chest Alpha Key");
    assert_eq!(reply.text, "Chest not found in current room: Armory");
    assert!(game.current_room().items.contains_key("Armory Chest"));
}

#[test]
fn unrar_opens_single_word_chest_through_the_command_line() {
    let mut world = World::new();
    world.add_room(
        Room::new("Hold", "Dark and cold.")
            .with_item(Item::key("Rusty Key", "Orange with age.", 3))
            .with_item(Item::chest("Locker", "A dented locker.", 3, "Oxygen canister")),
    );
    let mut game = Game::with_world(world, "Hold").unwrap();

    assert_eq!(
        game.process("unrar Locker Rusty Key").text,
        "Key not found in inventory: Rusty Key"
    );
    game.process("cp Rusty Key");
    assert_eq!(
        game.process("unrar Locker Rusty Key").text,
        "You use the Rusty Key to open the Locker.\nInside you find: Oxygen canister"
    );

    let names = common::listed_names(&game.process("ls").text);
    assert!(!names.contains(&"Locker".to_string()));
    assert!(names.contains(&"Locker contents".to_string()));
    assert_eq!(
        game.process("cat Locker contents").text,
        "Locker contents: Contents retrieved from the Locker\nContent: Oxygen canister"
    );
    assert_eq!(
        game.process("cp Locker contents").text,
        "Copied Locker contents to inventory."
    );
    assert!(game.inventory().contains("Rusty Key"));
}

#[test]
fn unrar_type_checks_both_arguments() {
    let mut world = World::new();
    world.add_room(
        Room::new("Hold", "")
            .with_item(Item::note("Manifest", "Cargo list.", "Nothing listed."))
            .with_item(Item::chest("Locker", "", 1, "Fuse")),
    );
    let mut game = Game::with_world(world, "Hold").unwrap();
    game.process("cp Manifest");

    assert_eq!(game.process("unrar Manifest Manifest").text, "Manifest is not a chest.");
    assert_eq!(game.process("unrar Locker Manifest").text, "Manifest is not a key.");
}
