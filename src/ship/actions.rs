//! Action handlers, one per command.
//!
//! Each handler reads and mutates the [`Game`] it is given and returns the
//! text to show the player. Failures come back as [`ActionError`] before any
//! state has been touched.

use log::info;

use super::commands::{joined, resolve_name, split_unrar_args};
use super::errors::ActionError;
use super::types::{Item, ItemKind, Room};
use super::Game;

pub type ActionResult = Result<String, ActionError>;

const HELP_TEXT: &str = "Available commands:
  ls [room]           - List items in current room or specified room
  cd <room>           - Move to another room
  cat <item>          - Examine an item
  cp <item>           - Copy an item (add to inventory)
  unrar <chest> <key> - Open a chest with a specific key
  inventory           - Show your inventory
  help                - Show this help message
  exit                - Quit the game";

const WIN_TEXT: &str = "Congratulations! You found the flag and successfully escaped the derelict spaceship!
You win!";

pub fn help() -> ActionResult {
    Ok(HELP_TEXT.to_string())
}

/// `ls [room]`: items and exits of the current room, or of a room already visited.
pub fn list(game: &Game, args: &[String]) -> ActionResult {
    if args.is_empty() {
        return Ok(render_room(game.current_room()));
    }

    let name = resolve_name(args, |n| game.world.contains(n))
        .ok_or_else(|| ActionError::RoomNotFound(joined(args)))?;
    let room = game
        .world
        .room(&name)
        .ok_or_else(|| ActionError::RoomNotFound(name.clone()))?;

    if !room.visited && room.name != game.current {
        return Err(ActionError::NotVisited(name));
    }
    Ok(render_room(room))
}

fn render_room(room: &Room) -> String {
    let mut out = format!("Items in {}:\n", room.name);
    let items = room.item_names();
    if items.is_empty() {
        out.push_str("  (nothing of interest)\n");
    }
    for name in items {
        out.push_str(&format!("  {}\n", name));
    }

    out.push_str("\nConnected rooms:");
    let exits = room.connection_names();
    if exits.is_empty() {
        out.push_str("\n  (no connections)");
    }
    for name in exits {
        out.push_str(&format!("\n  {}", name));
    }
    out
}

/// `cd <room>`: move to a directly connected room.
pub fn change_room(game: &mut Game, args: &[String]) -> ActionResult {
    if args.is_empty() {
        return Err(ActionError::Usage("cd <room>"));
    }

    let here = game.current_room();
    let target = resolve_name(args, |n| here.is_connected_to(n)).ok_or_else(|| {
        ActionError::CannotMove {
            target: joined(args),
            exits: here.connection_names().into_iter().map(String::from).collect(),
        }
    })?;

    let room = game
        .world
        .room_mut(&target)
        .ok_or_else(|| ActionError::RoomNotFound(target.clone()))?;
    room.visited = true;
    let text = format!("Moved to {}\nDescription: {}", room.name, room.description);

    info!("moved {} -> {}", game.current, target);
    game.current = target;
    Ok(text)
}

/// `cat <item>`: describe an item in the current room, else in the inventory.
pub fn examine(game: &Game, args: &[String]) -> ActionResult {
    if args.is_empty() {
        return Err(ActionError::Usage("cat <item>"));
    }

    let name = joined(args);
    let item = game
        .current_room()
        .items
        .get(&name)
        .or_else(|| game.inventory.get(&name))
        .ok_or_else(|| ActionError::ItemNotFound(name.clone()))?;

    let mut out = format!("{}: {}", item.name, item.description);
    if item.has_content() {
        out.push_str(&format!("\nContent: {}", item.content));
    }
    Ok(out)
}

/// `cp <item>`: copy an item from the current room into the inventory.
///
/// The room keeps its item. Chests are refused; the flag wins the game but
/// does not end the session.
pub fn copy(game: &mut Game, args: &[String]) -> ActionResult {
    if args.is_empty() {
        return Err(ActionError::Usage("cp <item>"));
    }

    let name = joined(args);
    let item = game
        .current_room()
        .items
        .get(&name)
        .cloned()
        .ok_or_else(|| ActionError::NotInRoom(name.clone()))?;

    match item.kind {
        ItemKind::Chest => Err(ActionError::NotCopyable(name)),
        ItemKind::Flag => {
            game.inventory.add_copy(&item);
            info!("flag acquired in {}", game.current);
            Ok(WIN_TEXT.to_string())
        }
        ItemKind::Key | ItemKind::Normal => {
            game.inventory.add_copy(&item);
            info!("copied {} ({}) to inventory", name, item.kind.as_str());
            Ok(format!("Copied {} to inventory.", name))
        }
    }
}

/// `unrar <chest> <key...>`: the chest is the first token, the key the rest.
pub fn unrar(game: &mut Game, args: &[String]) -> ActionResult {
    let (chest, key) =
        split_unrar_args(args).ok_or(ActionError::Usage("unrar <chest> <key>"))?;
    unlock(game, &chest, &key)
}

/// Open `chest_name` in the current room with `key_name` from the inventory.
///
/// On success the chest is replaced by a normal "<chest> contents" item
/// holding its payload. Keys are never consumed.
pub fn unlock(game: &mut Game, chest_name: &str, key_name: &str) -> ActionResult {
    let chest = game
        .current_room()
        .items
        .get(chest_name)
        .ok_or_else(|| ActionError::ChestNotFound(chest_name.to_string()))?;
    if chest.kind != ItemKind::Chest {
        return Err(ActionError::NotAChest(chest_name.to_string()));
    }

    let key = game
        .inventory
        .get(key_name)
        .ok_or_else(|| ActionError::KeyNotFound(key_name.to_string()))?;
    if key.kind != ItemKind::Key {
        return Err(ActionError::NotAKey(key_name.to_string()));
    }

    if chest.key_id != key.key_id {
        return Err(ActionError::KeyMismatch {
            chest: chest_name.to_string(),
            key: key_name.to_string(),
        });
    }

    let contents = Item::chest_contents(chest);
    let text = format!(
        "You use the {} to open the {}.\nInside you find: {}",
        key_name, chest_name, contents.content
    );

    let room = game.current_room_mut();
    room.place(contents);
    room.items.remove(chest_name);
    info!("opened {} in {} with {}", chest_name, room.name, key_name);
    Ok(text)
}

pub fn show_inventory(game: &Game) -> ActionResult {
    let mut out = String::from("Inventory:");
    if game.inventory.is_empty() {
        out.push_str("\n  (empty)");
    }
    for name in game.inventory.names() {
        out.push_str(&format!("\n  {}", name));
    }
    Ok(out)
}
