//! The fixed layout of the derelict ship.
//!
//! Every room, corridor and item placement is a static table. Building the
//! world cannot fail and produces the same ship every time.

use std::collections::HashMap;

use super::types::{Item, Room};

pub const START_ROOM: &str = "Bridge";
pub const FLAG_ROOM: &str = "Communications";

const ROOMS: [&str; 10] = [
    "Bridge",
    "Engine Room",
    "Cargo Bay",
    "Medical Bay",
    "Armory",
    "Crew Quarters",
    "Storage",
    "Observatory",
    "Communications",
    "Airlock",
];

/// Undirected corridors; each is added in both directions.
const CONNECTIONS: [(&str, &str); 15] = [
    ("Bridge", "Communications"),
    ("Bridge", "Observatory"),
    ("Bridge", "Crew Quarters"),
    ("Engine Room", "Cargo Bay"),
    ("Engine Room", "Storage"),
    ("Cargo Bay", "Medical Bay"),
    ("Cargo Bay", "Armory"),
    ("Medical Bay", "Crew Quarters"),
    ("Armory", "Storage"),
    ("Armory", "Airlock"),
    ("Crew Quarters", "Communications"),
    ("Storage", "Observatory"),
    ("Observatory", "Communications"),
    ("Communications", "Airlock"),
    ("Airlock", "Cargo Bay"),
];

// (room, name, description, key id)
const KEYS: [(&str, &str, &str, u32); 5] = [
    ("Engine Room", "Alpha Key", "A small key with an alpha symbol etched on it.", 1),
    ("Cargo Bay", "Beta Key", "A metallic key with a beta marking.", 2),
    ("Medical Bay", "Gamma Key", "A crystalline key pulsing with energy. Marked gamma.", 3),
    ("Armory", "Delta Key", "A heavy key with delta inscribed on its surface.", 4),
    ("Storage", "Epsilon Key", "A tiny key with epsilon written in alien script.", 5),
];

// (room, name, description, key id, content)
const CHESTS: [(&str, &str, &str, u32, &str); 5] = [
    (
        "Armory",
        "Armory Chest",
        "A heavily reinforced chest requiring a specific key.",
        1,
        "Military-grade plasma rifle",
    ),
    (
        "Storage",
        "Storage Chest",
        "A sealed container with an electronic lock.",
        2,
        "Emergency beacon device",
    ),
    (
        "Medical Bay",
        "Medical Chest",
        "A bio-secured container for medical supplies.",
        3,
        "Antidote for alien pathogen",
    ),
    (
        "Observatory",
        "Observatory Chest",
        "A crystalline container that resonates softly.",
        4,
        "Ancient star map",
    ),
    (
        "Engine Room",
        "Engineering Chest",
        "A heavy chest with multiple locking mechanisms.",
        5,
        "Quantum fusion core",
    ),
];

// (room, name, description, content)
const NOTES: [(&str, &str, &str, &str); 3] = [
    (
        "Engine Room",
        "Engine Log",
        "A partially damaged engineering log",
        "Engine failure caused by quantum instability. Key system malfunctioning.",
    ),
    (
        "Bridge",
        "Captain's Note",
        "Personal note from the captain",
        "The flag is hidden in the room most connected to our journey.",
    ),
    (
        "Observatory",
        "Scientist's Journal",
        "Research notes from the science team",
        "Pattern analysis shows the observatory connects to everything.",
    ),
];

const FLAG_NAME: &str = "Flag";
const FLAG_DESCRIPTION: &str =
    "The escape flag! This marks your successful escape from the derelict ship.";

/// Description text for a room; unknown names get an empty description.
pub fn room_description(name: &str) -> &'static str {
    match name {
        "Bridge" => "The command center of the ship. Control panels flicker with emergency lighting.",
        "Engine Room" => "Massive reactors hum with residual energy. Pipes and conduits line the walls.",
        "Cargo Bay" => "Crates and containers are stacked haphazardly. The air smells of metal and oil.",
        "Medical Bay" => "Sterile environment with medical equipment. Emergency lights create eerie shadows.",
        "Armory" => "Weapon racks line the walls. Ammo containers are scattered about.",
        "Crew Quarters" => "Personal belongings float in zero gravity. Some signs of a struggle are evident.",
        "Storage" => "Various supplies and equipment are stored here. It's dimly lit and cluttered.",
        "Observatory" => "Large windows show the vastness of space. Star charts cover the walls.",
        "Communications" => "Radio equipment and long-range transmitters. Control panels show incoming signals.",
        "Airlock" => "The gateway to the void of space. Heavy doors with security protocols.",
        _ => "",
    }
}

/// Owner of every room in the ship, keyed by room name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    rooms: HashMap<String, Room>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. A room with the same name is replaced.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.name.clone(), room);
    }

    /// Join two existing rooms in both directions. Unknown names are ignored.
    pub fn connect(&mut self, a: &str, b: &str) {
        if !(self.rooms.contains_key(a) && self.rooms.contains_key(b)) {
            return;
        }
        if let Some(room) = self.rooms.get_mut(a) {
            room.connections.insert(b.to_string());
        }
        if let Some(room) = self.rooms.get_mut(b) {
            room.connections.insert(a.to_string());
        }
    }

    /// Place an item in a named room. Returns false when the room does not exist.
    pub fn place(&mut self, room_name: &str, item: Item) -> bool {
        match self.rooms.get_mut(room_name) {
            Some(room) => {
                room.place(item);
                true
            }
            None => false,
        }
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Build the derelict ship.
pub fn build_world() -> World {
    let mut world = World::new();

    for name in ROOMS {
        world.add_room(Room::new(name, room_description(name)));
    }
    for (a, b) in CONNECTIONS {
        world.connect(a, b);
    }

    for (room, name, description, key_id) in KEYS {
        world.place(room, Item::key(name, description, key_id));
    }
    for (room, name, description, key_id, content) in CHESTS {
        world.place(room, Item::chest(name, description, key_id, content));
    }
    for (room, name, description, content) in NOTES {
        world.place(room, Item::note(name, description, content));
    }
    world.place(FLAG_ROOM, Item::flag(FLAG_NAME, FLAG_DESCRIPTION));

    world
}
