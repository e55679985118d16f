use std::collections::{BTreeSet, HashMap};

/// What an item is for. Drives which commands accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Key,
    Chest,
    Flag,
    Normal,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Key => "key",
            ItemKind::Chest => "chest",
            ItemKind::Flag => "flag",
            ItemKind::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    /// Pairs a key with its chest. Zero for kinds that never take part in unlocking.
    pub key_id: u32,
    /// Payload for chests and readable notes; empty when there is nothing to read.
    pub content: String,
}

impl Item {
    pub fn key(name: &str, description: &str, key_id: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ItemKind::Key,
            key_id,
            content: String::new(),
        }
    }

    pub fn chest(name: &str, description: &str, key_id: u32, content: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ItemKind::Chest,
            key_id,
            content: content.to_string(),
        }
    }

    pub fn note(name: &str, description: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ItemKind::Normal,
            key_id: 0,
            content: content.to_string(),
        }
    }

    pub fn flag(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ItemKind::Flag,
            key_id: 0,
            content: String::new(),
        }
    }

    /// The normal item left behind in a room once a chest has been opened.
    pub fn chest_contents(chest: &Item) -> Self {
        Self::note(
            &format!("{} contents", chest.name),
            &format!("Contents retrieved from the {}", chest.name),
            &chest.content,
        )
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

/// A node of the ship graph.
///
/// Connections hold neighbour names, not rooms: the [`World`](super::world::World)
/// owns every room and names are the global identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub visited: bool,
    pub connections: BTreeSet<String>,
    pub items: HashMap<String, Item>,
}

impl Room {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            visited: false,
            connections: BTreeSet::new(),
            items: HashMap::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.place(item);
        self
    }

    /// Put an item in the room, replacing any item of the same name.
    pub fn place(&mut self, item: Item) {
        self.items.insert(item.name.clone(), item);
    }

    pub fn is_connected_to(&self, room_name: &str) -> bool {
        self.connections.contains(room_name)
    }

    pub fn item_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn connection_names(&self) -> Vec<&str> {
        self.connections.iter().map(String::as_str).collect()
    }
}
