use thiserror::Error;

/// Why a player command had no effect.
///
/// The `Display` text is exactly what the player reads. Every variant is
/// recoverable: the handler that returns it leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Required argument missing; carries the usage line.
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Command not recognized: {0}\nType 'help' for available commands.")]
    UnknownCommand(String),

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// Remote listing of a room the player has never entered.
    #[error("You haven't been to that room yet.")]
    NotVisited(String),

    #[error("Cannot move to {target} from here.\nAvailable rooms: {}", .exits.join(", "))]
    CannotMove { target: String, exits: Vec<String> },

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item not found in current room: {0}")]
    NotInRoom(String),

    /// Chests only open through `unrar`.
    #[error("You cannot copy {0}. Use 'unrar' to open it.")]
    NotCopyable(String),

    #[error("Chest not found in current room: {0}")]
    ChestNotFound(String),

    #[error("{0} is not a chest.")]
    NotAChest(String),

    #[error("Key not found in inventory: {0}")]
    KeyNotFound(String),

    #[error("{0} is not a key.")]
    NotAKey(String),

    #[error("The {key} doesn't fit the {chest}.")]
    KeyMismatch { chest: String, key: String },
}

/// Errors raised while setting a game up from configuration.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown start room: {0}")]
    UnknownStartRoom(String),
}
