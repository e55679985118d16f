//! Derelict ship world model and command interpreter.
//!
//! [`Game`] is the whole session: it owns the room graph and the inventory
//! and tracks the current room by name. The shell feeds it one line at a
//! time through [`Game::process`] and stops when the returned [`Reply`]
//! asks it to.
//!
//! ```
//! use derelict::ship::Game;
//!
//! let mut game = Game::new();
//! let reply = game.process("cd Communications");
//! assert!(reply.text.starts_with("Moved to Communications"));
//! assert!(!reply.terminate);
//! assert!(game.process("quit").terminate);
//! ```

pub mod actions;
pub mod commands;
pub mod errors;
pub mod inventory;
pub mod types;
pub mod world;

use log::debug;

use crate::config::GameConfig;
use crate::logutil::escape_log;

pub use commands::Command;
pub use errors::{ActionError, GameError};
pub use inventory::Inventory;
pub use types::{Item, ItemKind, Room};
pub use world::{build_world, World, START_ROOM};

pub const BANNER: &str = "Welcome to the Spaceship Text Adventure!
You are aboard a derelict spaceship. Find the flag to escape.
Use Linux commands to navigate and interact with your environment.
Type 'help' for available commands.";

const FAREWELL: &str = "Thanks for playing!";

/// Result of processing one line of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    /// Text for the player; empty when the line held no command.
    pub text: String,
    /// True once the player asked to leave.
    pub terminate: bool,
}

impl Reply {
    fn text(text: String) -> Self {
        Self {
            text,
            terminate: false,
        }
    }

    fn farewell() -> Self {
        Self {
            text: FAREWELL.to_string(),
            terminate: true,
        }
    }
}

/// A single play session.
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    current: String,
    inventory: Inventory,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// The fixed ship, starting on the bridge.
    pub fn new() -> Self {
        Self {
            world: build_world(),
            current: START_ROOM.to_string(),
            inventory: Inventory::new(),
        }
    }

    /// Start in an arbitrary world. Fails when `start` is not one of its rooms.
    pub fn with_world(world: World, start: &str) -> Result<Self, GameError> {
        if !world.contains(start) {
            return Err(GameError::UnknownStartRoom(start.to_string()));
        }
        Ok(Self {
            world,
            current: start.to_string(),
            inventory: Inventory::new(),
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::with_world(build_world(), &config.start_room)
    }

    /// Interpret one line of input. Blank lines do nothing.
    pub fn process(&mut self, line: &str) -> Reply {
        let Some(command) = Command::parse(line) else {
            return Reply::default();
        };
        debug!("[{}] {}", self.current, escape_log(line));

        let result = match &command {
            Command::Help => actions::help(),
            Command::List(args) => actions::list(self, args),
            Command::ChangeRoom(args) => actions::change_room(self, args),
            Command::Examine(args) => actions::examine(self, args),
            Command::Copy(args) => actions::copy(self, args),
            Command::Unrar(args) => actions::unrar(self, args),
            Command::Inventory => actions::show_inventory(self),
            Command::Exit => return Reply::farewell(),
            Command::Unknown(verb) => Err(ActionError::UnknownCommand(verb.clone())),
        };

        match result {
            Ok(text) => Reply::text(text),
            Err(err) => {
                debug!("{:?} had no effect: {:?}", command, err);
                Reply::text(err.to_string())
            }
        }
    }

    pub fn current_room_name(&self) -> &str {
        &self.current
    }

    pub fn current_room(&self) -> &Room {
        self.world
            .room(&self.current)
            .expect("current room is always part of the world")
    }

    fn current_room_mut(&mut self) -> &mut Room {
        self.world
            .room_mut(&self.current)
            .expect("current room is always part of the world")
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.world.room(name)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Whether the flag has been copied. Winning does not end the session.
    pub fn has_won(&self) -> bool {
        self.inventory.contains_kind(ItemKind::Flag)
    }
}
