//! # Derelict - a text adventure aboard a dead spaceship
//!
//! The player wakes on the bridge of a derelict ship and explores it with
//! shell-style commands (`ls`, `cd`, `cat`, `cp`, `unrar`) until they find
//! the flag that lets them escape.
//!
//! ## Features
//!
//! - **Fixed ship**: ten rooms joined by two-way corridors, five keys, five
//!   locked chests, three notes and one flag, always in the same places.
//! - **Shell verbs**: case-insensitive commands with exact, case-sensitive
//!   room and item names.
//! - **Keys and chests**: a key opens every chest carrying its id and is
//!   never used up.
//! - **Line-driven core**: [`ship::Game::process`] takes one line and
//!   returns the reply text plus a terminate flag, with no I/O of its own.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use derelict::config::Config;
//! use derelict::ship::Game;
//! use tokio::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let mut game = Game::from_config(&config.game)?;
//!     let stdin = BufReader::new(tokio::io::stdin());
//!     derelict::shell::run(&mut game, &config.game, stdin, tokio::io::stdout()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`ship`] - world model, command parsing and action handlers
//! - [`shell`] - prompt/read/reply loop over async streams
//! - [`config`] - TOML configuration
//! - [`logutil`] - escaping player input for log lines

pub mod config;
pub mod logutil;
pub mod shell;
pub mod ship;
