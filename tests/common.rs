//! Test helpers shared by the integration suites.

use derelict::ship::{Game, Reply};

/// Feed each line to the game, returning the replies in order.
#[allow(dead_code)]
pub fn play(game: &mut Game, lines: &[&str]) -> Vec<Reply> {
    lines.iter().map(|line| game.process(line)).collect()
}

/// Walk a chain of `cd` commands, failing the test if any step is refused.
#[allow(dead_code)]
pub fn walk(game: &mut Game, rooms: &[&str]) {
    for room in rooms {
        let reply = game.process(&format!("cd {room}"));
        assert!(
            reply.text.starts_with(&format!("Moved to {room}")),
            "cd {room} failed: {}",
            reply.text
        );
    }
}

/// Listing lines for a room as shown to the player, without the header.
#[allow(dead_code)]
pub fn listed_names(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter(|l| l.starts_with("  "))
        .map(|l| l.trim().to_string())
        .collect()
}
