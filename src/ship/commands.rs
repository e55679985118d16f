//! Shell-flavoured command parsing.
//!
//! A line is split on whitespace. The first token picks the verb,
//! case-insensitively; the rest stay as typed, since room and item names
//! match exactly.

/// A parsed player command. Arguments are raw tokens; each handler decides
/// how to turn them into names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List(Vec<String>),
    ChangeRoom(Vec<String>),
    Examine(Vec<String>),
    Copy(Vec<String>),
    Unrar(Vec<String>),
    Inventory,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse a line of input. Returns `None` when the line holds no tokens.
    pub fn parse(line: &str) -> Option<Command> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next()?.to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match verb.as_str() {
            "help" => Command::Help,
            "ls" => Command::List(args),
            "cd" => Command::ChangeRoom(args),
            "cat" => Command::Examine(args),
            "cp" => Command::Copy(args),
            "unrar" => Command::Unrar(args),
            "inventory" | "inv" => Command::Inventory,
            "exit" | "quit" => Command::Exit,
            _ => Command::Unknown(verb),
        };
        Some(command)
    }
}

/// Multi-word name from argument tokens, joined by single spaces.
pub fn joined(args: &[String]) -> String {
    args.join(" ")
}

/// Resolve a name against a predicate: the whole joined argument first, then
/// only the first token. Returns the name that matched.
pub fn resolve_name(args: &[String], exists: impl Fn(&str) -> bool) -> Option<String> {
    let full = joined(args);
    if exists(&full) {
        return Some(full);
    }
    args.first().filter(|first| exists(first)).cloned()
}

/// Split `unrar` arguments: the chest is the first token only, the key is
/// everything after it.
pub fn split_unrar_args(args: &[String]) -> Option<(String, String)> {
    if args.len() < 2 {
        return None;
    }
    Some((args[0].clone(), joined(&args[1..])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t "), None);
    }

    #[test]
    fn verb_is_case_insensitive_args_are_not() {
        assert_eq!(
            Command::parse("CD Crew Quarters"),
            Some(Command::ChangeRoom(strings(&["Crew", "Quarters"])))
        );
        assert_eq!(
            Command::parse("Cat engine log"),
            Some(Command::Examine(strings(&["engine", "log"])))
        );
    }

    #[test]
    fn aliases_map_to_same_command() {
        assert_eq!(Command::parse("inv"), Some(Command::Inventory));
        assert_eq!(Command::parse("INVENTORY"), Some(Command::Inventory));
        assert_eq!(Command::parse("quit"), Some(Command::Exit));
        assert_eq!(Command::parse("Exit"), Some(Command::Exit));
    }

    #[test]
    fn unknown_verb_is_lowercased() {
        assert_eq!(
            Command::parse("RM -rf /"),
            Some(Command::Unknown("rm".to_string()))
        );
    }

    #[test]
    fn extra_whitespace_collapses() {
        assert_eq!(
            Command::parse("  ls   Cargo    Bay "),
            Some(Command::List(strings(&["Cargo", "Bay"])))
        );
    }

    #[test]
    fn resolve_prefers_full_name_then_first_token() {
        let names = ["Engine Room", "Engine", "Storage"];
        let exists = |n: &str| names.contains(&n);
        assert_eq!(
            resolve_name(&strings(&["Engine", "Room"]), exists),
            Some("Engine Room".to_string())
        );
        assert_eq!(
            resolve_name(&strings(&["Storage", "please"]), exists),
            Some("Storage".to_string())
        );
        assert_eq!(resolve_name(&strings(&["Galley"]), exists), None);
        assert_eq!(resolve_name(&[], exists), None);
    }

    #[test]
    fn unrar_takes_single_token_chest() {
        assert_eq!(
            split_unrar_args(&strings(&["Armory", "Chest", "Alpha", "Key"])),
            Some(("Armory".to_string(), "Chest Alpha Key".to_string()))
        );
        assert_eq!(split_unrar_args(&strings(&["Crate"])), None);
    }
}
