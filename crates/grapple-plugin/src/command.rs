//! The `grappling` command: hand out hooks to players.

use grapple_api::{Host, Player};
use thiserror::Error;

use crate::config::GrappleConfig;
use crate::hook;

/// Everything a `grappling` invocation can fail with. The display string
/// is exactly what the sender sees.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("No permission")]
    NoPermission,
    #[error("Unknown player")]
    UnknownPlayer,
    #[error("Invalid number: {0}")]
    BadNumber(String),
    #[error("/grappling give <player> [force] [durability]")]
    Usage,
}

/// Run one `grappling` invocation. `args` excludes the command name itself.
pub fn run(
    config: &GrappleConfig,
    args: &[String],
    sender: &str,
    host: &mut dyn Host,
) -> Result<String, CommandError> {
    match args.first().map(String::as_str) {
        Some("give") => give(config, &args[1..], sender, host),
        _ => Err(CommandError::Usage),
    }
}

fn give(
    config: &GrappleConfig,
    args: &[String],
    sender: &str,
    host: &mut dyn Host,
) -> Result<String, CommandError> {
    let node = &config.give_permission;
    if !node.is_empty() && !host.has_permission(sender, node) {
        return Err(CommandError::NoPermission);
    }

    let name = args.first().ok_or(CommandError::Usage)?;
    let players = host.online_players();
    let target = match_player(name, &players).ok_or(CommandError::UnknownPlayer)?;
    let force = parse_level(args, 1, 1)?;
    let durability = parse_level(args, 2, 0)?;

    host.give_item(&target.name, hook::build_hook(config, force, durability));
    Ok("Done".to_string())
}

/// First fuzzy match for a player name: an exact case-insensitive match
/// wins, otherwise the first player whose name contains the query.
pub fn match_player<'a>(query: &str, players: &'a [Player]) -> Option<&'a Player> {
    let query = query.to_lowercase();
    players
        .iter()
        .find(|p| p.name.to_lowercase() == query)
        .or_else(|| {
            players
                .iter()
                .find(|p| p.name.to_lowercase().contains(&query))
        })
}

fn parse_level(args: &[String], index: usize, fallback: i32) -> Result<i32, CommandError> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| CommandError::BadNumber(raw.clone())),
        None => Ok(fallback),
    }
}
