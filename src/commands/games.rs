//! Game listing command implementation

use crate::{Game, Result};

/// Identifiers accepted as the first path segment of every query.
pub fn game_identifiers() -> Vec<&'static str> {
    Game::ALL.iter().map(Game::as_str).collect()
}

/// Handle the games command
pub fn handle_games() -> Result<()> {
    for id in game_identifiers() {
        println!("{}", id);
    }
    Ok(())
}
