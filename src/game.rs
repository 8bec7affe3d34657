//! Game identifiers.
//!
//! The API partitions every resource by game: the identifier is the first
//! path segment of each request URL (`/csgo/leagues`, `/dota2/matches/running`).

use crate::error::{PandaScoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A game supported by the PandaScore API.
///
/// # Examples
///
/// ```rust
/// use pandascore::Game;
///
/// let game: Game = "dota2".parse().unwrap();
/// assert_eq!(game, Game::Dota2);
/// assert_eq!(Game::CsGo.to_string(), "csgo");
/// assert!("chess".parse::<Game>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    #[serde(rename = "csgo")]
    CsGo,
    #[serde(rename = "dota2")]
    Dota2,
    #[serde(rename = "lol")]
    LoL,
    #[serde(rename = "ow")]
    Overwatch,
    #[serde(rename = "pubg")]
    Pubg,
    #[serde(rename = "r6siege")]
    R6Siege,
}

impl Game {
    pub const ALL: [Game; 6] = [
        Game::CsGo,
        Game::Dota2,
        Game::LoL,
        Game::Overwatch,
        Game::Pubg,
        Game::R6Siege,
    ];

    /// The path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::CsGo => "csgo",
            Game::Dota2 => "dota2",
            Game::LoL => "lol",
            Game::Overwatch => "ow",
            Game::Pubg => "pubg",
            Game::R6Siege => "r6siege",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = PandaScoreError;

    fn from_str(s: &str) -> Result<Self> {
        Game::ALL
            .into_iter()
            .find(|game| game.as_str() == s)
            .ok_or_else(|| PandaScoreError::InvalidGame {
                game: s.to_string(),
            })
    }
}

impl From<Game> for String {
    fn from(game: Game) -> Self {
        game.as_str().to_string()
    }
}
