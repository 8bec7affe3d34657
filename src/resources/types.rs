use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// A league groups the series organised under one brand.
///
/// Hierarchy: league → series → tournaments → matches.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct League {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename = "modified_at")]
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One occurrence (season, edition) of a league.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Series {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub league_id: Option<i64>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub begin_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
}

/// A single match between two or more opponents.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Match {
    pub id: i64,
    pub name: String,
    /// Unset for matches without a confirmed schedule.
    #[serde(rename = "begin_at", default)]
    pub begins_at: Option<DateTime<Utc>>,
    #[serde(rename = "modified_at")]
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub number_of_games: Option<u32>,
    #[serde(default)]
    pub opponents: Vec<MatchOpponent>,
    #[serde(rename = "serie")]
    pub series: Series,
}

/// An opponent as it takes part in a match; whether it is a team or a player
/// is only known at this level.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchOpponent {
    #[serde(rename = "type")]
    pub kind: String,
    pub opponent: Opponent,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Opponent {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}
