//! Convenience queries for the most common resources.

use super::types::{League, Match, Series};
use crate::core::MAX_PAGE_SIZE;
use crate::{Client, Game, Result};
use chrono::{DateTime, SecondsFormat, Utc};

#[cfg(test)]
mod tests;

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Client {
    /// Every league known for `game`, across all pages.
    pub async fn get_all_leagues(&self, game: Game) -> Result<Vec<League>> {
        let (leagues, _) = self
            .request(game, "leagues")
            .page_size(MAX_PAGE_SIZE.into())
            .get_all()
            .await?;
        Ok(leagues)
    }

    /// Series currently in progress for `game` (first page only).
    pub async fn get_running_series(&self, game: Game) -> Result<Vec<Series>> {
        let (series, _) = self.request(game, "series/running").get().await?;
        Ok(series)
    }

    /// Every upcoming match for `game`, across all pages.
    pub async fn get_upcoming_matches(&self, game: Game) -> Result<Vec<Match>> {
        let (matches, _) = self
            .request(game, "matches/upcoming")
            .page_size(MAX_PAGE_SIZE.into())
            .get_all()
            .await?;
        Ok(matches)
    }

    /// Upcoming matches belonging to one series (first page only).
    pub async fn get_upcoming_matches_for_series(
        &self,
        game: Game,
        series_id: i64,
    ) -> Result<Vec<Match>> {
        let (matches, _) = self
            .request(game, "matches/upcoming")
            .filter("serie_id", [series_id.to_string()])
            .get()
            .await?;
        Ok(matches)
    }

    /// Upcoming matches scheduled to begin within `from..=to`, across all pages.
    pub async fn get_upcoming_matches_between(
        &self,
        game: Game,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Match>> {
        let (matches, _) = self
            .request(game, "matches/upcoming")
            .range("begin_at", &timestamp(&from), &timestamp(&to))
            .page_size(MAX_PAGE_SIZE.into())
            .get_all()
            .await?;
        Ok(matches)
    }

    /// Every match currently being played for `game`, across all pages.
    pub async fn get_running_matches(&self, game: Game) -> Result<Vec<Match>> {
        let (matches, _) = self
            .request(game, "matches/running")
            .page_size(MAX_PAGE_SIZE.into())
            .get_all()
            .await?;
        Ok(matches)
    }
}
