use std::fs;
use std::path::Path;

use crate::domain::ResultSet;
use crate::error::{LeaderboardError, Result};

/// Relative location of the leaderboard document next to the web app.
pub const RESULTS_URL: &str = "data/results.json";

/// Parses a leaderboard document. A missing or `null` `entries` field is an empty set.
pub fn parse_result_set(body: &str) -> Result<ResultSet> {
    let result_set = serde_json::from_str::<ResultSet>(body)?;
    tracing::debug!(entries = result_set.len(), "parsed leaderboard document");
    Ok(result_set)
}

pub fn read_result_set(path: &Path) -> Result<ResultSet> {
    let body = fs::read_to_string(path).map_err(|source| LeaderboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_result_set(&body)
}

/// Collapses any load failure into an empty result set.
pub fn or_empty(loaded: Result<ResultSet>) -> ResultSet {
    match loaded {
        Ok(result_set) => result_set,
        Err(error) => {
            tracing::warn!("No results data yet: {error}");
            ResultSet::empty()
        }
    }
}
