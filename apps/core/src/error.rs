use std::path::PathBuf;

use thiserror::Error;

/// Everything that can make leaderboard data unavailable.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Fetch(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed leaderboard document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed result file {path}: {source}")]
    ResultFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = LeaderboardError> = std::result::Result<T, E>;
