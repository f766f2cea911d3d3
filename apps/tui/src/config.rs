use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_RESULTS_PATH: &str = "frontend/data/results.json";
pub const DEFAULT_RESULTS_DIR: &str = "results";

pub const RESULTS_ENV: &str = "MIRAGE_RESULTS";
pub const RESULTS_DIR_ENV: &str = "MIRAGE_RESULTS_DIR";

/// Resolved file locations. Flags win over the environment, which wins over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub results_path: PathBuf,
    pub results_dir: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// Loads `.env` (if present) and resolves against the process environment.
    pub fn load(results_flag: Option<&Path>, results_dir_flag: Option<&Path>, debug_flag: bool) -> Self {
        dotenv().ok();
        Self::resolve(results_flag, results_dir_flag, debug_flag, |key| env::var(key).ok())
    }

    pub fn resolve(
        results_flag: Option<&Path>,
        results_dir_flag: Option<&Path>,
        debug_flag: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let results_path = results_flag.map_or_else(
            || {
                lookup(RESULTS_ENV)
                    .filter(|value| !value.is_empty())
                    .map_or_else(|| PathBuf::from(DEFAULT_RESULTS_PATH), PathBuf::from)
            },
            Path::to_path_buf,
        );

        let results_dir = results_dir_flag.map_or_else(
            || {
                lookup(RESULTS_DIR_ENV)
                    .filter(|value| !value.is_empty())
                    .map_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR), PathBuf::from)
            },
            Path::to_path_buf,
        );

        let debug = debug_flag || lookup("DEBUG").is_some_and(|value| value != "0" && !value.is_empty());

        Self {
            results_path,
            results_dir,
            debug,
        }
    }
}
