use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mirage", version, about = "MIRAGE benchmark leaderboard tools")]
pub struct CliArgs {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Leaderboard document to read (and, for add-results, rewrite)
    #[arg(long, global = true, value_name = "PATH")]
    pub results: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the leaderboard in the terminal
    View(ViewArgs),
    /// Merge per-model result files into the leaderboard document
    AddResults(AddResultsArgs),
}

#[derive(Debug, Default, Args)]
pub struct ViewArgs {
    /// Print the leaderboard and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Initial search term
    #[arg(long, default_value = "")]
    pub search: String,

    /// Initial sort key: overall or an axis name
    #[arg(long, default_value = "overall")]
    pub sort: String,
}

#[derive(Debug, Args)]
pub struct AddResultsArgs {
    /// Directory of per-model result files
    #[arg(long = "results-dir", value_name = "PATH")]
    pub results_dir: Option<PathBuf>,

    /// Print the merged document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Subcommand to run; no subcommand means `view`.
    pub fn command(self) -> (Settings, Command) {
        let settings = Settings {
            debug: self.debug,
            results: self.results,
        };
        let command = self
            .command
            .unwrap_or_else(|| Command::View(ViewArgs {
                sort: "overall".to_string(),
                ..ViewArgs::default()
            }));
        (settings, command)
    }
}

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub debug: bool,
    pub results: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_view() {
        let args = CliArgs::try_parse_from(["mirage"]).unwrap();
        let (settings, command) = args.command();
        assert!(!settings.debug);
        match command {
            Command::View(view) => {
                assert_eq!(view.sort, "overall");
                assert!(view.search.is_empty());
            }
            Command::AddResults(_) => panic!("expected view"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "mirage",
            "view",
            "--headless",
            "--sort",
            "epistemic_tone",
            "--results",
            "board.json",
            "--debug",
        ])
        .unwrap();
        let (settings, command) = args.command();
        assert!(settings.debug);
        assert_eq!(settings.results, Some(PathBuf::from("board.json")));
        let Command::View(view) = command else {
            panic!("expected view");
        };
        assert!(view.headless);
        assert_eq!(view.sort, "epistemic_tone");
    }

    #[test]
    fn add_results_flags() {
        let args =
            CliArgs::try_parse_from(["mirage", "add-results", "--results-dir", "runs", "--dry-run"])
                .unwrap();
        let Command::AddResults(add) = args.command().1 else {
            panic!("expected add-results");
        };
        assert_eq!(add.results_dir, Some(PathBuf::from("runs")));
        assert!(add.dry_run);
    }
}
