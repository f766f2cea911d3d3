use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use mirage_leaderboard::assemble::{assemble, read_model_results, write_result_set};
use mirage_leaderboard::loader::read_result_set;
use mirage_leaderboard::{Entry, Leaderboard, ResultSet, SortKey};

use crate::app::App;
use crate::cli::{AddResultsArgs, ViewArgs};
use crate::config::AppConfig;
use crate::headless::run_headless;
use crate::{event, terminal};

pub fn view(config: &AppConfig, args: &ViewArgs) -> Result<()> {
    let mut board = Leaderboard::from_load(read_result_set(&config.results_path));
    board.update(args.search.clone(), SortKey::parse(&args.sort));

    if args.headless || !is_terminal() {
        return run_headless(&board, args.json);
    }

    let mut app = App::new(board, config.results_path.clone());
    let mut term = terminal::setup()?;
    let result = event::run(&mut term, &mut app);
    terminal::cleanup(true, true);
    result
}

pub fn add_results(config: &AppConfig, args: &AddResultsArgs) -> Result<()> {
    let results_dir = &config.results_dir;

    let document = if config.results_path.exists() {
        read_result_set(&config.results_path)
            .wrap_err_with(|| format!("reading {}", config.results_path.display()))?
    } else {
        tracing::info!(path = %config.results_path.display(), "starting a new leaderboard");
        ResultSet::empty()
    };

    let results = read_model_results(results_dir)
        .wrap_err_with(|| format!("reading results from {}", results_dir.display()))?;
    if results.is_empty() {
        tracing::warn!(dir = %results_dir.display(), "no result files found");
    }

    for result in &results {
        let line = progress_line(&result.to_entry());
        // Keep stdout clean for the dry-run document.
        if args.dry_run {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    let merged = assemble(document, &results);

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&merged)?);
        return Ok(());
    }

    write_result_set(&config.results_path, &merged)?;
    println!(
        "Updated {} with {} entries",
        config.results_path.display(),
        merged.len()
    );
    Ok(())
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// One line per merged model: score, mean cost per item and mean latency.
pub fn progress_line(entry: &Entry) -> String {
    format!(
        "Adding {}: score {}, cost ${:.4}/item, avg latency {:.0}ms",
        entry.model_id,
        entry.overall_score,
        entry.avg_cost.unwrap_or(0.0),
        entry.avg_latency.unwrap_or(0.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_reports_score_cost_and_latency() {
        let mut entry = Entry::new("acme/m1", "M1", 7.25);
        entry.avg_cost = Some(0.001_234);
        entry.avg_latency = Some(812.6);

        assert_eq!(
            progress_line(&entry),
            "Adding acme/m1: score 7.25, cost $0.0012/item, avg latency 813ms"
        );
    }

    #[test]
    fn progress_line_defaults_missing_averages_to_zero() {
        let entry = Entry::new("solo", "Solo", 1.0);
        assert_eq!(
            progress_line(&entry),
            "Adding solo: score 1, cost $0.0000/item, avg latency 0ms"
        );
    }
}
