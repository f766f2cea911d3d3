use std::fmt::Write as _;

use color_eyre::Result;
use mirage_leaderboard::table::{format_overall, track_cells};
use mirage_leaderboard::{Leaderboard, Track};

/// Plain-text rendering of the current view
pub fn render_text(board: &Leaderboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nMIRAGE Leaderboard");
    let _ = writeln!(out, "==================");
    let _ = writeln!(
        out,
        "Models: {}  Shown: {}  Sort: {}",
        board.total_models(),
        board.view().len(),
        board.sort().label()
    );
    if !board.search().is_empty() {
        let _ = writeln!(out, "Search: {}", board.search());
    }
    out.push('\n');

    if board.view().is_empty() {
        let _ = writeln!(out, "No data");
        return out;
    }

    let name_width = board
        .view()
        .entries()
        .iter()
        .map(|entry| entry.model_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Model".len());

    let _ = write!(out, "{:>4}  {:<name_width$}  {:>7}", "#", "Model", "Overall");
    for track in Track::ALL {
        let _ = write!(out, "  {:>5}", track.code());
    }
    out.push('\n');

    for entry in board.view().entries() {
        let _ = write!(
            out,
            "{:>4}  {:<name_width$}  {:>7}",
            entry.rank,
            entry.model_name,
            format_overall(entry.overall_score)
        );
        for cell in track_cells(&entry.track_scores) {
            let _ = write!(out, "  {:>5}", cell.text);
        }
        out.push('\n');
    }

    out
}

pub fn render_json(board: &Leaderboard) -> Result<String> {
    Ok(serde_json::to_string_pretty(board.view())?)
}

pub fn run_headless(board: &Leaderboard, json: bool) -> Result<()> {
    if json {
        println!("{}", render_json(board)?);
    } else {
        print!("{}", render_text(board));
    }
    Ok(())
}
