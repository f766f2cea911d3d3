use mirage_leaderboard::table::{format_overall, track_cells, ScoreTier, TrackCell};
use mirage_leaderboard::Entry;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

pub const fn tier_color(tier: Option<ScoreTier>) -> Color {
    match tier {
        Some(ScoreTier::High) => Color::Green,
        Some(ScoreTier::Medium) => Color::Yellow,
        Some(ScoreTier::Low) => Color::Red,
        None => Color::DarkGray,
    }
}

pub const fn rank_color(rank: usize) -> Color {
    match rank {
        1 => Color::Rgb(255, 215, 0),
        2 => Color::Rgb(192, 192, 192),
        3 => Color::Rgb(205, 127, 50),
        _ => Color::Gray,
    }
}

fn track_cell(cell: TrackCell) -> Cell<'static> {
    Cell::from(cell.text).style(Style::default().fg(tier_color(cell.tier)))
}

fn entry_row(entry: &Entry, selected: bool) -> Row<'static> {
    let mut cells = vec![
        Cell::from(entry.rank.to_string()).style(
            Style::default()
                .fg(rank_color(entry.rank))
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from(entry.model_name.clone()),
        Cell::from(entry.model_id.clone()).style(Style::default().fg(Color::Gray)),
        Cell::from(format_overall(entry.overall_score)),
    ];
    cells.extend(track_cells(&entry.track_scores).into_iter().map(track_cell));

    let style = if selected {
        Style::default()
            .bg(Color::Rgb(0, 0, 238))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Row::new(cells).style(style)
}

pub fn render_leaderboard_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!("Leaderboard ({} shown)", app.row_count()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let entries = app.board.view().entries();
    if entries.is_empty() {
        let paragraph = Paragraph::new("No data")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Model"),
        Cell::from("ID"),
        Cell::from("Overall"),
        Cell::from("A"),
        Cell::from("B"),
        Cell::from("C"),
        Cell::from("D"),
        Cell::from("E"),
    ])
    .style(
        Style::default()
            .fg(Color::Rgb(0, 0, 238))
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    // Borders and header take three lines.
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(entries.len(), max_visible_rows, app.selected_index);

    let rows = entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, entry)| entry_row(entry, index == app.selected_index));

    let widths = [
        Constraint::Length(4),
        Constraint::Min(16),
        Constraint::Min(18),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_when_everything_fits() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
    }

    #[test]
    fn offset_follows_selection_past_the_fold() {
        assert_eq!(scroll_offset(20, 5, 4), 0);
        assert_eq!(scroll_offset(20, 5, 5), 1);
        assert_eq!(scroll_offset(20, 5, 19), 15);
    }

    #[test]
    fn placeholder_cells_are_dimmed() {
        assert_eq!(tier_color(None), Color::DarkGray);
        assert_eq!(tier_color(Some(ScoreTier::High)), Color::Green);
    }
}
