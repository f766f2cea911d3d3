// UI module for the terminal leaderboard
// Lays out the header, table, detail pane and charts

pub mod widgets;

use mirage_leaderboard::{Axis, Entry, Track};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use widgets::charts::render_track_barchart;
use widgets::radar::render_axis_radar;
use widgets::tables::render_leaderboard_table;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(app, f, main_layout[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(main_layout[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(9)])
        .split(content[0]);

    render_leaderboard_table(app, f, left[0]);
    render_detail(app, f, left[1]);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content[1]);

    render_axis_radar(app, f, charts[0]);
    render_track_barchart(app, f, charts[1]);

    render_footer(app, f, main_layout[2]);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let search = if app.board.search().is_empty() {
        Span::styled("type to search", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            app.board.search().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    };

    let line = TextLine::from(vec![
        Span::styled(
            format!("Models: {}", app.board.total_models()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        search,
        Span::raw("  "),
        Span::styled("Sort: ", Style::default().fg(Color::Gray)),
        Span::styled(app.board.sort().label(), Style::default().fg(Color::Cyan)),
    ]);

    let block = Block::default()
        .title(format!("MIRAGE Leaderboard ({})", app.source.display()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(line))
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub fn detail_lines(entry: &Entry) -> Vec<TextLine<'static>> {
    let label = Style::default().fg(Color::Gray);

    let axes = Axis::ALL
        .iter()
        .map(|axis| {
            let value = entry
                .axis_scores
                .get(*axis)
                .map_or_else(|| "-".to_string(), |score| format!("{score:.2}"));
            format!("{} {value}", axis.label())
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let tracks = Track::ALL
        .iter()
        .map(|track| {
            let value = entry
                .track_scores
                .get(*track)
                .map_or_else(|| "-".to_string(), |score| format!("{score:.1}"));
            format!("{} {value}", track.code())
        })
        .collect::<Vec<_>>()
        .join("  ");

    vec![
        TextLine::from(vec![
            Span::styled(
                format!("#{} {}", entry.rank, entry.model_name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", entry.model_id), label),
        ]),
        TextLine::from(vec![
            Span::styled("Provider: ", label),
            Span::raw(optional(entry.provider.clone())),
            Span::styled("  Evaluated: ", label),
            Span::raw(optional(entry.evaluated_at.as_deref().map(format_evaluated))),
        ]),
        TextLine::from(vec![
            Span::styled("Items: ", label),
            Span::raw(optional(entry.items_evaluated.map(|n| n.to_string()))),
            Span::styled("  Latency: ", label),
            Span::raw(optional(entry.avg_latency.map(|ms| format!("{ms:.0} ms")))),
            Span::styled("  Cost/item: ", label),
            Span::raw(optional(entry.avg_cost.map(|cost| format!("${cost:.4}")))),
            Span::styled("  Percentile: ", label),
            Span::raw(optional(entry.percentile.map(|p| format!("{p:.1}")))),
        ]),
        TextLine::from(vec![Span::styled("Axes: ", label), Span::raw(axes)]),
        TextLine::from(vec![Span::styled("Tracks: ", label), Span::raw(tracks)]),
    ]
}

/// Shortens RFC 3339 stamps to minutes; anything else is shown as-is.
pub fn format_evaluated(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |stamp| stamp.format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn render_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Details")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let text = app.selected_entry().map_or_else(
        || Text::from(TextLine::from("No data")),
        |entry| Text::from(detail_lines(entry)),
    );

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled("Type", Style::default().fg(Color::Gray)),
        Span::raw(" search  "),
        Span::styled("Tab", Style::default().fg(Color::Gray)),
        Span::raw(" sort  "),
        Span::styled("↑↓", Style::default().fg(Color::Gray)),
        Span::raw(" select  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::raw(" clear/quit  "),
        Span::styled(app.status_message.clone(), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
