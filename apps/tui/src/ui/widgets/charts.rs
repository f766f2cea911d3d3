use mirage_leaderboard::charts::{BAR_MAX, TOP_N};
use mirage_leaderboard::Track;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::radar::slot_color;

/// Bars are integers; scores keep one decimal.
pub fn bar_height(score: f64) -> u64 {
    (score.clamp(0.0, BAR_MAX) * 10.0).round() as u64
}

pub fn render_track_barchart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Track Scores (top 5)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let top = app.board.view().top(TOP_N);
    if top.is_empty() {
        let paragraph = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    let mut chart = BarChart::default()
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .max(bar_height(BAR_MAX));

    for track in Track::ALL {
        let bars = top
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let score = entry.track_scores.score_or_zero(track);
                Bar::default()
                    .value(bar_height(score))
                    .text_value(format!("{score:.1}"))
                    .style(Style::default().fg(slot_color(position)))
                    .value_style(Style::default().fg(Color::Black).bg(slot_color(position)))
            })
            .collect::<Vec<_>>();
        chart = chart.data(
            BarGroup::default()
                .label(TextLine::from(format!("{} {}", track.code(), track.label())))
                .bars(&bars),
        );
    }

    f.render_widget(chart, split[0]);

    let legend = top
        .iter()
        .enumerate()
        .flat_map(|(position, entry)| {
            [
                Span::styled("■ ", Style::default().fg(slot_color(position))),
                Span::styled(
                    format!("{}  ", entry.model_name),
                    Style::default().fg(Color::White).add_modifier(Modifier::DIM),
                ),
            ]
        })
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(Text::from(TextLine::from(legend)))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, split[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_heights_keep_one_decimal() {
        assert_eq!(bar_height(0.0), 0);
        assert_eq!(bar_height(7.25), 73);
        assert_eq!(bar_height(10.0), 100);
        assert_eq!(bar_height(12.0), 100);
        assert_eq!(bar_height(-1.0), 0);
    }
}
