use mirage_leaderboard::charts::{palette_color, RADAR_MAX, RADAR_STEP, TOP_N};
use mirage_leaderboard::Axis;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub const fn slot_color(position: usize) -> Color {
    let (r, g, b) = palette_color(position).rgb;
    Color::Rgb(r, g, b)
}

/// Unit-circle position of an axis spoke, first axis straight up, clockwise.
pub fn spoke(index: usize, radius: f64) -> (f64, f64) {
    let step = std::f64::consts::TAU / Axis::ALL.len() as f64;
    let angle = std::f64::consts::FRAC_PI_2 - step * index as f64;
    (angle.cos() * radius, angle.sin() * radius)
}

fn polygon(points: &[(f64, f64)], color: Color) -> Vec<CanvasLine> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&(x1, y1), &(x2, y2))| CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        })
        .collect()
}

pub fn render_axis_radar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Axis Scores (top 5)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let top = app.board.view().top(TOP_N);
    if top.is_empty() || inner.width < 8 || inner.height < 6 {
        let paragraph = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let shapes = top
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let points = Axis::ALL
                .iter()
                .enumerate()
                .map(|(index, axis)| {
                    let value = entry.axis_scores.score_or_zero(*axis).clamp(0.0, RADAR_MAX);
                    spoke(index, value / RADAR_MAX)
                })
                .collect::<Vec<_>>();
            polygon(&points, slot_color(position))
        })
        .collect::<Vec<_>>();

    let ring_count = (RADAR_MAX / RADAR_STEP).round() as usize;

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for ring in 1..=ring_count {
                    let radius = ring as f64 / ring_count as f64;
                    let points = (0..Axis::ALL.len())
                        .map(|index| spoke(index, radius))
                        .collect::<Vec<_>>();
                    for line in polygon(&points, Color::DarkGray) {
                        ctx.draw(&line);
                    }
                }

                for (index, axis) in Axis::ALL.iter().enumerate() {
                    let (x, y) = spoke(index, 1.0);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: x,
                        y2: y,
                        color: Color::DarkGray,
                    });
                    let (label_x, label_y) = spoke(index, 1.12);
                    let offset = axis.label().len() as f64 * 0.02;
                    ctx.print(label_x - offset, label_y, axis.label());
                }

                ctx.layer();
                for lines in &shapes {
                    for line in lines {
                        ctx.draw(line);
                    }
                }
            })
            .x_bounds([-1.4, 1.4])
            .y_bounds([-1.3, 1.3]),
        inner,
    );
}
