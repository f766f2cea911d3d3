use std::fmt::Write as _;

use crate::domain::{Entry, Track, TrackScores};
use crate::view::FilteredView;

/// Shown in a track cell when the entry has no score for that track.
pub const PLACEHOLDER: &str = "-";

/// Color band of a track score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn classify(score: f64) -> Self {
        if score >= 7.0 {
            Self::High
        } else if score >= 4.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Display form of one track cell: formatted text plus tier, if scored.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackCell {
    pub text: String,
    pub tier: Option<ScoreTier>,
}

impl TrackCell {
    pub fn new(score: Option<f64>) -> Self {
        score.map_or_else(
            || Self {
                text: PLACEHOLDER.to_string(),
                tier: None,
            },
            |score| Self {
                text: format!("{score:.1}"),
                tier: Some(ScoreTier::classify(score)),
            },
        )
    }
}

pub fn track_cells(scores: &TrackScores) -> [TrackCell; 5] {
    Track::ALL.map(|track| TrackCell::new(scores.get(track)))
}

pub const fn rank_class(rank: usize) -> &'static str {
    match rank {
        1 => "rank-1",
        2 => "rank-2",
        3 => "rank-3",
        _ => "rank-other",
    }
}

pub fn format_overall(score: f64) -> String {
    format!("{score:.2}")
}

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Table body markup for the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardTable {
    pub rows_html: String,
    pub row_count: usize,
}

impl LeaderboardTable {
    /// An empty table hides every row and shows the "no data" indicator instead.
    pub const fn show_no_data(&self) -> bool {
        self.row_count == 0
    }
}

pub fn render(view: &FilteredView) -> LeaderboardTable {
    let mut rows_html = String::new();
    for entry in view.entries() {
        render_row(&mut rows_html, entry);
    }

    LeaderboardTable {
        rows_html,
        row_count: view.len(),
    }
}

fn render_row(out: &mut String, entry: &Entry) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<tr>\
         <td class=\"rank-col\"><span class=\"rank-badge {rank_class}\">{rank}</span></td>\
         <td class=\"model-col\"><div class=\"model-info\">\
         <span class=\"model-name\">{name}</span>\
         <span class=\"model-id\">{id}</span>\
         </div></td>\
         <td class=\"score-col\"><div class=\"score-display\">\
         <span class=\"score-value\">{overall}</span>\
         <span class=\"score-max\">/ 10</span>\
         </div></td>",
        rank_class = rank_class(entry.rank),
        rank = entry.rank,
        name = escape_html(&entry.model_name),
        id = escape_html(&entry.model_id),
        overall = format_overall(entry.overall_score),
    );

    for cell in track_cells(&entry.track_scores) {
        let class = cell.tier.map_or("", ScoreTier::css_class);
        let _ = write!(
            out,
            "<td class=\"track-col\"><span class=\"track-score {class}\">{text}</span></td>",
            text = cell.text,
        );
    }

    out.push_str("</tr>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultSet;
    use crate::view::{apply, SortKey};

    fn view_of(entries: Vec<Entry>) -> FilteredView {
        apply(
            &ResultSet {
                entries,
                ..ResultSet::default()
            },
            "",
            SortKey::Overall,
        )
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ScoreTier::classify(7.0), ScoreTier::High);
        assert_eq!(ScoreTier::classify(10.0), ScoreTier::High);
        assert_eq!(ScoreTier::classify(6.99), ScoreTier::Medium);
        assert_eq!(ScoreTier::classify(4.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::classify(3.99), ScoreTier::Low);
        assert_eq!(ScoreTier::classify(0.0), ScoreTier::Low);
    }

    #[test]
    fn missing_track_is_placeholder_without_tier() {
        let mut scores = TrackScores::default();
        scores.set(Track::A, Some(7.0));
        scores.set(Track::C, Some(0.0));

        let cells = track_cells(&scores);
        assert_eq!(cells[0].text, "7.0");
        assert_eq!(cells[0].tier, Some(ScoreTier::High));
        assert_eq!(cells[1].text, PLACEHOLDER);
        assert_eq!(cells[1].tier, None);
        assert_eq!(cells[2].text, "0.0");
        assert_eq!(cells[2].tier, Some(ScoreTier::Low));
    }

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(escape_html(r#"a & "b" 'c'"#), "a &amp; &quot;b&quot; &#39;c&#39;");
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn hostile_model_name_renders_as_text() {
        let view = view_of(vec![Entry::new(
            "evil/<img src=x onerror=alert(1)>",
            "<script>alert(1)</script>",
            5.0,
        )]);
        let table = render(&view);

        assert!(!table.rows_html.contains("<script>"));
        assert!(!table.rows_html.contains("<img"));
        assert!(table.rows_html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn row_formats_scores_and_tracks() {
        let mut entry = Entry::new("acme/a", "A", 8.5);
        entry.track_scores.set(Track::A, Some(7.0));
        entry.track_scores.set(Track::B, Some(5.0));
        let table = render(&view_of(vec![entry]));

        assert_eq!(table.row_count, 1);
        assert!(!table.show_no_data());
        assert!(table.rows_html.contains("rank-badge rank-1\">1<"));
        assert!(table.rows_html.contains("<span class=\"score-value\">8.50</span>"));
        assert!(table.rows_html.contains("track-score high\">7.0<"));
        assert!(table.rows_html.contains("track-score medium\">5.0<"));
        assert_eq!(table.rows_html.matches("track-score \">-<").count(), 3);
        assert_eq!(table.rows_html.matches("<td class=\"track-col\">").count(), 5);
    }

    #[test]
    fn rank_badges() {
        assert_eq!(rank_class(1), "rank-1");
        assert_eq!(rank_class(3), "rank-3");
        assert_eq!(rank_class(4), "rank-other");
    }

    #[test]
    fn empty_view_renders_no_rows() {
        let table = render(&FilteredView::default());
        assert!(table.rows_html.is_empty());
        assert!(table.show_no_data());
    }
}
