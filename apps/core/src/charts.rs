//! Chart.js configurations for the axis radar and the track bar chart.
//!
//! Only the configuration is built here. Creating and destroying chart
//! instances belongs to whoever owns the canvas.

use serde::Serialize;

use crate::domain::{Axis, Entry, Track};
use crate::view::FilteredView;

/// Number of leading entries plotted.
pub const TOP_N: usize = 5;

pub const RADAR_MAX: f64 = 2.0;
pub const RADAR_STEP: f64 = 0.5;
pub const BAR_MAX: f64 = 10.0;

const TEXT: &str = "rgba(240, 240, 245, 0.8)";
const TEXT_MUTED: &str = "rgba(160, 160, 176, 0.6)";
const GRID: &str = "rgba(255, 255, 255, 0.08)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fill: &'static str,
    pub border: &'static str,
    /// Border color as RGB, for renderers without CSS colors.
    pub rgb: (u8, u8, u8),
}

/// One slot per plotted entry, by position.
pub const PALETTE: [ColorPair; TOP_N] = [
    ColorPair {
        fill: "rgba(99, 102, 241, 0.3)",
        border: "rgba(99, 102, 241, 1)",
        rgb: (99, 102, 241),
    },
    ColorPair {
        fill: "rgba(139, 92, 246, 0.3)",
        border: "rgba(139, 92, 246, 1)",
        rgb: (139, 92, 246),
    },
    ColorPair {
        fill: "rgba(6, 182, 212, 0.3)",
        border: "rgba(6, 182, 212, 1)",
        rgb: (6, 182, 212),
    },
    ColorPair {
        fill: "rgba(16, 185, 129, 0.3)",
        border: "rgba(16, 185, 129, 1)",
        rgb: (16, 185, 129),
    },
    ColorPair {
        fill: "rgba(245, 158, 11, 0.3)",
        border: "rgba(245, 158, 11, 1)",
        rgb: (245, 158, 11),
    },
];

pub const fn palette_color(position: usize) -> ColorPair {
    PALETTE[position % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Radar,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<RadialScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<CartesianScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<CartesianScale>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
    pub grid: GridLines,
    pub angle_lines: GridLines,
    pub point_labels: PointLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianScale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub ticks: Ticks,
    pub grid: GridLines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLines {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLabels {
    pub color: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub color: &'static str,
    pub padding: u32,
    pub use_point_style: bool,
    pub point_style: &'static str,
}

const fn legend(point_style: &'static str) -> Plugins {
    Plugins {
        legend: Legend {
            position: "bottom",
            labels: LegendLabels {
                color: TEXT,
                padding: 16,
                use_point_style: true,
                point_style,
            },
        },
    }
}

/// Axis values for the radar, in `Axis::ALL` order, missing axes at 0.
pub fn radar_values(entry: &Entry) -> Vec<f64> {
    Axis::ALL
        .iter()
        .map(|axis| entry.axis_scores.score_or_zero(*axis))
        .collect()
}

/// Track values for the bar chart, in `Track::ALL` order, missing tracks at 0.
pub fn bar_values(entry: &Entry) -> Vec<f64> {
    Track::ALL
        .iter()
        .map(|track| entry.track_scores.score_or_zero(*track))
        .collect()
}

/// Radar of per-axis scores for the top entries. `None` when there is nothing to plot.
pub fn radar_chart(view: &FilteredView) -> Option<ChartConfig> {
    let top = view.top(TOP_N);
    if top.is_empty() {
        return None;
    }

    let datasets = top
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let color = palette_color(position);
            Dataset {
                label: entry.model_name.clone(),
                data: radar_values(entry),
                background_color: color.fill,
                border_color: color.border,
                border_width: 2,
                border_radius: None,
                point_background_color: Some(color.border),
                point_border_color: Some("#fff"),
                point_border_width: Some(1),
                point_radius: Some(4),
            }
        })
        .collect();

    Some(ChartConfig {
        kind: ChartKind::Radar,
        data: ChartData {
            labels: Axis::ALL.iter().map(|axis| axis.label().to_string()).collect(),
            datasets,
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: Scales {
                r: Some(RadialScale {
                    min: 0.0,
                    max: RADAR_MAX,
                    ticks: Ticks {
                        color: TEXT_MUTED,
                        step_size: Some(RADAR_STEP),
                        backdrop_color: Some("transparent"),
                    },
                    grid: GridLines { color: GRID },
                    angle_lines: GridLines { color: GRID },
                    point_labels: PointLabels {
                        color: TEXT,
                        font: Font { size: 11 },
                    },
                }),
                x: None,
                y: None,
            },
            plugins: legend("circle"),
        },
    })
}

/// Grouped bars of per-track scores for the top entries.
pub fn bar_chart(view: &FilteredView) -> Option<ChartConfig> {
    let top = view.top(TOP_N);
    if top.is_empty() {
        return None;
    }

    let datasets = top
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let color = palette_color(position);
            Dataset {
                label: entry.model_name.clone(),
                data: bar_values(entry),
                background_color: color.fill,
                border_color: color.border,
                border_width: 2,
                border_radius: Some(6),
                point_background_color: None,
                point_border_color: None,
                point_border_width: None,
                point_radius: None,
            }
        })
        .collect();

    Some(ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: Track::ALL.iter().map(|track| track.label().to_string()).collect(),
            datasets,
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: Scales {
                r: None,
                x: Some(CartesianScale {
                    min: None,
                    max: None,
                    ticks: Ticks {
                        color: TEXT,
                        step_size: None,
                        backdrop_color: None,
                    },
                    grid: GridLines { color: GRID },
                }),
                y: Some(CartesianScale {
                    min: Some(0.0),
                    max: Some(BAR_MAX),
                    ticks: Ticks {
                        color: TEXT_MUTED,
                        step_size: None,
                        backdrop_color: None,
                    },
                    grid: GridLines { color: GRID },
                }),
            },
            plugins: legend("rect"),
        },
    })
}
