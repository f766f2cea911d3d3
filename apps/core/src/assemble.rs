use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Deserialize;

use crate::domain::{Axis, AxisScores, Entry, ResultSet, Track};
use crate::error::{LeaderboardError, Result};

/// One model's raw evaluation output.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResult {
    pub model_card: ModelCard,
    pub overall_score: f64,
    #[serde(default)]
    pub item_results: Vec<ItemResult>,
    #[serde(default)]
    pub track_summaries: Vec<TrackSummary>,
    pub timestamp: String,
    #[serde(default)]
    pub providers: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelCard {
    pub model_id: String,
    pub model_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemResult {
    #[serde(default)]
    pub final_scores: HashMap<String, AxisScore>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AxisScore {
    pub score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSummary {
    pub track: String,
    pub mean_score: f64,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

impl ModelResult {
    pub fn provider(&self) -> &str {
        self.model_card
            .model_id
            .split('/')
            .next()
            .unwrap_or(&self.model_card.model_id)
    }

    /// Leaderboard entry summarising this result. Rank and percentile are left for [`assemble`].
    pub fn to_entry(&self) -> Entry {
        let mut per_axis: HashMap<Axis, Vec<f64>> = HashMap::new();
        let mut total_cost = 0.0;
        let mut total_latency = 0.0;

        for item in &self.item_results {
            for (name, score) in &item.final_scores {
                match Axis::parse(name) {
                    Some(axis) => per_axis.entry(axis).or_default().push(score.score),
                    None => tracing::debug!(axis = %name, "ignoring unknown axis"),
                }
            }
            total_cost += item.cost.unwrap_or(0.0);
            total_latency += item.latency_ms.unwrap_or(0.0);
        }

        let mut axis_scores = AxisScores::default();
        for axis in Axis::ALL {
            let values = per_axis.get(&axis).map_or(&[][..], Vec::as_slice);
            axis_scores.set(axis, Some(round_to(mean(values), 2)));
        }

        let mut entry = Entry::new(
            self.model_card.model_id.clone(),
            self.model_card.model_name.clone(),
            self.overall_score,
        );
        for summary in &self.track_summaries {
            match Track::parse(&summary.track) {
                Some(track) => entry.track_scores.set(track, Some(summary.mean_score)),
                None => tracing::debug!(track = %summary.track, "ignoring unknown track"),
            }
        }

        let items = self.item_results.len();
        let (avg_latency, avg_cost) = if items == 0 {
            (0.0, 0.0)
        } else {
            (total_latency / items as f64, total_cost / items as f64)
        };

        entry.axis_scores = axis_scores;
        entry.provider = Some(self.provider().to_string());
        entry.items_evaluated = Some(items);
        entry.avg_latency = Some(round_to(avg_latency, 2));
        entry.avg_cost = Some(round_to(avg_cost, 6));
        entry.evaluated_at = Some(self.timestamp.clone());
        entry
    }
}

/// Merges `results` into `document`, replacing entries by `model_id`, then ranks.
pub fn assemble(mut document: ResultSet, results: &[ModelResult]) -> ResultSet {
    let mut latest: Option<(Option<DateTime<FixedOffset>>, &str)> = None;

    for result in results {
        let entry = result.to_entry();
        tracing::info!(
            model = %entry.model_id,
            score = entry.overall_score,
            items = result.item_results.len(),
            "adding result"
        );
        document.entries.retain(|existing| existing.model_id != entry.model_id);
        document.entries.push(entry);

        if result.providers.is_some() {
            document.providers.clone_from(&result.providers);
        }

        let parsed = parse_timestamp(&result.timestamp);
        let newer = match (&latest, parsed) {
            (None, _) => true,
            (Some((Some(current), _)), Some(candidate)) => candidate >= *current,
            // Unparseable stamps fall back to processing order.
            _ => true,
        };
        if newer {
            latest = Some((parsed, result.timestamp.as_str()));
        }
    }

    if let Some((_, stamp)) = latest {
        document.generated_at = Some(stamp.to_string());
    }

    rank_document(&mut document);
    document
}

/// Orders by overall score and stamps rank and percentile onto every entry.
pub fn rank_document(document: &mut ResultSet) {
    document
        .entries
        .sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));

    let total = document.entries.len();
    for (index, entry) in document.entries.iter_mut().enumerate() {
        entry.rank = index + 1;
        entry.percentile = Some(round_to(
            100.0 * (total - index) as f64 / total as f64,
            1,
        ));
    }
}

/// Result files (`*.json`) in `dir`, sorted by file name.
pub fn result_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|source| LeaderboardError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = read_dir
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

pub fn read_model_result(path: &Path) -> Result<ModelResult> {
    let body = fs::read_to_string(path).map_err(|source| LeaderboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| LeaderboardError::ResultFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_model_results(dir: &Path) -> Result<Vec<ModelResult>> {
    result_files(dir)?
        .iter()
        .map(|path| read_model_result(path))
        .collect()
}

pub fn write_result_set(path: &Path, document: &ResultSet) -> Result<()> {
    let body = serde_json::to_string_pretty(document)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| LeaderboardError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, body).map_err(|source| LeaderboardError::Io {
        path: path.to_path_buf(),
        source,
    })
}
