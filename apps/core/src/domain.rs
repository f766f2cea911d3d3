use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Scored dimensions of a single response, each on a 0..=2 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    AmbiguityDetection,
    HallucinationAvoidance,
    LocalizationOfUncertainty,
    ResponseStrategy,
    EpistemicTone,
}

impl Axis {
    pub const ALL: [Self; 5] = [
        Self::AmbiguityDetection,
        Self::HallucinationAvoidance,
        Self::LocalizationOfUncertainty,
        Self::ResponseStrategy,
        Self::EpistemicTone,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AmbiguityDetection => "ambiguity_detection",
            Self::HallucinationAvoidance => "hallucination_avoidance",
            Self::LocalizationOfUncertainty => "localization_of_uncertainty",
            Self::ResponseStrategy => "response_strategy",
            Self::EpistemicTone => "epistemic_tone",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "ambiguity_detection" => Some(Self::AmbiguityDetection),
            "hallucination_avoidance" => Some(Self::HallucinationAvoidance),
            "localization_of_uncertainty" => Some(Self::LocalizationOfUncertainty),
            "response_strategy" => Some(Self::ResponseStrategy),
            "epistemic_tone" => Some(Self::EpistemicTone),
            _ => None,
        }
    }

    /// Radar point label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AmbiguityDetection => "Ambiguity Detection",
            Self::HallucinationAvoidance => "Hallucination Avoidance",
            Self::LocalizationOfUncertainty => "Localization",
            Self::ResponseStrategy => "Response Strategy",
            Self::EpistemicTone => "Epistemic Tone",
        }
    }
}

/// Challenge categories, each scored on a 0..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    A,
    B,
    C,
    D,
    E,
}

impl Track {
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    pub const fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Noisy Perception",
            Self::B => "Ambiguous Semantics",
            Self::C => "False Premise",
            Self::D => "Underspecified",
            Self::E => "Conflicts",
        }
    }
}

/// Per-axis scores. Absent axes stay `None`; callers choose the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambiguity_detection: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hallucination_avoidance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localization_of_uncertainty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_strategy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epistemic_tone: Option<f64>,
}

impl AxisScores {
    pub const fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::AmbiguityDetection => self.ambiguity_detection,
            Axis::HallucinationAvoidance => self.hallucination_avoidance,
            Axis::LocalizationOfUncertainty => self.localization_of_uncertainty,
            Axis::ResponseStrategy => self.response_strategy,
            Axis::EpistemicTone => self.epistemic_tone,
        }
    }

    pub fn set(&mut self, axis: Axis, value: Option<f64>) {
        let slot = match axis {
            Axis::AmbiguityDetection => &mut self.ambiguity_detection,
            Axis::HallucinationAvoidance => &mut self.hallucination_avoidance,
            Axis::LocalizationOfUncertainty => &mut self.localization_of_uncertainty,
            Axis::ResponseStrategy => &mut self.response_strategy,
            Axis::EpistemicTone => &mut self.epistemic_tone,
        };
        *slot = value;
    }

    /// Value used for ordering and plotting; a missing axis counts as 0.
    pub fn score_or_zero(&self, axis: Axis) -> f64 {
        self.get(axis).unwrap_or(0.0)
    }
}

/// Per-track scores keyed by track code in the JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackScores {
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(rename = "B", default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(rename = "C", default, skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
    #[serde(rename = "D", default, skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
    #[serde(rename = "E", default, skip_serializing_if = "Option::is_none")]
    pub e: Option<f64>,
}

impl TrackScores {
    pub const fn get(&self, track: Track) -> Option<f64> {
        match track {
            Track::A => self.a,
            Track::B => self.b,
            Track::C => self.c,
            Track::D => self.d,
            Track::E => self.e,
        }
    }

    pub fn set(&mut self, track: Track, value: Option<f64>) {
        let slot = match track {
            Track::A => &mut self.a,
            Track::B => &mut self.b,
            Track::C => &mut self.c,
            Track::D => &mut self.d,
            Track::E => &mut self.e,
        };
        *slot = value;
    }

    pub fn score_or_zero(&self, track: Track) -> f64 {
        self.get(track).unwrap_or(0.0)
    }
}

/// One evaluated model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Recomputed on every view derivation; whatever the document says is ignored.
    #[serde(default)]
    pub rank: usize,
    pub model_id: String,
    pub model_name: String,
    pub overall_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub axis_scores: AxisScores,
    #[serde(default, deserialize_with = "null_as_default")]
    pub track_scores: TrackScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_evaluated: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_latency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<String>,
    /// Keys this crate does not model, kept so a rewrite loses nothing.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    pub fn new(model_id: impl Into<String>, model_name: impl Into<String>, overall_score: f64) -> Self {
        Self {
            rank: 0,
            model_id: model_id.into(),
            model_name: model_name.into(),
            overall_score,
            axis_scores: AxisScores::default(),
            track_scores: TrackScores::default(),
            provider: None,
            percentile: None,
            items_evaluated: None,
            avg_latency: None,
            avg_cost: None,
            evaluated_at: None,
            extra: Map::new(),
        }
    }

    pub fn matches(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty()
            || self.model_name.to_lowercase().contains(needle_lowercase)
            || self.model_id.to_lowercase().contains(needle_lowercase)
    }
}

/// The leaderboard document as published next to the web app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<Entry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResultSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_round_trips_through_its_key() {
        for axis in Axis::ALL {
            assert_eq!(Axis::parse(axis.as_str()), Some(axis));
        }
        assert_eq!(Axis::parse("overall"), None);
    }

    #[test]
    fn track_parse_is_case_insensitive() {
        assert_eq!(Track::parse("c"), Some(Track::C));
        assert_eq!(Track::parse(" E "), Some(Track::E));
        assert_eq!(Track::parse("F"), None);
    }

    #[test]
    fn missing_scores_default_to_none_not_zero() {
        let entry: Entry = serde_json::from_str(
            r#"{"model_id":"x/y","model_name":"Y","overall_score":5.0,
                "track_scores":{"A":7.0},"axis_scores":{"epistemic_tone":1.5}}"#,
        )
        .unwrap();

        assert_eq!(entry.track_scores.get(Track::A), Some(7.0));
        assert_eq!(entry.track_scores.get(Track::B), None);
        assert_eq!(entry.track_scores.score_or_zero(Track::B), 0.0);
        assert_eq!(entry.axis_scores.get(Axis::EpistemicTone), Some(1.5));
        assert_eq!(entry.axis_scores.get(Axis::ResponseStrategy), None);
        assert_eq!(entry.axis_scores.score_or_zero(Axis::ResponseStrategy), 0.0);
    }

    #[test]
    fn null_scores_are_treated_as_missing() {
        let entry: Entry = serde_json::from_str(
            r#"{"model_id":"m","model_name":"M","overall_score":1.0,"track_scores":{"A":null}}"#,
        )
        .unwrap();
        assert_eq!(entry.track_scores.get(Track::A), None);
    }

    #[test]
    fn null_score_maps_are_empty() {
        let entry: Entry = serde_json::from_str(
            r#"{"model_id":"m","model_name":"M","overall_score":1.0,"axis_scores":null,"track_scores":null}"#,
        )
        .unwrap();
        assert_eq!(entry.axis_scores, AxisScores::default());
        assert_eq!(entry.track_scores, TrackScores::default());
    }

    #[test]
    fn matching_checks_name_and_id() {
        let entry = Entry::new("openai/gpt-4o", "GPT-4o", 8.0);
        assert!(entry.matches(""));
        assert!(entry.matches("openai"));
        assert!(entry.matches("gpt-4"));
        assert!(!entry.matches("claude"));
    }
}
