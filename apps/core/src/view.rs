use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::domain::{Axis, Entry, ResultSet};

/// Column the leaderboard is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Overall,
    Axis(Axis),
    /// Any key we do not recognise. Leaves the filtered order untouched.
    Unsorted,
}

impl SortKey {
    /// Keys offered by the sort selector, in display order.
    pub const OPTIONS: [Self; 6] = [
        Self::Overall,
        Self::Axis(Axis::AmbiguityDetection),
        Self::Axis(Axis::HallucinationAvoidance),
        Self::Axis(Axis::LocalizationOfUncertainty),
        Self::Axis(Axis::ResponseStrategy),
        Self::Axis(Axis::EpistemicTone),
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "overall" => Self::Overall,
            other => Axis::parse(other).map_or(Self::Unsorted, Self::Axis),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Axis(axis) => axis.as_str(),
            Self::Unsorted => "unsorted",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Axis(axis) => axis.label(),
            Self::Unsorted => "Unsorted",
        }
    }

    /// Next selector option, wrapping around. `Unsorted` restarts at `Overall`.
    pub fn next(self) -> Self {
        let index = Self::OPTIONS.iter().position(|key| *key == self);
        index.map_or(Self::Overall, |index| {
            Self::OPTIONS[(index + 1) % Self::OPTIONS.len()]
        })
    }

    pub fn prev(self) -> Self {
        let len = Self::OPTIONS.len();
        let index = Self::OPTIONS.iter().position(|key| *key == self);
        index.map_or(Self::Overall, |index| Self::OPTIONS[(index + len - 1) % len])
    }

    fn sort_value(self, entry: &Entry) -> Option<f64> {
        match self {
            Self::Overall => Some(entry.overall_score),
            Self::Axis(axis) => Some(entry.axis_scores.score_or_zero(axis)),
            Self::Unsorted => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-controlled inputs that drive the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub sort: SortKey,
}

impl ViewState {
    pub fn new(search: impl Into<String>, sort: SortKey) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }
}

/// Ranked subsequence of a [`ResultSet`]. Ranks are always `1..=len`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView {
    entries: Vec<Entry>,
}

impl FilteredView {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Leading entries by current rank.
    pub fn top(&self, n: usize) -> &[Entry] {
        &self.entries[..self.entries.len().min(n)]
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }
}

/// Filters, orders and re-ranks `results` without touching it.
///
/// Matching is a case-insensitive substring test on name or id. Ordering is
/// descending and stable, so equal scores keep their document order.
pub fn apply(results: &ResultSet, search: &str, sort: SortKey) -> FilteredView {
    let needle = search.to_lowercase();
    let mut entries = results
        .entries
        .iter()
        .filter(|entry| entry.matches(&needle))
        .cloned()
        .collect::<Vec<_>>();

    if sort != SortKey::Unsorted {
        entries.sort_by(|a, b| descending(sort.sort_value(a), sort.sort_value(b)));
    }

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    FilteredView { entries }
}

pub fn apply_state(results: &ResultSet, state: &ViewState) -> FilteredView {
    apply(results, &state.search, state.sort)
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(0.0);
    let b = b.unwrap_or(0.0);
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Track;

    fn entry(id: &str, name: &str, overall: f64) -> Entry {
        Entry::new(id, name, overall)
    }

    fn sample() -> ResultSet {
        let mut a = entry("acme/alpha", "Alpha", 8.5);
        a.axis_scores.set(Axis::EpistemicTone, Some(1.2));
        a.track_scores.set(Track::A, Some(7.0));
        a.track_scores.set(Track::B, Some(5.0));

        let mut b = entry("zen/beta", "Beta", 9.0);
        b.track_scores.set(Track::A, Some(9.0));

        let mut c = entry("acme/gamma", "Gamma Large", 6.0);
        c.axis_scores.set(Axis::EpistemicTone, Some(1.8));

        ResultSet {
            entries: vec![a, b, c],
            ..ResultSet::default()
        }
    }

    fn ids(view: &FilteredView) -> Vec<&str> {
        view.entries().iter().map(|e| e.model_id.as_str()).collect()
    }

    fn ranks(view: &FilteredView) -> Vec<usize> {
        view.entries().iter().map(|e| e.rank).collect()
    }

    #[test]
    fn overall_sort_is_descending_with_dense_ranks() {
        let view = apply(&sample(), "", SortKey::Overall);
        assert_eq!(ids(&view), ["zen/beta", "acme/alpha", "acme/gamma"]);
        assert_eq!(ranks(&view), [1, 2, 3]);
    }

    #[test]
    fn two_entry_scenario() {
        let mut results = sample();
        results.entries.truncate(2);

        let view = apply(&results, "", SortKey::Overall);
        let first = &view.entries()[0];
        assert_eq!((first.model_id.as_str(), first.rank), ("zen/beta", 1));
        assert!((first.overall_score - 9.0).abs() < f64::EPSILON);
        assert_eq!(first.track_scores.get(Track::B), None);
        assert_eq!(view.entries()[1].rank, 2);
    }

    #[test]
    fn search_matches_name_or_id_case_insensitively() {
        let results = sample();

        assert_eq!(ids(&apply(&results, "ACME", SortKey::Overall)), ["acme/alpha", "acme/gamma"]);
        assert_eq!(ids(&apply(&results, "large", SortKey::Overall)), ["acme/gamma"]);
        assert_eq!(ids(&apply(&results, "Bet", SortKey::Overall)), ["zen/beta"]);
    }

    #[test]
    fn search_matching_nothing_is_empty() {
        let view = apply(&sample(), "no-such-model", SortKey::Overall);
        assert!(view.is_empty());
        assert!(view.top(5).is_empty());
    }

    #[test]
    fn filtered_ranks_restart_at_one() {
        let view = apply(&sample(), "acme", SortKey::Overall);
        assert_eq!(ranks(&view), [1, 2]);
    }

    #[test]
    fn axis_sort_treats_missing_as_zero() {
        let view = apply(&sample(), "", SortKey::Axis(Axis::EpistemicTone));
        assert_eq!(ids(&view), ["acme/gamma", "acme/alpha", "zen/beta"]);
    }

    #[test]
    fn axis_sort_is_idempotent() {
        let key = SortKey::Axis(Axis::EpistemicTone);
        let once = apply(&sample(), "", key);
        let resorted = ResultSet {
            entries: once.entries().to_vec(),
            ..ResultSet::default()
        };
        let twice = apply(&resorted, "", key);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn ties_keep_document_order() {
        let results = ResultSet {
            entries: vec![entry("m/1", "One", 5.0), entry("m/2", "Two", 5.0), entry("m/3", "Three", 7.0)],
            ..ResultSet::default()
        };
        let view = apply(&results, "", SortKey::Overall);
        assert_eq!(ids(&view), ["m/3", "m/1", "m/2"]);

        let view = apply(&results, "", SortKey::Axis(Axis::ResponseStrategy));
        assert_eq!(ids(&view), ["m/1", "m/2", "m/3"]);
    }

    #[test]
    fn unknown_sort_key_keeps_filtered_order() {
        let key = SortKey::parse("latency");
        assert_eq!(key, SortKey::Unsorted);

        let view = apply(&sample(), "", key);
        assert_eq!(ids(&view), ["acme/alpha", "zen/beta", "acme/gamma"]);
        assert_eq!(ranks(&view), [1, 2, 3]);
    }

    #[test]
    fn apply_never_mutates_input() {
        let results = sample();
        let before = results.clone();
        let _ = apply(&results, "a", SortKey::Overall);
        assert_eq!(results, before);
    }

    #[test]
    fn sort_key_parsing_and_cycling() {
        assert_eq!(SortKey::parse("overall"), SortKey::Overall);
        assert_eq!(
            SortKey::parse("hallucination_avoidance"),
            SortKey::Axis(Axis::HallucinationAvoidance)
        );
        assert_eq!(SortKey::Overall.prev(), SortKey::Axis(Axis::EpistemicTone));
        assert_eq!(SortKey::Axis(Axis::EpistemicTone).next(), SortKey::Overall);
        assert_eq!(SortKey::Unsorted.next(), SortKey::Overall);

        for key in SortKey::OPTIONS {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
    }

    #[test]
    fn top_is_capped() {
        let view = apply(&sample(), "", SortKey::Overall);
        assert_eq!(view.top(5).len(), 3);
        assert_eq!(view.top(2).len(), 2);
    }
}
