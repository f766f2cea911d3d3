use crate::charts::{self, ChartConfig};
use crate::domain::{Entry, ResultSet};
use crate::error::Result;
use crate::loader;
use crate::table::{self, LeaderboardTable};
use crate::view::{self, FilteredView, SortKey, ViewState};

/// Application state shared by the web page and the terminal viewer.
///
/// Holds the result set loaded once per session, the user's search and sort
/// inputs, and the view derived from both. Every input change recomputes the
/// view; the result set itself is never modified.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    results: ResultSet,
    state: ViewState,
    view: FilteredView,
    total_models: usize,
}

impl Leaderboard {
    pub fn new(results: ResultSet) -> Self {
        let mut leaderboard = Self {
            total_models: results.len(),
            results,
            state: ViewState::default(),
            view: FilteredView::default(),
        };
        leaderboard.recompute();
        leaderboard
    }

    /// Builds from a load attempt. Failures become an empty board with a zero total.
    pub fn from_load(loaded: Result<ResultSet>) -> Self {
        Self::new(loader::or_empty(loaded))
    }

    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    pub const fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub const fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Count shown in the "models" counter. Set by the load only, never by filtering.
    pub const fn total_models(&self) -> usize {
        self.total_models
    }

    pub fn search(&self) -> &str {
        &self.state.search
    }

    pub const fn sort(&self) -> SortKey {
        self.state.sort
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.sort = sort;
        self.recompute();
    }

    /// Applies both inputs at once, as a DOM event handler reading both controls does.
    pub fn update(&mut self, search: impl Into<String>, sort: SortKey) {
        self.state = ViewState::new(search, sort);
        self.recompute();
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.state.search.push(ch);
        self.recompute();
    }

    pub fn pop_search_char(&mut self) {
        if self.state.search.pop().is_some() {
            self.recompute();
        }
    }

    pub fn entry_at(&self, index: usize) -> Option<&Entry> {
        self.view.get(index)
    }

    pub fn table(&self) -> LeaderboardTable {
        table::render(&self.view)
    }

    pub fn radar_chart(&self) -> Option<ChartConfig> {
        charts::radar_chart(&self.view)
    }

    pub fn bar_chart(&self) -> Option<ChartConfig> {
        charts::bar_chart(&self.view)
    }

    fn recompute(&mut self) {
        self.view = view::apply_state(&self.results, &self.state);
        tracing::debug!(
            search = %self.state.search,
            sort = %self.state.sort,
            rows = self.view.len(),
            "recomputed leaderboard view"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Axis;
    use crate::error::LeaderboardError;

    fn results() -> ResultSet {
        let mut low = Entry::new("acme/low", "Low", 3.0);
        low.axis_scores.set(Axis::ResponseStrategy, Some(2.0));
        ResultSet {
            entries: vec![low, Entry::new("acme/high", "High", 9.0)],
            ..ResultSet::default()
        }
    }

    #[test]
    fn initial_view_is_ranked_by_overall() {
        let board = Leaderboard::new(results());
        assert_eq!(board.total_models(), 2);
        assert_eq!(board.view().entries()[0].model_id, "acme/high");
        assert_eq!(board.view().entries()[0].rank, 1);
    }

    #[test]
    fn failed_load_is_empty_with_zero_total() {
        let board = Leaderboard::from_load(Err(LeaderboardError::Status(500)));
        assert_eq!(board.total_models(), 0);
        assert!(board.view().is_empty());
        assert!(board.table().show_no_data());
        assert!(board.radar_chart().is_none());
        assert!(board.bar_chart().is_none());
    }

    #[test]
    fn filtering_to_nothing_keeps_total() {
        let mut board = Leaderboard::new(results());
        board.set_search("nothing matches this");

        assert!(board.view().is_empty());
        assert!(board.table().show_no_data());
        assert_eq!(board.total_models(), 2);
        assert_eq!(board.results().len(), 2);
    }

    #[test]
    fn sort_change_reorders_and_reranks() {
        let mut board = Leaderboard::new(results());
        board.set_sort(SortKey::Axis(Axis::ResponseStrategy));
        assert_eq!(board.entry_at(0).map(|e| e.model_id.as_str()), Some("acme/low"));
        assert_eq!(board.entry_at(0).map(|e| e.rank), Some(1));
    }

    #[test]
    fn typing_and_deleting_search_characters() {
        let mut board = Leaderboard::new(results());
        board.push_search_char('h');
        board.push_search_char('i');
        assert_eq!(board.search(), "hi");
        assert_eq!(board.view().len(), 1);

        board.pop_search_char();
        board.pop_search_char();
        board.pop_search_char();
        assert_eq!(board.search(), "");
        assert_eq!(board.view().len(), 2);
    }

    #[test]
    fn update_sets_both_inputs() {
        let mut board = Leaderboard::new(results());
        board.update("low", SortKey::parse("bogus"));
        assert_eq!(board.sort(), SortKey::Unsorted);
        assert_eq!(board.view().len(), 1);
        assert_eq!(board.view_state().search, "low");
    }
}
