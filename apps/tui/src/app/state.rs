use std::path::PathBuf;

use mirage_leaderboard::{Entry, Leaderboard, SortKey};

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub board: Leaderboard,
    pub selected_index: usize,
    pub source: PathBuf,
    pub status_message: String,
}

impl App {
    pub fn new(board: Leaderboard, source: PathBuf) -> Self {
        let status_message = if board.total_models() == 0 {
            format!("No results data in {}", source.display())
        } else {
            format!("Loaded {} models from {}", board.total_models(), source.display())
        };

        Self {
            running: true,
            board,
            selected_index: 0,
            source,
            status_message,
        }
    }

    pub fn row_count(&self) -> usize {
        self.board.view().len()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.board.entry_at(self.selected_index)
    }

    pub fn push_search(&mut self, ch: char) {
        self.board.push_search_char(ch);
        self.selected_index = 0;
    }

    pub fn pop_search(&mut self) {
        self.board.pop_search_char();
        self.selected_index = 0;
    }

    pub fn clear_search(&mut self) {
        self.board.set_search(String::new());
        self.selected_index = 0;
    }

    pub fn next_sort(&mut self) {
        self.set_sort(self.board.sort().next());
    }

    pub fn prev_sort(&mut self) {
        self.set_sort(self.board.sort().prev());
    }

    fn set_sort(&mut self, sort: SortKey) {
        self.board.set_sort(sort);
        self.selected_index = 0;
        self.status_message = format!("Sorted by {}", sort.label());
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.row_count() {
            self.selected_index += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(5);
    }

    pub fn page_down(&mut self) {
        let rows = self.row_count();
        if rows > 0 {
            self.selected_index = (self.selected_index + 5).min(rows - 1);
        }
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.row_count().saturating_sub(1);
    }
}
