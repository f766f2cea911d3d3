use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::App;

pub fn handle_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if app.board.search().is_empty() {
                app.running = false;
            } else {
                app.clear_search();
            }
        }
        KeyCode::Char('q') if app.board.search().is_empty() => {
            app.running = false;
        }
        KeyCode::Char(ch) => app.push_search(ch),
        KeyCode::Backspace => app.pop_search(),
        KeyCode::Tab => app.next_sort(),
        KeyCode::BackTab => app.prev_sort(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.selected_index = 0,
        KeyCode::End => app.select_last(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_leaderboard::{Axis, Entry, Leaderboard, ResultSet, SortKey};
    use std::path::PathBuf;

    fn app() -> App {
        let mut quiet = Entry::new("acme/quiet", "Quiet", 4.0);
        quiet.axis_scores.set(Axis::AmbiguityDetection, Some(2.0));
        let results = ResultSet {
            entries: vec![
                quiet,
                Entry::new("acme/loud", "Loud", 9.0),
                Entry::new("zen/query", "Query", 6.0),
            ],
            ..ResultSet::default()
        };
        App::new(Leaderboard::new(results), PathBuf::from("results.json"))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_filters_and_resets_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 1);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.row_count(), 3);
        press(&mut app, KeyCode::Char('e'));
        assert!(app.running);
        assert_eq!(app.board.search(), "ue");
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.row_count(), 1);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.board.search(), "ueq");
    }

    #[test]
    fn q_quits_only_with_empty_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn escape_clears_search_before_quitting() {
        let mut app = app();
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Esc);
        assert!(app.running);
        assert_eq!(app.board.search(), "");
        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn tab_cycles_sort_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.board.sort(), SortKey::Axis(Axis::AmbiguityDetection));
        assert_eq!(app.selected_entry().map(|e| e.model_id.as_str()), Some("acme/quiet"));

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.board.sort(), SortKey::Axis(Axis::EpistemicTone));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index, 0);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected_index, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index, 2);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected_index, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.selected_index, 2);
    }
}
