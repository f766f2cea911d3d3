mod chart;
mod fetch;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

use mirage_leaderboard::loader::RESULTS_URL;
use mirage_leaderboard::{Leaderboard, SortKey};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::EventTarget;

use crate::fetch::fetch_results;
use crate::page::Page;

struct App {
    board: Leaderboard,
    page: Page,
}

impl App {
    /// Re-reads both controls and redraws.
    fn refresh(&mut self) {
        let search = self.page.search_value();
        let sort = SortKey::parse(&self.page.sort_value());
        self.board.update(search, sort);
        self.page.render(&self.board);
    }
}

fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let page = Page::new(&document);
    spawn_local(start(page));

    Ok(())
}

async fn start(page: Page) {
    let loaded = fetch_results(RESULTS_URL).await;
    match &loaded {
        Ok(results) => web_sys::console::log_1(
            &format!("Loaded {} leaderboard entries", results.len()).into(),
        ),
        Err(error) => web_sys::console::log_1(&format!("No results data yet: {error}").into()),
    }

    let board = Leaderboard::from_load(loaded);
    page.render_total(board.total_models());

    let app = Rc::new(RefCell::new(App { board, page }));
    app.borrow_mut().refresh();

    let (search_input, sort_select) = {
        let app = app.borrow();
        (app.page.search_input.clone(), app.page.sort_select.clone())
    };
    if let Some(input) = search_input {
        listen(&input, "input", &app);
    }
    if let Some(select) = sort_select {
        listen(&select, "change", &app);
    }
}

fn listen(target: &EventTarget, event_name: &str, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        app.borrow_mut().refresh();
    }) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(error) =
        target.add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())
    {
        web_sys::console::error_2(&format!("Failed to listen for {event_name}").into(), &error);
    }
    handler.forget();
}
