use mirage_leaderboard::table::LeaderboardTable;
use mirage_leaderboard::Leaderboard;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::chart::{ChartJs, ChartSlot};

/// Element ids the page template provides.
pub struct PageIds {
    pub search_input: &'static str,
    pub sort_select: &'static str,
    pub table_body: &'static str,
    pub no_data: &'static str,
    pub total_models: &'static str,
    pub radar_chart: &'static str,
    pub bar_chart: &'static str,
}

pub const PAGE_IDS: PageIds = PageIds {
    search_input: "search-input",
    sort_select: "sort-select",
    table_body: "leaderboard-body",
    no_data: "no-data-message",
    total_models: "total-models",
    radar_chart: "radar-chart",
    bar_chart: "bar-chart",
};

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Everything on the page the leaderboard writes to or reads from.
/// Missing elements are tolerated and simply skipped.
pub struct Page {
    pub search_input: Option<HtmlInputElement>,
    pub sort_select: Option<HtmlSelectElement>,
    table_body: Option<Element>,
    no_data: Option<HtmlElement>,
    total_models: Option<Element>,
    radar: ChartSlot,
    bar: ChartSlot,
}

impl Page {
    pub fn new(document: &Document) -> Self {
        let ids = &PAGE_IDS;
        Self {
            search_input: element_by_id(document, ids.search_input),
            sort_select: element_by_id(document, ids.sort_select),
            table_body: document.get_element_by_id(ids.table_body),
            no_data: element_by_id(document, ids.no_data),
            total_models: document.get_element_by_id(ids.total_models),
            radar: ChartSlot::new(element_by_id::<HtmlCanvasElement>(document, ids.radar_chart).map(ChartJs::new)),
            bar: ChartSlot::new(element_by_id::<HtmlCanvasElement>(document, ids.bar_chart).map(ChartJs::new)),
        }
    }

    pub fn search_value(&self) -> String {
        self.search_input
            .as_ref()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    pub fn sort_value(&self) -> String {
        self.sort_select
            .as_ref()
            .map_or_else(|| "overall".to_string(), HtmlSelectElement::value)
    }

    pub fn render_total(&self, total: usize) {
        if let Some(counter) = &self.total_models {
            counter.set_text_content(Some(&total.to_string()));
        }
    }

    pub fn render_table(&self, table: &LeaderboardTable) {
        if let Some(body) = &self.table_body {
            body.set_inner_html(&table.rows_html);
        }
        if let Some(no_data) = &self.no_data {
            let display = if table.show_no_data() { "block" } else { "none" };
            if let Err(error) = no_data.style().set_property("display", display) {
                web_sys::console::error_2(&"Failed to toggle no-data message".into(), &error);
            }
        }
    }

    pub fn render_charts(&mut self, board: &Leaderboard) {
        self.radar.redraw(board.radar_chart().as_ref());
        self.bar.redraw(board.bar_chart().as_ref());
    }

    /// Full redraw of the view-dependent parts. The total counter is left alone.
    pub fn render(&mut self, board: &Leaderboard) {
        self.render_table(&board.table());
        self.render_charts(board);
    }
}
