use mirage_leaderboard::charts::ChartConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// Global `Chart` from Chart.js, loaded by the page.
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

/// Create/destroy lifecycle of a charting library bound to one canvas.
pub trait ChartSurface {
    type Instance;

    fn create(&self, config: &ChartConfig) -> Option<Self::Instance>;
    fn destroy(&self, instance: Self::Instance);
}

/// Chart.js drawing on a page canvas.
pub struct ChartJs {
    canvas: HtmlCanvasElement,
}

impl ChartJs {
    pub const fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ChartSurface for ChartJs {
    type Instance = Chart;

    fn create(&self, config: &ChartConfig) -> Option<Chart> {
        let value = match config.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(value) => value,
            Err(error) => {
                web_sys::console::error_1(&format!("Failed to encode chart config: {error}").into());
                return None;
            }
        };

        match Chart::new(&self.canvas, &value) {
            Ok(chart) => Some(chart),
            Err(error) => {
                web_sys::console::error_2(&"Failed to create chart".into(), &error);
                None
            }
        }
    }

    fn destroy(&self, instance: Chart) {
        instance.destroy();
    }
}

/// One canvas and at most one chart drawn on it.
pub struct ChartSlot<S: ChartSurface = ChartJs> {
    surface: Option<S>,
    instance: Option<S::Instance>,
}

impl<S: ChartSurface> ChartSlot<S> {
    pub const fn new(surface: Option<S>) -> Self {
        Self {
            surface,
            instance: None,
        }
    }

    /// Replaces whatever is on the canvas. The previous instance is always
    /// destroyed first; `None` leaves the canvas blank.
    pub fn redraw(&mut self, config: Option<&ChartConfig>) {
        let Some(surface) = &self.surface else {
            return;
        };

        if let Some(previous) = self.instance.take() {
            surface.destroy(previous);
        }

        if let Some(config) = config {
            self.instance = surface.create(config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_leaderboard::charts::bar_chart;
    use mirage_leaderboard::{apply, Entry, ResultSet, SortKey};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Create(usize),
        Destroy(usize),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<Call>>>,
        next_id: RefCell<usize>,
    }

    impl ChartSurface for Recorder {
        type Instance = usize;

        fn create(&self, _config: &ChartConfig) -> Option<usize> {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            self.calls.borrow_mut().push(Call::Create(*next_id));
            Some(*next_id)
        }

        fn destroy(&self, instance: usize) {
            self.calls.borrow_mut().push(Call::Destroy(instance));
        }
    }

    fn config() -> ChartConfig {
        let results = ResultSet {
            entries: vec![Entry::new("acme/a", "A", 8.0)],
            ..ResultSet::default()
        };
        bar_chart(&apply(&results, "", SortKey::Overall)).unwrap()
    }

    fn slot() -> (ChartSlot<Recorder>, Rc<RefCell<Vec<Call>>>) {
        let recorder = Recorder::default();
        let calls = recorder.calls.clone();
        (ChartSlot::new(Some(recorder)), calls)
    }

    #[test]
    fn redraw_destroys_previous_before_creating() {
        let (mut slot, calls) = slot();
        let config = config();

        slot.redraw(Some(&config));
        slot.redraw(Some(&config));

        assert_eq!(
            *calls.borrow(),
            [Call::Create(1), Call::Destroy(1), Call::Create(2)]
        );
    }

    #[test]
    fn empty_redraw_destroys_without_creating() {
        let (mut slot, calls) = slot();

        slot.redraw(Some(&config()));
        slot.redraw(None);
        slot.redraw(None);

        assert_eq!(*calls.borrow(), [Call::Create(1), Call::Destroy(1)]);
    }

    #[test]
    fn missing_canvas_is_skipped() {
        let mut slot = ChartSlot::<Recorder>::new(None);
        slot.redraw(Some(&config()));
        assert!(slot.instance.is_none());
    }
}
