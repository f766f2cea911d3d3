use mirage_leaderboard::loader;
use mirage_leaderboard::{LeaderboardError, ResultSet};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetches and parses the leaderboard document. Any failure is reported, never retried.
pub async fn fetch_results(url: &str) -> Result<ResultSet, LeaderboardError> {
    let window = web_sys::window().ok_or_else(|| LeaderboardError::Fetch("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response = response_value.dyn_into::<Response>().map_err(js_error)?;

    if !response.ok() {
        return Err(LeaderboardError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| LeaderboardError::Fetch(format!("{url} body is not text")))?;

    loader::parse_result_set(&body)
}

fn js_error(value: JsValue) -> LeaderboardError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    LeaderboardError::Fetch(message)
}
