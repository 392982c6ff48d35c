//! travel-wasm: the browser search widget for travel-core
//!
//! This crate wires the `travel-core` search pipeline to a plain HTML page:
//! it fetches `travel_recommendation_api.json` next to the page on every
//! search, runs the controller, and writes the rendered cards into the
//! output container.
//!
//! Expected page elements
//! ----------------------
//! - `#searchInput`: text input holding the keyword
//! - `#searchButton`, `#resetButton`: the two triggers
//! - `#recommendationResults`: the output container
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init from './pkg/travel_wasm.js';
//!
//! await init(); // binds the buttons
//! ```
//!
//! Pure helpers are exported too, for pages that want to drive the DOM
//! themselves:
//! - `normalize_keyword("Beaches")` → `"beach"`
//! - `recommend_json(jsonText, "japan")` → array of result records
//! - `current_time("Asia/Tokyo")` → `"9:04:05 PM"`
//!
//! Notes
//! -----
//! - The dataset is fetched again for every search and never cached.
//! - Clicking search twice starts two fetches; whichever finishes last is
//!   what stays on screen.
//! - See `www/` for a minimal host page.
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use serde_wasm_bindgen::to_value;
use travel_core::controller::{Command, Controller, Transition, UiState};
use travel_core::loader::{DatasetSource, DEFAULT_DATASET_FILENAME};
use travel_core::time::{format_now, SystemClock};
use travel_core::{Dataset, RecommendationSearch, TravelError};

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod console_log;

const INPUT_ID: &str = "searchInput";
const SEARCH_BUTTON_ID: &str = "searchButton";
const RESET_BUTTON_ID: &str = "resetButton";
const RESULTS_ID: &str = "recommendationResults";

thread_local! {
    static STATE: RefCell<UiState> = RefCell::new(UiState::default());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init();
    web_sys::console::log_1(&"Initializing travel search widget...".into());

    bind_click(SEARCH_BUTTON_ID, || {
        wasm_bindgen_futures::spawn_local(async {
            if let Err(e) = search().await {
                web_sys::console::error_2(&"search failed:".into(), &e);
            }
        });
    });
    bind_click(RESET_BUTTON_ID, || {
        if let Err(e) = reset() {
            web_sys::console::error_2(&"reset failed:".into(), &e);
        }
    });
}

/* --------------------------------------------------------------------------
   Widget Actions
-------------------------------------------------------------------------- */

/// Read the search field, fetch the dataset, and render up to two cards.
#[wasm_bindgen]
pub async fn search() -> Result<(), JsValue> {
    let input = input_element()?.value();

    // Nothing to fetch for a blank term: the controller only warns.
    let fetched = if input.trim().is_empty() {
        Fetched(Err("not fetched".into()))
    } else {
        Fetched(fetch_dataset().await.map_err(|e| format!("{e:?}")))
    };

    // Read the view only after the await: the last search to finish wins.
    let state = UiState {
        input,
        view: STATE.with(|s| s.borrow().view.clone()),
    };
    let controller = Controller::new(fetched, SystemClock);
    apply(controller.handle(state, Command::Search), Command::Search)
}

/// Clear the search field and the output area.
#[wasm_bindgen]
pub fn reset() -> Result<(), JsValue> {
    let controller = Controller::new(Fetched(Err("not fetched".into())), SystemClock);
    let state = STATE.with(|s| s.borrow().clone());
    apply(controller.handle(state, Command::Reset), Command::Reset)
}

/* --------------------------------------------------------------------------
   Pure Helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn normalize_keyword(raw: &str) -> String {
    travel_core::text::normalize_keyword(raw)
}

/// Run the recommendation query over dataset JSON text.
#[wasm_bindgen]
pub fn recommend_json(json: &str, keyword: &str) -> Result<JsValue, JsError> {
    let db = Dataset::from_json_str(json)?;
    Ok(to_value(&db.recommend(keyword))?)
}

#[wasm_bindgen]
pub fn current_time(zone: Option<String>) -> String {
    format_now(zone.as_deref())
}

#[wasm_bindgen]
pub fn get_stats(json: &str) -> Result<JsValue, JsError> {
    let db = Dataset::from_json_str(json)?;
    Ok(to_value(&db.stats())?)
}

/* --------------------------------------------------------------------------
   DOM Plumbing
-------------------------------------------------------------------------- */

/// The fetch outcome, presented to the controller as a dataset source.
struct Fetched(Result<String, String>);

impl DatasetSource for Fetched {
    fn load(&self) -> travel_core::Result<Dataset> {
        match &self.0 {
            Ok(text) => Dataset::from_json_str(text),
            Err(e) => Err(TravelError::NotFound(e.clone())),
        }
    }
}

async fn fetch_dataset() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_str(DEFAULT_DATASET_FILENAME))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Err(format!("HTTP {} for {DEFAULT_DATASET_FILENAME}", resp.status()).into());
    }
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string().ok_or_else(|| "response body is not text".into())
}

/// Only a reset writes the search field. A search leaves whatever the user
/// has typed since clicking, including when the load failed.
fn writes_input(command: Command) -> bool {
    command == Command::Reset
}

/// Store the new state, paint it, and show any notice.
fn apply(t: Transition, command: Command) -> Result<(), JsValue> {
    if writes_input(command) {
        input_element()?.set_value(&t.state.input);
    }
    element(RESULTS_ID)?.set_inner_html(&t.state.view.to_html());
    STATE.with(|s| *s.borrow_mut() = t.state);

    if let Some(notice) = t.notice {
        let window = web_sys::window().ok_or("no window")?;
        window.alert_with_message(notice.message())?;
    }
    Ok(())
}

fn element(id: &str) -> Result<web_sys::Element, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn input_element() -> Result<web_sys::HtmlInputElement, JsValue> {
    element(INPUT_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{INPUT_ID} is not an input")))
}

#[cfg(target_arch = "wasm32")]
fn bind_click(id: &str, handler: impl FnMut() + 'static) {
    let Ok(el) = element(id) else {
        web_sys::console::warn_1(&format!("#{id} not found; button not bound").into());
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(handler);
    if let Err(e) = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
        web_sys::console::error_1(&e);
    }
    // Handlers live as long as the page.
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_reset_writes_the_search_field() {
        assert!(writes_input(Command::Reset));
        assert!(!writes_input(Command::Search));
    }

    #[test]
    fn failed_fetch_keeps_prior_state() {
        let before = UiState {
            input: "japan".into(),
            view: travel_core::render::View::NoResults,
        };
        let controller = Controller::new(Fetched(Err("HTTP 404".into())), SystemClock);
        let t = controller.handle(before.clone(), Command::Search);
        assert_eq!(t.state, before);
        assert!(t.notice.is_none());
        assert!(!writes_input(Command::Search));
    }
}
