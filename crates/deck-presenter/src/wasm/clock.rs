use wasm_bindgen::prelude::*;

use crate::session::Clock;

// Import js_sys::Date for timestamps
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Clock backed by `Date.now()`
#[derive(Clone, Copy, Debug, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> f64 {
        date_now()
    }
}
