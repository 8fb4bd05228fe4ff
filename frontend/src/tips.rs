use shared::{AnalysisResult, TipSource};
use wasm_bindgen::{JsCast, JsValue};

const GENERATOR: &str = "generateTips";

/// Tip generator installed by the page's `tips.js` as `window.generateTips`.
/// It is looked up on every call, so a script that loads late still works.
pub struct WindowTips;

impl TipSource for WindowTips {
    fn tips(&self, result: &AnalysisResult, language: &str) -> Option<Vec<String>> {
        let window = web_sys::window()?;
        let generator = js_sys::Reflect::get(&window, &JsValue::from_str(GENERATOR))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok());

        let Some(generator) = generator else {
            gloo_console::error!("generateTips function not loaded from tips.js");
            return None;
        };

        let payload = match serde_json::to_string(result) {
            Ok(json) => js_sys::JSON::parse(&json).ok()?,
            Err(e) => {
                log::error!("Could not serialize analysis for tips: {}", e);
                return None;
            }
        };

        let returned = match generator.call2(&JsValue::NULL, &payload, &JsValue::from_str(language)) {
            Ok(value) => value,
            Err(e) => {
                log::error!("generateTips threw: {:?}", e);
                return None;
            }
        };

        let tips = returned
            .dyn_into::<js_sys::Array>()
            .map(|array| array.iter().filter_map(|tip| tip.as_string()).collect())
            .unwrap_or_default();
        Some(tips)
    }
}
