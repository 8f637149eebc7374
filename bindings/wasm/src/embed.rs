use choroselect_core::{EmbedPanel, FilterCommand};
use js_sys::Function;
use wasm_bindgen::JsValue;

use crate::common::console_warn;

/// Embed panel backed by two JS callbacks: `on_filter(command)` and `on_foreground(raised)`.
pub(crate) struct JsEmbed {
    pub(crate) ready: bool,
    on_filter: Function,
    on_foreground: Function,
}

impl JsEmbed {
    pub(crate) fn new(on_filter: Function, on_foreground: Function) -> Self {
        Self { ready: false, on_filter, on_foreground }
    }
}

impl EmbedPanel for JsEmbed {
    fn is_ready(&self) -> bool { self.ready }

    fn send(&mut self, command: FilterCommand) {
        let value = match serde_wasm_bindgen::to_value(&command) {
            Ok(value) => value,
            Err(e) => return console_warn(&format!("failed to convert filter command: {e}")),
        };
        if let Err(e) = self.on_filter.call1(&JsValue::NULL, &value) {
            console_warn(&format!("on_filter callback threw: {e:?}"));
        }
    }

    fn set_foreground(&mut self, raised: bool) {
        if let Err(e) = self.on_foreground.call1(&JsValue::NULL, &JsValue::from_bool(raised)) {
            console_warn(&format!("on_foreground callback threw: {e:?}"));
        }
    }
}
