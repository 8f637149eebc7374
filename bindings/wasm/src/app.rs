use choroselect_core::{
    parse_metric_table, AppConfig, AppController, BoundarySet, Event, FetchError, RegionId, SessionId, Style,
};
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::{common::*, embed::JsEmbed};

/// Handle for one load; pass it back with the fetch results so stale responses are dropped.
#[wasm_bindgen]
pub struct WasmSession(SessionId);

#[derive(Serialize)]
struct StyledRegion<'a> {
    region: &'a RegionId,
    style: Style,
}

#[wasm_bindgen]
pub struct WasmApp {
    inner: AppController<JsEmbed>,
    config: AppConfig,
}

#[wasm_bindgen]
impl WasmApp {
    /// Build from a JSON session config and the embed panel callbacks:
    /// `on_filter({ type, field, operator, values })` and `on_foreground(raised)`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, on_filter: Function, on_foreground: Function) -> Result<WasmApp, JsValue> {
        let config = AppConfig::from_json_str(config_json).map_err(js_err)?;
        let inner = AppController::from_config(&config, JsEmbed::new(on_filter, on_foreground));
        Ok(WasmApp { inner, config })
    }

    /// URL the page should fetch the boundary GeoJSON from.
    pub fn boundary_url(&self) -> String { self.config.boundary.url.clone() }

    /// `{ endpoint, query, dataset }` for the metric request.
    pub fn metrics_request(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.config.metrics).map_err(|e| e.into())
    }

    pub fn begin_load(&mut self) -> WasmSession { WasmSession(self.inner.begin_load()) }

    pub fn boundary_loaded(&mut self, session: &WasmSession, geojson: &str) {
        let result = BoundarySet::from_geojson_bytes(geojson.as_bytes());
        self.inner.handle(Event::BoundaryFetched { session: session.0, result });
    }

    pub fn boundary_failed(&mut self, session: &WasmSession, url: String, message: String) {
        let result = Err(FetchError::Http { url, message });
        self.inner.handle(Event::BoundaryFetched { session: session.0, result });
    }

    pub fn metrics_loaded(&mut self, session: &WasmSession, table: &str) {
        let result = parse_metric_table(table.as_bytes());
        self.inner.handle(Event::MetricsFetched { session: session.0, result });
    }

    pub fn metrics_failed(&mut self, session: &WasmSession, url: String, message: String) {
        let result = Err(FetchError::Http { url, message });
        self.inner.handle(Event::MetricsFetched { session: session.0, result });
    }

    /// Whether the boundary has loaded, i.e. the metric request may be issued.
    pub fn has_boundary(&self) -> bool { self.inner.boundary().is_some() }

    pub fn click(&mut self, region: &str) { self.inner.handle(Event::RegionClicked(region.into())) }

    pub fn explore(&mut self) { self.inner.handle(Event::ExploreClicked) }

    pub fn close(&mut self) { self.inner.handle(Event::CloseClicked) }

    pub fn set_embed_ready(&mut self, ready: bool) { self.inner.embed_mut().ready = ready }

    pub fn teardown(&mut self) { self.inner.teardown() }

    /// `{ fillColor, strokeColor, strokeWidth, strokeOpacity, fillOpacity }` for one region.
    pub fn style_for(&self, region: &str) -> Result<JsValue, JsValue> {
        let style = self.inner.style_for(&RegionId::from(region));
        serde_wasm_bindgen::to_value(&style).map_err(|e| e.into())
    }

    /// `[{ region, style }, ...]` in boundary order.
    pub fn styles(&self) -> Result<JsValue, JsValue> {
        let styles = self.inner.styles();
        let out = styles.iter()
            .map(|(region, style)| StyledRegion { region, style: *style })
            .collect::<Vec<_>>();
        serde_wasm_bindgen::to_value(&out).map_err(|e| e.into())
    }

    pub fn selection(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.selection().list()).map_err(|e| e.into())
    }

    pub fn selection_label(&self) -> String { self.inner.selection_label() }

    pub fn explore_visible(&self) -> bool { self.inner.explore_visible() }

    pub fn panel_raised(&self) -> bool { self.inner.panel_raised() }
}
