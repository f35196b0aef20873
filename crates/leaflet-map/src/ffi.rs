//! Leaflet bindings
//!
//! Thin wrappers over the global `L` namespace. Leaflet itself is loaded by a
//! `<script>` tag in the host page.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn create_map(element: &web_sys::HtmlElement, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map) -> Map;

    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn create_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_tile_layer_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn create_marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_marker_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_marker(this: &Marker) -> Marker;

    /// `L.LeafletMouseEvent`
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MapMouseEvent) -> JsLatLng;

    /// `L.LatLng`
    pub type JsLatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &JsLatLng) -> f64;
}
