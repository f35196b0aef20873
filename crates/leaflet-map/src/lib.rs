//! Leptos Leaflet Map
//!
//! Minimal map widget: one tile layer, one optional marker, click events.
//! The Leaflet map is created lazily the first time the container is mounted.

pub mod ffi;

use leptos::html::Div;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Zoom used when the caller does not pass one
pub const DEFAULT_ZOOM: f64 = 15.0;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `[lat, lng]` array, the form Leaflet accepts everywhere
    pub fn to_js(&self) -> JsValue {
        js_sys::Array::of2(&self.lat.into(), &self.lng.into()).into()
    }
}

/// Tile source for the base layer
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub attribution: String,
    pub subdomains: String,
    pub max_zoom: u8,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
    subdomains: &'a str,
    #[serde(rename = "maxZoom")]
    max_zoom: u8,
}

impl TileLayerConfig {
    pub fn openstreetmap() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            subdomains: "abc".to_string(),
            max_zoom: 19,
        }
    }

    fn options(&self) -> JsValue {
        let options = TileOptions {
            attribution: &self.attribution,
            subdomains: &self.subdomains,
            max_zoom: self.max_zoom,
        };
        serde_wasm_bindgen::to_value(&options).unwrap_or(JsValue::UNDEFINED)
    }
}

fn mount_map(
    element: &web_sys::HtmlElement,
    tiles: &TileLayerConfig,
    center: LatLng,
    zoom: f64,
    on_click: Callback<LatLng>,
) -> ffi::Map {
    let map = ffi::create_map(element, &js_sys::Object::new().into());
    map.set_view(&center.to_js(), zoom);
    ffi::create_tile_layer(&tiles.url_template, &tiles.options()).add_tile_layer_to(&map);

    let on_map_click = Closure::<dyn FnMut(ffi::MapMouseEvent)>::new(move |ev: ffi::MapMouseEvent| {
        let point = ev.latlng();
        on_click.run(LatLng::new(point.lat(), point.lng()));
    });
    map.on("click", on_map_click.as_ref().unchecked_ref());
    on_map_click.forget();

    map
}

/// Leaflet map with a single tile layer.
///
/// `center` moves the view whenever it changes. `marker` places (or removes)
/// the only marker. Clicks anywhere on the map are reported through
/// `on_click`; the widget never moves the marker on its own.
#[component]
pub fn LeafletMap(
    #[prop(into)] center: Signal<LatLng>,
    #[prop(into)] marker: Signal<Option<LatLng>>,
    #[prop(into)] on_click: Callback<LatLng>,
    #[prop(optional)] tiles: Option<TileLayerConfig>,
    #[prop(default = DEFAULT_ZOOM)] zoom: f64,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let tiles = StoredValue::new(tiles.unwrap_or_default());
    let handle = StoredValue::new_local(None::<ffi::Map>);
    let pin = StoredValue::new_local(None::<ffi::Marker>);

    let ensure_map = move || -> Option<ffi::Map> {
        let element = container.get()?;
        if let Some(map) = handle.get_value() {
            return Some(map);
        }
        let map = tiles.with_value(|t| mount_map(&element, t, center.get_untracked(), zoom, on_click));
        handle.set_value(Some(map.clone()));
        Some(map)
    };

    Effect::new(move |_| {
        let target = center.get();
        if let Some(map) = ensure_map() {
            map.set_view(&target.to_js(), zoom);
        }
    });

    Effect::new(move |_| {
        let position = marker.get();
        let Some(map) = ensure_map() else { return };
        pin.update_value(|current| {
            let existing = current.take();
            *current = match (position, existing) {
                (Some(p), Some(existing)) => Some(existing.set_lat_lng(&p.to_js())),
                (Some(p), None) => Some(ffi::create_marker(&p.to_js()).add_marker_to(&map)),
                (None, Some(existing)) => {
                    existing.remove_marker();
                    None
                }
                (None, None) => None,
            };
        });
    });

    on_cleanup(move || {
        pin.update_value(|current| {
            current.take();
        });
        handle.update_value(|map| {
            if let Some(map) = map.take() {
                map.remove();
            }
        });
    });

    view! { <div class="leaflet-map" node_ref=container></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiles_are_openstreetmap() {
        let tiles = TileLayerConfig::default();
        assert_eq!(tiles, TileLayerConfig::openstreetmap());
        assert_eq!(tiles.url_template, OSM_TILE_URL);
        assert!(tiles.attribution.contains("OpenStreetMap"));
        assert_eq!(tiles.subdomains, "abc");
    }

    #[test]
    fn test_origin_is_default() {
        assert_eq!(LatLng::default(), LatLng::ORIGIN);
        assert_eq!(LatLng::new(-23.55, -46.63).lat, -23.55);
    }

    #[test]
    fn test_lat_lng_deserializes() {
        let point: LatLng = serde_json::from_str(r#"{"lat": 1.5, "lng": -2.0}"#).unwrap();
        assert_eq!(point, LatLng::new(1.5, -2.0));
    }
}
