//! Browser Geolocation
//!
//! Wraps `navigator.geolocation.getCurrentPosition` in a future.

use async_trait::async_trait;
use leaflet_map::LatLng;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::LocationProvider;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

#[async_trait(?Send)]
impl LocationProvider for BrowserLocation {
    async fn current_position(&self) -> Result<LatLng, String> {
        let window = web_sys::window().ok_or("no window")?;
        let geolocation = window
            .navigator()
            .geolocation()
            .map_err(|_| "geolocation unavailable".to_string())?;

        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
                let _ = reject.call1(&wasm_bindgen::JsValue::NULL, &e);
            }
        });

        let value = JsFuture::from(promise).await.map_err(|e| {
            // PositionError is not an instanceof-checkable class, read the field
            js_sys::Reflect::get(&e, &"message".into())
                .ok()
                .and_then(|message| message.as_string())
                .unwrap_or_else(|| format!("{:?}", e))
        })?;

        let position: web_sys::Position = value.unchecked_into();
        let coords = position.coords();
        Ok(LatLng::new(coords.latitude(), coords.longitude()))
    }
}
