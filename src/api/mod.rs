//! Outbound Capabilities
//!
//! Everything the page talks to outside the WASM module: the local API, the
//! IBGE geography service and the browser's geolocation. Components only see
//! the traits, so tests can swap in fakes.

mod http;
mod location;

use async_trait::async_trait;
use leaflet_map::LatLng;

use crate::models::{City, Item, NewPoint, Uf};

pub use http::HttpPointsApi;
pub use location::BrowserLocation;

/// HTTP fetch capability
#[async_trait(?Send)]
pub trait PointsApi {
    /// `GET /items` on the local API
    async fn list_items(&self) -> Result<Vec<Item>, String>;

    /// `GET /estados` on the geography service
    async fn list_ufs(&self) -> Result<Vec<Uf>, String>;

    /// `GET /estados/{uf}/municipios` on the geography service
    async fn list_cities(&self, uf: &str) -> Result<Vec<City>, String>;

    /// `POST /points` on the local API
    async fn create_point(&self, point: &NewPoint) -> Result<(), String>;
}

/// One-shot device position
#[async_trait(?Send)]
pub trait LocationProvider {
    async fn current_position(&self) -> Result<LatLng, String>;
}
