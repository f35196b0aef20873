//! App Configuration
//!
//! Endpoints and map defaults. Base URLs can be overridden at build time
//! through `ECOLETA_API_URL` / `ECOLETA_GEO_URL`.

use leaflet_map::{LatLng, TileLayerConfig, DEFAULT_ZOOM};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_GEO_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Map center used until (or unless) geolocation succeeds: Brasília
pub const FALLBACK_CENTER: LatLng = LatLng::new(-15.7801, -47.9292);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Local API serving `/items` and `/points`
    pub api_base_url: String,
    /// IBGE localidades API
    pub geo_base_url: String,
    pub tiles: TileLayerConfig,
    pub fallback_center: LatLng,
    pub zoom: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_GEO_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str, geo_base_url: &str) -> Self {
        Self {
            api_base_url: trim_base(api_base_url),
            geo_base_url: trim_base(geo_base_url),
            tiles: TileLayerConfig::openstreetmap(),
            fallback_center: FALLBACK_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Compiled-in defaults with build-time overrides applied
    pub fn from_env() -> Self {
        Self::new(
            option_env!("ECOLETA_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("ECOLETA_GEO_URL").unwrap_or(DEFAULT_GEO_URL),
        )
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.api_base_url)
    }

    pub fn points_url(&self) -> String {
        format!("{}/points", self.api_base_url)
    }

    pub fn ufs_url(&self) -> String {
        format!("{}/estados", self.geo_base_url)
    }

    pub fn cities_url(&self, uf: &str) -> String {
        format!("{}/estados/{}/municipios", self.geo_base_url, uf)
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let config = AppConfig::default();
        assert_eq!(config.items_url(), "http://localhost:3333/items");
        assert_eq!(config.points_url(), "http://localhost:3333/points");
        assert_eq!(
            config.ufs_url(),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados"
        );
        assert_eq!(
            config.cities_url("SP"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP/municipios"
        );
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = AppConfig::new("https://api.example.com/ ", "https://geo.example.com//");
        assert_eq!(config.items_url(), "https://api.example.com/items");
        assert_eq!(config.cities_url("0"), "https://geo.example.com/estados/0/municipios");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.fallback_center, FALLBACK_CENTER);
        assert_eq!(config.zoom, DEFAULT_ZOOM);
    }
}
