//! HTTP Points API
//!
//! `reqwest` client for the local API and the IBGE service. On wasm32 this
//! goes through the browser's `fetch`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::PointsApi;
use crate::config::AppConfig;
use crate::models::{City, Item, NewPoint, Uf};

pub struct HttpPointsApi {
    client: reqwest::Client,
    config: AppConfig,
}

impl HttpPointsApi {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        let response = self.client.get(url).send().await.map_err(|e| e.to_string())?;
        let response = response.error_for_status().map_err(|e| e.to_string())?;
        response.json::<T>().await.map_err(|e| e.to_string())
    }
}

#[async_trait(?Send)]
impl PointsApi for HttpPointsApi {
    async fn list_items(&self) -> Result<Vec<Item>, String> {
        self.get_json(&self.config.items_url()).await
    }

    async fn list_ufs(&self) -> Result<Vec<Uf>, String> {
        self.get_json(&self.config.ufs_url()).await
    }

    async fn list_cities(&self, uf: &str) -> Result<Vec<City>, String> {
        self.get_json(&self.config.cities_url(uf)).await
    }

    async fn create_point(&self, point: &NewPoint) -> Result<(), String> {
        self.client
            .post(self.config.points_url())
            .json(point)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
