//! Page Loaders
//!
//! The page never shows a loading or error state: every load resolves to a
//! value, falling back to empty lists (or the fallback center) and logging
//! the failure.

use leaflet_map::LatLng;

use crate::api::{LocationProvider, PointsApi};
use crate::models::{City, Item, NewPoint, Uf};

pub async fn load_items(api: &dyn PointsApi) -> Vec<Item> {
    match api.list_items().await {
        Ok(items) => {
            log::info!("[CreatePoint] Loaded {} items", items.len());
            items
        }
        Err(e) => {
            log::warn!("[CreatePoint] Failed to load items: {}", e);
            Vec::new()
        }
    }
}

pub async fn load_ufs(api: &dyn PointsApi) -> Vec<Uf> {
    match api.list_ufs().await {
        Ok(ufs) => ufs,
        Err(e) => {
            log::warn!("[CreatePoint] Failed to load UFs: {}", e);
            Vec::new()
        }
    }
}

pub async fn load_cities(api: &dyn PointsApi, uf: &str) -> Vec<City> {
    match api.list_cities(uf).await {
        Ok(cities) => cities,
        Err(e) => {
            log::warn!("[CreatePoint] Failed to load cities for {}: {}", uf, e);
            Vec::new()
        }
    }
}

/// Device position, or `fallback` when the user denies or the query fails
pub async fn locate(location: &dyn LocationProvider, fallback: LatLng) -> LatLng {
    match location.current_position().await {
        Ok(position) => position,
        Err(e) => {
            log::warn!("[CreatePoint] Geolocation failed, keeping fallback center: {}", e);
            fallback
        }
    }
}

/// `POST /points`; true when the backend accepted the record
pub async fn submit_point(api: &dyn PointsApi, point: &NewPoint) -> bool {
    match api.create_point(point).await {
        Ok(()) => {
            log::info!("[CreatePoint] Registered point {:?} with {} items", point.name, point.items.len());
            true
        }
        Err(e) => {
            log::error!("[CreatePoint] Failed to register point: {}", e);
            false
        }
    }
}
