//! Create Point State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: every slice of
//! the page is its own field, so a keystroke never re-renders the map.

use leaflet_map::LatLng;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::cities::CityFeed;
use crate::config::FALLBACK_CENTER;
use crate::form::PointForm;
use crate::models::{Item, Uf, UNSELECTED};
use crate::position::MapPosition;
use crate::selection::ItemSelection;

/// View state of the CreatePoint page
#[derive(Clone, Debug, Store)]
pub struct CreatePointState {
    /// Catalog from `/items`
    pub items: Vec<Item>,
    /// States from the geography service
    pub ufs: Vec<Uf>,
    /// Cities of the selected UF, guarded by request token
    pub city_feed: CityFeed,
    /// Selected UF code, `"0"` until chosen
    pub selected_uf: String,
    /// Selected city name, `"0"` until chosen
    pub selected_city: String,
    pub selected_items: ItemSelection,
    /// Marker position
    pub position: MapPosition,
    /// Map view center (device position once known)
    pub center: LatLng,
    pub form: PointForm,
}

impl Default for CreatePointState {
    fn default() -> Self {
        Self::new(FALLBACK_CENTER)
    }
}

impl CreatePointState {
    pub fn new(center: LatLng) -> Self {
        Self {
            items: Vec::new(),
            ufs: Vec::new(),
            city_feed: CityFeed::default(),
            selected_uf: UNSELECTED.to_string(),
            selected_city: UNSELECTED.to_string(),
            selected_items: ItemSelection::default(),
            position: MapPosition::default(),
            center,
            form: PointForm::default(),
        }
    }
}

/// Type alias for the store
pub type CreatePointStore = Store<CreatePointState>;

/// Get the page store from context
pub fn use_create_point_store() -> CreatePointStore {
    expect_context::<CreatePointStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Select a UF. The chosen city belonged to the old UF, so it is cleared first.
pub fn store_select_uf(store: &CreatePointStore, uf: String) {
    store.selected_city().set(UNSELECTED.to_string());
    store.selected_uf().set(uf);
}

/// Move the map center to the device position. No-op once the page is gone.
pub fn store_apply_center(store: &CreatePointStore, at: LatLng) {
    store.center().try_update(|center| *center = at);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CreatePointState::new(LatLng::new(1.0, 2.0));
        assert_eq!(state.selected_uf, "0");
        assert_eq!(state.selected_city, "0");
        assert_eq!(state.position, MapPosition::Unselected);
        assert_eq!(state.center, LatLng::new(1.0, 2.0));
        assert!(state.items.is_empty());
        assert!(state.city_feed.cities().is_empty());
        assert!(state.selected_items.ids().is_empty());
    }

    #[test]
    fn test_select_uf_resets_city() {
        let store = Store::new(CreatePointState::default());
        store_select_uf(&store, "SP".to_string());
        store.selected_city().set("Santos".to_string());

        store_select_uf(&store, "RJ".to_string());

        assert_eq!(store.selected_uf().get_untracked(), "RJ");
        assert_eq!(store.selected_city().get_untracked(), "0");
    }

    #[test]
    fn test_located_center_replaces_fallback() {
        let store = Store::new(CreatePointState::default());
        assert_eq!(store.center().get_untracked(), FALLBACK_CENTER);

        store_apply_center(&store, LatLng::new(-23.55, -46.63));

        assert_eq!(store.center().get_untracked(), LatLng::new(-23.55, -46.63));
        // Only the center moves
        assert_eq!(store.position().get_untracked(), MapPosition::Unselected);
    }
}
