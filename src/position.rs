//! Map Position
//!
//! Where the user placed the collection point on the map.

use leaflet_map::LatLng;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MapPosition {
    #[default]
    Unselected,
    Selected(LatLng),
}

impl MapPosition {
    /// Every click replaces the previous selection
    pub fn click(&mut self, at: LatLng) {
        *self = MapPosition::Selected(at);
    }

    pub fn selected(&self) -> Option<LatLng> {
        match self {
            MapPosition::Unselected => None,
            MapPosition::Selected(at) => Some(*at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unselected() {
        let position = MapPosition::default();
        assert_eq!(position, MapPosition::Unselected);
        assert_eq!(position.selected(), None);
    }

    #[test]
    fn test_last_click_wins() {
        let mut position = MapPosition::default();
        position.click(LatLng::new(1.0, 2.0));
        position.click(LatLng::new(-3.0, 4.5));
        assert_eq!(position, MapPosition::Selected(LatLng::new(-3.0, 4.5)));
    }
}
