//! Item Selection
//!
//! Toggle set of catalog item ids and the tile projection used by the grid.

use crate::models::Item;

/// Selected item ids in the order they were picked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSelection {
    ids: Vec<String>,
}

impl ItemSelection {
    /// Remove `id` if present, otherwise append it
    pub fn toggle(&mut self, id: &str) {
        if let Some(index) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(index);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// One cell of the items grid
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTile {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub selected: bool,
}

pub fn item_tiles(items: &[Item], selection: &ItemSelection) -> Vec<ItemTile> {
    items
        .iter()
        .map(|item| ItemTile {
            id: item.id.clone(),
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            selected: selection.contains(&item.id),
        })
        .collect()
}
