//! Point Form
//!
//! Contact fields of the collection point and assembly of the submission.

use leaflet_map::LatLng;

use crate::models::NewPoint;
use crate::position::MapPosition;
use crate::selection::ItemSelection;

/// Text inputs bound to the form, keyed by their `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Whatsapp,
}

impl FormField {
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Whatsapp => "whatsapp",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl PointForm {
    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Whatsapp => &mut self.whatsapp,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Whatsapp => &self.whatsapp,
        }
    }

    /// Assemble the `POST /points` body. No validation: an unselected
    /// position is sent as the origin.
    pub fn to_new_point(&self, uf: &str, city: &str, position: MapPosition, items: &ItemSelection) -> NewPoint {
        let LatLng { lat, lng } = position.selected().unwrap_or(LatLng::ORIGIN);
        NewPoint {
            name: self.name.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            uf: uf.to_string(),
            city: city.to_string(),
            latitude: lat,
            longitude: lng,
            items: items.ids().to_vec(),
        }
    }
}
