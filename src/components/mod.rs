//! UI Components
//!
//! Pages and the pieces of the CreatePoint form.

mod address_fields;
mod contact_fields;
mod create_point;
mod home;
mod items_grid;
mod page_header;

pub use address_fields::AddressFields;
pub use contact_fields::ContactFields;
pub use create_point::CreatePoint;
pub use home::{HomePage, NotFound};
pub use items_grid::ItemsGrid;
pub use page_header::PageHeader;
