//! Place catalog domain models.

mod catalog;
mod model;

pub use catalog::{CatalogLoad, PlaceCatalog};
pub use model::{Place, PlaceId};
