//! Catalog domain model: the loaded dataset, its normalization rules and the
//! name-keyed index the router resolves against.

pub mod error;
pub mod index;
pub mod model;

pub use error::CatalogError;
pub use index::CatalogIndex;
pub use model::{Catalog, Category, Piece};
