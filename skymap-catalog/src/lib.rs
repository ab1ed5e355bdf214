//! Star catalogue loading and lookup.
//!
//! A [`StarCatalogue`] is an immutable set of stars plus the asterisms drawn
//! over them, assembled through a [`CatalogueBuilder`] fed by [`Loader`]
//! implementations. Two loaders are provided: [`HygDatabaseLoader`] for the
//! HYG star database CSV export and [`AsterismLoader`] for asterism line
//! files of Hipparcos numbers.
//!
//! Stars are shared by `Arc` between the catalogue and its asterisms, and
//! membership checks compare identities, not attributes.

pub mod asterism;
pub mod catalogue;
pub mod errors;
pub mod loaders;

pub use asterism::Asterism;
pub use catalogue::{CatalogueBuilder, Loader, StarCatalogue};
pub use errors::{CatalogError, CatalogResult};
pub use loaders::{AsterismLoader, HygDatabaseLoader};
