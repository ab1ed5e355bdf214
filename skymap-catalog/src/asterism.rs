//! Named groups of catalogue stars.

use std::sync::Arc;

use skymap_objects::Star;

use crate::errors::{CatalogError, CatalogResult};

/// The constellation label used when the source data names none.
const PLACEHOLDER_LABEL: &str = "-";

/// A named line of stars, as drawn on sky maps.
///
/// The stars are shared with the catalogue through [`Arc`]; an asterism never
/// owns a star the catalogue does not.
#[derive(Debug, Clone)]
pub struct Asterism {
    stars: Vec<Arc<Star>>,
    constellation: String,
}

impl Asterism {
    /// Builds an asterism from a non-empty list of stars and a constellation
    /// label.
    pub fn new(stars: Vec<Arc<Star>>, constellation: impl Into<String>) -> CatalogResult<Self> {
        if stars.is_empty() {
            return Err(CatalogError::EmptyAsterism);
        }
        Ok(Self {
            stars,
            constellation: constellation.into(),
        })
    }

    /// The stars of the asterism, in drawing order.
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// The constellation label, possibly the `"-"` placeholder.
    pub fn constellation(&self) -> &str {
        &self.constellation
    }

    /// Whether the constellation label is the placeholder for unlabelled
    /// asterisms.
    pub fn is_label_placeholder(&self) -> bool {
        self.constellation == PLACEHOLDER_LABEL
    }
}
