//! The star catalogue and its builder.

use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use skymap_objects::Star;

use crate::asterism::Asterism;
use crate::errors::{CatalogError, CatalogResult};

/// A source of stars and asterisms, typically a text file format.
///
/// Loaders add what they read to the builder; several loaders can feed one
/// builder in sequence, and asterism loaders resolve their stars against
/// what earlier loaders added.
pub trait Loader {
    /// Reads `reader` to the end and adds its content to `builder`.
    fn load<R: Read>(&self, reader: R, builder: &mut CatalogueBuilder) -> CatalogResult<()>;
}

/// Accumulates stars and asterisms before validation.
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
}

impl CatalogueBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a star, taking ownership and sharing it thereafter.
    pub fn add_star(&mut self, star: Star) -> &mut Self {
        self.stars.push(Arc::new(star));
        self
    }

    /// The stars added so far.
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// Adds an asterism. Its stars are only checked against the star list
    /// at [`build`](Self::build) time.
    pub fn add_asterism(&mut self, asterism: Asterism) -> &mut Self {
        self.asterisms.push(asterism);
        self
    }

    /// The asterisms added so far.
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Runs `loader` over `reader`, adding everything it yields.
    pub fn load_from<R: Read, L: Loader>(
        &mut self,
        reader: R,
        loader: &L,
    ) -> CatalogResult<&mut Self> {
        loader.load(reader, self)?;
        Ok(self)
    }

    /// Validates and freezes the catalogue.
    ///
    /// Fails if any asterism contains a star that is not in the star list.
    /// Star membership is by identity (the same shared allocation), not by
    /// value: two distinct stars with equal attributes are different stars.
    pub fn build(self) -> CatalogResult<StarCatalogue> {
        let index_of: HashMap<*const Star, usize> = self
            .stars
            .iter()
            .enumerate()
            .map(|(index, star)| (Arc::as_ptr(star), index))
            .collect();

        let mut indices = Vec::with_capacity(self.asterisms.len());
        for asterism in &self.asterisms {
            let mut star_indices = Vec::with_capacity(asterism.stars().len());
            for star in asterism.stars() {
                match index_of.get(&Arc::as_ptr(star)) {
                    Some(&index) => star_indices.push(index),
                    None => {
                        return Err(CatalogError::UnknownStar {
                            constellation: asterism.constellation().to_string(),
                        })
                    }
                }
            }
            indices.push(star_indices);
        }

        Ok(StarCatalogue {
            stars: self.stars,
            asterisms: self.asterisms,
            indices,
        })
    }
}

/// An immutable catalogue of stars and the asterisms drawn over them.
#[derive(Debug)]
pub struct StarCatalogue {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
    indices: Vec<Vec<usize>>,
}

impl StarCatalogue {
    /// All stars, in insertion order.
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// All asterisms, in insertion order.
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Indices into [`stars`](Self::stars) of the stars of `asterism`, which
    /// must be one of this catalogue's own asterisms (compared by identity).
    pub fn asterism_indices(&self, asterism: &Asterism) -> CatalogResult<&[usize]> {
        self.asterisms
            .iter()
            .position(|candidate| std::ptr::eq(candidate, asterism))
            .map(|position| self.indices[position].as_slice())
            .ok_or(CatalogError::UnknownAsterism)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skymap_coords::EquatorialCoordinates;

    fn star(hip: u32, name: &str) -> Star {
        let pos = EquatorialCoordinates::new(0.0, 0.0).unwrap();
        Star::new(hip, name, pos, 5.0, 0.0).unwrap()
    }

    #[test]
    fn test_build_resolves_asterism_indices() {
        let mut builder = CatalogueBuilder::new();
        builder.add_star(star(1, "A")).add_star(star(2, "B"));
        let asterism = Asterism::new(
            vec![builder.stars()[1].clone(), builder.stars()[0].clone()],
            "Ori",
        )
        .unwrap();
        builder.add_asterism(asterism);

        let catalogue = builder.build().unwrap();
        let indices = catalogue
            .asterism_indices(&catalogue.asterisms()[0])
            .unwrap();
        assert_eq!(indices, &[1, 0]);
    }

    #[test]
    fn test_build_rejects_foreign_star() {
        let mut builder = CatalogueBuilder::new();
        builder.add_star(star(1, "A"));
        // Equal attributes, but a different allocation.
        let stranger = Arc::new(star(1, "A"));
        builder.add_asterism(Asterism::new(vec![stranger], "Ori").unwrap());

        assert!(matches!(
            builder.build(),
            Err(CatalogError::UnknownStar { .. })
        ));
    }

    #[test]
    fn test_lookup_with_foreign_asterism_fails() {
        let mut builder = CatalogueBuilder::new();
        builder.add_star(star(1, "A"));
        let inside = Asterism::new(vec![builder.stars()[0].clone()], "Ori").unwrap();
        let outside = inside.clone();
        builder.add_asterism(inside);
        let catalogue = builder.build().unwrap();

        assert!(matches!(
            catalogue.asterism_indices(&outside),
            Err(CatalogError::UnknownAsterism)
        ));
    }

    #[test]
    fn test_empty_catalogue_builds() {
        let catalogue = CatalogueBuilder::new().build().unwrap();
        assert!(catalogue.stars().is_empty());
        assert!(catalogue.asterisms().is_empty());
    }
}
