//! A snapshot of every visible object at one instant and place.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use skymap_catalog::{Asterism, CatalogResult, StarCatalogue};
use skymap_coords::{
    CartesianCoordinates, EclipticToEquatorial, EquatorialCoordinates, EquatorialToHorizontal,
    GeographicCoordinates, StereographicProjection,
};
use skymap_ephemeris::{CelestialObjectModel, MoonModel, PlanetModel, SunModel};
use skymap_objects::{CelestialObject, Moon, Planet, Star, Sun};
use skymap_time::Epoch;

use crate::errors::SkyResult;

/// Which object a projected position belongs to, with indices into the
/// snapshot's planet list and the catalogue's star list.
#[derive(Debug, Clone, Copy)]
enum ObjectHandle {
    Sun,
    Moon,
    Planet(usize),
    Star(usize),
}

/// All objects of the sky as seen at one instant from one place, each with
/// its projected position on the map plane.
///
/// Construction runs every ephemeris model once, converts every position to
/// horizontal coordinates and projects it. The snapshot is immutable
/// afterwards; redrawing at another instant means building a new one.
#[derive(Debug)]
pub struct ObservedSky {
    sun: Sun,
    moon: Moon,
    planets: Vec<Planet>,
    catalogue: Arc<StarCatalogue>,
    // Projected positions in handle order; the flat vectors repeat the
    // planet and star parts as interleaved x,y pairs for direct drawing.
    handles: Vec<ObjectHandle>,
    positions: Vec<CartesianCoordinates>,
    planet_positions: Vec<f64>,
    star_positions: Vec<f64>,
}

impl ObservedSky {
    /// Computes the sky over `location` at `when`, projecting every object
    /// with `projection`.
    pub fn new(
        when: DateTime<Utc>,
        location: &GeographicCoordinates,
        projection: &StereographicProjection,
        catalogue: Arc<StarCatalogue>,
    ) -> SkyResult<Self> {
        let days = Epoch::J2010.days_until(when);
        let to_equatorial = EclipticToEquatorial::new(when);
        let to_horizontal = EquatorialToHorizontal::new(when, location);

        let project = |equatorial: &EquatorialCoordinates| -> SkyResult<CartesianCoordinates> {
            Ok(projection.project(&to_horizontal.apply(equatorial)?))
        };

        let object_count = 2 + PlanetModel::OBSERVABLE.len() + catalogue.stars().len();
        let mut handles = Vec::with_capacity(object_count);
        let mut positions = Vec::with_capacity(object_count);

        let sun = SunModel.at(days, &to_equatorial)?;
        handles.push(ObjectHandle::Sun);
        positions.push(project(sun.record().equatorial_pos())?);

        let moon = MoonModel.at(days, &to_equatorial)?;
        handles.push(ObjectHandle::Moon);
        positions.push(project(moon.record().equatorial_pos())?);

        let mut planets = Vec::with_capacity(PlanetModel::OBSERVABLE.len());
        let mut planet_positions = Vec::with_capacity(2 * PlanetModel::OBSERVABLE.len());
        for model in &PlanetModel::OBSERVABLE {
            let planet = model.at(days, &to_equatorial)?;
            let position = project(planet.record().equatorial_pos())?;
            handles.push(ObjectHandle::Planet(planets.len()));
            planet_positions.extend([position.x(), position.y()]);
            positions.push(position);
            planets.push(planet);
        }

        let mut star_positions = Vec::with_capacity(2 * catalogue.stars().len());
        for (index, star) in catalogue.stars().iter().enumerate() {
            let position = project(star.record().equatorial_pos())?;
            handles.push(ObjectHandle::Star(index));
            star_positions.extend([position.x(), position.y()]);
            positions.push(position);
        }

        log::debug!(
            "observed sky at {when}: {} objects ({} stars, {} asterisms)",
            positions.len(),
            catalogue.stars().len(),
            catalogue.asterisms().len()
        );

        Ok(Self {
            sun,
            moon,
            planets,
            catalogue,
            handles,
            positions,
            planet_positions,
            star_positions,
        })
    }

    /// The Sun at the snapshot instant.
    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    /// Projected position of the Sun.
    pub fn sun_position(&self) -> &CartesianCoordinates {
        &self.positions[0]
    }

    /// The Moon at the snapshot instant.
    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    /// Projected position of the Moon.
    pub fn moon_position(&self) -> &CartesianCoordinates {
        &self.positions[1]
    }

    /// The seven observable planets, in order of distance from the Sun.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Projected planet positions as interleaved `x, y` pairs, in the same
    /// order as [`planets`](Self::planets).
    pub fn planet_positions(&self) -> &[f64] {
        &self.planet_positions
    }

    /// The catalogue stars.
    pub fn stars(&self) -> &[Arc<Star>] {
        self.catalogue.stars()
    }

    /// Projected star positions as interleaved `x, y` pairs, in the same
    /// order as [`stars`](Self::stars).
    pub fn star_positions(&self) -> &[f64] {
        &self.star_positions
    }

    /// The asterisms of the underlying catalogue.
    pub fn asterisms(&self) -> &[Asterism] {
        self.catalogue.asterisms()
    }

    /// Indices into [`stars`](Self::stars) of the stars of `asterism`.
    pub fn asterism_indices(&self, asterism: &Asterism) -> CatalogResult<&[usize]> {
        self.catalogue.asterism_indices(asterism)
    }

    /// The object whose projected position is closest to `point`, if any
    /// lies within `max_distance` of it.
    ///
    /// Ties go to the earlier object in snapshot order: the Sun, the Moon,
    /// the planets, then the stars in catalogue order.
    pub fn object_closest_to(
        &self,
        point: &CartesianCoordinates,
        max_distance: f64,
    ) -> Option<CelestialObject<'_>> {
        let max_squared = max_distance * max_distance;
        let mut best: Option<(ObjectHandle, f64)> = None;

        for (handle, position) in self.handles.iter().zip(&self.positions) {
            // Cheap per-axis rejection before the full distance.
            if (position.x() - point.x()).abs() > max_distance
                || (position.y() - point.y()).abs() > max_distance
            {
                continue;
            }
            let distance_squared = position.distance_squared_to(point);
            if distance_squared > max_squared {
                continue;
            }
            match best {
                Some((_, best_squared)) if distance_squared >= best_squared => {}
                _ => best = Some((*handle, distance_squared)),
            }
        }

        best.map(|(handle, _)| match handle {
            ObjectHandle::Sun => CelestialObject::Sun(&self.sun),
            ObjectHandle::Moon => CelestialObject::Moon(&self.moon),
            ObjectHandle::Planet(index) => CelestialObject::Planet(&self.planets[index]),
            ObjectHandle::Star(index) => CelestialObject::Star(&self.catalogue.stars()[index]),
        })
    }
}
