//! Computes the sky over Lausanne right now and prints what sits nearest to
//! the center of the map.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use skymap_catalog::CatalogueBuilder;
use skymap_coords::{
    CartesianCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
    StereographicProjection,
};
use skymap_objects::Star;
use skymap_sky::ObservedSky;

fn main() -> Result<()> {
    let mut builder = CatalogueBuilder::new();
    builder
        .add_star(bright_star(24436, "Rigel", 1.372, -0.143, 0.18, -0.03)?)
        .add_star(bright_star(27989, "Betelgeuse", 1.549, 0.129, 0.45, 1.50)?)
        .add_star(bright_star(32349, "Sirius", 1.768, -0.292, -1.44, 0.01)?);
    let catalogue = Arc::new(builder.build()?);

    let when = Utc::now();
    let lausanne = GeographicCoordinates::from_deg(6.63, 46.52)?;
    let looking_south = StereographicProjection::new(HorizontalCoordinates::from_deg(180.0, 45.0)?);

    let sky = ObservedSky::new(when, &lausanne, &looking_south, catalogue)?;

    println!("Sky over Lausanne at {when}");
    println!("  {} at {}", sky.sun(), sky.sun_position());
    println!("  {} at {}", sky.moon(), sky.moon_position());
    for (planet, position) in sky.planets().iter().zip(sky.planet_positions().chunks(2)) {
        println!("  {planet} at (x={:.4}, y={:.4})", position[0], position[1]);
    }

    let center = CartesianCoordinates::new(0.0, 0.0);
    match sky.object_closest_to(&center, 0.5) {
        Some(object) => println!("nearest to center: {object}"),
        None => println!("nothing within half a unit of the center"),
    }
    Ok(())
}

fn bright_star(
    hip: u32,
    name: &str,
    ra: f64,
    dec: f64,
    magnitude: f64,
    color_index: f64,
) -> Result<Star> {
    let position = EquatorialCoordinates::new(ra, dec)?;
    Ok(Star::new(hip, name, position, magnitude, color_index)?)
}
