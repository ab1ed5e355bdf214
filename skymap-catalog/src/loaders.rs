//! Text loaders for the catalogue formats shipped with sky maps.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use skymap_coords::EquatorialCoordinates;
use skymap_objects::Star;

use crate::asterism::Asterism;
use crate::catalogue::{CatalogueBuilder, Loader};
use crate::errors::{CatalogError, CatalogResult};

// Column offsets of the HYG database CSV export.
const COL_HIP: usize = 1;
const COL_PROPER: usize = 6;
const COL_MAG: usize = 13;
const COL_CI: usize = 16;
const COL_RARAD: usize = 23;
const COL_DECRAD: usize = 24;
const COL_BAYER: usize = 27;
const COL_CON: usize = 29;

fn column<'a>(fields: &'a [&str], index: usize) -> &'a str {
    fields.get(index).copied().unwrap_or("")
}

fn parse_or<T: std::str::FromStr>(field: &str, default: T, line: usize) -> CatalogResult<T> {
    if field.is_empty() {
        return Ok(default);
    }
    field.parse().map_err(|_| CatalogError::Parse {
        line,
        message: format!("invalid numeric field {field:?}"),
    })
}

/// Loads stars from the HYG database in its CSV export format.
///
/// The first line is a header and is skipped. Stars without a proper name
/// are named from their Bayer designation (or `"?"`) and constellation
/// abbreviation; missing Hipparcos numbers, magnitudes and color indices
/// default to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct HygDatabaseLoader;

impl Loader for HygDatabaseLoader {
    fn load<R: Read>(&self, reader: R, builder: &mut CatalogueBuilder) -> CatalogResult<()> {
        for (number, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if number == 0 {
                continue;
            }
            let line_number = number + 1;
            let fields: Vec<&str> = line.split(',').collect();

            let hip = parse_or(column(&fields, COL_HIP), 0u32, line_number)?;
            let magnitude = parse_or(column(&fields, COL_MAG), 0.0, line_number)?;
            let color_index = parse_or(column(&fields, COL_CI), 0.0, line_number)?;

            let ra = column(&fields, COL_RARAD)
                .parse()
                .map_err(|_| CatalogError::Parse {
                    line: line_number,
                    message: "missing right ascension".to_string(),
                })?;
            let dec = column(&fields, COL_DECRAD)
                .parse()
                .map_err(|_| CatalogError::Parse {
                    line: line_number,
                    message: "missing declination".to_string(),
                })?;
            let position = EquatorialCoordinates::new(ra, dec)?;

            let proper = column(&fields, COL_PROPER);
            let name = if proper.is_empty() {
                let bayer = column(&fields, COL_BAYER);
                let bayer = if bayer.is_empty() { "?" } else { bayer };
                format!("{} {}", bayer, column(&fields, COL_CON))
            } else {
                proper.to_string()
            };

            builder.add_star(Star::new(hip, name, position, magnitude, color_index)?);
        }
        Ok(())
    }
}

/// Loads asterisms from lines of comma-separated Hipparcos numbers followed
/// by a constellation label.
///
/// Stars are resolved against what the builder already contains, so the star
/// loader must run first. Numbers that resolve to no loaded star are dropped
/// with a debug log entry, and a line left without any star is skipped
/// entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsterismLoader;

impl Loader for AsterismLoader {
    fn load<R: Read>(&self, reader: R, builder: &mut CatalogueBuilder) -> CatalogResult<()> {
        let star_by_hip: HashMap<u32, Arc<Star>> = builder
            .stars()
            .iter()
            .filter(|star| star.hipparcos_id() != 0)
            .map(|star| (star.hipparcos_id(), star.clone()))
            .collect();

        let mut asterisms = Vec::new();
        for (number, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_number = number + 1;
            let mut fields = line.split(',').collect::<Vec<_>>();
            let constellation = fields.pop().unwrap_or("-").trim();

            let mut stars = Vec::with_capacity(fields.len());
            for field in fields {
                let hip: u32 =
                    field
                        .trim()
                        .parse()
                        .map_err(|_| CatalogError::Parse {
                            line: line_number,
                            message: format!("invalid Hipparcos number {field:?}"),
                        })?;
                match star_by_hip.get(&hip) {
                    Some(star) => stars.push(star.clone()),
                    None => log::debug!(
                        "asterism line {line_number}: dropping unresolved HIP {hip}"
                    ),
                }
            }

            if stars.is_empty() {
                log::debug!("asterism line {line_number}: no resolvable stars, skipping");
                continue;
            }
            asterisms.push(Asterism::new(stars, constellation)?);
        }

        for asterism in asterisms {
            builder.add_asterism(asterism);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HYG_HEADER: &str = "id,hip,hd,hr,gl,bf,proper,ra,dec,dist,pmra,pmdec,rv,mag,absmag,spect,ci,x,y,z,vx,vy,vz,rarad,decrad,pmrarad,pmdecrad,bayer,flam,con,comp,comp_primary,base,lum,var,var_min,var_max";

    fn hyg_line(hip: &str, proper: &str, mag: &str, ci: &str, ra: &str, dec: &str, bayer: &str, con: &str) -> String {
        let mut fields = vec![""; 37];
        fields[COL_HIP] = hip;
        fields[COL_PROPER] = proper;
        fields[COL_MAG] = mag;
        fields[COL_CI] = ci;
        fields[COL_RARAD] = ra;
        fields[COL_DECRAD] = dec;
        fields[COL_BAYER] = bayer;
        fields[COL_CON] = con;
        fields.join(",")
    }

    #[test]
    fn test_hyg_loader_reads_named_star() {
        let data = format!(
            "{HYG_HEADER}\n{}",
            hyg_line("24436", "Rigel", "0.18", "-0.03", "1.372", "-0.143", "Bet", "Ori")
        );
        let mut builder = CatalogueBuilder::new();
        builder
            .load_from(data.as_bytes(), &HygDatabaseLoader)
            .unwrap();

        let star = &builder.stars()[0];
        assert_eq!(star.hipparcos_id(), 24436);
        assert_eq!(star.record().name(), "Rigel");
        assert_eq!(star.record().magnitude(), 0.18);
    }

    #[test]
    fn test_hyg_loader_defaults() {
        let data = format!(
            "{HYG_HEADER}\n{}",
            hyg_line("", "", "", "", "1.372", "-0.143", "", "Ori")
        );
        let mut builder = CatalogueBuilder::new();
        builder
            .load_from(data.as_bytes(), &HygDatabaseLoader)
            .unwrap();

        let star = &builder.stars()[0];
        assert_eq!(star.hipparcos_id(), 0);
        assert_eq!(star.record().name(), "? Ori");
        assert_eq!(star.record().magnitude(), 0.0);
        assert_eq!(star.color_temperature(), 10125);
    }

    #[test]
    fn test_hyg_loader_dec_column_ignores_proper_motion() {
        // decrad sits right before pmrarad in the HYG layout; a row with
        // both populated must yield the declination, not the proper motion.
        let mut fields = vec![""; 37];
        fields[COL_HIP] = "24436";
        fields[COL_PROPER] = "Rigel";
        fields[COL_RARAD] = "1.372";
        fields[COL_DECRAD] = "-0.143";
        fields[COL_DECRAD + 1] = "0.0000000013";
        let data = format!("{HYG_HEADER}\n{}", fields.join(","));

        let mut builder = CatalogueBuilder::new();
        builder
            .load_from(data.as_bytes(), &HygDatabaseLoader)
            .unwrap();
        let dec = builder.stars()[0].record().equatorial_pos().dec();
        assert!((dec - (-0.143)).abs() < 1e-12, "dec = {dec}");
    }

    #[test]
    fn test_hyg_loader_rejects_missing_position() {
        let data = format!(
            "{HYG_HEADER}\n{}",
            hyg_line("1", "X", "", "", "", "-0.143", "", "Ori")
        );
        let mut builder = CatalogueBuilder::new();
        assert!(matches!(
            builder.load_from(data.as_bytes(), &HygDatabaseLoader),
            Err(CatalogError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_asterism_loader_resolves_and_drops() {
        let stars = format!(
            "{HYG_HEADER}\n{}\n{}",
            hyg_line("10", "A", "", "", "0.5", "0.1", "", "Ori"),
            hyg_line("20", "B", "", "", "0.6", "0.2", "", "Ori")
        );
        let mut builder = CatalogueBuilder::new();
        builder
            .load_from(stars.as_bytes(), &HygDatabaseLoader)
            .unwrap();
        // HIP 30 is not loaded and must be dropped; the second line keeps
        // nothing and is skipped.
        let asterisms = "10,30,20,Ori\n30,-\n";
        builder
            .load_from(asterisms.as_bytes(), &AsterismLoader)
            .unwrap();

        assert_eq!(builder.asterisms().len(), 1);
        let asterism = &builder.asterisms()[0];
        assert_eq!(asterism.constellation(), "Ori");
        assert_eq!(asterism.stars().len(), 2);
        assert_eq!(asterism.stars()[0].hipparcos_id(), 10);

        let catalogue = builder.build().unwrap();
        let indices = catalogue
            .asterism_indices(&catalogue.asterisms()[0])
            .unwrap();
        assert_eq!(indices, &[0, 1]);
    }
}
