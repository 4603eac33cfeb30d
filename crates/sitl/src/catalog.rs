//! Built-in target catalog and command-line point parsing.

use poi_compass_core::navigation::{GeoPoint, Target, TargetCatalog};

use crate::error::SitlError;

/// Twelve stores around Loveland, Colorado, as `(name, lat, lon)`.
pub const DEFAULT_TARGETS: [(&str, f64, f64); 12] = [
    ("Hangloose Liquors", 40.391667, -105.074722),
    ("Liquor Max", 40.392624, -105.078987),
    ("Loveland Liquors", 40.407356, -105.074522),
    ("Downtown Liquors", 40.397761, -105.075225),
    ("Tap & Tavern Liquors", 40.391541, -105.075894),
    ("34 Liquors", 40.391215, -105.074441),
    ("Loveland Wine & Spirits", 40.423462, -105.073910),
    ("Westside Liquors", 40.405944, -105.104500),
    ("Boise Liquor", 40.416218, -105.072214),
    ("North Wilson Liquors", 40.417985, -105.072018),
    ("Liqour One", 40.407939, -105.108377),
    ("Locomotive Liquors", 40.407142, -105.074758),
];

/// Default starting point for the simulated walker, west of downtown Loveland.
pub const DEFAULT_ORIGIN: GeoPoint = GeoPoint::new(40.4000, -105.0900);

/// Build the built-in catalog.
pub fn default_catalog() -> Result<TargetCatalog, SitlError> {
    Ok(TargetCatalog::from_entries(&DEFAULT_TARGETS)?)
}

/// Parse `LAT,LON` in decimal degrees.
///
/// Rejects values outside [-90, 90] / [-180, 180] and non-finite numbers.
pub fn parse_point(text: &str) -> Result<GeoPoint, SitlError> {
    let invalid = || SitlError::InvalidCoordinate(text.to_string());

    let (lat, lon) = text.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    if !lat.is_finite() || !lon.is_finite() {
        return Err(invalid());
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid());
    }

    Ok(GeoPoint::new(lat, lon))
}

/// Parse `NAME,LAT,LON` into a target.
///
/// The name may itself contain commas; the last two fields are the
/// coordinates.
pub fn parse_target(text: &str) -> Result<Target, SitlError> {
    let invalid = || SitlError::InvalidTarget(text.to_string());

    let (rest, lon) = text.rsplit_once(',').ok_or_else(invalid)?;
    let (name, lat) = rest.rsplit_once(',').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    let point = parse_point(&format!("{},{}", lat, lon)).map_err(|_| invalid())?;
    Ok(Target::new(name, point)?)
}

/// Build a catalog from `NAME,LAT,LON` arguments, or the built-in one if none are given.
pub fn catalog_from_args(entries: &[String]) -> Result<TargetCatalog, SitlError> {
    if entries.is_empty() {
        log::info!("Using built-in catalog ({} targets)", DEFAULT_TARGETS.len());
        return default_catalog();
    }

    let targets = entries
        .iter()
        .map(|entry| parse_target(entry))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TargetCatalog::new(targets)?)
}
