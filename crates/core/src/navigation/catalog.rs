//! Target catalog and nearest-target search
//!
//! The catalog is built once at startup from a fixed list of named points and
//! is immutable afterwards. Every query rescans the whole list; catalogs are
//! small enough that no spatial index is needed.

use heapless::{String, Vec};

use super::error::ConfigurationError;
use super::geo::{distance, GeoPoint};

/// Maximum target name length in bytes
pub const TARGET_NAME_LEN: usize = 32;

/// Maximum number of targets in a catalog
pub const MAX_TARGETS: usize = 32;

/// Fixed-capacity target name
pub type TargetName = String<TARGET_NAME_LEN>;

/// A named point of interest
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    name: TargetName,
    location: GeoPoint,
}

impl Target {
    /// Create a target, rejecting names longer than [`TARGET_NAME_LEN`]
    pub fn new(name: &str, location: GeoPoint) -> Result<Self, ConfigurationError> {
        let mut buf = TargetName::new();
        buf.push_str(name)
            .map_err(|_| ConfigurationError::NameTooLong {
                len: name.len(),
                max: TARGET_NAME_LEN,
            })?;
        Ok(Self {
            name: buf,
            location,
        })
    }

    /// Full target name (never truncated here)
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Name as its fixed-capacity buffer
    pub fn name_buf(&self) -> &TargetName {
        &self.name
    }

    /// Target location
    pub fn location(&self) -> GeoPoint {
        self.location
    }
}

/// Immutable, non-empty set of targets
#[derive(Clone, Debug)]
pub struct TargetCatalog {
    targets: Vec<Target, MAX_TARGETS>,
}

impl TargetCatalog {
    /// Build a catalog from targets in order
    ///
    /// Order only matters for tie-breaking in [`TargetCatalog::nearest`].
    pub fn new<I>(targets: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = Target>,
    {
        let mut list = Vec::new();
        for target in targets {
            list.push(target)
                .map_err(|_| ConfigurationError::CatalogFull {
                    capacity: MAX_TARGETS,
                })?;
        }

        if list.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }

        log::debug!("Target catalog loaded: {} targets", list.len());
        Ok(Self { targets: list })
    }

    /// Build a catalog from `(name, latitude, longitude)` entries
    pub fn from_entries(entries: &[(&str, f64, f64)]) -> Result<Self, ConfigurationError> {
        let mut targets: Vec<Target, MAX_TARGETS> = Vec::new();
        for &(name, lat, lon) in entries {
            let target = Target::new(name, GeoPoint::new(lat, lon))?;
            targets
                .push(target)
                .map_err(|_| ConfigurationError::CatalogFull {
                    capacity: MAX_TARGETS,
                })?;
        }
        Self::new(targets)
    }

    /// Nearest target to `from` and its great-circle distance in meters
    ///
    /// Linear scan with a strict `<` comparison: on an exact tie the target
    /// that appears first in construction order wins.
    pub fn nearest(&self, from: GeoPoint) -> (&Target, f64) {
        // Construction guarantees at least one target
        let mut best = &self.targets[0];
        let mut best_dist = distance(from, best.location);

        for target in &self.targets[1..] {
            let d = distance(from, target.location);
            if d < best_dist {
                best = target;
                best_dist = d;
            }
        }

        (best, best_dist)
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always false; an empty catalog cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target at `index` in construction order
    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    /// Iterate targets in construction order
    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_new() {
        let target = Target::new("Hangloose Liquors", GeoPoint::new(40.391667, -105.074722))
            .unwrap();
        assert_eq!(target.name(), "Hangloose Liquors");
        assert!((target.location().latitude - 40.391667).abs() < 1e-9);
    }

    #[test]
    fn test_target_name_not_truncated() {
        // Longer than the 16-character display width, still stored in full
        let name = "Loveland Wine & Spirits";
        let target = Target::new(name, GeoPoint::default()).unwrap();
        assert_eq!(target.name(), name);
    }

    #[test]
    fn test_target_name_too_long() {
        let name = "A name that is far too long to fit the buffer";
        let err = Target::new(name, GeoPoint::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NameTooLong {
                len: name.len(),
                max: TARGET_NAME_LEN
            }
        );
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = TargetCatalog::new(core::iter::empty());
        assert_eq!(result.unwrap_err(), ConfigurationError::EmptyCatalog);

        let result = TargetCatalog::from_entries(&[]);
        assert_eq!(result.unwrap_err(), ConfigurationError::EmptyCatalog);
    }

    #[test]
    fn test_catalog_full_rejected() {
        let targets = (0..=MAX_TARGETS).map(|i| {
            Target::new("t", GeoPoint::new(i as f64 * 0.01, 0.0)).unwrap()
        });
        let result = TargetCatalog::new(targets);
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::CatalogFull {
                capacity: MAX_TARGETS
            }
        );
    }

    #[test]
    fn test_nearest_picks_closest() {
        let catalog = TargetCatalog::from_entries(&[
            ("Far", 40.423462, -105.073910),
            ("Near", 40.391667, -105.074722),
            ("Middle", 40.407356, -105.074522),
        ])
        .unwrap();

        let (target, dist) = catalog.nearest(GeoPoint::new(40.3917, -105.0747));
        assert_eq!(target.name(), "Near");
        assert!(dist < 10.0, "got {}", dist);
    }

    #[test]
    fn test_nearest_tie_prefers_first() {
        // Symmetric about the equator: both targets are exactly as far
        let catalog = TargetCatalog::from_entries(&[
            ("First", 0.001, 0.0),
            ("Second", -0.001, 0.0),
        ])
        .unwrap();
        let (target, _) = catalog.nearest(GeoPoint::new(0.0, 0.0));
        assert_eq!(target.name(), "First");

        let reversed = TargetCatalog::from_entries(&[
            ("Second", -0.001, 0.0),
            ("First", 0.001, 0.0),
        ])
        .unwrap();
        let (target, _) = reversed.nearest(GeoPoint::new(0.0, 0.0));
        assert_eq!(target.name(), "Second");
    }

    #[test]
    fn test_nearest_duplicate_location_prefers_first() {
        let catalog =
            TargetCatalog::from_entries(&[("A", 10.0, 10.0), ("B", 10.0, 10.0)]).unwrap();
        let (target, dist) = catalog.nearest(GeoPoint::new(10.5, 10.5));
        assert_eq!(target.name(), "A");
        assert!(dist > 0.0);
    }

    #[test]
    fn test_nearest_single_target() {
        let catalog = TargetCatalog::from_entries(&[("Only", 40.391667, -105.074722)]).unwrap();
        let (target, dist) = catalog.nearest(GeoPoint::new(40.391667, -105.074722));
        assert_eq!(target.name(), "Only");
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_catalog_accessors() {
        let catalog =
            TargetCatalog::from_entries(&[("A", 1.0, 2.0), ("B", 3.0, 4.0)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(1).map(Target::name), Some("B"));
        assert!(catalog.get(2).is_none());

        let mut names = catalog.iter().map(Target::name);
        assert_eq!(names.next(), Some("A"));
        assert_eq!(names.next(), Some("B"));
        assert_eq!(names.next(), None);
    }
}
