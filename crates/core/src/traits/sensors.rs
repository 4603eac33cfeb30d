//! Sensor collaborator traits
//!
//! Acquisition, parsing and calibration stay behind these traits. A reading
//! is taken once per tick and must return immediately.

use heapless::Vec;

use crate::navigation::{Fix, MagneticField};

/// Maximum scripted fixes in [`MockPositionProvider`]
pub const MOCK_SCRIPT_LEN: usize = 32;

/// Supplies the current position, or `NoFix`
pub trait PositionProvider {
    /// Latest fix for this tick
    fn read_fix(&mut self) -> Fix;
}

/// Supplies raw magnetometer samples
pub trait Magnetometer {
    /// Latest field sample for this tick
    fn read_field(&mut self) -> MagneticField;
}

// ============================================================================
// Mock Implementations (always available for testing)
// ============================================================================

/// Position provider that replays a fixed script
///
/// Returns scripted fixes in order, then repeats the last one. An empty
/// script always returns `NoFix`.
#[derive(Debug, Default)]
pub struct MockPositionProvider {
    script: Vec<Fix, MOCK_SCRIPT_LEN>,
    cursor: usize,
}

impl MockPositionProvider {
    /// Create a provider that never has a fix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider from a script, keeping at most [`MOCK_SCRIPT_LEN`] fixes
    pub fn with_script(fixes: &[Fix]) -> Self {
        let mut script = Vec::new();
        for fix in fixes.iter().take(MOCK_SCRIPT_LEN) {
            // Bounded by take() above
            let _ = script.push(*fix);
        }
        Self { script, cursor: 0 }
    }

    /// Number of reads served so far
    pub fn reads(&self) -> usize {
        self.cursor
    }
}

impl PositionProvider for MockPositionProvider {
    fn read_fix(&mut self) -> Fix {
        let fix = match self.script.len() {
            0 => Fix::NoFix,
            len => self.script[self.cursor.min(len - 1)],
        };
        self.cursor += 1;
        fix
    }
}

/// Magnetometer that returns a settable constant field
#[derive(Debug, Default, Clone, Copy)]
pub struct MockMagnetometer {
    field: MagneticField,
}

impl MockMagnetometer {
    /// Create a magnetometer reporting `field`
    pub fn new(field: MagneticField) -> Self {
        Self { field }
    }

    /// Change the reported field
    pub fn set(&mut self, field: MagneticField) {
        self.field = field;
    }
}

impl Magnetometer for MockMagnetometer {
    fn read_field(&mut self) -> MagneticField {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::GeoPoint;

    #[test]
    fn test_empty_script_has_no_fix() {
        let mut provider = MockPositionProvider::new();
        assert_eq!(provider.read_fix(), Fix::NoFix);
        assert_eq!(provider.read_fix(), Fix::NoFix);
        assert_eq!(provider.reads(), 2);
    }

    #[test]
    fn test_script_repeats_last() {
        let here = Fix::Have(GeoPoint::new(1.0, 2.0));
        let mut provider = MockPositionProvider::with_script(&[Fix::NoFix, here]);
        assert_eq!(provider.read_fix(), Fix::NoFix);
        assert_eq!(provider.read_fix(), here);
        assert_eq!(provider.read_fix(), here);
    }

    #[test]
    fn test_mock_magnetometer_set() {
        let mut mag = MockMagnetometer::new(MagneticField::new(1.0, 0.0, 0.0));
        assert_eq!(mag.read_field(), MagneticField::new(1.0, 0.0, 0.0));
        mag.set(MagneticField::new(0.0, 1.0, 0.5));
        assert_eq!(mag.read_field(), MagneticField::new(0.0, 1.0, 0.5));
    }
}
