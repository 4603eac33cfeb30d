//! Compass octant quantization
//!
//! Maps the relative angle between the target bearing and the device heading
//! onto one of eight 45° sectors, each centered on its cardinal or
//! intercardinal direction. North straddles 0°.

use core::fmt;

/// Half-width of one octant in degrees
const HALF_SECTOR_DEG: f64 = 22.5;

/// One of the eight compass sectors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassOctant {
    /// Straight ahead, [337.5, 360) ∪ [0, 22.5)
    N,
    /// [22.5, 67.5)
    NE,
    /// [67.5, 112.5)
    E,
    /// [112.5, 157.5)
    SE,
    /// Directly behind, [157.5, 202.5)
    S,
    /// [202.5, 247.5)
    SW,
    /// [247.5, 292.5)
    W,
    /// [292.5, 337.5)
    NW,
}

impl CompassOctant {
    /// All octants, clockwise from north
    pub const ALL: [CompassOctant; 8] = [
        CompassOctant::N,
        CompassOctant::NE,
        CompassOctant::E,
        CompassOctant::SE,
        CompassOctant::S,
        CompassOctant::SW,
        CompassOctant::W,
        CompassOctant::NW,
    ];

    /// Short compass label ("N", "NE", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            CompassOctant::N => "N",
            CompassOctant::NE => "NE",
            CompassOctant::E => "E",
            CompassOctant::SE => "SE",
            CompassOctant::S => "S",
            CompassOctant::SW => "SW",
            CompassOctant::W => "W",
            CompassOctant::NW => "NW",
        }
    }
}

impl fmt::Display for CompassOctant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantize a relative angle in [0, 360) to its octant
///
/// Lower bounds are inclusive, upper bounds exclusive. Inputs outside
/// [0, 360) fall through to `N`; callers normalize first.
pub fn quantize(delta_deg: f64) -> CompassOctant {
    if delta_deg < HALF_SECTOR_DEG || delta_deg >= 360.0 - HALF_SECTOR_DEG {
        CompassOctant::N
    } else if delta_deg < 67.5 {
        CompassOctant::NE
    } else if delta_deg < 112.5 {
        CompassOctant::E
    } else if delta_deg < 157.5 {
        CompassOctant::SE
    } else if delta_deg < 202.5 {
        CompassOctant::S
    } else if delta_deg < 247.5 {
        CompassOctant::SW
    } else if delta_deg < 292.5 {
        CompassOctant::W
    } else {
        CompassOctant::NW
    }
}
