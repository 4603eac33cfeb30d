//! Simulated pedestrian carrying the compass.
//!
//! Stands in for both the GPS receiver and the magnetometer. The walker
//! starts at an origin, reports no fix while the receiver is "acquiring",
//! then walks in a straight line toward a goal at constant speed. GPS fixes
//! carry Gaussian noise; the magnetometer reports a horizontal field that,
//! once declination is added back, points along the walker's true heading.

use poi_compass_core::navigation::{
    normalize_degrees, Fix, GeoPoint, MagneticField, EARTH_RADIUS_M,
};
use poi_compass_core::traits::{Magnetometer, PositionProvider};
use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Meters per degree of latitude on the haversine sphere.
const METERS_PER_DEG_LAT: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Vertical field component reported by the magnetometer (ignored for heading).
const FIELD_Z: f64 = -0.45;

/// Configuration for the simulated walker.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Starting position.
    pub origin: GeoPoint,
    /// Where the walker heads. None = stand still at the origin.
    pub goal: Option<GeoPoint>,
    /// Walking speed in m/s.
    pub speed_mps: f64,
    /// Simulated time per read, in seconds.
    pub tick_s: f64,
    /// Reads that return `NoFix` before the first fix.
    pub fix_delay_ticks: u32,
    /// GPS position noise standard deviation in meters.
    pub gps_noise_m: f64,
    /// Compass noise standard deviation in degrees.
    pub compass_noise_deg: f64,
    /// Declination subtracted from the true heading to get the magnetic one.
    pub declination_deg: f64,
    /// RNG seed for deterministic mode. None = random.
    pub seed: Option<u64>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            origin: crate::catalog::DEFAULT_ORIGIN,
            goal: None,
            speed_mps: 1.4,
            tick_s: 0.1,
            fix_delay_ticks: 20,
            gps_noise_m: 2.0,
            compass_noise_deg: 0.0,
            declination_deg: poi_compass_core::navigation::DEFAULT_DECLINATION_DEG,
            seed: None,
        }
    }
}

/// Walker that implements both sensor collaborator traits.
///
/// Each [`PositionProvider::read_fix`] advances the simulation by one tick;
/// [`Magnetometer::read_field`] samples the heading without moving.
pub struct SimulatedWalker {
    config: WalkerConfig,
    position: GeoPoint,
    /// True heading in degrees [0, 360).
    heading_deg: f64,
    rng: StdRng,
    ticks: u64,
}

impl SimulatedWalker {
    /// Create a walker at `config.origin`.
    pub fn new(config: WalkerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let heading_deg = match config.goal {
            Some(goal) if goal != config.origin => config.origin.bearing_to(&goal),
            _ => 0.0,
        };
        Self {
            position: config.origin,
            heading_deg,
            config,
            rng,
            ticks: 0,
        }
    }

    /// Move one tick toward the goal using a flat-earth approximation.
    fn advance(&mut self) {
        self.ticks += 1;

        let Some(goal) = self.config.goal else {
            return;
        };
        let remaining = self.position.distance_to(&goal);
        let step = self.config.speed_mps * self.config.tick_s;
        if remaining <= step {
            if remaining > 0.0 {
                log::debug!("Walker reached goal after {} ticks", self.ticks);
            }
            self.position = goal;
            return;
        }

        self.heading_deg = self.position.bearing_to(&goal);
        let bearing_rad = self.heading_deg.to_radians();
        let north_m = step * bearing_rad.cos();
        let east_m = step * bearing_rad.sin();
        self.position = offset(self.position, north_m, east_m);
    }

    /// Generate Gaussian noise using Box-Muller transform.
    fn gaussian_noise(&mut self, stddev: f64) -> f64 {
        if stddev == 0.0 {
            return 0.0;
        }
        let u1: f64 = self.rng.gen::<f64>().max(f64::EPSILON);
        let u2: f64 = self.rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        z * stddev
    }

    /// True position, without GPS noise.
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// True heading in degrees.
    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    /// Number of position reads so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True once the walker stands on its goal.
    pub fn at_goal(&self) -> bool {
        self.config.goal == Some(self.position)
    }

    /// Walker configuration.
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }
}

impl std::fmt::Debug for SimulatedWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedWalker")
            .field("position", &self.position)
            .field("heading_deg", &self.heading_deg)
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl PositionProvider for SimulatedWalker {
    fn read_fix(&mut self) -> Fix {
        self.advance();

        if self.ticks <= u64::from(self.config.fix_delay_ticks) {
            return Fix::NoFix;
        }
        if self.ticks == u64::from(self.config.fix_delay_ticks) + 1 {
            log::info!("GPS fix acquired after {} ticks", self.config.fix_delay_ticks);
        }

        let noise_north = self.gaussian_noise(self.config.gps_noise_m);
        let noise_east = self.gaussian_noise(self.config.gps_noise_m);
        Fix::Have(offset(self.position, noise_north, noise_east))
    }
}

impl Magnetometer for SimulatedWalker {
    fn read_field(&mut self) -> MagneticField {
        let noise = self.gaussian_noise(self.config.compass_noise_deg);
        let magnetic_deg =
            normalize_degrees(self.heading_deg - self.config.declination_deg + noise);
        let rad = magnetic_deg.to_radians();
        MagneticField::new(rad.cos(), rad.sin(), FIELD_Z)
    }
}

/// Shared handle so one walker can fill both sensor slots of the loop.
///
/// Single-threaded only; the loop runs on a current-thread runtime.
#[derive(Debug, Clone)]
pub struct WalkerHandle(Rc<RefCell<SimulatedWalker>>);

impl WalkerHandle {
    /// Wrap a walker.
    pub fn new(walker: SimulatedWalker) -> Self {
        Self(Rc::new(RefCell::new(walker)))
    }

    /// True position of the walker.
    pub fn position(&self) -> GeoPoint {
        self.0.borrow().position()
    }

    /// True once the walker stands on its goal.
    pub fn at_goal(&self) -> bool {
        self.0.borrow().at_goal()
    }
}

impl PositionProvider for WalkerHandle {
    fn read_fix(&mut self) -> Fix {
        self.0.borrow_mut().read_fix()
    }
}

impl Magnetometer for WalkerHandle {
    fn read_field(&mut self) -> MagneticField {
        self.0.borrow_mut().read_field()
    }
}

/// Shift `point` by local north/east offsets in meters.
fn offset(point: GeoPoint, north_m: f64, east_m: f64) -> GeoPoint {
    let meters_per_deg_lon = METERS_PER_DEG_LAT * point.latitude.to_radians().cos();
    GeoPoint::new(
        point.latitude + north_m / METERS_PER_DEG_LAT,
        point.longitude + east_m / meters_per_deg_lon,
    )
}
