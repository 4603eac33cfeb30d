//! Simulated walk with the POI compass.
//!
//! A simulated pedestrian starts at an origin and walks toward a goal
//! (by default the nearest target) while the navigation core drives a text
//! rendition of the device display.
//!
//! Usage:
//!   cargo run -p poi_compass_sitl --bin compass_sim -- [OPTIONS]
//!
//! Set `RUST_LOG=debug` for per-transition logging.

use std::process;

use clap::Parser;
use poi_compass_core::navigation::{GeoPoint, Navigator};
use poi_compass_core::parameters::ParamValue;
use poi_compass_sitl::{
    build_store, catalog_from_args, parse_point, CompassLoop, LoopSettings, SimulatedWalker,
    SitlError, StopCondition, TextDisplay, WalkerConfig, WalkerHandle,
};

#[derive(Parser, Debug)]
#[command(name = "compass_sim", about = "Walk a simulated POI compass toward the nearest target")]
struct Args {
    /// Magnetic declination in degrees (COMPASS_DEC)
    #[arg(long)]
    declination: Option<f64>,

    /// Arrival radius in meters (WP_RADIUS)
    #[arg(long)]
    threshold: Option<f64>,

    /// Tick period in milliseconds (SCHED_LOOP_MS)
    #[arg(long = "tick-ms")]
    tick_ms: Option<i32>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Keep running after arriving
    #[arg(long = "keep-going")]
    keep_going: bool,

    /// RNG seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Starting point as LAT,LON
    #[arg(long, value_name = "LAT,LON")]
    origin: Option<String>,

    /// Walk toward LAT,LON instead of the nearest target
    #[arg(long, value_name = "LAT,LON")]
    goal: Option<String>,

    /// Walking speed in m/s
    #[arg(long, default_value_t = 1.4)]
    speed: f64,

    /// Ticks without a GPS fix at startup
    #[arg(long = "fix-delay", default_value_t = 20)]
    fix_delay: u32,

    /// GPS noise standard deviation in meters
    #[arg(long = "gps-noise", default_value_t = 2.0)]
    gps_noise: f64,

    /// Compass noise standard deviation in degrees
    #[arg(long = "compass-noise", default_value_t = 0.0)]
    compass_noise: f64,

    /// Target as NAME,LAT,LON (repeatable; defaults to the built-in catalog)
    #[arg(long = "target", value_name = "NAME,LAT,LON")]
    targets: Vec<String>,
}

fn overrides(args: &Args) -> Vec<(&'static str, ParamValue)> {
    let mut list = Vec::new();
    if let Some(dec) = args.declination {
        list.push(("COMPASS_DEC", ParamValue::Float(dec)));
    }
    if let Some(radius) = args.threshold {
        list.push(("WP_RADIUS", ParamValue::Float(radius)));
    }
    if let Some(ms) = args.tick_ms {
        list.push(("SCHED_LOOP_MS", ParamValue::Int(ms)));
    }
    list
}

async fn run(args: Args) -> Result<(), SitlError> {
    let store = build_store(&overrides(&args))?;
    let settings = LoopSettings::from_store(&store);
    let catalog = catalog_from_args(&args.targets)?;

    let origin = match &args.origin {
        Some(text) => parse_point(text)?,
        None => poi_compass_sitl::catalog::DEFAULT_ORIGIN,
    };
    let goal: GeoPoint = match &args.goal {
        Some(text) => parse_point(text)?,
        None => catalog.nearest(origin).0.location(),
    };

    log::info!(
        "Origin {:.6},{:.6} -> goal {:.6},{:.6} ({:.0} m)",
        origin.latitude,
        origin.longitude,
        goal.latitude,
        goal.longitude,
        origin.distance_to(&goal)
    );

    let walker_config = WalkerConfig {
        origin,
        goal: Some(goal),
        speed_mps: args.speed,
        tick_s: settings.tick_period.as_secs_f64(),
        fix_delay_ticks: args.fix_delay,
        gps_noise_m: args.gps_noise,
        compass_noise_deg: args.compass_noise,
        declination_deg: settings.navigation.declination_deg,
        seed: args.seed,
    };
    // One walker feeds both sensor slots
    let walker = WalkerHandle::new(SimulatedWalker::new(walker_config));

    let mut display = TextDisplay::stdout();
    display.show_splash()?;

    let navigator = Navigator::new(catalog, settings.navigation);
    let mut compass = CompassLoop::new(
        navigator,
        walker.clone(),
        walker.clone(),
        display,
        settings.tick_period,
    );
    let stop = StopCondition {
        max_ticks: args.ticks,
        on_arrival: !args.keep_going,
    };

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    tokio::select! {
        _ = &mut ctrl_c => {
            log::info!("Shutdown requested");
        }
        _ = compass.run(stop) => {}
    }

    let summary = compass.summary();
    log::info!(
        "{} ticks: {} awaiting fix, {} navigating, {} arrived",
        summary.ticks,
        summary.awaiting_ticks,
        summary.navigating_ticks,
        summary.arrived_ticks
    );
    if let Some(tick) = summary.first_arrival_tick {
        log::info!("First arrival at tick {}", tick);
    }
    log::debug!("Walker finished at {:?}", walker.position());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        process::exit(1);
    }
}
