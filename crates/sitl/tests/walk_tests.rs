use std::time::Duration;

use poi_compass_core::navigation::{GeoPoint, NavigationOutput, Navigator};
use poi_compass_core::parameters::ParamValue;
use poi_compass_sitl::display::compose;
use poi_compass_sitl::{
    build_store, catalog_from_args, CompassLoop, LoopSettings, SimulatedWalker, StopCondition,
    TextDisplay, WalkerConfig, WalkerHandle,
};

fn walk(
    origin: GeoPoint,
    goal: GeoPoint,
    entries: &[String],
    gps_noise_m: f64,
) -> CompassLoop<WalkerHandle, WalkerHandle, TextDisplay<Vec<u8>>> {
    let store = build_store(&[("SCHED_LOOP_MS", ParamValue::Int(1000))]).unwrap();
    let settings = LoopSettings::from_store(&store);
    let catalog = catalog_from_args(entries).unwrap();

    let walker = WalkerHandle::new(SimulatedWalker::new(WalkerConfig {
        origin,
        goal: Some(goal),
        speed_mps: 5.0,
        tick_s: settings.tick_period.as_secs_f64(),
        fix_delay_ticks: 3,
        gps_noise_m,
        compass_noise_deg: 0.0,
        declination_deg: settings.navigation.declination_deg,
        seed: Some(7),
    }));

    CompassLoop::new(
        Navigator::new(catalog, settings.navigation),
        walker.clone(),
        walker,
        TextDisplay::new(Vec::new()),
        settings.tick_period,
    )
}

#[tokio::test(start_paused = true)]
async fn test_walk_to_target_arrives() {
    let entries = vec!["Corner Store,40.0,-105.0".to_string()];
    let goal = GeoPoint::new(40.0, -105.0);
    let origin = GeoPoint::new(40.0, -105.005);
    let mut compass = walk(origin, goal, &entries, 0.0);

    let summary = compass
        .run(StopCondition {
            max_ticks: Some(500),
            on_arrival: true,
        })
        .await
        .clone();

    assert_eq!(summary.awaiting_ticks, 3);
    assert!(summary.navigating_ticks > 0);
    assert_eq!(summary.arrived_ticks, 1);
    assert_eq!(summary.first_arrival_tick, Some(summary.ticks));
    assert!(compass.navigator().is_arrived());

    let frame = compass.sink().last_frame().unwrap();
    assert_eq!(frame.rows()[0].trim(), "ARRIVED!");
    assert_eq!(frame.rows()[2], "Corner Store");
}

#[test]
fn test_walking_toward_target_points_ahead() {
    let entries = vec!["Corner Store,40.0,-105.0".to_string()];
    let goal = GeoPoint::new(40.0, -105.0);
    let origin = GeoPoint::new(40.005, -105.0);
    let mut compass = walk(origin, goal, &entries, 0.0);

    for _ in 0..10 {
        compass.tick();
    }

    let last = compass.summary().last.as_ref().unwrap();
    assert!(matches!(last, NavigationOutput::Navigating { .. }), "got {:?}", last);
    assert_eq!(compose(last).rows()[1].trim(), "↑");
}

#[tokio::test(start_paused = true)]
async fn test_noisy_walk_still_arrives() {
    let entries = vec!["Corner Store,40.0,-105.0".to_string()];
    let goal = GeoPoint::new(40.0, -105.0);
    let origin = GeoPoint::new(39.997, -105.0);
    let mut compass = walk(origin, goal, &entries, 3.0);

    let summary = compass
        .run(StopCondition {
            max_ticks: Some(500),
            on_arrival: true,
        })
        .await
        .clone();

    assert!(summary.first_arrival_tick.is_some());
    assert!(summary.ticks < 500);
    assert!(compass.sink().frames_written() > 1);
}

#[test]
fn test_tick_period_comes_from_store() {
    let store = build_store(&[("SCHED_LOOP_MS", ParamValue::Int(1000))]).unwrap();
    assert_eq!(
        LoopSettings::from_store(&store).tick_period,
        Duration::from_secs(1)
    );
}
