//! Paced driving loop.
//!
//! Each tick reads one fix and one field sample, runs the navigator and hands
//! the output to the render sink. Collaborators are owned by the loop.

use std::time::Duration;

use poi_compass_core::navigation::{NavigationOutput, Navigator};
use poi_compass_core::traits::{Magnetometer, PositionProvider, RenderSink};
use tokio::time::{interval, MissedTickBehavior};

/// When [`CompassLoop::run`] should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopCondition {
    /// Stop after this many ticks. None = never.
    pub max_ticks: Option<u64>,
    /// Stop on the first `Arrived` output.
    pub on_arrival: bool,
}

/// Running tally of loop outputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopSummary {
    /// Ticks executed.
    pub ticks: u64,
    /// Ticks that produced `AwaitingFix`.
    pub awaiting_ticks: u64,
    /// Ticks that produced `Navigating`.
    pub navigating_ticks: u64,
    /// Ticks that produced `Arrived`.
    pub arrived_ticks: u64,
    /// 1-based tick of the first `Arrived` output.
    pub first_arrival_tick: Option<u64>,
    /// Output of the most recent tick.
    pub last: Option<NavigationOutput>,
}

impl LoopSummary {
    fn record(&mut self, output: &NavigationOutput) {
        self.ticks += 1;
        match output {
            NavigationOutput::AwaitingFix => self.awaiting_ticks += 1,
            NavigationOutput::Navigating { .. } => self.navigating_ticks += 1,
            NavigationOutput::Arrived { .. } => {
                self.arrived_ticks += 1;
                if self.first_arrival_tick.is_none() {
                    self.first_arrival_tick = Some(self.ticks);
                }
            }
        }
        self.last = Some(output.clone());
    }
}

/// Driving loop around a [`Navigator`].
pub struct CompassLoop<P, M, R> {
    navigator: Navigator,
    position: P,
    magnetometer: M,
    sink: R,
    period: Duration,
    summary: LoopSummary,
}

impl<P, M, R> CompassLoop<P, M, R>
where
    P: PositionProvider,
    M: Magnetometer,
    R: RenderSink,
{
    /// Create a loop ticking every `period`.
    pub fn new(navigator: Navigator, position: P, magnetometer: M, sink: R, period: Duration) -> Self {
        Self {
            navigator,
            position,
            magnetometer,
            sink,
            period,
            summary: LoopSummary::default(),
        }
    }

    /// Run one tick immediately, without pacing.
    pub fn tick(&mut self) -> NavigationOutput {
        let fix = self.position.read_fix();
        let field = self.magnetometer.read_field();
        let output = self.navigator.update(fix, field);
        self.sink.render(&output);

        let previous = self.summary.last.as_ref().map(NavigationOutput::kind);
        if previous != Some(output.kind()) {
            log::debug!("Output changed: {:?} -> {}", previous, output.kind());
        }
        self.summary.record(&output);
        output
    }

    /// Tick every period until `stop` is met.
    ///
    /// The first tick runs immediately. A tick that runs late pushes the
    /// following ones back rather than bursting to catch up.
    pub async fn run(&mut self, stop: StopCondition) -> &LoopSummary {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log::info!("Compass loop started ({} ms period)", self.period.as_millis());
        loop {
            if let Some(max) = stop.max_ticks {
                if self.summary.ticks >= max {
                    log::info!("Tick limit reached ({})", max);
                    break;
                }
            }

            ticker.tick().await;
            let output = self.tick();

            if stop.on_arrival && matches!(output, NavigationOutput::Arrived { .. }) {
                log::info!("Stopping on arrival at tick {}", self.summary.ticks);
                break;
            }
        }
        &self.summary
    }

    /// Tally of everything run so far.
    pub fn summary(&self) -> &LoopSummary {
        &self.summary
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Navigator driven by this loop.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Position collaborator.
    pub fn position(&self) -> &P {
        &self.position
    }

    /// Magnetometer collaborator.
    pub fn magnetometer(&self) -> &M {
        &self.magnetometer
    }

    /// Render sink.
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Mutable render sink.
    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }
}

impl<P, M, R> std::fmt::Debug for CompassLoop<P, M, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompassLoop")
            .field("period", &self.period)
            .field("ticks", &self.summary.ticks)
            .field("arrived", &self.navigator.is_arrived())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poi_compass_core::navigation::{
        Fix, GeoPoint, MagneticField, NavigationConfig, TargetCatalog,
    };
    use poi_compass_core::traits::{MockMagnetometer, MockPositionProvider, MockRenderSink};

    fn navigator() -> Navigator {
        let catalog = TargetCatalog::from_entries(&[("Home", 40.0, -105.0)]).unwrap();
        Navigator::new(catalog, NavigationConfig::default())
    }

    fn compass_loop(
        fixes: &[Fix],
    ) -> CompassLoop<MockPositionProvider, MockMagnetometer, MockRenderSink> {
        CompassLoop::new(
            navigator(),
            MockPositionProvider::with_script(fixes),
            MockMagnetometer::new(MagneticField::new(1.0, 0.0, 0.0)),
            MockRenderSink::new(),
            Duration::from_millis(100),
        )
    }

    #[test]
    fn test_tick_renders_output() {
        let mut compass = compass_loop(&[Fix::NoFix, Fix::Have(GeoPoint::new(40.0, -105.0))]);

        assert_eq!(compass.tick(), NavigationOutput::AwaitingFix);
        assert!(matches!(compass.tick(), NavigationOutput::Arrived { .. }));

        assert_eq!(compass.sink().count(), 2);
        assert_eq!(compass.sink().history()[0], NavigationOutput::AwaitingFix);
        assert!(compass.navigator().is_arrived());
    }

    #[test]
    fn test_summary_counts() {
        let far = Fix::Have(GeoPoint::new(40.01, -105.0));
        let here = Fix::Have(GeoPoint::new(40.0, -105.0));
        let mut compass = compass_loop(&[Fix::NoFix, far, far, here]);
        for _ in 0..5 {
            compass.tick();
        }

        let summary = compass.summary();
        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.awaiting_ticks, 1);
        assert_eq!(summary.navigating_ticks, 2);
        assert_eq!(summary.arrived_ticks, 2);
        assert_eq!(summary.first_arrival_tick, Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_at_tick_limit() {
        let mut compass = compass_loop(&[Fix::NoFix]);
        let start = tokio::time::Instant::now();

        let summary = compass
            .run(StopCondition {
                max_ticks: Some(10),
                on_arrival: false,
            })
            .await;

        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.awaiting_ticks, 10);
        // First tick fires immediately, then nine periods
        assert_eq!(start.elapsed(), Duration::from_millis(900));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_on_arrival() {
        let far = Fix::Have(GeoPoint::new(40.01, -105.0));
        let here = Fix::Have(GeoPoint::new(40.0, -105.0));
        let mut compass = compass_loop(&[far, far, far, here]);

        let summary = compass
            .run(StopCondition {
                max_ticks: Some(100),
                on_arrival: true,
            })
            .await;

        assert_eq!(summary.ticks, 4);
        assert_eq!(summary.first_arrival_tick, Some(4));
    }
}
