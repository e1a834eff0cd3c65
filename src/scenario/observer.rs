//! Hooks for watching probability accumulation during enumeration.

use log::{debug, trace};

use crate::models::Scenario;

/// Receives intermediate probability mass while scenarios are generated.
///
/// Both methods default to doing nothing, so an implementation only needs
/// the events it cares about.
pub trait ProbabilityObserver {
    /// Called after each scenario is created.
    ///
    /// `cumulative` is the probability of all scenarios created so far,
    /// including this one.
    fn on_scenario(&mut self, _scenario: &Scenario, _absences: usize, _cumulative: f64) {}

    /// Called once an absence count is fully enumerated, with the mass of
    /// that level and the running total.
    fn on_absence_level(&mut self, _absences: usize, _level_mass: f64, _cumulative: f64) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProbabilityObserver for NoopObserver {}

/// Observer that writes the accumulation to the `log` facade.
///
/// Scenarios go to `trace`, completed absence levels to `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ProbabilityObserver for LogObserver {
    fn on_scenario(&mut self, scenario: &Scenario, absences: usize, cumulative: f64) {
        trace!(
            "scenario {} ({} absent): vehicles {:?}, probability {}, cumulative {}",
            scenario.id(),
            absences,
            scenario.available_vehicles(),
            scenario.probability(),
            cumulative
        );
    }

    fn on_absence_level(&mut self, absences: usize, level_mass: f64, cumulative: f64) {
        debug!(
            "{} absent: level probability {}, cumulative {}",
            absences, level_mass, cumulative
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioGenerator;

    #[derive(Default)]
    struct Recorder {
        scenarios: usize,
        levels: Vec<(usize, f64, f64)>,
    }

    impl ProbabilityObserver for Recorder {
        fn on_scenario(&mut self, _scenario: &Scenario, _absences: usize, _cumulative: f64) {
            self.scenarios += 1;
        }

        fn on_absence_level(&mut self, absences: usize, level_mass: f64, cumulative: f64) {
            self.levels.push((absences, level_mass, cumulative));
        }
    }

    #[test]
    fn test_observer_sees_every_event() {
        let generator = ScenarioGenerator::new(3, 0.5).expect("valid");
        let mut recorder = Recorder::default();
        let scenarios = generator.generate_with(&mut recorder);

        assert_eq!(recorder.scenarios, scenarios.len());
        assert_eq!(recorder.levels.len(), 4);
        assert!((recorder.levels[1].1 - 0.375).abs() < 1e-12);
        let (_, _, last_cumulative) = recorder.levels[3];
        assert!((last_cumulative - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_observer_does_not_change_output() {
        let generator = ScenarioGenerator::new(4, 0.25).expect("valid");
        let plain = generator.generate();
        let logged = generator.generate_with(&mut LogObserver);
        let recorded = generator.generate_with(&mut Recorder::default());
        assert_eq!(plain, logged);
        assert_eq!(plain, recorded);
    }
}
