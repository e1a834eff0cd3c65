//! Enumeration of vehicle availability scenarios.

use itertools::Itertools;
use log::{debug, warn};

use super::observer::{NoopObserver, ProbabilityObserver};
use crate::error::{Error, Result};
use crate::models::Scenario;

/// Enumerates availability scenarios for a fleet whose vehicles are each
/// absent independently with probability `p`.
///
/// For every absence count `k` in `0..=max_absences`, each subset of
/// `V - k` vehicles becomes one scenario with probability
/// `p^k · (1-p)^(V-k)`. Vehicles are named, so the probability is per subset
/// and is not divided by `C(V, k)`; summed over the level it gives the
/// binomial term.
///
/// Ids run over `k` ascending, then subsets in lexicographic order, so the
/// output is fully reproducible.
///
/// # Examples
///
/// ```
/// use u_scenario::scenario::ScenarioGenerator;
///
/// let scenarios = ScenarioGenerator::new(3, 0.1).unwrap().generate();
/// assert_eq!(scenarios.len(), 8);
/// assert_eq!(scenarios[0].available_vehicles(), &[0, 1, 2]);
/// assert_eq!(scenarios[1].available_vehicles(), &[0, 1]);
/// assert!(scenarios[7].available_vehicles().is_empty());
///
/// let total: f64 = scenarios.iter().map(|s| s.probability()).sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioGenerator {
    number_of_vehicles: usize,
    absence_prob: f64,
    max_absences: usize,
}

impl ScenarioGenerator {
    /// Creates a generator enumerating every absence count `0..=V`.
    ///
    /// Fails if the fleet is empty or `absence_prob` is not within `[0, 1]`.
    pub fn new(number_of_vehicles: usize, absence_prob: f64) -> Result<Self> {
        if number_of_vehicles == 0 {
            return Err(Error::NoVehicles);
        }
        if !(0.0..=1.0).contains(&absence_prob) {
            return Err(Error::InvalidProbability(absence_prob));
        }
        Ok(Self {
            number_of_vehicles,
            absence_prob,
            max_absences: number_of_vehicles,
        })
    }

    /// Limits enumeration to at most `max_absences` simultaneous absences.
    ///
    /// The resulting probabilities are not renormalized. Values above the
    /// fleet size are clamped to it.
    pub fn with_max_absences(mut self, max_absences: usize) -> Self {
        if max_absences > self.number_of_vehicles {
            warn!(
                "max_absences {} exceeds fleet size {}, clamping",
                max_absences, self.number_of_vehicles
            );
        }
        self.max_absences = max_absences.min(self.number_of_vehicles);
        self
    }

    /// Fleet size V.
    pub fn number_of_vehicles(&self) -> usize {
        self.number_of_vehicles
    }

    /// Per-vehicle absence probability.
    pub fn absence_prob(&self) -> f64 {
        self.absence_prob
    }

    /// Largest absence count enumerated.
    pub fn max_absences(&self) -> usize {
        self.max_absences
    }

    /// Number of scenarios [`generate`](Self::generate) will return, or
    /// `None` if it does not fit in a `u64`.
    pub fn scenario_count(&self) -> Option<u64> {
        (0..=self.max_absences).try_fold(0u64, |count, k| {
            count.checked_add(binomial(self.number_of_vehicles, k)?)
        })
    }

    /// Probability of one specific subset being present when `absences`
    /// vehicles are missing.
    pub fn scenario_probability(&self, absences: usize) -> f64 {
        if absences > self.number_of_vehicles {
            return 0.0;
        }
        let present = self.number_of_vehicles - absences;
        self.absence_prob.powi(absences as i32) * (1.0 - self.absence_prob).powi(present as i32)
    }

    /// Enumerates all scenarios.
    pub fn generate(&self) -> Vec<Scenario> {
        self.generate_with(&mut NoopObserver)
    }

    /// Enumerates all scenarios, reporting accumulated probability mass to
    /// `observer`. The observer never changes the result.
    pub fn generate_with<O: ProbabilityObserver>(&self, observer: &mut O) -> Vec<Scenario> {
        let v = self.number_of_vehicles;
        let mut scenarios = Vec::new();
        let mut cumulative = 0.0;

        for k in 0..=self.max_absences {
            let probability = self.scenario_probability(k);
            let mut level_mass = 0.0;

            for available in (0..v).combinations(v - k) {
                let scenario = Scenario::new(scenarios.len(), probability, available);
                level_mass += probability;
                cumulative += probability;
                observer.on_scenario(&scenario, k, cumulative);
                scenarios.push(scenario);
            }

            observer.on_absence_level(k, level_mass, cumulative);
        }

        debug!(
            "generated {} scenarios for {} vehicles (p = {}, max absences = {}), total probability {}",
            scenarios.len(),
            v,
            self.absence_prob,
            self.max_absences,
            cumulative
        );
        scenarios
    }
}

/// Binomial coefficient `C(n, k)`; zero when `k > n`, `None` when the
/// result does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use u_scenario::scenario::binomial;
///
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(64, 32), Some(1_832_624_140_942_590_534));
/// assert_eq!(binomial(100, 50), None);
/// ```
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // The running product is C(n, i + 1), which grows with i up to n / 2.
        result = result.checked_mul((n - i) as u128)? / (i + 1) as u128;
        if result > u64::MAX as u128 {
            return None;
        }
    }
    Some(result as u64)
}

/// Aggregate probability of exactly `absences` of `vehicles` being absent:
/// `C(V, k) · p^k · (1-p)^(V-k)`.
///
/// Evaluated in log space, so it stays finite for any fleet size.
pub fn absence_level_mass(vehicles: usize, absence_prob: f64, absences: usize) -> f64 {
    if absences > vehicles {
        return 0.0;
    }
    let present = vehicles - absences;
    if absence_prob <= 0.0 {
        return if absences == 0 { 1.0 } else { 0.0 };
    }
    if absence_prob >= 1.0 {
        return if present == 0 { 1.0 } else { 0.0 };
    }

    let k = absences.min(present);
    let ln_binomial: f64 = (0..k)
        .map(|i| ((vehicles - i) as f64 / (i + 1) as f64).ln())
        .sum();
    (ln_binomial
        + absences as f64 * absence_prob.ln()
        + present as f64 * (1.0 - absence_prob).ln())
    .exp()
}

/// Probability mass dropped by enumerating only up to `max_absences`.
///
/// # Examples
///
/// ```
/// use u_scenario::scenario::truncation_deficit;
///
/// // Only the "everyone absent" scenario is missing.
/// assert!((truncation_deficit(2, 0.5, 1) - 0.25).abs() < 1e-12);
/// assert_eq!(truncation_deficit(2, 0.5, 2), 0.0);
/// ```
pub fn truncation_deficit(vehicles: usize, absence_prob: f64, max_absences: usize) -> f64 {
    ((max_absences + 1)..=vehicles)
        .map(|k| absence_level_mass(vehicles, absence_prob, k))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(5, 0), Some(1));
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(5, 5), Some(1));
        assert_eq!(binomial(10, 3), Some(120));
        assert_eq!(binomial(3, 4), Some(0));
    }

    #[test]
    fn test_binomial_large_fleet() {
        assert_eq!(binomial(64, 32), Some(1_832_624_140_942_590_534));
        assert_eq!(binomial(64, 1), Some(64));
        assert_eq!(binomial(67, 33), Some(14_226_520_737_620_288_370));
        assert_eq!(binomial(68, 34), None);
        assert_eq!(binomial(200, 100), None);
    }

    #[test]
    fn test_scenario_count_large_fleet() {
        let generator = ScenarioGenerator::new(64, 0.1).expect("valid");
        assert_eq!(generator.scenario_count(), None);
        assert_eq!(generator.with_max_absences(1).scenario_count(), Some(65));
    }

    #[test]
    fn test_truncation_deficit_large_fleet() {
        let p: f64 = 0.01;
        let deficit = truncation_deficit(64, p, 1);
        let expected = 1.0 - (1.0 - p).powi(64) - 64.0 * p * (1.0 - p).powi(63);
        assert!((deficit - expected).abs() < 1e-9);

        let deficit = truncation_deficit(1000, 0.3, 10);
        assert!(deficit.is_finite());
        assert!((deficit - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_empty_fleet() {
        assert!(matches!(
            ScenarioGenerator::new(0, 0.1),
            Err(Error::NoVehicles)
        ));
    }

    #[test]
    fn test_rejects_bad_probability() {
        assert!(matches!(
            ScenarioGenerator::new(2, -0.1),
            Err(Error::InvalidProbability(_))
        ));
        assert!(ScenarioGenerator::new(2, 1.01).is_err());
        assert!(ScenarioGenerator::new(2, f64::NAN).is_err());
    }

    #[test]
    fn test_two_vehicles() {
        let scenarios = ScenarioGenerator::new(2, 0.1).expect("valid").generate();
        assert_eq!(scenarios.len(), 4);

        assert_eq!(scenarios[0].available_vehicles(), &[0, 1]);
        assert!((scenarios[0].probability() - 0.81).abs() < 1e-12);

        assert_eq!(scenarios[1].available_vehicles(), &[0]);
        assert_eq!(scenarios[2].available_vehicles(), &[1]);
        assert!((scenarios[1].probability() - 0.09).abs() < 1e-12);
        assert!((scenarios[2].probability() - 0.09).abs() < 1e-12);

        assert!(scenarios[3].available_vehicles().is_empty());
        assert!((scenarios[3].probability() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_ids_are_sequential() {
        let scenarios = ScenarioGenerator::new(4, 0.3).expect("valid").generate();
        for (i, s) in scenarios.iter().enumerate() {
            assert_eq!(s.id(), i);
        }
    }

    #[test]
    fn test_level_counts_and_distinct() {
        let v = 5;
        let scenarios = ScenarioGenerator::new(v, 0.2).expect("valid").generate();
        for k in 0..=v {
            let level: Vec<_> = scenarios
                .iter()
                .filter(|s| s.available_vehicles().len() == v - k)
                .map(|s| s.available_vehicles().to_vec())
                .collect();
            assert_eq!(Some(level.len() as u64), binomial(v, k));
            let unique: HashSet<_> = level.iter().collect();
            assert_eq!(unique.len(), level.len());
        }
    }

    #[test]
    fn test_extreme_probabilities() {
        let all_present = ScenarioGenerator::new(3, 0.0).expect("valid").generate();
        assert_eq!(all_present[0].probability(), 1.0);
        assert!(all_present[1..].iter().all(|s| s.probability() == 0.0));

        let all_absent = ScenarioGenerator::new(3, 1.0).expect("valid").generate();
        let last = all_absent.last().expect("non-empty");
        assert!(last.available_vehicles().is_empty());
        assert_eq!(last.probability(), 1.0);
    }

    #[test]
    fn test_truncation_not_renormalized() {
        let generator = ScenarioGenerator::new(3, 0.2).expect("valid").with_max_absences(1);
        assert_eq!(generator.scenario_count(), Some(4));
        let scenarios = generator.generate();
        assert_eq!(scenarios.len(), 4);
        let total: f64 = scenarios.iter().map(|s| s.probability()).sum();
        let deficit = truncation_deficit(3, 0.2, 1);
        assert!((1.0 - total - deficit).abs() < 1e-12);
        assert!(total < 1.0);
    }

    #[test]
    fn test_max_absences_clamped() {
        let generator = ScenarioGenerator::new(2, 0.5).expect("valid").with_max_absences(7);
        assert_eq!(generator.max_absences(), 2);
        assert_eq!(generator.generate().len(), 4);
    }

    #[test]
    fn test_deterministic() {
        let generator = ScenarioGenerator::new(4, 0.15).expect("valid");
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_absence_level_mass_matches_sum() {
        let generator = ScenarioGenerator::new(4, 0.3).expect("valid");
        let scenarios = generator.generate();
        for k in 0..=4 {
            let level: f64 = scenarios
                .iter()
                .filter(|s| s.available_vehicles().len() == 4 - k)
                .map(|s| s.probability())
                .sum();
            assert!((level - absence_level_mass(4, 0.3, k)).abs() < 1e-12);
        }
    }
}
