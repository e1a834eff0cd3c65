//! Vehicle availability scenarios and the vehicle data that carries them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scenario::{NoopObserver, ProbabilityObserver, ScenarioGenerator};

/// One realization of vehicle availability.
///
/// `probability` is the likelihood that exactly `available_vehicles` show up
/// and every other vehicle is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    scenario: usize,
    probability: f64,
    available_vehicles: Vec<usize>,
}

impl Scenario {
    /// Creates a scenario record; `available_vehicles` is kept sorted.
    pub fn new(scenario: usize, probability: f64, mut available_vehicles: Vec<usize>) -> Self {
        available_vehicles.sort_unstable();
        Self {
            scenario,
            probability,
            available_vehicles,
        }
    }

    /// Sequential scenario id.
    pub fn id(&self) -> usize {
        self.scenario
    }

    /// Probability of this exact availability pattern.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Indices of the vehicles present, in increasing order.
    pub fn available_vehicles(&self) -> &[usize] {
        &self.available_vehicles
    }

    /// Returns `true` if `vehicle` is present in this scenario.
    pub fn is_available(&self, vehicle: usize) -> bool {
        self.available_vehicles.binary_search(&vehicle).is_ok()
    }
}

/// Fleet description read from the settings document.
///
/// Everything except `number_of_vehicles`, `absence_prob` and
/// `max_absences` is passed through to [`VehicleData`] untouched.
///
/// # Examples
///
/// ```
/// use u_scenario::models::FleetParameters;
///
/// let params: FleetParameters = serde_json::from_str(r#"{
///     "number_of_vehicles": 3,
///     "absence_prob": 0.1,
///     "time_horizon": 480.0,
///     "cost_km": 1.2,
///     "geography": "EUCLIDEAN",
///     "vehicle_speed": 50.0,
///     "balance": 0.0
/// }"#).unwrap();
/// assert_eq!(params.max_absences, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetParameters {
    pub number_of_vehicles: usize,
    pub absence_prob: f64,
    /// Largest number of simultaneous absences to enumerate (all when `None`).
    #[serde(default)]
    pub max_absences: Option<usize>,
    pub time_horizon: f64,
    pub cost_km: f64,
    pub geography: String,
    pub vehicle_speed: f64,
    pub balance: f64,
}

/// Vehicle data handed to the model builder: fleet passthrough fields plus
/// the enumerated availability scenarios.
///
/// # Examples
///
/// ```
/// use u_scenario::models::{FleetParameters, VehicleData};
///
/// let params = FleetParameters {
///     number_of_vehicles: 2,
///     absence_prob: 0.5,
///     max_absences: None,
///     time_horizon: 480.0,
///     cost_km: 1.0,
///     geography: "MANHATTAN".into(),
///     vehicle_speed: 40.0,
///     balance: 0.0,
/// };
/// let data = VehicleData::from_parameters(&params).unwrap();
/// assert_eq!(data.number_of_scenarios(), 4);
/// assert!((data.total_probability() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleData {
    time_horizon: f64,
    cost_km: f64,
    geography: String,
    vehicle_speed: f64,
    balance: f64,
    number_of_vehicles: usize,
    #[serde(skip)]
    absence_prob: f64,
    scenarios: Vec<Scenario>,
}

impl VehicleData {
    /// Generates every scenario allowed by `params`.
    pub fn from_parameters(params: &FleetParameters) -> Result<Self> {
        Self::from_parameters_with(params, &mut NoopObserver)
    }

    /// Same as [`from_parameters`](Self::from_parameters), reporting the
    /// probability accumulation to `observer`.
    pub fn from_parameters_with<O: ProbabilityObserver>(
        params: &FleetParameters,
        observer: &mut O,
    ) -> Result<Self> {
        let mut generator = ScenarioGenerator::new(params.number_of_vehicles, params.absence_prob)?;
        if let Some(max_absences) = params.max_absences {
            generator = generator.with_max_absences(max_absences);
        }

        Ok(Self {
            time_horizon: params.time_horizon,
            cost_km: params.cost_km,
            geography: params.geography.clone(),
            vehicle_speed: params.vehicle_speed,
            balance: params.balance,
            number_of_vehicles: params.number_of_vehicles,
            absence_prob: params.absence_prob,
            scenarios: generator.generate_with(observer),
        })
    }

    /// Fleet size V.
    pub fn number_of_vehicles(&self) -> usize {
        self.number_of_vehicles
    }

    /// Per-vehicle absence probability p.
    pub fn absence_prob(&self) -> f64 {
        self.absence_prob
    }

    /// Planning horizon.
    pub fn time_horizon(&self) -> f64 {
        self.time_horizon
    }

    /// Cost per kilometre travelled.
    pub fn cost_km(&self) -> f64 {
        self.cost_km
    }

    /// Distance metric name, as given in the settings.
    ///
    /// Parse it with [`Geography`](crate::distance::Geography) when distances
    /// are needed; an unsupported name fails at that point.
    pub fn geography(&self) -> &str {
        &self.geography
    }

    /// Vehicle speed.
    pub fn vehicle_speed(&self) -> f64 {
        self.vehicle_speed
    }

    /// Workload balance parameter.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// All scenarios, ordered by id.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of scenarios S.
    pub fn number_of_scenarios(&self) -> usize {
        self.scenarios.len()
    }

    /// Sum of scenario probabilities (below 1 when absences were truncated).
    pub fn total_probability(&self) -> f64 {
        self.scenarios.iter().map(Scenario::probability).sum()
    }
}
