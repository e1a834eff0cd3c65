//! Settings document passthrough.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// A JSON settings document, kept exactly as read.
///
/// The crate does not impose a schema; callers pull out the sections they
/// understand with [`section`](Self::section).
///
/// # Examples
///
/// ```
/// use u_scenario::io::Settings;
/// use u_scenario::models::FleetParameters;
///
/// let settings = Settings::from_json(r#"{
///     "solver": { "time_limit": 60 },
///     "fleet": {
///         "number_of_vehicles": 2, "absence_prob": 0.1,
///         "time_horizon": 480.0, "cost_km": 1.0, "geography": "MANHATTAN",
///         "vehicle_speed": 40.0, "balance": 0.0
///     }
/// }"#).unwrap();
/// let fleet: FleetParameters = settings.section("fleet").unwrap();
/// assert_eq!(fleet.number_of_vehicles, 2);
/// assert_eq!(settings.value()["solver"]["time_limit"], 60);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    value: Value,
}

impl Settings {
    /// Loads a settings document from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("reading settings from {}", path.display());
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { value })
    }

    /// Parses a settings document from a string.
    pub fn from_json(json: &str) -> Result<Self> {
        let value = serde_json::from_str(json).map_err(|source| Error::Settings {
            path: "<inline>".into(),
            source,
        })?;
        Ok(Self { value })
    }

    /// Wraps an already parsed document.
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// The untouched document.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Deserializes the top-level entry `key` into `T`.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let section = self
            .value
            .get(key)
            .ok_or_else(|| Error::MissingSection(key.to_string()))?;
        T::deserialize(section).map_err(|source| Error::Section {
            key: key.to_string(),
            source,
        })
    }
}
