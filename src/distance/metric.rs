//! Point-to-point distance metrics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distance metric used for travel between nodes.
///
/// # Examples
///
/// ```
/// use u_scenario::distance::Geography;
///
/// let g: Geography = "EUCLIDEAN".parse().unwrap();
/// assert_eq!(g, Geography::Euclidean);
/// assert!("OTHER".parse::<Geography>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Geography {
    /// `|dx| + |dy|`
    Manhattan,
    /// `sqrt(dx² + dy²)`
    Euclidean,
}

impl FromStr for Geography {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MANHATTAN" => Ok(Self::Manhattan),
            "EUCLIDEAN" => Ok(Self::Euclidean),
            _ => Err(Error::InvalidGeography(s.to_string())),
        }
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => f.write_str("MANHATTAN"),
            Self::Euclidean => f.write_str("EUCLIDEAN"),
        }
    }
}

/// Distance between `(x1, y1)` and `(x2, y2)` under `geography`.
///
/// # Examples
///
/// ```
/// use u_scenario::distance::{distance, Geography};
///
/// assert_eq!(distance(0.0, 0.0, 3.0, 4.0, Geography::Euclidean), 5.0);
/// assert_eq!(distance(0.0, 0.0, 3.0, 4.0, Geography::Manhattan), 7.0);
/// ```
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64, geography: Geography) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    match geography {
        Geography::Manhattan => dx.abs() + dy.abs(),
        Geography::Euclidean => (dx * dx + dy * dy).sqrt(),
    }
}

/// Like [`distance`], with the metric given by name.
///
/// Fails with [`Error::InvalidGeography`] for anything other than
/// `MANHATTAN` or `EUCLIDEAN`.
pub fn distance_by_name(x1: f64, y1: f64, x2: f64, y2: f64, geography: &str) -> Result<f64> {
    let geography: Geography = geography.parse()?;
    Ok(distance(x1, y1, x2, y2, geography))
}
