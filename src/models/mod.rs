//! Domain model types for scenario-based vehicle routing.
//!
//! Provides the node sequence element, availability scenarios, and the
//! vehicle data record that carries the scenarios to the model builder.

mod node;
mod scenario;

pub use node::Node;
pub use scenario::{FleetParameters, Scenario, VehicleData};
