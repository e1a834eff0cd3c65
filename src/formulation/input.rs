//! Bundle of every artifact the model builder consumes.

use serde::Serialize;

use super::arc::ArcFormulation;
use crate::error::{Error, Result};
use crate::io::Settings;
use crate::models::{Node, VehicleData};

/// Node sequence, vehicle data, index sets and the untouched settings
/// document, ready to hand to the model builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInput {
    settings: Settings,
    nodes: Vec<Node>,
    vehicle_data: VehicleData,
    arc_formulation: ArcFormulation,
}

impl ModelInput {
    /// Derives the index sets and bundles them with their inputs.
    pub fn new(nodes: Vec<Node>, vehicle_data: VehicleData, settings: Settings) -> Result<Self> {
        let arc_formulation = ArcFormulation::new(&nodes, &vehicle_data)?;
        Ok(Self {
            settings,
            nodes,
            vehicle_data,
            arc_formulation,
        })
    }

    /// The settings document as loaded.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Node sequence, depot replicas included.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Fleet data and scenarios.
    pub fn vehicle_data(&self) -> &VehicleData {
        &self.vehicle_data
    }

    /// Index sets of the arc formulation.
    pub fn arc_formulation(&self) -> &ArcFormulation {
        &self.arc_formulation
    }

    /// Serializes the bundle as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{read_nodes, NodeFileConfig};
    use crate::models::FleetParameters;
    use std::path::Path;

    const SETTINGS: &str = r#"{
        "fleet": {
            "number_of_vehicles": 2,
            "absence_prob": 0.2,
            "time_horizon": 480.0,
            "cost_km": 1.0,
            "geography": "EUCLIDEAN",
            "vehicle_speed": 40.0,
            "balance": 0.0
        }
    }"#;

    fn build() -> ModelInput {
        let nodes = read_nodes(
            "id x y\n1 0 0\n2 1 0\n3 0 1\n".as_bytes(),
            Path::new("inline"),
            &NodeFileConfig::default(),
        )
        .expect("valid");
        let settings = Settings::from_json(SETTINGS).expect("valid");
        let fleet: FleetParameters = settings.section("fleet").expect("valid");
        let vehicle_data = VehicleData::from_parameters(&fleet).expect("valid");
        ModelInput::new(nodes, vehicle_data, settings).expect("valid")
    }

    #[test]
    fn test_bundle() {
        let input = build();
        assert_eq!(input.nodes().len(), 4);
        assert_eq!(input.arc_formulation().customers(), &[1, 2]);
        assert_eq!(input.vehicle_data().number_of_scenarios(), 4);
        assert_eq!(input.settings().value()["fleet"]["number_of_vehicles"], 2);
    }

    #[test]
    fn test_to_json() {
        let json: serde_json::Value =
            serde_json::from_str(&build().to_json().expect("serializable")).expect("valid json");
        assert_eq!(json["arc_formulation"]["depot_end"], 3);
        assert_eq!(json["vehicle_data"]["number_of_vehicles"], 2);
        assert_eq!(json["nodes"][3]["node_no"], 3);
        assert_eq!(json["settings"]["fleet"]["geography"], "EUCLIDEAN");
    }

    #[test]
    fn test_invalid_nodes_rejected() {
        let settings = Settings::from_json(SETTINGS).expect("valid");
        let fleet: FleetParameters = settings.section("fleet").expect("valid");
        let vehicle_data = VehicleData::from_parameters(&fleet).expect("valid");
        let depot = Node::new(0, 1, 0.0, 0.0, 0.0);
        let nodes = vec![depot.clone(), depot.depot_replica(1)];
        assert!(ModelInput::new(nodes, vehicle_data, settings).is_err());
    }
}
