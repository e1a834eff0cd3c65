//! Index sets of the arc formulation.

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{Node, VehicleData};

/// Node-derived index sets, the first phase of building an
/// [`ArcFormulation`].
///
/// Can be built as soon as the node sequence is loaded; vehicle and scenario
/// sets are added by [`bind`](Self::bind) once [`VehicleData`] exists.
///
/// # Examples
///
/// ```
/// use u_scenario::models::Node;
/// use u_scenario::formulation::NodeIndex;
///
/// let depot = Node::new(0, 1, 0.0, 0.0, 0.0);
/// let nodes = vec![
///     depot.clone(),
///     Node::new(1, 2, 10.0, 0.0, 30.0),
///     Node::new(2, 3, 0.0, 10.0, 30.0),
///     depot.depot_replica(3),
/// ];
/// let index = NodeIndex::new(&nodes).unwrap();
/// assert_eq!(index.customers(), &[1, 2]);
/// assert_eq!(index.depot_start(), 0);
/// assert_eq!(index.depot_end(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeIndex {
    nodes: Vec<usize>,
    customers: Vec<usize>,
    depot_start: usize,
    depot_end: usize,
}

impl NodeIndex {
    /// Derives node, customer and depot indices from a node sequence.
    ///
    /// The sequence must hold the start depot, at least one customer and the
    /// end depot, numbered `0..n` in order.
    pub fn new(nodes: &[Node]) -> Result<Self> {
        if nodes.len() < 2 {
            return Err(Error::TooFewNodes(nodes.len()));
        }
        if let Some((position, node)) = nodes
            .iter()
            .enumerate()
            .find(|(i, node)| node.node_no() != *i)
        {
            return Err(Error::NonContiguousNodes {
                position,
                found: node.node_no(),
            });
        }

        let ids: Vec<usize> = nodes.iter().map(Node::node_no).collect();
        let customers = ids[1..ids.len() - 1].to_vec();
        if customers.is_empty() {
            return Err(Error::NoCustomers);
        }

        Ok(Self {
            depot_start: ids[0],
            depot_end: ids[ids.len() - 1],
            customers,
            nodes: ids,
        })
    }

    /// Adds the vehicle and scenario index sets.
    pub fn bind(self, vehicle_data: &VehicleData) -> Result<ArcFormulation> {
        let number_of_vehicles = vehicle_data.number_of_vehicles();
        if number_of_vehicles == 0 {
            return Err(Error::NoVehicles);
        }
        let number_of_scenarios = vehicle_data.number_of_scenarios();

        debug!(
            "arc formulation: {} nodes, {} customers, {} vehicles, {} scenarios",
            self.nodes.len(),
            self.customers.len(),
            number_of_vehicles,
            number_of_scenarios
        );

        Ok(ArcFormulation {
            node_index: self,
            vehicles: (0..number_of_vehicles).collect(),
            vehicles_with_dummy: (0..=number_of_vehicles).collect(),
            scenarios: (0..number_of_scenarios).collect(),
            dummy_vehicle: number_of_vehicles,
        })
    }

    /// All node ids, depot replicas included.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Customer node ids (everything between the depot replicas).
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Node id where tours start.
    pub fn depot_start(&self) -> usize {
        self.depot_start
    }

    /// Node id where tours end.
    pub fn depot_end(&self) -> usize {
        self.depot_end
    }
}

/// Every index set the arc-indexed routing model iterates over.
///
/// Immutable once built; share it freely between model-building threads.
///
/// # Examples
///
/// ```
/// use u_scenario::models::{FleetParameters, Node, VehicleData};
/// use u_scenario::formulation::ArcFormulation;
///
/// let depot = Node::new(0, 1, 0.0, 0.0, 0.0);
/// let nodes = vec![depot.clone(), Node::new(1, 2, 5.0, 5.0, 30.0), depot.depot_replica(2)];
/// let params = FleetParameters {
///     number_of_vehicles: 2,
///     absence_prob: 0.1,
///     max_absences: None,
///     time_horizon: 480.0,
///     cost_km: 1.0,
///     geography: "EUCLIDEAN".into(),
///     vehicle_speed: 40.0,
///     balance: 0.0,
/// };
/// let vehicle_data = VehicleData::from_parameters(&params).unwrap();
///
/// let arc = ArcFormulation::new(&nodes, &vehicle_data).unwrap();
/// assert_eq!(arc.vehicles(), &[0, 1]);
/// assert_eq!(arc.vehicles_with_dummy(), &[0, 1, 2]);
/// assert_eq!(arc.dummy_vehicle(), 2);
/// assert_eq!(arc.scenarios().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArcFormulation {
    #[serde(flatten)]
    node_index: NodeIndex,
    vehicles: Vec<usize>,
    vehicles_with_dummy: Vec<usize>,
    scenarios: Vec<usize>,
    dummy_vehicle: usize,
}

impl ArcFormulation {
    /// Derives all index sets in one step.
    pub fn new(nodes: &[Node], vehicle_data: &VehicleData) -> Result<Self> {
        NodeIndex::new(nodes)?.bind(vehicle_data)
    }

    /// The node-derived part.
    pub fn node_index(&self) -> &NodeIndex {
        &self.node_index
    }

    /// All node ids, depot replicas included.
    pub fn nodes(&self) -> &[usize] {
        self.node_index.nodes()
    }

    /// Customer node ids.
    pub fn customers(&self) -> &[usize] {
        self.node_index.customers()
    }

    /// Node id where tours start.
    pub fn depot_start(&self) -> usize {
        self.node_index.depot_start()
    }

    /// Node id where tours end.
    pub fn depot_end(&self) -> usize {
        self.node_index.depot_end()
    }

    /// Real vehicles `0..V`.
    pub fn vehicles(&self) -> &[usize] {
        &self.vehicles
    }

    /// Real vehicles plus the dummy, `0..=V`.
    pub fn vehicles_with_dummy(&self) -> &[usize] {
        &self.vehicles_with_dummy
    }

    /// Scenario ids `0..S`.
    pub fn scenarios(&self) -> &[usize] {
        &self.scenarios
    }

    /// Sentinel vehicle meaning "not assigned"; equals V.
    pub fn dummy_vehicle(&self) -> usize {
        self.dummy_vehicle
    }
}
