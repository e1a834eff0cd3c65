//! Network node type.

use serde::{Deserialize, Serialize};

/// A node of the routing network: a customer or one of the two depot replicas.
///
/// `node_no` is the position of the node in the loaded sequence and is what
/// the arc formulation indexes by; `customer_no` is the identifier found in
/// the input file. Coordinates are stored already scaled.
///
/// # Examples
///
/// ```
/// use u_scenario::models::Node;
///
/// let depot = Node::new(0, 1, 250.0, 300.0, 0.0);
/// let end = depot.depot_replica(5);
/// assert_eq!(end.node_no(), 5);
/// assert_eq!(end.customer_no(), depot.customer_no());
/// assert_eq!((end.x(), end.y()), (depot.x(), depot.y()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    node_no: usize,
    customer_no: i64,
    x: f64,
    y: f64,
    service_time: f64,
}

impl Node {
    /// Creates a new node.
    pub fn new(node_no: usize, customer_no: i64, x: f64, y: f64, service_time: f64) -> Self {
        Self {
            node_no,
            customer_no,
            x,
            y,
            service_time,
        }
    }

    /// Replaces the service time.
    pub fn with_service_time(mut self, service_time: f64) -> Self {
        self.service_time = service_time;
        self
    }

    /// Copy of this node under another `node_no`, with zero service time.
    ///
    /// Used to close the sequence with the end-of-tour depot.
    pub fn depot_replica(&self, node_no: usize) -> Self {
        Self {
            node_no,
            service_time: 0.0,
            ..self.clone()
        }
    }

    /// Position in the node sequence (0 = start depot).
    pub fn node_no(&self) -> usize {
        self.node_no
    }

    /// Customer identifier from the input file.
    pub fn customer_no(&self) -> i64 {
        self.customer_no
    }

    /// Scaled x-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Scaled y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Service time at this node.
    pub fn service_time(&self) -> f64 {
        self.service_time
    }
}
