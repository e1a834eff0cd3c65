//! Dense distance matrix over a node sequence.

use super::metric::{distance, Geography};
use crate::models::Node;

/// A dense n×n distance matrix stored in row-major order, indexed by
/// `node_no`.
///
/// Both depot replicas get their own row and column; the distance between
/// them is zero.
///
/// # Examples
///
/// ```
/// use u_scenario::models::Node;
/// use u_scenario::distance::{DistanceMatrix, Geography};
///
/// let depot = Node::new(0, 1, 0.0, 0.0, 0.0);
/// let nodes = vec![
///     depot.clone(),
///     Node::new(1, 2, 3.0, 4.0, 30.0),
///     depot.depot_replica(2),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes, Geography::Euclidean);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.get(0, 2), 0.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
    geography: Geography,
}

impl DistanceMatrix {
    /// Computes all pairwise distances between `nodes`.
    pub fn from_nodes(nodes: &[Node], geography: Geography) -> Self {
        let n = nodes.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&nodes[i], &nodes[j]);
                let d = distance(a.x(), a.y(), b.x(), b.y(), geography);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self {
            data,
            size: n,
            geography,
        }
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Metric the matrix was built with.
    pub fn geography(&self) -> Geography {
        self.geography
    }
}
