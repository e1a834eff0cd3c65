//! Node file reader.
//!
//! The file starts with a header line, followed by one node per line with
//! whitespace-separated numeric fields `customer_no x y ...`. The first data
//! line is the depot.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::models::Node;

/// Factor applied to raw coordinates unless configured otherwise.
pub const DEFAULT_COORD_SCALE: f64 = 100.0;

/// Service time given to every customer unless configured otherwise.
pub const DEFAULT_SERVICE_TIME: f64 = 30.0;

/// How raw node records are turned into [`Node`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeFileConfig {
    /// Multiplier applied to both coordinates.
    pub coord_scale: f64,
    /// Service time of every customer (the depot replicas always get 0).
    pub service_time: f64,
    /// Stop reading once this `node_no` has been read.
    ///
    /// The bound is inclusive: `Some(m)` keeps `m + 1` records (the depot
    /// plus `m` customers) before the end depot is appended.
    pub max_customers: Option<usize>,
}

impl Default for NodeFileConfig {
    fn default() -> Self {
        Self {
            coord_scale: DEFAULT_COORD_SCALE,
            service_time: DEFAULT_SERVICE_TIME,
            max_customers: None,
        }
    }
}

impl NodeFileConfig {
    /// Sets the coordinate scale factor.
    pub fn with_coord_scale(mut self, coord_scale: f64) -> Self {
        self.coord_scale = coord_scale;
        self
    }

    /// Sets the customer service time.
    pub fn with_service_time(mut self, service_time: f64) -> Self {
        self.service_time = service_time;
        self
    }

    /// Limits the number of records read.
    pub fn with_max_customers(mut self, max_customers: usize) -> Self {
        self.max_customers = Some(max_customers);
        self
    }
}

/// Loads the node sequence from the file at `path`.
///
/// The returned sequence starts and ends with a depot replica; see
/// [`read_nodes`].
pub fn load_nodes(path: impl AsRef<Path>, config: &NodeFileConfig) -> Result<Vec<Node>> {
    let path = path.as_ref();
    info!("reading nodes from {}", path.display());
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_nodes(BufReader::new(file), path, config)
}

/// Reads the node sequence from `reader`; `source` only labels errors.
///
/// Node numbers follow read order. After reading, the depot (first record)
/// gets zero service time and a replica of it is appended as the last node.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use u_scenario::io::{read_nodes, NodeFileConfig};
///
/// let data = "CUST XCOORD YCOORD\n1 0.5 0.5\n2 1.0 0.0\n";
/// let nodes = read_nodes(data.as_bytes(), Path::new("inline"), &NodeFileConfig::default()).unwrap();
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes[1].x(), 100.0);
/// assert_eq!(nodes[2].node_no(), 2);
/// assert_eq!(nodes[2].x(), nodes[0].x());
/// ```
pub fn read_nodes<R: BufRead>(reader: R, source: &Path, config: &NodeFileConfig) -> Result<Vec<Node>> {
    let read_error = |e: std::io::Error, line: usize| match e.kind() {
        ErrorKind::InvalidData => Error::Parse {
            path: source.to_path_buf(),
            line,
            message: "line is not valid UTF-8".to_string(),
        },
        _ => Error::Io {
            path: source.to_path_buf(),
            source: e,
        },
    };

    let mut lines = reader.lines();
    match lines.next() {
        Some(header) => {
            header.map_err(|e| read_error(e, 1))?;
        }
        None => {
            return Err(Error::MissingHeader {
                path: source.to_path_buf(),
            })
        }
    }

    let mut nodes = Vec::new();
    for (offset, line) in lines.enumerate() {
        // Header is line 1.
        let line_no = offset + 2;
        let line = line.map_err(|e| read_error(e, line_no))?;
        let node_no = nodes.len();
        nodes.push(parse_record(&line, node_no, config).map_err(|message| Error::Parse {
            path: source.to_path_buf(),
            line: line_no,
            message,
        })?);

        if config.max_customers == Some(node_no) {
            break;
        }
    }

    let end_node_no = nodes.len();
    let Some(first) = nodes.first_mut() else {
        return Err(Error::EmptyNodeFile {
            path: source.to_path_buf(),
        });
    };
    *first = first.clone().with_service_time(0.0);
    let end_depot = first.depot_replica(end_node_no);
    nodes.push(end_depot);

    debug!(
        "read {} nodes ({} customers) from {}",
        nodes.len(),
        nodes.len() - 2,
        source.display()
    );
    Ok(nodes)
}

fn parse_record(line: &str, node_no: usize, config: &NodeFileConfig) -> std::result::Result<Node, String> {
    let fields: Vec<&str> = line.split_whitespace().take(3).collect();
    if fields.len() < 3 {
        return Err(format!(
            "expected at least 3 numeric fields, found {}: `{}`",
            fields.len(),
            line.trim()
        ));
    }

    let mut values = [0.0; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field
            .parse::<f64>()
            .map_err(|_| format!("invalid number `{field}`"))?;
    }
    let [customer_no, x, y] = values;

    if !customer_no.is_finite() {
        return Err(format!("invalid customer number `{}`", fields[0]));
    }

    Ok(Node::new(
        node_no,
        customer_no.trunc() as i64,
        x * config.coord_scale,
        y * config.coord_scale,
        config.service_time,
    ))
}
